use mealplanner_shared::Store;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use sqlx_migrator::{Info, Migrate, Migrator, Plan};
use std::str::FromStr;

mod m0_1;
pub mod table;

use table::Slot;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration)])?;

    Ok(migrator)
}

/// Opens (creating it when missing) the database at `url` and applies migrations.
pub async fn create_pool(url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    // One writer is all a single-user planner needs.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    let mut conn = pool.acquire().await?;
    migrator()?.run(&mut conn, &Plan::apply_all()).await?;
    drop(conn);

    tracing::debug!(url, "sqlite store ready");

    Ok(pool)
}

/// [`Store`] persisting slots in the `slot` table.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn open(url: &str) -> anyhow::Result<Self> {
        Ok(Self::new(create_pool(url).await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl Store for SqliteStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let statement = Query::select()
            .column(Slot::Value)
            .from(Slot::Table)
            .and_where(Expr::col(Slot::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(Slot::Table)
            .columns([Slot::Key, Slot::Value])
            .values_panic([key.to_owned().into(), value.to_owned().into()])
            .on_conflict(
                OnConflict::column(Slot::Key)
                    .update_column(Slot::Value)
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let statement = Query::delete()
            .from_table(Slot::Table)
            .and_where(Expr::col(Slot::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }
}
