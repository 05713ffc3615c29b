use mealplanner_db::SqliteStore;
use mealplanner_shared::{InlineSeed, State};
use std::path::PathBuf;

pub async fn setup_test_state(path: PathBuf, seed: &str) -> anyhow::Result<State<SqliteStore>> {
    let store = SqliteStore::open(&format!("sqlite:{}", path.display())).await?;

    Ok(State::load(store, InlineSeed(seed.to_owned())).await?)
}
