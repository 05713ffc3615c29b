use mealplanner::Config;
use mealplanner_db::SqliteStore;
use mealplanner_shared::State;
use std::path::Path;

pub const SEED: &str = r#"{
    "recipes": [
        { "name": "Pancakes", "ingredients": ["Flour", "Egg", "Milk"], "steps": ["Whisk", "Rest", "Fry"] },
        { "name": "Omelette", "ingredients": ["egg", "Cheese"] }
    ],
    "Meals": ["Pancakes", "", "", "", "", "", ""]
}"#;

/// Config pointing at a fresh database and a seed file inside `dir`.
pub async fn setup_test_config(dir: &Path) -> anyhow::Result<Config> {
    let seed = dir.join("seed.json");
    tokio::fs::write(&seed, SEED).await?;

    Ok(Config {
        store: mealplanner::config::StoreConfig {
            url: format!("sqlite:{}", dir.join("db.sqlite3").display()),
        },
        seed: mealplanner::config::SeedConfig { path: Some(seed) },
        observability: mealplanner::config::ObservabilityConfig::default(),
    })
}

pub async fn setup_test_state(dir: &Path) -> anyhow::Result<State<SqliteStore>> {
    let config = setup_test_config(dir).await?;

    mealplanner::cli::open(&config).await
}
