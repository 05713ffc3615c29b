#![allow(dead_code)]

use mealplanner_db::SqliteStore;
use mealplanner_shared::{InlineSeed, State};
use std::path::PathBuf;

pub async fn setup_test_state(path: PathBuf, seed: &str) -> anyhow::Result<State<SqliteStore>> {
    let store = SqliteStore::open(&format!("sqlite:{}", path.display())).await?;

    Ok(State::load(store, InlineSeed(seed.to_owned())).await?)
}

pub fn input(name: &str, ingredients: &[&str]) -> mealplanner_recipe::RecipeInput {
    mealplanner_recipe::RecipeInput {
        name: name.to_owned(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        steps: vec![],
    }
}
