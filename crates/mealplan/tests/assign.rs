use mealplanner_shared::mealplan::Weekday;
use temp_dir::TempDir;

mod helpers;

const SEED: &str = r#"{
    "recipes": [{ "name": "Soup" }, { "name": "Pasta" }],
    "plan": ["Soup", "", "", "", "", "", ""]
}"#;

#[tokio::test]
async fn test_assign_persists_slot() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let mut state = helpers::setup_test_state(path.to_owned(), SEED).await?;

    mealplanner_mealplan::Command::new(&mut state)
        .assign(Weekday::Wednesday, "  Pasta ")
        .await?;

    assert_eq!(state.data().plan.get(Weekday::Wednesday), "Pasta");
    drop(state);

    let reopened = helpers::setup_test_state(path, "{}").await?;
    assert_eq!(reopened.data().plan.get(Weekday::Wednesday), "Pasta");
    assert_eq!(reopened.data().plan.planned_dinners(), 2);

    Ok(())
}

#[tokio::test]
async fn test_assign_accepts_unknown_names() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3"), SEED).await?;

    mealplanner_mealplan::Command::new(&mut state)
        .assign(Weekday::Friday, "Takeout")
        .await?;

    let week = mealplanner_mealplan::query::week(state.data());
    assert_eq!(week[5].recipe.as_deref(), Some("Takeout"));
    assert!(!week[5].is_known(state.data()));

    Ok(())
}

#[tokio::test]
async fn test_assign_blank_clears() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3"), SEED).await?;

    mealplanner_mealplan::Command::new(&mut state)
        .assign(Weekday::Sunday, "   ")
        .await?;

    assert_eq!(state.data().plan.get(Weekday::Sunday), "");
    assert_eq!(state.data().plan.planned_dinners(), 0);

    Ok(())
}

#[tokio::test]
async fn test_clear_all() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3"), SEED).await?;
    let mut command = mealplanner_mealplan::Command::new(&mut state);

    command.assign(Weekday::Monday, "Pasta").await?;
    command.clear(Weekday::Sunday).await?;
    assert_eq!(command.data().plan.planned_dinners(), 1);

    command.clear_all().await?;

    assert_eq!(state.data().plan.planned_dinners(), 0);
    assert_eq!(state.data().recipes.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_deleting_recipe_empties_its_days() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3"), SEED).await?;

    mealplanner_mealplan::Command::new(&mut state)
        .assign(Weekday::Saturday, "Soup")
        .await?;
    mealplanner_recipe::Command::new(&mut state)
        .delete("Soup")
        .await?;

    let week = mealplanner_mealplan::query::week(state.data());
    assert!(week.iter().all(|slot| slot.recipe.is_none()));

    Ok(())
}
