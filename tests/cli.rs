use mealplanner::cli::{Commands, PlanCommand, RecipeCommand, execute};
use mealplanner_shared::mealplan::Weekday;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_first_run_seeds_from_configured_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.path()).await?;

    let output = execute(&mut state, Commands::Plan(PlanCommand::Show)).await?;

    assert!(output.contains("Pancakes"));
    assert!(output.ends_with("1 planned dinners"));

    Ok(())
}

#[tokio::test]
async fn test_plan_then_grocery() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.path()).await?;

    execute(
        &mut state,
        Commands::Plan(PlanCommand::Set {
            day: Weekday::Tuesday,
            recipe: "omelette".to_owned(),
        }),
    )
    .await?;

    let output = execute(
        &mut state,
        Commands::Grocery {
            checked: vec!["EGG".to_owned()],
        },
    )
    .await?;

    assert!(output.contains("[x] Egg (2)"));
    assert!(output.contains("[ ] Cheese (1)"));
    assert!(output.ends_with("4 unique items • 2 planned dinners"));

    Ok(())
}

#[tokio::test]
async fn test_grocery_unknown_check_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.path()).await?;

    let result = execute(
        &mut state,
        Commands::Grocery {
            checked: vec!["Saffron".to_owned()],
        },
    )
    .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_state_survives_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.path()).await?;

    execute(
        &mut state,
        Commands::Recipe(RecipeCommand::Save {
            name: "Pancakes Deluxe".to_owned(),
            original: Some("pancakes".to_owned()),
            ingredients: vec!["Flour".to_owned(), " Syrup ".to_owned()],
            steps: vec![],
        }),
    )
    .await?;
    drop(state);

    let state = helpers::setup_test_state(dir.path()).await?;

    assert_eq!(state.data().plan.get(Weekday::Sunday), "Pancakes Deluxe");
    assert_eq!(
        state.data().find("pancakes deluxe").map(|r| r.ingredients.clone()),
        Some(vec!["Flour".to_owned(), "Syrup".to_owned()])
    );

    Ok(())
}

#[tokio::test]
async fn test_move_step() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.path()).await?;

    let output = execute(
        &mut state,
        Commands::Recipe(RecipeCommand::MoveStep {
            name: "Pancakes".to_owned(),
            position: 3,
            down: false,
        }),
    )
    .await?;

    assert!(output.contains("2. Fry"));
    assert_eq!(
        state.data().find("Pancakes").map(|r| r.steps.clone()),
        Some(vec!["Whisk".to_owned(), "Fry".to_owned(), "Rest".to_owned()])
    );

    let result = execute(
        &mut state,
        Commands::Recipe(RecipeCommand::MoveStep {
            name: "Pancakes".to_owned(),
            position: 1,
            down: false,
        }),
    )
    .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_export_import_reset() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.path()).await?;

    let output = execute(
        &mut state,
        Commands::Export {
            output: Some(dir.path().to_path_buf()),
        },
    )
    .await?;
    assert!(output.ends_with("data.json"));

    let exported: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(dir.child("data.json")).await?)?;
    assert!(exported.get("plan").is_some());
    assert!(exported.get("Meals").is_none());

    let other = dir.child("other.json");
    tokio::fs::write(&other, r#"{"recipes":[{"name":"Toast","ingredients":["Bread"]}],"plan":["Toast","Toast"]}"#).await?;

    let output = execute(&mut state, Commands::Import { file: other }).await?;
    assert_eq!(output, "Imported 1 recipes • 2 planned dinners");
    assert!(state.data().find("Pancakes").is_none());

    let bad = dir.child("bad.json");
    tokio::fs::write(&bad, "not json").await?;
    assert!(execute(&mut state, Commands::Import { file: bad }).await.is_err());
    assert!(state.data().find("Toast").is_some());

    execute(&mut state, Commands::Reset).await?;
    assert!(state.data().find("Pancakes").is_some());
    assert!(state.data().find("Toast").is_none());

    Ok(())
}
