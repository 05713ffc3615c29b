use clap::Subcommand;
use mealplanner_recipe::{Draft, RecipeInput, query};
use mealplanner_shared::{State, Store, recipe::Recipe};
use std::fmt::Write;

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// List recipes, optionally filtered by name
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show a recipe with its ingredients, steps and planned days
    Show { name: String },
    /// Create a recipe, or replace the one named by --original
    Save {
        #[arg(long)]
        name: String,
        #[arg(long)]
        original: Option<String>,
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        #[arg(long = "step")]
        steps: Vec<String>,
    },
    /// Delete a recipe and clear the days it was planned on
    Delete { name: String },
    /// Move a step (1-based) one place up, or down with --down
    MoveStep {
        name: String,
        position: usize,
        #[arg(long)]
        down: bool,
    },
}

pub async fn execute<S: Store>(
    state: &mut State<S>,
    command: RecipeCommand,
) -> anyhow::Result<String> {
    match command {
        RecipeCommand::List { search } => Ok(list(state, &search)),
        RecipeCommand::Show { name } => {
            let Some(recipe) = query::find(state.data(), &name) else {
                anyhow::bail!("recipe '{name}' not found");
            };

            Ok(show(state, recipe))
        }
        RecipeCommand::Save {
            name,
            original,
            ingredients,
            steps,
        } => {
            let input = RecipeInput {
                name,
                ingredients,
                steps,
            };
            let name = mealplanner_recipe::Command::new(state)
                .save(original.as_deref(), input)
                .await?;

            Ok(format!("Saved {name}"))
        }
        RecipeCommand::Delete { name } => {
            let cleared = mealplanner_recipe::Command::new(state)
                .delete(&name)
                .await?;

            Ok(format!("Deleted {name}, {cleared} planned dinners cleared"))
        }
        RecipeCommand::MoveStep {
            name,
            position,
            down,
        } => move_step(state, &name, position, down).await,
    }
}

async fn move_step<S: Store>(
    state: &mut State<S>,
    name: &str,
    position: usize,
    down: bool,
) -> anyhow::Result<String> {
    let Some(recipe) = query::find(state.data(), name) else {
        anyhow::bail!("recipe '{name}' not found");
    };

    let mut draft = Draft::from_recipe(recipe);
    let index = position.saturating_sub(1);
    let moved = if down {
        draft.move_step_down(index)
    } else {
        draft.move_step_up(index)
    };

    if position == 0 || !moved {
        anyhow::bail!(
            "step {position} cannot move {}",
            if down { "down" } else { "up" }
        );
    }

    let name = mealplanner_recipe::Command::new(state)
        .save(draft.original.as_deref(), draft.input())
        .await?;

    let Some(recipe) = query::find(state.data(), &name) else {
        anyhow::bail!("recipe '{name}' not found");
    };

    Ok(show(state, recipe))
}

fn list<S: Store>(state: &State<S>, search: &str) -> String {
    let recipes = query::list(state.data(), search);
    let mut out = String::new();

    for recipe in &recipes {
        let _ = writeln!(
            out,
            "{} ({} ingredients)",
            recipe.name, recipe.ingredient_count
        );
    }

    let _ = write!(out, "{} recipes", recipes.len());

    out
}

fn show<S: Store>(state: &State<S>, recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.name);

    let _ = writeln!(out, "\nIngredients:");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {ingredient}");
    }

    let _ = writeln!(out, "\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", i + 1);
    }

    let days = state
        .data()
        .plan
        .days()
        .filter(|(_, slot)| recipe.is_named(slot))
        .map(|(day, _)| day.to_string())
        .collect::<Vec<_>>();

    if days.is_empty() {
        let _ = write!(out, "\nNot planned this week");
    } else {
        let _ = write!(out, "\nPlanned: {}", days.join(", "));
    }

    out
}
