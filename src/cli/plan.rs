use clap::Subcommand;
use mealplanner_shared::{State, Store, mealplan::Weekday};
use std::fmt::Write;

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Show the week
    Show,
    /// Plan a dinner; an empty recipe clears the day
    Set {
        #[arg(value_parser = super::parse_day)]
        day: Weekday,
        recipe: String,
    },
    /// Clear one day or the whole week
    Clear {
        #[arg(value_parser = super::parse_day, required_unless_present = "all")]
        day: Option<Weekday>,
        #[arg(long, conflicts_with = "day")]
        all: bool,
    },
}

pub async fn execute<S: Store>(
    state: &mut State<S>,
    command: PlanCommand,
) -> anyhow::Result<String> {
    let mut plan = mealplanner_mealplan::Command::new(state);

    match command {
        PlanCommand::Show => {}
        PlanCommand::Set { day, recipe } => plan.assign(day, &recipe).await?,
        PlanCommand::Clear { all: true, .. } => plan.clear_all().await?,
        PlanCommand::Clear { day: Some(day), .. } => plan.clear(day).await?,
        PlanCommand::Clear { day: None, .. } => anyhow::bail!("give a day or --all"),
    }

    Ok(render(state))
}

fn render<S: Store>(state: &State<S>) -> String {
    let data = state.data();
    let mut out = String::new();

    for slot in mealplanner_mealplan::query::week(data) {
        let _ = match &slot.recipe {
            Some(recipe) if slot.is_known(data) => writeln!(out, "{:<10} {recipe}", slot.day),
            Some(recipe) => writeln!(out, "{:<10} {recipe} (not in recipes)", slot.day),
            None => writeln!(out, "{:<10} -", slot.day),
        };
    }

    let _ = write!(
        out,
        "{} planned dinners",
        mealplanner_mealplan::query::planned_dinners(data)
    );

    out
}
