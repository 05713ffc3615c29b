mod data;
mod grocery;
mod plan;
mod recipe;

use clap::Subcommand;
use mealplanner_db::SqliteStore;
use mealplanner_shared::{EmbeddedSeed, FileSeed, State, Store, mealplan::Weekday};
use std::path::PathBuf;

pub use plan::PlanCommand;
pub use recipe::RecipeCommand;

use crate::config::Config;

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the dinners planned for the week
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Browse and edit recipes
    #[command(subcommand)]
    Recipe(RecipeCommand),
    /// Build the grocery list for the planned week
    Grocery {
        /// Tick an item off the list (repeatable)
        #[arg(long = "check")]
        checked: Vec<String>,
    },
    /// Replace all data with a JSON document
    Import { file: PathBuf },
    /// Write all data as JSON, to stdout unless an output path is given
    Export {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Discard all data and start over from the seed
    Reset,
}

/// Opens the configured store, seeding it on first run.
pub async fn open(config: &Config) -> anyhow::Result<State<SqliteStore>> {
    let store = SqliteStore::open(&config.store.url).await?;

    let state = match config.seed.path() {
        Some(path) => State::load(store, FileSeed(path.to_path_buf())).await?,
        None => State::load(store, EmbeddedSeed).await?,
    };

    Ok(state)
}

/// Runs one command against `state` and returns what should be printed.
pub async fn execute<S: Store>(state: &mut State<S>, command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Plan(command) => plan::execute(state, command).await,
        Commands::Recipe(command) => recipe::execute(state, command).await,
        Commands::Grocery { checked } => grocery::show(state, &checked),
        Commands::Import { file } => data::import(state, file).await,
        Commands::Export { output } => data::export(state, output).await,
        Commands::Reset => data::reset(state).await,
    }
}

pub(crate) fn parse_day(value: &str) -> Result<Weekday, String> {
    Weekday::parse(value)
        .ok_or_else(|| format!("'{value}' is not a day of the week (Sunday..Saturday or 0..6)"))
}
