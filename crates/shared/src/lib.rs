mod command;
pub mod dataset;
pub mod mealplan;
pub mod recipe;
pub mod seed;
mod state;
pub mod store;

pub use command::*;
pub use dataset::{Dataset, normalize};
pub use seed::{EmbeddedSeed, FileSeed, InlineSeed, SEED_FILE, Seed};
pub use state::*;
pub use store::{MemoryStore, STORAGE_KEY, Store};
