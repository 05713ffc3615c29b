pub mod query;
mod root;

pub use query::DaySlot;
pub use root::*;
