mod aggregation;
mod checklist;

pub use aggregation::*;
pub use checklist::*;
