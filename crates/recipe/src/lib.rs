mod draft;
pub mod query;
mod root;

pub use draft::*;
pub use query::RecipeSummary;
pub use root::*;
