mod create;
mod delete;
mod save;
mod update;

pub use save::RecipeInput;

use mealplanner_shared::{State, Store};
use std::ops::Deref;

/// Recipe mutations. Each one is persisted before it returns.
pub struct Command<'a, S: Store> {
    state: &'a mut State<S>,
}

impl<S: Store> Deref for Command<'_, S> {
    type Target = State<S>;

    fn deref(&self) -> &Self::Target {
        &*self.state
    }
}

impl<'a, S: Store> Command<'a, S> {
    pub fn new(state: &'a mut State<S>) -> Self {
        Self { state }
    }
}
