mod assign;
mod clear;

use mealplanner_shared::{State, Store};
use std::ops::Deref;

/// Plan mutations. Slots hold recipe names as typed; they are not checked
/// against the recipe collection.
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
