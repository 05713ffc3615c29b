use mealplanner_shared::recipe;
use std::collections::HashSet;

use crate::GroceryList;

/// Ticked-off state for a grocery list. Lives only as long as the list it was
/// built from; regenerating the list starts a fresh, unchecked checklist.
#[derive(Clone, Debug, Default)]
pub struct Checklist {
    list: GroceryList,
    checked: HashSet<String>,
}

impl Checklist {
    pub fn new(list: GroceryList) -> Self {
        Self {
            list,
            checked: HashSet::new(),
        }
    }

    pub fn list(&self) -> &GroceryList {
        &self.list
    }

    /// Flips the checked state of `label` and returns the new state.
    pub fn toggle(&mut self, label: &str) -> mealplanner_shared::Result<bool> {
        let key = recipe::key(label.trim());

        if !self.list.items.iter().any(|item| recipe::key(&item.label) == key) {
            mealplanner_shared::not_found!("grocery item '{}'", label.trim());
        }

        let checked = if self.checked.remove(&key) {
            false
        } else {
            self.checked.insert(key);
            true
        };

        tracing::debug!(label, checked, "grocery item toggled");

        Ok(checked)
    }

    pub fn is_checked(&self, label: &str) -> bool {
        self.checked.contains(&recipe::key(label.trim()))
    }

    pub fn reset(&mut self) {
        self.checked.clear();
    }

    /// Items not yet checked, in list order.
    pub fn remaining(&self) -> impl Iterator<Item = &crate::GroceryItem> {
        self.list
            .items
            .iter()
            .filter(|item| !self.is_checked(&item.label))
    }
}
