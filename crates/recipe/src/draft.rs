use mealplanner_shared::recipe::Recipe;

use crate::RecipeInput;

/// Editable copy of a recipe. Nothing is stored until the draft is saved;
/// `original` remembers which recipe it was opened from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub original: Option<String>,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Draft {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            original: Some(recipe.name.to_owned()),
            name: recipe.name.to_owned(),
            ingredients: recipe.ingredients.to_vec(),
            steps: recipe.steps.to_vec(),
        }
    }

    pub fn add_ingredient(&mut self, ingredient: impl Into<String>) {
        self.ingredients.push(ingredient.into());
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        (index < self.ingredients.len()).then(|| self.ingredients.remove(index))
    }

    pub fn add_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    pub fn remove_step(&mut self, index: usize) -> Option<String> {
        (index < self.steps.len()).then(|| self.steps.remove(index))
    }

    /// Swaps the step with the one before it. False when it is already first.
    pub fn move_step_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.steps.len() {
            return false;
        }

        self.steps.swap(index - 1, index);
        true
    }

    /// Swaps the step with the one after it. False when it is already last.
    pub fn move_step_down(&mut self, index: usize) -> bool {
        if index >= self.steps.len().saturating_sub(1) {
            return false;
        }

        self.steps.swap(index, index + 1);
        true
    }

    pub fn input(&self) -> RecipeInput {
        RecipeInput {
            name: self.name.to_owned(),
            ingredients: self.ingredients.to_vec(),
            steps: self.steps.to_vec(),
        }
    }
}
