use mealplanner_shared::{Store, recipe::compare_names};

use super::RecipeInput;

impl<S: Store> super::Command<'_, S> {
    /// Adds a recipe and keeps the collection sorted by name. Returns the
    /// stored name.
    pub async fn create(&mut self, input: RecipeInput) -> mealplanner_shared::Result<String> {
        let recipe = input.into_recipe()?;
        let name = recipe.name.to_owned();

        self.state
            .commit(|data| {
                if data.find(&recipe.name).is_some() {
                    mealplanner_shared::conflict!("a recipe named \"{}\" already exists", recipe.name);
                }

                data.recipes.push(recipe);
                data.recipes.sort_by(|a, b| compare_names(&a.name, &b.name));

                Ok(())
            })
            .await?;

        tracing::info!(recipe = %name, "recipe created");

        Ok(name)
    }
}
