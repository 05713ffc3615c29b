use mealplanner_shared::Store;

use super::RecipeInput;

impl<S: Store> super::Command<'_, S> {
    /// Replaces the recipe currently named `original` (any casing) in place.
    /// A rename is carried over to every plan slot holding the old name.
    /// Returns how many plan slots were rewritten.
    pub async fn update(
        &mut self,
        original: &str,
        input: RecipeInput,
    ) -> mealplanner_shared::Result<usize> {
        let recipe = input.into_recipe()?;
        let name = recipe.name.to_owned();

        let (old_name, rewritten) = self
            .state
            .commit(|data| {
                let Some(index) = data.position(original) else {
                    mealplanner_shared::not_found!("recipe \"{}\"", original);
                };

                let taken = data
                    .recipes
                    .iter()
                    .enumerate()
                    .any(|(i, r)| i != index && r.is_named(&recipe.name));

                if taken {
                    mealplanner_shared::conflict!("a recipe named \"{}\" already exists", recipe.name);
                }

                let old = std::mem::replace(&mut data.recipes[index], recipe);
                let rewritten = if old.name != name {
                    data.plan.rename(&old.name, &name)
                } else {
                    0
                };

                Ok((old.name, rewritten))
            })
            .await?;

        if old_name != name {
            tracing::info!(from = %old_name, to = %name, rewritten, "recipe renamed");
        } else {
            tracing::info!(recipe = %name, "recipe updated");
        }

        Ok(rewritten)
    }
}
