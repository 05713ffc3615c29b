use mealplanner_shared::Store;

impl<S: Store> super::Command<'_, S> {
    /// Removes the recipe and empties every plan slot that pointed at it.
    /// Returns how many plan slots were cleared.
    pub async fn delete(&mut self, name: &str) -> mealplanner_shared::Result<usize> {
        let (removed, cleared) = self
            .state
            .commit(|data| {
                let Some(index) = data.position(name) else {
                    mealplanner_shared::not_found!("recipe \"{}\"", name);
                };

                let removed = data.recipes.remove(index);
                let cleared = data.plan.remove(&removed.name);

                Ok((removed.name, cleared))
            })
            .await?;

        tracing::info!(recipe = %removed, cleared, "recipe deleted");

        Ok(cleared)
    }
}
