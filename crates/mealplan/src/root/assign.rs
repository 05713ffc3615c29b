use mealplanner_shared::{Store, mealplan::Weekday};

impl<S: Store> super::Command<'_, S> {
    /// Plans `recipe` for `day`. A blank name clears the slot.
    pub async fn assign(&mut self, day: Weekday, recipe: &str) -> mealplanner_shared::Result<()> {
        let recipe = recipe.trim().to_owned();

        if recipe.is_empty() {
            return self.clear(day).await;
        }

        self.state
            .commit(|data| {
                data.plan.set(day, recipe.to_owned());

                Ok(())
            })
            .await?;

        tracing::info!(%day, %recipe, "dinner planned");

        Ok(())
    }
}
