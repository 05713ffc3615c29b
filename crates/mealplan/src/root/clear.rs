use mealplanner_shared::{
    Store,
    mealplan::{WeekPlan, Weekday},
};

impl<S: Store> super::Command<'_, S> {
    pub async fn clear(&mut self, day: Weekday) -> mealplanner_shared::Result<()> {
        self.state
            .commit(|data| {
                data.plan.clear(day);

                Ok(())
            })
            .await?;

        tracing::info!(%day, "dinner cleared");

        Ok(())
    }

    pub async fn clear_all(&mut self) -> mealplanner_shared::Result<()> {
        self.state
            .commit(|data| {
                data.plan = WeekPlan::default();

                Ok(())
            })
            .await?;

        tracing::info!("week cleared");

        Ok(())
    }
}
