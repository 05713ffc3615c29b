use mealplanner_shared::{
    Store,
    recipe::{Recipe, clean_lines},
};
use validator::Validate;

#[derive(Validate, Clone, Debug, Default, PartialEq)]
pub struct RecipeInput {
    #[validate(length(min = 1, message = "recipe name is required"))]
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl RecipeInput {
    /// Trims every field, drops blank lines and validates what is left.
    pub fn into_recipe(self) -> mealplanner_shared::Result<Recipe> {
        let input = RecipeInput {
            name: self.name.trim().to_owned(),
            ingredients: clean_lines(self.ingredients),
            steps: clean_lines(self.steps),
        };

        input.validate()?;

        Ok(Recipe {
            name: input.name,
            ingredients: input.ingredients,
            steps: input.steps,
        })
    }
}

impl<S: Store> super::Command<'_, S> {
    /// The editor's save action: updates `original` when editing an existing
    /// recipe, creates a new one otherwise. Returns the stored name.
    pub async fn save(
        &mut self,
        original: Option<&str>,
        input: RecipeInput,
    ) -> mealplanner_shared::Result<String> {
        match original {
            Some(original) => {
                let name = input.name.trim().to_owned();
                self.update(original, input).await?;

                Ok(name)
            }
            None => self.create(input).await,
        }
    }
}
