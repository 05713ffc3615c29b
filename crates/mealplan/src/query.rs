use mealplanner_shared::{Dataset, mealplan::Weekday};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlot {
    pub day: Weekday,
    pub recipe: Option<String>,
}

impl DaySlot {
    /// Whether the planned name still resolves to a recipe in the collection.
    pub fn is_known(&self, data: &Dataset) -> bool {
        self.recipe
            .as_deref()
            .is_some_and(|name| data.find(name).is_some())
    }
}

pub fn week(data: &Dataset) -> Vec<DaySlot> {
    data.plan
        .days()
        .map(|(day, recipe)| DaySlot {
            day,
            recipe: (!recipe.is_empty()).then(|| recipe.to_owned()),
        })
        .collect()
}

pub fn planned_dinners(data: &Dataset) -> usize {
    data.plan.planned_dinners()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplanner_shared::normalize;
    use serde_json::json;

    #[test]
    fn test_week_lists_seven_days_from_sunday() {
        let data = normalize(&json!({
            "recipes": [{ "name": "Soup" }],
            "plan": ["", "soup", "Ghost"]
        }));

        let week = week(&data);

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, Weekday::Sunday);
        assert_eq!(week[0].recipe, None);
        assert_eq!(week[1].recipe.as_deref(), Some("soup"));
        assert!(week[1].is_known(&data));
        assert!(!week[2].is_known(&data));
        assert_eq!(week[6].day, Weekday::Saturday);
        assert_eq!(planned_dinners(&data), 2);
    }
}
