use mealplanner_shared::{Dataset, recipe};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GroceryItem {
    pub label: String,
    pub count: usize,
}

/// Ingredients needed for the planned week. Recomputed from the dataset on
/// every request, never stored.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,
    pub planned_dinners: usize,
}

impl GroceryList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} unique items • {} planned dinners",
            self.items.len(),
            self.planned_dinners
        )
    }
}

/// Aggregates the ingredients of every planned dinner.
///
/// Slots are resolved to recipes case-insensitively; empty slots and names
/// with no matching recipe are skipped. Ingredients are grouped by their
/// lowercase text and keep the casing they were first seen with. A recipe
/// planned on several days contributes once per day.
pub fn generate(data: &Dataset) -> GroceryList {
    let mut items: Vec<GroceryItem> = vec![];
    let mut index: HashMap<String, usize> = HashMap::new();

    let recipes = data
        .plan
        .slots()
        .iter()
        .filter_map(|slot| data.find(slot));

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let key = recipe::key(ingredient);

            match index.get(&key) {
                Some(pos) => items[*pos].count += 1,
                None => {
                    index.insert(key, items.len());
                    items.push(GroceryItem {
                        label: ingredient.to_owned(),
                        count: 1,
                    });
                }
            }
        }
    }

    items.sort_by(|a, b| recipe::compare_names(&a.label, &b.label));

    let list = GroceryList {
        items,
        planned_dinners: data.plan.planned_dinners(),
    };

    tracing::debug!(
        items = list.items.len(),
        planned_dinners = list.planned_dinners,
        "grocery list generated"
    );

    list
}
