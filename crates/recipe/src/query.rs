use mealplanner_shared::{
    Dataset,
    recipe::{Recipe, compare_names, key},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub name: String,
    pub ingredient_count: usize,
}

pub fn find<'a>(data: &'a Dataset, name: &str) -> Option<&'a Recipe> {
    data.find(name)
}

/// Recipes whose name contains `search` (any casing), in stored order. A blank
/// search lists everything.
pub fn list(data: &Dataset, search: &str) -> Vec<RecipeSummary> {
    let search = key(search.trim());

    data.recipes
        .iter()
        .filter(|r| search.is_empty() || r.key().contains(&search))
        .map(|r| RecipeSummary {
            name: r.name.to_owned(),
            ingredient_count: r.ingredients.len(),
        })
        .collect()
}

/// Every recipe name sorted for a picker.
pub fn names(data: &Dataset) -> Vec<String> {
    let mut names = data
        .recipes
        .iter()
        .map(|r| r.name.to_owned())
        .collect::<Vec<_>>();

    names.sort_by(|a, b| compare_names(a, b));

    names
}
