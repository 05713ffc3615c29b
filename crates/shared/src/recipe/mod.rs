use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn key(&self) -> String {
        key(&self.name)
    }

    /// Case-insensitive name match, the rule used for lookups and uniqueness.
    pub fn is_named(&self, name: &str) -> bool {
        self.key() == key(name)
    }
}

/// Identity of a recipe name: two names are the same recipe when their keys are equal.
pub fn key(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive lexicographic order; ties fall back to the raw text so the
/// order stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

/// Trims every line and drops the ones left empty.
pub fn clean_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}
