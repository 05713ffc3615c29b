//! Canonical application data and the coercion that produces it from any JSON
//! document, including documents written by older versions of the planner.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::mealplan::{DAYS, WeekPlan};
use crate::recipe::{self, Recipe};

/// Key of the plan array in documents written before the plan was renamed.
pub const LEGACY_PLAN_KEY: &str = "Meals";
pub const PLAN_KEY: &str = "plan";
pub const RECIPES_KEY: &str = "recipes";

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub recipes: Vec<Recipe>,
    pub plan: WeekPlan,
}

impl Dataset {
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        if name.is_empty() {
            return None;
        }

        self.recipes.iter().find(|r| r.is_named(name))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.recipes.iter().position(|r| r.is_named(name))
    }

    /// Re-applies every normalization rule to an already typed dataset.
    pub fn normalized(self) -> serde_json::Result<Self> {
        Ok(normalize(&self.to_value()?))
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Turns any JSON value into a dataset that satisfies every invariant:
/// seven plan slots, trimmed non-empty names and lines, unique names.
pub fn normalize(value: &Value) -> Dataset {
    let Some(object) = value.as_object() else {
        return Dataset::default();
    };

    Dataset {
        recipes: normalize_recipes(object.get(RECIPES_KEY)),
        plan: normalize_plan(object),
    }
}

fn normalize_plan(object: &Map<String, Value>) -> WeekPlan {
    let entries = object
        .get(PLAN_KEY)
        .and_then(Value::as_array)
        .or_else(|| object.get(LEGACY_PLAN_KEY).and_then(Value::as_array));

    let mut slots: [String; DAYS] = Default::default();

    if let Some(entries) = entries {
        for (slot, entry) in slots.iter_mut().zip(entries) {
            *slot = coerce_string(entry);
        }
    }

    WeekPlan::new(slots)
}

fn normalize_recipes(value: Option<&Value>) -> Vec<Recipe> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return vec![];
    };

    let mut seen = HashSet::new();

    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| Recipe {
            name: entry
                .get("name")
                .map(coerce_string)
                .unwrap_or_default()
                .trim()
                .to_owned(),
            ingredients: coerce_lines(entry.get("ingredients")),
            steps: coerce_lines(entry.get("steps")),
        })
        .filter(|r| !r.name.is_empty())
        .filter(|r| seen.insert(r.key()))
        .collect()
}

fn coerce_lines(value: Option<&Value>) -> Vec<String> {
    match value.and_then(Value::as_array) {
        Some(lines) => recipe::clean_lines(lines.iter().map(coerce_string)),
        None => vec![],
    }
}

/// String form of a loosely typed value, the way a browser would display it.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => coerce_float(f),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(coerce_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// Shortest text for `f`, switching to exponent form (`1e+21`, `1.5e-7`) outside
/// `[1e-6, 1e21)` like `Number.prototype.toString`.
fn coerce_float(f: f64) -> String {
    let magnitude = f.abs();

    if f == 0.0 {
        return "0".to_owned();
    }

    if (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }

    let text = format!("{f:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
