use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DAYS: usize = 7;

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }

    /// Accepts a day name in any casing or its position in the week (0 = Sunday).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        Self::from_str(value)
            .ok()
            .or_else(|| value.parse::<usize>().ok().and_then(Self::from_index))
    }
}

/// Seven dinner slots, Sunday first. An empty string means no dinner planned.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeekPlan([String; DAYS]);

impl WeekPlan {
    pub fn new(slots: [String; DAYS]) -> Self {
        Self(slots)
    }

    pub fn get(&self, day: Weekday) -> &str {
        &self.0[day.index()]
    }

    pub fn set(&mut self, day: Weekday, recipe: impl Into<String>) {
        self.0[day.index()] = recipe.into();
    }

    pub fn clear(&mut self, day: Weekday) {
        self.0[day.index()].clear();
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &str)> {
        Weekday::VARIANTS
            .iter()
            .copied()
            .zip(self.0.iter().map(String::as_str))
    }

    pub fn slots(&self) -> &[String; DAYS] {
        &self.0
    }

    pub fn planned_dinners(&self) -> usize {
        self.0.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Rewrites every slot holding exactly `from`. Returns how many slots changed.
    pub fn rename(&mut self, from: &str, to: &str) -> usize {
        let mut changed = 0;
        for slot in self.0.iter_mut().filter(|slot| slot.as_str() == from) {
            *slot = to.to_owned();
            changed += 1;
        }

        changed
    }

    /// Empties every slot holding exactly `recipe`. Returns how many slots changed.
    pub fn remove(&mut self, recipe: &str) -> usize {
        self.rename(recipe, "")
    }
}
