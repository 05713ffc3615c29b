use mealplanner_shared::{State, Store};
use mealplanner_shopping::Checklist;
use std::fmt::Write;

pub fn show<S: Store>(state: &State<S>, checked: &[String]) -> anyhow::Result<String> {
    let mut checklist = Checklist::new(mealplanner_shopping::generate(state.data()));

    for label in checked {
        checklist.toggle(label)?;
    }

    let mut out = String::new();

    if checklist.list().is_empty() {
        let _ = writeln!(out, "Nothing to buy, plan some dinners first");
    }

    for item in &checklist.list().items {
        let mark = if checklist.is_checked(&item.label) {
            "x"
        } else {
            " "
        };
        let _ = writeln!(out, "[{mark}] {} ({})", item.label, item.count);
    }

    let _ = write!(out, "{}", checklist.list().summary());

    Ok(out)
}
