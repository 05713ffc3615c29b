use mealplanner_shared::{State, Store};
use std::path::PathBuf;

pub async fn import<S: Store>(state: &mut State<S>, file: PathBuf) -> anyhow::Result<String> {
    let summary = state.import_file(&file).await?;

    Ok(format!(
        "Imported {} recipes • {} planned dinners",
        summary.recipes, summary.planned_dinners
    ))
}

pub async fn export<S: Store>(
    state: &State<S>,
    output: Option<PathBuf>,
) -> anyhow::Result<String> {
    match output {
        Some(path) => {
            let path = state.export_to(path).await?;

            Ok(format!("Exported to {}", path.display()))
        }
        None => Ok(state.export()?),
    }
}

pub async fn reset<S: Store>(state: &mut State<S>) -> anyhow::Result<String> {
    state.reset().await?;

    Ok(format!(
        "Reset to seed: {} recipes • {} planned dinners",
        state.data().recipes.len(),
        state.data().plan.planned_dinners()
    ))
}
