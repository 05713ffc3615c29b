use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::dataset::{Dataset, normalize};
use crate::seed::{SEED_FILE, Seed};
use crate::store::{STORAGE_KEY, Store};

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub recipes: usize,
    pub planned_dinners: usize,
}

/// The loaded dataset together with the store it is persisted in.
///
/// Every mutation goes through [`State::commit`], which writes the new dataset
/// to the store before it becomes visible in memory, so the two never diverge
/// between actions.
pub struct State<S: Store> {
    pub store: S,
    seed: Box<dyn Seed>,
    data: Dataset,
}

impl<S: Store> State<S> {
    /// Reads the persisted dataset, falling back to the seed when the slot is
    /// empty or unreadable. A seed that cannot be fetched is fatal.
    pub async fn load(store: S, seed: impl Seed + 'static) -> crate::Result<Self> {
        let seed: Box<dyn Seed> = Box::new(seed);
        let data = read_or_seed(&store, seed.as_ref()).await?;

        Ok(Self { store, seed, data })
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Applies `change` to a copy of the dataset and persists the result. When
    /// `change` fails nothing is written and the current dataset is untouched.
    pub async fn commit<T, F>(&mut self, change: F) -> crate::Result<T>
    where
        F: FnOnce(&mut Dataset) -> crate::Result<T>,
    {
        let mut next = self.data.clone();
        let output = change(&mut next)?;
        let next = next.normalized()?;

        write(&self.store, &next).await?;
        self.data = next;

        Ok(output)
    }

    pub async fn save(&mut self) -> crate::Result<()> {
        self.commit(|_| Ok(())).await
    }

    /// Drops the persisted dataset and starts over from the seed.
    /// When the seed cannot be fetched the stored dataset is kept.
    pub async fn reset(&mut self) -> crate::Result<()> {
        let data = fetch_seed(self.seed.as_ref()).await?;

        self.store.remove(STORAGE_KEY).await?;
        write(&self.store, &data).await?;
        self.data = data;

        tracing::info!(
            recipes = self.data.recipes.len(),
            "dataset reset to seed"
        );

        Ok(())
    }

    /// Replaces the whole dataset with the given document. Text that is not
    /// JSON is rejected and leaves everything as it was.
    pub async fn import(&mut self, text: &str) -> crate::Result<ImportSummary> {
        let value: Value = serde_json::from_str(text)?;
        let data = normalize(&value);

        write(&self.store, &data).await?;
        self.data = data;

        let summary = ImportSummary {
            recipes: self.data.recipes.len(),
            planned_dinners: self.data.plan.planned_dinners(),
        };

        tracing::info!(
            recipes = summary.recipes,
            planned_dinners = summary.planned_dinners,
            "dataset imported"
        );

        Ok(summary)
    }

    pub async fn import_file(&mut self, path: impl AsRef<Path>) -> crate::Result<ImportSummary> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;

        self.import(&text).await
    }

    /// Pretty-printed JSON of the current dataset.
    pub fn export(&self) -> crate::Result<String> {
        Ok(self.data.to_pretty_json()?)
    }

    /// Writes the export to `path`, or to `path/data.json` when `path` is a
    /// directory. Returns the file written.
    pub async fn export_to(&self, path: impl AsRef<Path>) -> crate::Result<PathBuf> {
        let path = path.as_ref();
        let target = match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => path.join(SEED_FILE),
            _ => path.to_path_buf(),
        };

        tokio::fs::write(&target, self.export()?).await?;

        tracing::info!(path = %target.display(), "dataset exported");

        Ok(target)
    }
}

async fn read_or_seed(store: &impl Store, seed: &dyn Seed) -> crate::Result<Dataset> {
    if let Some(raw) = store.get(STORAGE_KEY).await? {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => return Ok(normalize(&value)),
            Err(err) => {
                tracing::warn!(error = %err, "stored dataset is corrupted, falling back to seed");
                store.remove(STORAGE_KEY).await?;
            }
        }
    }

    let data = fetch_seed(seed).await?;
    write(store, &data).await?;

    tracing::info!(recipes = data.recipes.len(), "dataset seeded");

    Ok(data)
}

async fn fetch_seed(seed: &dyn Seed) -> crate::Result<Dataset> {
    let text = seed
        .fetch()
        .await
        .map_err(|err| crate::Error::Seed(err.to_string()))?;

    let value: Value =
        serde_json::from_str(&text).map_err(|err| crate::Error::Seed(err.to_string()))?;

    Ok(normalize(&value))
}

async fn write(store: &impl Store, data: &Dataset) -> crate::Result<()> {
    store.set(STORAGE_KEY, &data.to_pretty_json()?).await?;

    Ok(())
}
