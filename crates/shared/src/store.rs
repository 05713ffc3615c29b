use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Key of the single slot holding the serialized dataset.
pub const STORAGE_KEY: &str = "mealPlanner:data";

/// Key-value persistence the planner writes its dataset into.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// In-process store. Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with(key: &str, value: impl Into<String>) -> Self {
        let store = Self::default();
        store
            .slots
            .write()
            .await
            .insert(key.to_owned(), value.into());

        store
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.slots
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.slots.write().await.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_clones_share_slots() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set(STORAGE_KEY, "{}").await?;
        assert_eq!(other.get(STORAGE_KEY).await?.as_deref(), Some("{}"));

        other.remove(STORAGE_KEY).await?;
        assert!(store.get(STORAGE_KEY).await?.is_none());

        Ok(())
    }
}
