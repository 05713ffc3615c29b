use rust_embed::RustEmbed;
use std::path::PathBuf;

/// File name of the bundled seed document. Exports reuse it so an export can
/// replace the seed as is.
pub const SEED_FILE: &str = "data.json";

/// Source of the default dataset used on first run and on reset.
#[async_trait::async_trait]
pub trait Seed: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<String>;
}

#[derive(RustEmbed)]
#[folder = "seed/"]
struct Bundle;

/// The seed document compiled into the binary.
#[derive(Clone, Copy, Default)]
pub struct EmbeddedSeed;

#[async_trait::async_trait]
impl Seed for EmbeddedSeed {
    async fn fetch(&self) -> anyhow::Result<String> {
        let Some(file) = Bundle::get(SEED_FILE) else {
            anyhow::bail!("{SEED_FILE} is missing from the bundle");
        };

        Ok(String::from_utf8(file.data.into_owned())?)
    }
}

/// A seed document read from disk on every fetch.
#[derive(Clone, Debug)]
pub struct FileSeed(pub PathBuf);

#[async_trait::async_trait]
impl Seed for FileSeed {
    async fn fetch(&self) -> anyhow::Result<String> {
        let text = tokio::fs::read_to_string(&self.0).await?;

        Ok(text)
    }
}

/// A seed document held in memory.
#[derive(Clone, Debug)]
pub struct InlineSeed(pub String);

#[async_trait::async_trait]
impl Seed for InlineSeed {
    async fn fetch(&self) -> anyhow::Result<String> {
        Ok(self.0.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[tokio::test]
    async fn test_embedded_seed_is_valid_json() -> anyhow::Result<()> {
        let text = EmbeddedSeed.fetch().await?;
        let value: serde_json::Value = serde_json::from_str(&text)?;

        assert!(value.get("recipes").and_then(|v| v.as_array()).is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_file_seed() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.child(SEED_FILE);
        std::fs::write(&path, r#"{"recipes":[]}"#)?;

        assert_eq!(FileSeed(path).fetch().await?, r#"{"recipes":[]}"#);
        assert!(FileSeed(dir.child("missing.json")).fetch().await.is_err());

        Ok(())
    }
}
