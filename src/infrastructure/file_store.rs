// File-backed key-value store - One JSON document per key
use crate::application::key_value_store::KeyValueStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            anyhow::bail!("invalid storage key: {:?}", key);
        }
        Ok(self.directory.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.directory)
            .await
            .with_context(|| format!("Failed to create {}", self.directory.display()))?;

        // Write then rename so a crash never leaves half a document behind
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, value)
            .await
            .with_context(|| format!("Failed to write {}", staging.display()))?;
        tokio::fs::rename(&staging, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::key_value_store::SECTION_ORDER_KEY;

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get(SECTION_ORDER_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("layout");

        FileStore::new(&nested)
            .set(SECTION_ORDER_KEY, r#"["a","b"]"#)
            .await
            .unwrap();

        let store = FileStore::new(&nested);
        assert_eq!(
            store.get(SECTION_ORDER_KEY).await.unwrap().as_deref(),
            Some(r#"["a","b"]"#)
        );
        assert!(nested.join("dashboard-section-order.json").exists());
        assert!(!nested.join("dashboard-section-order.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("k", "true").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.set("../escape", "x").await.is_err());
        assert!(store.get("nested/key").await.is_err());
        assert!(store.remove("").await.is_err());
    }
}
