//! Directory-backed store: one JSON file per key

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use super::GraphStore;
use crate::error::StoreError;
use crate::utils::atomic_write;

/// Stores the value of key `k` in `<root>/k.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StoreError::backend(format!("invalid key for file store: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl GraphStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        tokio::task::spawn_blocking(move || atomic_write(&path, &value))
            .await
            .map_err(|e| StoreError::backend(format!("write task failed: {e}")))?
            .map_err(|e| StoreError::Io(e.into()))
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("knowledge_graph").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_writes_json_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        store
            .set("knowledge_graph", r#"{"entities":[],"relations":[]}"#.to_string())
            .await
            .unwrap();

        let on_disk = std::fs::read_to_string(dir.path().join("data/knowledge_graph.json")).unwrap();
        assert_eq!(on_disk, r#"{"entities":[],"relations":[]}"#);
        assert_eq!(
            store.get("knowledge_graph").await.unwrap().as_deref(),
            Some(r#"{"entities":[],"relations":[]}"#)
        );
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("../escape").await.is_err());
        assert!(store.set("a/b", String::new()).await.is_err());
    }
}
