use super::DocumentStore;
use super::StoreError;
use super::StoreSnapshot;
use std::path::PathBuf;

/// Reads the snapshot from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentStore for JsonFileStore {
    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        // no caching. the file is small and this way edits show up immediately.
        let json = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&json)?)
    }
}
