//! Read access to the remote document store.

mod file;
mod http;
pub mod snapshot;

pub use file::JsonFileStore;
pub use http::HttpStore;
pub use snapshot::StoreSnapshot;

use crate::config::StoreConfig;
use crate::config::StoreKind;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unable to read store snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unknown user: {0}")]
    UnknownUser(String),
}

/// A source of store snapshots.
pub trait DocumentStore {
    /// Loads the current document set.
    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError>;
}

/// The store selected by [`StoreConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    File(JsonFileStore),
    Http(HttpStore),
}

impl ConfiguredStore {
    pub fn new(config: &StoreConfig) -> Self {
        match config.kind {
            StoreKind::File => Self::File(JsonFileStore::new(config.path.clone())),
            StoreKind::Http => Self::Http(HttpStore::new(config.url.clone())),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&StoreConfig::from_env())
    }
}

impl DocumentStore for ConfiguredStore {
    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        match self {
            Self::File(store) => store.snapshot().await,
            Self::Http(store) => store.snapshot().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn selects_store_from_config() {
        let mut config = StoreConfig {
            kind: StoreKind::File,
            path: PathBuf::from("/tmp/store.json"),
            url: "http://localhost/store.json".into(),
            session_uid: None,
        };
        assert!(matches!(ConfiguredStore::new(&config), ConfiguredStore::File(_)));

        config.kind = StoreKind::Http;
        assert!(matches!(ConfiguredStore::new(&config), ConfiguredStore::Http(_)));
    }
}
