use super::DocumentStore;
use super::StoreError;
use super::StoreSnapshot;

/// Fetches the snapshot as a JSON document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore {
    url: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl DocumentStore for HttpStore {
    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let snapshot = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<StoreSnapshot>()
            .await?;
        Ok(snapshot)
    }
}
