use crate::api::error::ApiError;
use crate::api::fixture;
use crate::config::ApiConfig;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Where a query is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Neighbors,
    SequenceSort,
    SequenceInsert,
    /// A local JSON file named `<name>.json` in the fixture directory.
    Fixture(String),
}

/// Transport used by the store. The HTTP implementation is [`HttpBackend`];
/// tests substitute an in-memory one.
pub trait Backend: Send + Sync + 'static {
    fn post_json(
        &self,
        endpoint: &Endpoint,
        body: &Value,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// POSTs JSON to the configured endpoints and reads fixtures from disk.
pub struct HttpBackend {
    client: reqwest::Client,
    api: ApiConfig,
}

impl HttpBackend {
    pub fn new(api: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, api })
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(url, "POST");
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::Empty);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn read_fixture(&self, name: &str) -> Result<Value, ApiError> {
        let path = fixture::fixture_path(&self.api.fixture_dir, name)
            .ok_or_else(|| ApiError::InvalidFixture(name.to_string()))?;
        tracing::debug!(path = %path.display(), "reading fixture");
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ApiError::Fixture { path, source })?;
        if bytes.is_empty() {
            return Err(ApiError::Empty);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Backend for HttpBackend {
    async fn post_json(&self, endpoint: &Endpoint, body: &Value) -> Result<Value, ApiError> {
        let url = match endpoint {
            Endpoint::Search => &self.api.search_url,
            Endpoint::Neighbors => &self.api.neighbors_url,
            Endpoint::SequenceSort => &self.api.sequence_sort_url,
            Endpoint::SequenceInsert => &self.api.sequence_insert_url,
            Endpoint::Fixture(name) => return self.read_fixture(name).await,
        };
        self.post(url, body).await
    }
}
