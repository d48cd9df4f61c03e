use std::path::PathBuf;
use thiserror::Error;

/// Every way an API query can fail. `Store::query_api` reports all of them
/// through this one type.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty response")]
    Empty,

    #[error("invalid fixture name '{0}'")]
    InvalidFixture(String),

    #[error("cannot read fixture {}: {source}", .path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
