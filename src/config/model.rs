//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::app::state::ResourceId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub debug: DebugConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Endpoints of the recommendation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_neighbors_url")]
    pub neighbors_url: String,
    #[serde(default = "default_sequence_sort_url")]
    pub sequence_sort_url: String,
    #[serde(default = "default_sequence_insert_url")]
    pub sequence_insert_url: String,
    /// Directory holding the debug/demo JSON fixtures.
    #[serde(default = "default_fixture_dir")]
    pub fixture_dir: PathBuf,
    /// Request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            neighbors_url: default_neighbors_url(),
            sequence_sort_url: default_sequence_sort_url(),
            sequence_insert_url: default_sequence_insert_url(),
            fixture_dir: default_fixture_dir(),
            timeout_secs: None,
        }
    }
}

/// Result-size limits sent along with queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,
    #[serde(default = "default_max_neighbors")]
    pub max_neighbors: usize,
    /// Also caps the concept list kept on suggested insertions.
    #[serde(default = "default_max_concepts")]
    pub max_concepts: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_search_results: default_max_search_results(),
            max_neighbors: default_max_neighbors(),
            max_concepts: default_max_concepts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays visible before it is dismissed.
    #[serde(default = "default_notification_duration")]
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_notification_duration(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Reference ids whose neighbors are served from `n<id>.json` fixtures.
    #[serde(default = "default_fixture_reference_ids")]
    pub fixture_reference_ids: Vec<ResourceId>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            fixture_reference_ids: default_fixture_reference_ids(),
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append logs to this file instead of stderr. `~` expands to the home dir.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_search_url() -> String {
    "http://localhost:8000/api/v1/search/".to_string()
}
fn default_neighbors_url() -> String {
    "http://localhost:8000/api/v1/neighbors/".to_string()
}
fn default_sequence_sort_url() -> String {
    "http://localhost:8000/api/v1/sequence/sort/".to_string()
}
fn default_sequence_insert_url() -> String {
    "http://localhost:8000/api/v1/sequence/insert/".to_string()
}
fn default_fixture_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_max_search_results() -> usize {
    20
}
fn default_max_neighbors() -> usize {
    20
}
fn default_max_concepts() -> usize {
    10
}
fn default_notification_duration() -> u64 {
    5000
}
fn default_fixture_reference_ids() -> Vec<ResourceId> {
    vec![23344, 23345]
}
fn default_log_level() -> String {
    "info".to_string()
}
