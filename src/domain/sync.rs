//! Sync-related domain models and configuration.
//!
//! Contains the application configuration tables and the outcome types
//! reported by the remote reconciliation cycle.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for the remote sync client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Interval between sync cycles in seconds.
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Whether background sync is enabled in watch mode.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Base URL of the placeholder quote server.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Number of remote records requested per fetch.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,

    /// Timeout applied to outbound requests, in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            enabled: default_enabled(),
            server_url: default_server_url(),
            fetch_limit: default_fetch_limit(),
            request_timeout_secs: default_timeout(),
        }
    }
}

const fn default_interval() -> u64 {
    30
}

const fn default_enabled() -> bool {
    true
}

fn default_server_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

const fn default_fetch_limit() -> usize {
    5
}

const fn default_timeout() -> u64 {
    10
}

/// Path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathConfig {
    /// Base data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote sync configuration.
    #[serde(default)]
    pub sync: SyncConfig,

    /// Path configuration.
    #[serde(default)]
    pub paths: PathConfig,
}

impl AppConfig {
    /// Get the data directory, using default if not configured.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quotekeeper")
    }

    /// Get the durable store database path.
    #[must_use]
    pub fn store_db_path(&self) -> PathBuf {
        self.data_dir().join("quotes.db")
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.data_dir().join("config.toml")
    }
}

/// Outcome of a single reconciliation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// At least one remote quote was appended to the local collection.
    Merged { added: usize },
    /// Every remote quote already existed locally.
    NoChange,
    /// The fetch failed or the response had an unexpected shape; local
    /// state was left untouched.
    Unreachable { reason: String },
}

/// Result of a completed cycle, with timing for logs and status output.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// What the cycle did.
    pub outcome: SyncOutcome,
    /// When the cycle finished.
    pub completed_at: DateTime<Utc>,
    /// Wall-clock duration of the cycle in milliseconds.
    pub duration_ms: u128,
}

/// Outcome of a best-effort push of one quote to the remote sink.
///
/// Push failures are never surfaced to the user as errors and never
/// retried, but tests can assert on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The request was sent; the response body is not inspected.
    Delivered,
    /// The request failed.
    Failed { reason: String },
}
