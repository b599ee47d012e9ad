use crate::domain::{Grouping, SortMode};
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "DASHBOARD_URL";

/// Dashboard settings, usually read from a TOML file
///
/// ```toml
/// endpoint = "https://example.com/board"
/// timeout_secs = 5
/// grouping = "users"
/// ordering = "title"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub grouping: Grouping,
    pub ordering: SortMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/board".to_string(),
            timeout_secs: 10,
            grouping: Grouping::Status,
            ordering: SortMode::Priority,
        }
    }
}

impl DashboardConfig {
    /// Parses a TOML document; missing keys take their defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| DashboardError::ConfigError(e.to_string()))
    }

    /// Reads a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Replaces the endpoint with `DASHBOARD_URL` when it is set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
