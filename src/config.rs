//! Persisted client configuration.
//!
//! One record, one storage key. The browser keeps it in `localStorage`; the
//! JSON round-trip lives here so normalization and defaults are testable
//! off-browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `localStorage` key the console page persists under.
pub const STORAGE_KEY: &str = "dashboardConfig";

/// Base URL used until the user saves one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// The console's client-side configuration record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(rename = "apiUrl")]
    pub api_url: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API URL cannot be empty")]
    EmptyApiUrl,
}

impl PanelConfig {
    /// Update the base URL from user input: trims, rejects empty, strips a
    /// single trailing slash.
    pub fn set_api_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        self.api_url = trimmed.strip_suffix('/').unwrap_or(trimmed).to_owned();
        Ok(())
    }

    /// Absolute URL for a service path such as `/api/status`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{base}/{path}")
    }

    /// Parse the stored JSON record; `None` on absent or corrupt data, in
    /// which case callers fall back to the default.
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// JSON form written back to storage.
    pub fn to_stored(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}
