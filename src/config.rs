//! Runtime settings for the data source.
//!
//! Settings come from a TOML file (`births.toml` in the standard search
//! locations) with environment-variable overrides, so deployments can
//! repoint the source URL without a rebuild.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::AnalysisError;

/// Data-source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// URL of the remote parquet file with per-state daily birth counts.
    #[serde(default = "default_data_url")]
    pub data_url: String,
    /// Upper bound on a single fetch attempt, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Number of retries after a failed fetch attempt.
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: u32,
}

fn default_data_url() -> String {
    "https://storage.data.gov.my/demography/births.parquet".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_fetch_retries() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            fetch_retries: default_fetch_retries(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(Settings)` if successful
    /// * `Err(AnalysisError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AnalysisError::DataUnavailable(format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            AnalysisError::DataUnavailable(format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings.with_env_overrides())
    }

    /// Load settings from the default location, falling back to defaults
    /// when no file exists.
    ///
    /// Searches for `births.toml` in the current directory and its parent.
    pub fn from_default_location() -> Self {
        let search_paths = [
            PathBuf::from("births.toml"),
            PathBuf::from("../births.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(settings) => return settings,
                    Err(e) => {
                        log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                    }
                }
            }
        }

        Settings::default().with_env_overrides()
    }

    /// Apply environment-variable overrides on top of these settings.
    ///
    /// Recognized variables: `BIRTHS_DATA_URL`, `BIRTHS_FETCH_TIMEOUT_SECS`,
    /// `BIRTHS_FETCH_RETRIES`. Unparseable numeric values are ignored with
    /// a warning rather than failing startup.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("BIRTHS_DATA_URL") {
            if !url.is_empty() {
                self.data_url = url;
            }
        }
        if let Ok(raw) = std::env::var("BIRTHS_FETCH_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.fetch_timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid BIRTHS_FETCH_TIMEOUT_SECS: {}", raw),
            }
        }
        if let Ok(raw) = std::env::var("BIRTHS_FETCH_RETRIES") {
            match raw.parse() {
                Ok(retries) => self.fetch_retries = retries,
                Err(_) => log::warn!("Ignoring invalid BIRTHS_FETCH_RETRIES: {}", raw),
            }
        }
        self
    }

    /// The fetch timeout as a `Duration`.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
