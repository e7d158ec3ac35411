//! History retention configuration
//!
//! Loaded from a small TOML document such as:
//!
//! ```toml
//! # Seconds of exact history kept behind "now"
//! retention_secs = 10.0
//! # Seconds between cleanup passes
//! cleanup_interval_secs = 1.0
//! ```
//!
//! Missing fields take their defaults. Values are plain seconds so they can be
//! negative on paper; [`HistoryConfig::validate`] is where bad input is caught.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{HistoryError, HistoryResult};

/// Default retention window in seconds
pub const DEFAULT_RETENTION_SECS: f64 = 10.0;

/// Default cleanup cadence in seconds
pub const DEFAULT_CLEANUP_INTERVAL_SECS: f64 = 1.0;

/// Retention window and cleanup cadence for a retention manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// How far behind "now" exact history is guaranteed, in seconds
    #[serde(default = "default_retention_secs")]
    pub retention_secs: f64,
    /// How often the manager prunes registered containers, in seconds
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: f64,
}

fn default_retention_secs() -> f64 {
    DEFAULT_RETENTION_SECS
}

fn default_cleanup_interval_secs() -> f64 {
    DEFAULT_CLEANUP_INTERVAL_SECS
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            retention_secs: DEFAULT_RETENTION_SECS,
            cleanup_interval_secs: DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}

impl HistoryConfig {
    /// Create a config from seconds
    pub fn new(retention_secs: f64, cleanup_interval_secs: f64) -> Self {
        HistoryConfig {
            retention_secs,
            cleanup_interval_secs,
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> HistoryResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> HistoryResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the values and convert them to `(retention, cleanup_interval)`
    pub fn validate(&self) -> HistoryResult<(Duration, Duration)> {
        if !self.retention_secs.is_finite() || self.retention_secs < 0.0 {
            return Err(HistoryError::InvalidConfig(format!(
                "retention must be a finite, non-negative number of seconds, got {}",
                self.retention_secs
            )));
        }
        if !self.cleanup_interval_secs.is_finite() || self.cleanup_interval_secs <= 0.0 {
            return Err(HistoryError::InvalidConfig(format!(
                "cleanup interval must be a finite, positive number of seconds, got {}",
                self.cleanup_interval_secs
            )));
        }
        let retention = Duration::try_from_secs_f64(self.retention_secs).map_err(|e| {
            HistoryError::InvalidConfig(format!("retention {} s: {}", self.retention_secs, e))
        })?;
        let cleanup_interval = Duration::try_from_secs_f64(self.cleanup_interval_secs).map_err(|e| {
            HistoryError::InvalidConfig(format!(
                "cleanup interval {} s: {}",
                self.cleanup_interval_secs, e
            ))
        })?;
        if cleanup_interval.is_zero() {
            return Err(HistoryError::InvalidConfig(format!(
                "cleanup interval {} s rounds down to zero",
                self.cleanup_interval_secs
            )));
        }
        Ok((retention, cleanup_interval))
    }
}
