//! Error types for tempora
//!
//! Every error here is synchronous and reported straight to the caller.
//! Nothing is retried and nothing is fatal to the process, only to the
//! attempted operation. Mutators validate before touching any state, so an
//! `Err` always means "nothing changed, nothing was recorded".
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for tempora operations
pub type HistoryResult<T> = std::result::Result<T, HistoryError>;

/// Error types for versioned containers and their retention manager
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Invalid retention window or cleanup interval
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Positional list operation outside `0..len` (or `0..=len` for inserts)
    #[error("Index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the list at the time of the call
        len: usize,
    },

    /// Key absent from a versioned map
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Configuration text could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HistoryError {
    /// Build a `KeyNotFound` from any debuggable key
    pub fn key_not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        HistoryError::KeyNotFound(format!("{:?}", key))
    }
}

impl From<toml::de::Error> for HistoryError {
    fn from(e: toml::de::Error) -> Self {
        HistoryError::ConfigParse(e.to_string())
    }
}
