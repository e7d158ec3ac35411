//! Core types for Tempora
//!
//! This crate defines the foundational types shared by the history engine and
//! the versioned containers:
//! - SimTime: Microsecond-precision simulation time
//! - HistoryError: Error type hierarchy
//! - TimeSource: What the retention manager needs from a scheduler
//! - ManualClock: Deterministic TimeSource for tests and simple drivers
//! - HistoryConfig: Retention window and cleanup cadence, loadable from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod config;
pub mod error;
pub mod time;

pub use clock::{ManualClock, RecurringAction, ReplicationEndCallback, TimeSource};
pub use config::{HistoryConfig, DEFAULT_CLEANUP_INTERVAL_SECS, DEFAULT_RETENTION_SECS};
pub use error::{HistoryError, HistoryResult};
pub use time::SimTime;
