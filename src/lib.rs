//! Tempora - time-versioned containers for discrete-event simulation
//!
//! Tempora keeps a bounded history of simulation state so that logic running
//! "now" can ask what a value, set, list or map looked like a moment ago.
//! History is exact within a configurable retention window; older queries
//! answer with the oldest state still retained.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tempora::{ManualClock, RetentionManager, SimTime, VersionedSet};
//!
//! let clock = Arc::new(ManualClock::default());
//! let manager = RetentionManager::new(clock.clone(), Duration::from_secs(10), Duration::from_secs(1))?;
//!
//! let mut neighbours = VersionedSet::new(&manager);
//! neighbours.add("car-1");
//! clock.advance_to(SimTime::from_secs(2));
//! neighbours.add("car-2");
//!
//! assert_eq!(neighbours.get_at(SimTime::from_secs(1)).len(), 1);
//! assert_eq!(neighbours.len(), 2);
//! # Ok::<(), tempora::HistoryError>(())
//! ```
//!
//! # Architecture
//!
//! - `tempora-core`: simulation time, errors, configuration and the
//!   [`TimeSource`] abstraction with a deterministic [`ManualClock`]
//! - `tempora-storage`: change logs and the [`RetentionManager`]
//! - `tempora-primitives`: the versioned containers

pub use tempora_core::{
    HistoryConfig, HistoryError, HistoryResult, ManualClock, RecurringAction,
    ReplicationEndCallback, SimTime, TimeSource, DEFAULT_CLEANUP_INTERVAL_SECS,
    DEFAULT_RETENTION_SECS,
};
pub use tempora_primitives::{
    KeysView, Representation, VersionedCell, VersionedContainer, VersionedList, VersionedMap,
    VersionedSet,
};
pub use tempora_storage::{CleanupStats, Prunable, RetentionManager};
