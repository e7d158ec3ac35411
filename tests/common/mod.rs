//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
pub use tempora::{
    CleanupStats, HistoryConfig, HistoryError, ManualClock, RetentionManager, SimTime,
    VersionedCell, VersionedList, VersionedMap, VersionedSet,
};

// ============================================================================
// TestHistory - clock plus manager
// ============================================================================

/// A manual clock and a retention manager driven by it
pub struct TestHistory {
    pub clock: Arc<ManualClock>,
    pub manager: Arc<RetentionManager>,
}

impl TestHistory {
    /// Retention in seconds; cleanup effectively never fires on its own
    pub fn new(retention_secs: f64) -> Self {
        Self::with_interval(retention_secs, 1_000_000.0)
    }

    /// Retention and cleanup interval in seconds
    pub fn with_interval(retention_secs: f64, cleanup_interval_secs: f64) -> Self {
        let clock = Arc::new(ManualClock::default());
        let manager = RetentionManager::new(
            clock.clone(),
            Duration::from_secs_f64(retention_secs),
            Duration::from_secs_f64(cleanup_interval_secs),
        )
        .expect("valid retention settings");
        TestHistory { clock, manager }
    }

    /// Move the clock to `secs`
    pub fn at(&self, secs: f64) -> &Self {
        self.clock.advance_to(t(secs));
        self
    }

    /// Run a cleanup pass now
    pub fn clean_up(&self) -> CleanupStats {
        self.manager.clean_up_history()
    }
}

/// Shorthand for a time in seconds
pub fn t(secs: f64) -> SimTime {
    SimTime::from_secs_f64(secs)
}

/// Sorted copy of a collection's items, for order-insensitive comparison
pub fn sorted<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    let mut v: Vec<T> = items.into_iter().collect();
    v.sort();
    v
}
