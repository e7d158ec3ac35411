//! VersionedCell: a single value with point-in-time reads
//!
//! Typical use is a piece of agent state that later logic wants to look at
//! "as it was" a moment ago, e.g. the lane a vehicle occupied or the status of
//! its turn indicator when another driver perceived it.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tempora_core::{ManualClock, SimTime};
//! use tempora_primitives::VersionedCell;
//! use tempora_storage::RetentionManager;
//!
//! let clock = Arc::new(ManualClock::default());
//! let manager = RetentionManager::new(clock.clone(), Duration::from_secs(10), Duration::from_secs(1))?;
//!
//! let mut indicator = VersionedCell::with_initial(&manager, "none");
//! clock.advance_to(SimTime::from_secs(2));
//! indicator.set("left");
//!
//! assert_eq!(indicator.get(), Some("left"));
//! assert_eq!(indicator.get_at(SimTime::from_secs(1)), Some("none"));
//! # Ok::<(), tempora_core::HistoryError>(())
//! ```

use std::sync::Arc;
use tempora_core::SimTime;
use tempora_storage::{RetentionManager, TrackedLog};

/// Single time-stamped value with history
pub struct VersionedCell<T: Clone + Send + 'static> {
    live: Option<T>,
    history: Arc<TrackedLog<T>>,
    manager: Arc<RetentionManager>,
}

impl<T: Clone + Send + 'static> VersionedCell<T> {
    /// Create a cell holding no value
    pub fn new(manager: &Arc<RetentionManager>) -> Self {
        VersionedCell {
            live: None,
            history: TrackedLog::register(manager),
            manager: Arc::clone(manager),
        }
    }

    /// Create a cell whose first value is `initial`, recorded at the current time
    pub fn with_initial(manager: &Arc<RetentionManager>, initial: T) -> Self {
        let mut cell = Self::new(manager);
        cell.set(initial);
        cell
    }

    /// Set the value as of now
    ///
    /// A second `set` at the same time replaces the first in history.
    pub fn set(&mut self, value: T) {
        let now = self.manager.now();
        self.history.record(now, value.clone());
        self.live = Some(value);
    }

    /// Current value, `None` if never set
    pub fn get(&self) -> Option<T> {
        self.live.clone()
    }

    /// Borrow of the current value
    pub fn value(&self) -> Option<&T> {
        self.live.as_ref()
    }

    /// Value as of `time`
    ///
    /// `None` if never set. Times before the oldest retained record answer
    /// with that record's value.
    pub fn get_at(&self, time: SimTime) -> Option<T> {
        self.history.state_at(time)
    }

    /// Number of retained change records
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Time of the oldest retained change record
    pub fn oldest_time(&self) -> Option<SimTime> {
        self.history.oldest_time()
    }

    /// Time of the newest change record
    pub fn latest_time(&self) -> Option<SimTime> {
        self.history.latest_time()
    }
}

impl<T: Clone + Send + std::fmt::Debug + 'static> std::fmt::Debug for VersionedCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionedCell")
            .field("live", &self.live)
            .field("history_len", &self.history_len())
            .finish()
    }
}
