//! VersionedContainer: the shared versioning engine
//!
//! ## Design
//!
//! A container is two halves:
//!
//! - The **live representation** `R`, owned outright by the container and used
//!   for every present-time read and write.
//! - A [`TrackedLog<R>`] of value copies, shared (weakly) with the retention
//!   manager so cleanup passes can prune it.
//!
//! Every mutation goes through [`VersionedContainer::apply`]: the closure runs
//! against the live representation, then a copy of the result is recorded at
//! the manager's current time. Several mutations at one time collapse into a
//! single record.
//!
//! ## Read-only access
//!
//! [`VersionedContainer::live`] hands out a shared borrow of the live
//! representation. Mutation needs `&mut self`, so while any view or iterator
//! is alive no write can happen, and nothing reachable through `&R` can
//! structurally change it. Removing through an iterator or clearing a view
//! simply does not type-check.
//!
//! ## Validation
//!
//! Façades validate arguments against [`live`](VersionedContainer::live)
//! before calling `apply`; the closure passed to `apply` is infallible. An
//! operation that fails therefore changes nothing and records nothing.

use std::sync::Arc;
use tempora_core::SimTime;
use tempora_storage::{RetentionManager, TrackedLog};

/// Live representation usable inside a [`VersionedContainer`]
///
/// Any cloneable, defaultable, sendable type qualifies; `Default` is the
/// answer to a point-in-time query on a container that never recorded
/// anything.
pub trait Representation: Clone + Default + Send + 'static {}

impl<R: Clone + Default + Send + 'static> Representation for R {}

/// Live representation paired with a prunable, time-ordered change log
pub struct VersionedContainer<R: Representation> {
    live: R,
    history: Arc<TrackedLog<R>>,
    manager: Arc<RetentionManager>,
}

impl<R: Representation> VersionedContainer<R> {
    /// Create an empty container registered with `manager`
    ///
    /// Nothing is recorded until the first mutation.
    pub fn new(manager: &Arc<RetentionManager>) -> Self {
        VersionedContainer {
            live: R::default(),
            history: TrackedLog::register(manager),
            manager: Arc::clone(manager),
        }
    }

    /// Create a container whose first record is `initial`, at the current time
    pub fn with_initial(manager: &Arc<RetentionManager>, initial: R) -> Self {
        let mut container = Self::new(manager);
        container.apply(|live| *live = initial);
        container
    }

    /// Shared borrow of the live representation
    #[inline]
    pub fn live(&self) -> &R {
        &self.live
    }

    /// Mutate the live representation and record the result at `now()`
    pub fn apply<O>(&mut self, mutation: impl FnOnce(&mut R) -> O) -> O {
        let now = self.manager.now();
        let output = mutation(&mut self.live);
        self.history.record(now, self.live.clone());
        output
    }

    /// Independent copy of the live contents
    pub fn get(&self) -> R {
        self.live.clone()
    }

    /// Contents as of `time`
    ///
    /// Empty when nothing was ever recorded; times before the oldest retained
    /// record answer with that record.
    pub fn get_at(&self, time: SimTime) -> R {
        self.history
            .read_at(time, |state| state.cloned())
            .unwrap_or_default()
    }

    /// Run `f` on the contents as of `time` without copying them
    ///
    /// `f` sees `None` when nothing was ever recorded.
    pub fn read_at<O>(&self, time: SimTime, f: impl FnOnce(Option<&R>) -> O) -> O {
        self.history.read_at(time, f)
    }

    /// Whether nothing was ever recorded
    pub fn is_unrecorded(&self) -> bool {
        self.history.is_empty()
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

    /// Manager this container is registered with
    pub fn manager(&self) -> &Arc<RetentionManager> {
        &self.manager
    }
}

impl<R: Representation + std::fmt::Debug> std::fmt::Debug for VersionedContainer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionedContainer")
            .field("live", &self.live)
            .field("history_len", &self.history_len())
            .finish()
    }
}
