//! Change log shared with a retention manager
//!
//! A versioned container owns its live value outright but shares its
//! [`ChangeLog`] with the manager, which needs to prune it from cleanup passes.
//! `TrackedLog` is that shared half: it lives in an `Arc`, registers a `Weak`
//! to itself with the manager on creation, and guards the log with a mutex so
//! pruning can reach it through a shared reference.
//!
//! The lock is only held for the duration of a single record, query or prune
//! call and never while calling out to user code or the clock.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tempora_core::SimTime;

use crate::chain::ChangeLog;
use crate::manager::RetentionManager;
use crate::registry::Prunable;

/// Change log registered with a [`RetentionManager`]
#[derive(Debug)]
pub struct TrackedLog<S> {
    log: Mutex<ChangeLog<S>>,
}

impl<S: Send + 'static> TrackedLog<S> {
    /// Create an empty log and register it (weakly) with `manager`
    pub fn register(manager: &RetentionManager) -> Arc<Self> {
        let tracked = Arc::new(TrackedLog {
            log: Mutex::new(ChangeLog::new()),
        });
        let weak: Weak<TrackedLog<S>> = Arc::downgrade(&tracked);
        manager.register(weak);
        tracked
    }
}

impl<S> TrackedLog<S> {
    /// Record `state` at `time`, merging with a record at the same time
    pub fn record(&self, time: SimTime, state: S) {
        self.log.lock().record(time, state);
    }

    /// Run `f` on the state as of `time` (`None` if nothing was recorded)
    pub fn read_at<O>(&self, time: SimTime, f: impl FnOnce(Option<&S>) -> O) -> O {
        let log = self.log.lock();
        f(log.state_at(time))
    }

    /// Copy of the state as of `time`
    pub fn state_at(&self, time: SimTime) -> Option<S>
    where
        S: Clone,
    {
        self.read_at(time, |state| state.cloned())
    }

    /// Number of retained records
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    /// Whether nothing was ever recorded
    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }

    /// Time of the oldest retained record
    pub fn oldest_time(&self) -> Option<SimTime> {
        self.log.lock().oldest_time()
    }

    /// Time of the newest record
    pub fn latest_time(&self) -> Option<SimTime> {
        self.log.lock().latest_time()
    }
}

impl<S: Send> Prunable for TrackedLog<S> {
    fn prune(&self, cutoff: SimTime) -> usize {
        self.log.lock().prune(cutoff)
    }
}
