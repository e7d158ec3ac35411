//! Time-ordered change log
//!
//! A `ChangeLog<S>` is the history of one versioned entity: a sequence of
//! `(time, state)` records, oldest first, each holding the full state that
//! resulted from every mutation at that time.
//!
//! # Invariants
//!
//! - Record times are non-decreasing; two mutations at the same time collapse
//!   into one record holding the net state.
//! - Pruning to cutoff `c` keeps the newest record with `time <= c` (the
//!   floor) plus every record after `c`. The newest record always survives.
//! - Queries never mutate the log.
//!
//! # Lookup
//!
//! `state_at(t)` binary-searches for the last record with `time <= t`. When
//! `t` falls before the oldest retained record the oldest record answers;
//! the truth at `t` may have been pruned, and this is the best remaining
//! guess.

use std::collections::VecDeque;
use tempora_core::SimTime;
use tracing::warn;

/// State of an entity as of one simulation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord<S> {
    /// Time of the mutations that produced `state`
    pub time: SimTime,
    /// Net state after all mutations at `time`
    pub state: S,
}

/// Prunable, time-ordered history of an entity's states
#[derive(Debug, Clone)]
pub struct ChangeLog<S> {
    /// Records stored oldest-first; pruning pops from the front
    records: VecDeque<ChangeRecord<S>>,
}

impl<S> Default for ChangeLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ChangeLog<S> {
    /// Create an empty log
    pub fn new() -> Self {
        ChangeLog {
            records: VecDeque::new(),
        }
    }

    /// Record `state` as the state at `time`
    ///
    /// A record at the same time as the newest one replaces its state. A time
    /// earlier than the newest record breaks the ordering contract; the state
    /// is merged into the newest record and a warning is logged.
    pub fn record(&mut self, time: SimTime, state: S) {
        match self.records.back_mut() {
            Some(last) if time <= last.time => {
                if time < last.time {
                    warn!(
                        target: "tempora::history",
                        newest = %last.time,
                        requested = %time,
                        "Out-of-order change merged into newest record"
                    );
                }
                last.state = state;
            }
            _ => self.records.push_back(ChangeRecord { time, state }),
        }
    }

    /// State of the newest record
    #[inline]
    pub fn latest(&self) -> Option<&S> {
        self.records.back().map(|r| &r.state)
    }

    /// Time of the newest record
    pub fn latest_time(&self) -> Option<SimTime> {
        self.records.back().map(|r| r.time)
    }

    /// Time of the oldest retained record
    pub fn oldest_time(&self) -> Option<SimTime> {
        self.records.front().map(|r| r.time)
    }

    /// State as of `time`
    ///
    /// `None` only when nothing was ever recorded. Times before the oldest
    /// retained record answer with that record.
    pub fn state_at(&self, time: SimTime) -> Option<&S> {
        let idx = self.records.partition_point(|r| r.time <= time);
        let record = match idx {
            0 => self.records.front(),
            n => self.records.get(n - 1),
        };
        record.map(|r| &r.state)
    }

    /// Drop records made obsolete by `cutoff`
    ///
    /// Keeps the floor record (newest with `time <= cutoff`) and everything
    /// newer. Returns the number of records removed.
    pub fn prune(&mut self, cutoff: SimTime) -> usize {
        let at_or_before = self.records.partition_point(|r| r.time <= cutoff);
        if at_or_before <= 1 {
            return 0;
        }
        let removed = at_or_before - 1;
        self.records.drain(..removed);
        removed
    }

    /// Number of retained records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was ever recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Retained records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &ChangeRecord<S>> + '_ {
        self.records.iter()
    }
}
