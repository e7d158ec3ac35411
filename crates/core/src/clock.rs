//! Time sources
//!
//! The retention manager never advances time itself. It asks a [`TimeSource`]
//! what "now" is, hands it a recurring cleanup action, and listens for the end
//! of the replication. In a full simulator that role belongs to the
//! discrete-event scheduler; [`ManualClock`] is a small deterministic
//! implementation for tests and single-process drivers.

use parking_lot::Mutex;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::ControlFlow;
use std::time::Duration;
use tracing::{trace, warn};

use crate::time::SimTime;

/// Action fired at a fixed cadence. Returning `Break` cancels later firings.
pub type RecurringAction = Box<dyn FnMut() -> ControlFlow<()> + Send>;

/// Callback fired once when the replication ends.
pub type ReplicationEndCallback = Box<dyn FnOnce() + Send>;

/// Supplier of simulation time and scheduling services
pub trait TimeSource: Send + Sync {
    /// Current simulation time
    fn now(&self) -> SimTime;

    /// Fire `action` every `interval`, starting one interval from now
    fn schedule_recurring(&self, interval: Duration, action: RecurringAction);

    /// Run `callback` once when the replication ends
    fn on_replication_end(&self, callback: ReplicationEndCallback);
}

struct ScheduledAction {
    due: SimTime,
    sequence: u64,
    interval: Duration,
    action: RecurringAction,
}

impl Eq for ScheduledAction {}

impl PartialEq for ScheduledAction {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.sequence == other.sequence
    }
}

// BinaryHeap is a max-heap: earliest due first, then lowest sequence first
impl Ord for ScheduledAction {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then(other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for ScheduledAction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct ClockState {
    now: SimTime,
    queue: BinaryHeap<ScheduledAction>,
    sequence: u64,
    end_callbacks: Vec<ReplicationEndCallback>,
    ended: bool,
}

/// Deterministic, manually advanced time source
///
/// Recurring actions fire in (due time, scheduling order). While an action
/// runs the clock reads its due time, and the internal lock is released so
/// the action may call back into [`TimeSource::now`].
///
/// ```
/// use std::ops::ControlFlow;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use tempora_core::{ManualClock, SimTime, TimeSource};
///
/// let clock = ManualClock::new(SimTime::ZERO);
/// let fired = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&fired);
/// clock.schedule_recurring(
///     Duration::from_secs(1),
///     Box::new(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///         ControlFlow::Continue(())
///     }),
/// );
///
/// clock.advance_to(SimTime::from_secs_f64(3.5));
/// assert_eq!(fired.load(Ordering::SeqCst), 3);
/// assert_eq!(clock.now(), SimTime::from_secs_f64(3.5));
/// ```
pub struct ManualClock {
    state: Mutex<ClockState>,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: SimTime) -> Self {
        ManualClock {
            state: Mutex::new(ClockState {
                now: start,
                queue: BinaryHeap::new(),
                sequence: 0,
                end_callbacks: Vec::new(),
                ended: false,
            }),
        }
    }

    /// Move the clock forward to `target`, firing every action due on the way
    ///
    /// A target earlier than the current time is ignored.
    pub fn advance_to(&self, target: SimTime) {
        loop {
            let mut next = {
                let mut state = self.state.lock();
                if target < state.now {
                    warn!(target: "tempora::clock", now = %state.now, requested = %target, "Ignoring request to move clock backwards");
                    return;
                }
                match state.queue.peek() {
                    Some(head) if head.due <= target => {}
                    _ => {
                        state.now = target;
                        return;
                    }
                }
                let Some(next) = state.queue.pop() else {
                    return;
                };
                state.now = state.now.max(next.due);
                next
            };

            trace!(target: "tempora::clock", due = %next.due, sequence = next.sequence, "Firing recurring action");
            let flow = (next.action)();

            let mut state = self.state.lock();
            if flow.is_continue() && !state.ended {
                next.due = next.due.saturating_add(next.interval);
                state.queue.push(next);
            }
        }
    }

    /// Move the clock forward by `delta`
    pub fn advance_by(&self, delta: Duration) {
        let target = self.now().saturating_add(delta);
        self.advance_to(target);
    }

    /// End the replication: drop queued actions and fire end callbacks once
    pub fn end_replication(&self) {
        let callbacks = {
            let mut state = self.state.lock();
            if state.ended {
                return;
            }
            state.ended = true;
            state.queue.clear();
            std::mem::take(&mut state.end_callbacks)
        };
        for callback in callbacks {
            callback();
        }
    }

    /// Number of recurring actions still queued
    pub fn pending_actions(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Whether `end_replication` has run
    pub fn has_ended(&self) -> bool {
        self.state.lock().ended
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        ManualClock::new(SimTime::ZERO)
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> SimTime {
        self.state.lock().now
    }

    fn schedule_recurring(&self, interval: Duration, action: RecurringAction) {
        if interval.is_zero() {
            warn!(target: "tempora::clock", "Refusing to schedule a zero-interval recurring action");
            return;
        }
        let mut state = self.state.lock();
        if state.ended {
            return;
        }
        let due = state.now.saturating_add(interval);
        let sequence = state.sequence;
        state.sequence += 1;
        state.queue.push(ScheduledAction {
            due,
            sequence,
            interval,
            action,
        });
    }

    fn on_replication_end(&self, callback: ReplicationEndCallback) {
        let mut state = self.state.lock();
        if state.ended {
            drop(state);
            callback();
            return;
        }
        state.end_callbacks.push(callback);
    }
}
