//! Retention manager
//!
//! One `RetentionManager` governs a whole replication: it knows how much
//! history to keep, tells every versioned container what time it is, and
//! periodically prunes all of them to `now - retention`.
//!
//! # Design
//!
//! - The registry holds `Weak` references only; containers are owned by
//!   whatever domain object created them
//! - Cleanup is scheduled on the [`TimeSource`] at a fixed cadence and can also
//!   be called directly for deterministic tests
//! - When the replication ends the recurring action stops and the registry is
//!   released
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tempora_core::{ManualClock, SimTime};
//! use tempora_storage::RetentionManager;
//!
//! let clock = Arc::new(ManualClock::default());
//! let manager = RetentionManager::new(
//!     clock.clone(),
//!     Duration::from_secs(10),
//!     Duration::from_secs(1),
//! )?;
//!
//! clock.advance_to(SimTime::from_secs(3));
//! assert_eq!(manager.now(), SimTime::from_secs(3));
//! # Ok::<(), tempora_core::HistoryError>(())
//! ```

use parking_lot::Mutex;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tempora_core::{HistoryConfig, HistoryError, HistoryResult, SimTime, TimeSource};
use tracing::{debug, info, trace};

use crate::registry::{Prunable, PruneRegistry};

/// Summary of one cleanup pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupStats {
    /// Cutoff the containers were pruned to
    pub cutoff: SimTime,
    /// Containers still alive and pruned
    pub live: usize,
    /// Registry entries dropped because their container was gone
    pub released: usize,
    /// Change records removed across all containers
    pub records_removed: usize,
}

/// Shared retention policy and registry for versioned containers
pub struct RetentionManager {
    clock: Arc<dyn TimeSource>,
    retention: Duration,
    cleanup_interval: Duration,
    registry: Mutex<PruneRegistry>,
    stopped: AtomicBool,
}

impl RetentionManager {
    /// Create a manager and schedule its recurring cleanup
    ///
    /// Fails with `InvalidConfig` when `cleanup_interval` is zero. Retention
    /// may be zero, in which case only the floor record of each container is
    /// kept behind "now".
    pub fn new(
        clock: Arc<dyn TimeSource>,
        retention: Duration,
        cleanup_interval: Duration,
    ) -> HistoryResult<Arc<Self>> {
        if cleanup_interval.is_zero() {
            return Err(HistoryError::InvalidConfig(
                "cleanup interval must be positive".to_string(),
            ));
        }

        let manager = Arc::new(RetentionManager {
            clock: Arc::clone(&clock),
            retention,
            cleanup_interval,
            registry: Mutex::new(PruneRegistry::new()),
            stopped: AtomicBool::new(false),
        });

        let weak = Arc::downgrade(&manager);
        clock.schedule_recurring(
            cleanup_interval,
            Box::new(move || match weak.upgrade() {
                Some(manager) if !manager.is_stopped() => {
                    manager.clean_up_history();
                    ControlFlow::Continue(())
                }
                _ => ControlFlow::Break(()),
            }),
        );

        let weak = Arc::downgrade(&manager);
        clock.on_replication_end(Box::new(move || {
            if let Some(manager) = weak.upgrade() {
                manager.stop();
            }
        }));

        debug!(
            target: "tempora::retention",
            retention = ?retention,
            cleanup_interval = ?cleanup_interval,
            "Retention manager started"
        );
        Ok(manager)
    }

    /// Create a manager from a validated [`HistoryConfig`]
    pub fn from_config(clock: Arc<dyn TimeSource>, config: &HistoryConfig) -> HistoryResult<Arc<Self>> {
        let (retention, cleanup_interval) = config.validate()?;
        Self::new(clock, retention, cleanup_interval)
    }

    /// Current simulation time
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Length of the exact-history window
    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Time between scheduled cleanup passes
    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval
    }

    /// Register a container without taking ownership of it
    ///
    /// Ignored once the replication has ended.
    pub fn register(&self, entity: Weak<dyn Prunable>) {
        if self.is_stopped() {
            trace!(target: "tempora::retention", "Registration after replication end ignored");
            return;
        }
        self.registry.lock().register(entity);
        trace!(target: "tempora::retention", "Change log registered");
    }

    /// Prune every registered container to `now - retention`
    ///
    /// Idempotent: a second call with no writes in between removes nothing
    /// and changes no answer.
    pub fn clean_up_history(&self) -> CleanupStats {
        let cutoff = self.now().saturating_sub(self.retention);
        let pass = self.registry.lock().prune_all(cutoff);
        debug!(
            target: "tempora::retention",
            cutoff = %cutoff,
            live = pass.live,
            released = pass.released,
            records_removed = pass.records_removed,
            "History cleaned up"
        );
        CleanupStats {
            cutoff,
            live: pass.live,
            released: pass.released,
            records_removed: pass.records_removed,
        }
    }

    /// Number of registered containers that are still alive
    pub fn registered(&self) -> usize {
        self.registry.lock().live()
    }

    /// Whether the replication has ended
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    fn stop(&self) {
        if self.stopped.swap(true, Ordering::AcqRel) {
            return;
        }
        let mut registry = self.registry.lock();
        let released = registry.len();
        registry.clear();
        info!(target: "tempora::retention", released, "Replication ended, history registry released");
    }
}

impl std::fmt::Debug for RetentionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetentionManager")
            .field("retention", &self.retention)
            .field("cleanup_interval", &self.cleanup_interval)
            .field("stopped", &self.is_stopped())
            .finish()
    }
}
