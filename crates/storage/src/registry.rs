//! Non-owning registry of prunable entities
//!
//! Every versioned container registers itself here when it is built. The
//! registry only keeps `Weak` references: a container lives exactly as long
//! as its owner keeps it, and a dropped container simply fails to upgrade on
//! the next pass and is forgotten.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = PruneRegistry::new();
//! registry.register(Arc::downgrade(&shared) as Weak<dyn Prunable>);
//!
//! let pass = registry.prune_all(cutoff);
//! debug!(live = pass.live, released = pass.released, "pruned");
//! ```

use std::sync::Weak;
use tempora_core::SimTime;

/// Something whose history can be cut back to a cutoff time
pub trait Prunable: Send + Sync {
    /// Discard history made obsolete by `cutoff`, returning the number of
    /// records removed
    fn prune(&self, cutoff: SimTime) -> usize;
}

/// Outcome of one pruning pass over a registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrunePass {
    /// Entities still alive and pruned
    pub live: usize,
    /// Entries dropped because their entity was gone
    pub released: usize,
    /// Records removed across all live entities
    pub records_removed: usize,
}

/// Registry of weakly referenced prunable entities
#[derive(Default)]
pub struct PruneRegistry {
    entries: Vec<Weak<dyn Prunable>>,
}

impl PruneRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        PruneRegistry {
            entries: Vec::new(),
        }
    }

    /// Register an entity without taking ownership of it
    pub fn register(&mut self, entity: Weak<dyn Prunable>) {
        self.entries.push(entity);
    }

    /// Prune every live entity and forget the dead ones
    pub fn prune_all(&mut self, cutoff: SimTime) -> PrunePass {
        let mut pass = PrunePass::default();
        self.entries.retain(|entry| match entry.upgrade() {
            Some(entity) => {
                pass.live += 1;
                pass.records_removed += entity.prune(cutoff);
                true
            }
            None => {
                pass.released += 1;
                false
            }
        });
        pass
    }

    /// Number of entries, including ones whose entity may already be gone
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries whose entity is still alive
    pub fn live(&self) -> usize {
        self.entries.iter().filter(|e| e.strong_count() > 0).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
