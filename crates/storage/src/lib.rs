//! History storage layer for Tempora
//!
//! This crate implements the versioning machinery shared by every container:
//! - ChangeLog: time-ordered, prunable record of an entity's states
//! - Prunable / PruneRegistry: weak, non-owning registry of entities
//! - TrackedLog: change log shared between a container and its manager
//! - RetentionManager: retention window, clock access and periodic cleanup

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod manager;
pub mod registry;
pub mod tracked;

pub use chain::{ChangeLog, ChangeRecord};
pub use manager::{CleanupStats, RetentionManager};
pub use registry::{Prunable, PrunePass, PruneRegistry};
pub use tracked::TrackedLog;
