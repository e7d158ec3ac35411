//! Versioned containers for simulation state
//!
//! Provides value holders whose past contents can be read back by simulation
//! time, pruned by a shared [`RetentionManager`](tempora_storage::RetentionManager):
//! - **VersionedCell**: a single value
//! - **VersionedSet**: insertion-ordered set
//! - **VersionedList**: ordered sequence with deque operations
//! - **VersionedMap**: insertion-ordered map with a read-only key view
//!
//! ## Design Principle: One Engine, Thin Façades
//!
//! Every collection is a façade over [`VersionedContainer`], which pairs a live
//! representation with a change log. The façades only decide *what* a
//! mutation does to the representation; recording, point-in-time lookup and
//! pruning are shared.
//!
//! ## Reading the Past
//!
//! `get_at(t)` answers exactly for any `t` inside the retention window. Older
//! times answer with the oldest retained record, which may be newer than `t`.
//! A container that never recorded anything answers empty.
//!
//! ## Views
//!
//! Views and iterators are shared borrows of the live representation. They
//! cannot mutate it, and no mutation can happen while one is alive.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod container;
pub mod list;
pub mod map;
pub mod set;

pub use cell::VersionedCell;
pub use container::{Representation, VersionedContainer};
pub use list::VersionedList;
pub use map::{KeysView, VersionedMap};
pub use set::VersionedSet;
