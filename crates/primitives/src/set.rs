//! VersionedSet: insertion-ordered set with history
//!
//! Backed by an [`IndexSet`], so iteration follows the order in which the
//! still-present elements were added. Removal keeps the relative order of the
//! remaining elements.
//!
//! The view handed out by [`VersionedSet::view`] is a shared borrow, so it
//! cannot be cleared or otherwise changed:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tempora_core::ManualClock;
//! use tempora_primitives::VersionedSet;
//! use tempora_storage::RetentionManager;
//!
//! let clock = Arc::new(ManualClock::default());
//! let manager = RetentionManager::new(clock, Duration::from_secs(10), Duration::from_secs(1)).unwrap();
//! let mut set = VersionedSet::with_initial(&manager, [1, 2]);
//! set.view().clear();
//! ```

use indexmap::{Equivalent, IndexSet};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;
use tempora_core::SimTime;
use tempora_storage::RetentionManager;

use crate::container::VersionedContainer;

/// Set whose past contents can be queried by simulation time
pub struct VersionedSet<T>
where
    T: Hash + Eq + Clone + Send + 'static,
{
    inner: VersionedContainer<IndexSet<T>>,
}

impl<T> VersionedSet<T>
where
    T: Hash + Eq + Clone + Send + 'static,
{
    /// Create an empty set with no history
    pub fn new(manager: &Arc<RetentionManager>) -> Self {
        VersionedSet {
            inner: VersionedContainer::new(manager),
        }
    }

    /// Create a set whose first record holds `initial`
    pub fn with_initial(manager: &Arc<RetentionManager>, initial: impl IntoIterator<Item = T>) -> Self {
        VersionedSet {
            inner: VersionedContainer::with_initial(manager, initial.into_iter().collect()),
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add `value`; returns `true` if it was not present
    pub fn add(&mut self, value: T) -> bool {
        self.inner.apply(|set| set.insert(value))
    }

    /// Remove `value`; returns `true` if it was present
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.inner.apply(|set| set.shift_remove(value))
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.inner.apply(|set| set.clear())
    }

    /// Add every value; returns `true` if any was new
    pub fn add_all(&mut self, values: impl IntoIterator<Item = T>) -> bool {
        self.inner.apply(|set| {
            let before = set.len();
            set.extend(values);
            set.len() != before
        })
    }

    /// Remove every listed value; returns `true` if any was present
    pub fn remove_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.inner.apply(|set| {
            let mut changed = false;
            for value in values {
                changed |= set.shift_remove(value.borrow());
            }
            changed
        })
    }

    /// Keep only the listed values; returns `true` if anything was removed
    pub fn retain_all<I>(&mut self, keep: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let keep: HashSet<T> = keep.into_iter().map(|v| v.borrow().clone()).collect();
        self.retain(|value| keep.contains(value))
    }

    /// Keep only elements matching `predicate`; returns `true` if anything
    /// was removed
    pub fn retain(&mut self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.inner.apply(|set| {
            let before = set.len();
            set.retain(|value| predicate(value));
            set.len() != before
        })
    }

    // =========================================================================
    // Present-time reads
    // =========================================================================

    /// Read-only view of the live set
    pub fn view(&self) -> &IndexSet<T> {
        self.inner.live()
    }

    /// Iterate the live set in insertion order
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.inner.live().iter()
    }

    /// Whether the live set contains `value`
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.inner.live().contains(value)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.inner.live().len()
    }

    /// Whether the live set is empty
    pub fn is_empty(&self) -> bool {
        self.inner.live().is_empty()
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Independent copy of the live set
    pub fn get(&self) -> IndexSet<T> {
        self.inner.get()
    }

    /// Contents as of `time`
    pub fn get_at(&self, time: SimTime) -> IndexSet<T> {
        self.inner.get_at(time)
    }

    /// Whether `value` was present at `time`
    pub fn contained_at<Q>(&self, value: &Q, time: SimTime) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.inner
            .read_at(time, |set| set.is_some_and(|set| set.contains(value)))
    }

    /// Number of retained change records
    pub fn history_len(&self) -> usize {
        self.inner.history_len()
    }

    /// Time of the oldest retained change record
    pub fn oldest_time(&self) -> Option<SimTime> {
        self.inner.oldest_time()
    }

    /// Time of the newest change record
    pub fn latest_time(&self) -> Option<SimTime> {
        self.inner.latest_time()
    }
}

impl<'a, T> IntoIterator for &'a VersionedSet<T>
where
    T: Hash + Eq + Clone + Send + 'static,
{
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Debug for VersionedSet<T>
where
    T: Hash + Eq + Clone + Send + std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionedSet").field("inner", &self.inner).finish()
    }
}
