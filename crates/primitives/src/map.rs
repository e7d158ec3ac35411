//! VersionedMap: insertion-ordered map with history
//!
//! Backed by an [`IndexMap`]. Re-inserting an existing key keeps its position;
//! removing a key keeps the relative order of the others.
//!
//! [`VersionedMap::keys`] returns a [`KeysView`], which can be sized, searched
//! and iterated but offers no way to change the map:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tempora_core::ManualClock;
//! use tempora_primitives::VersionedMap;
//! use tempora_storage::RetentionManager;
//!
//! let clock = Arc::new(ManualClock::default());
//! let manager = RetentionManager::new(clock, Duration::from_secs(10), Duration::from_secs(1)).unwrap();
//! let mut map = VersionedMap::new(&manager);
//! map.put("a", 1);
//! map.keys().clear();
//! ```
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tempora_core::ManualClock;
//! use tempora_primitives::VersionedMap;
//! use tempora_storage::RetentionManager;
//!
//! let clock = Arc::new(ManualClock::default());
//! let manager = RetentionManager::new(clock, Duration::from_secs(10), Duration::from_secs(1))?;
//! let mut map = VersionedMap::new(&manager);
//! map.put("a", 1);
//! map.put("b", 2);
//! assert_eq!(map.keys().len(), map.len());
//! # Ok::<(), tempora_core::HistoryError>(())
//! ```

use indexmap::{Equivalent, IndexMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tempora_core::{HistoryError, HistoryResult, SimTime};
use tempora_storage::RetentionManager;

use crate::container::VersionedContainer;

/// Map whose past contents can be queried by simulation time
pub struct VersionedMap<K, V>
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    inner: VersionedContainer<IndexMap<K, V>>,
}

impl<K, V> VersionedMap<K, V>
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Create an empty map with no history
    pub fn new(manager: &Arc<RetentionManager>) -> Self {
        VersionedMap {
            inner: VersionedContainer::new(manager),
        }
    }

    /// Create a map whose first record holds `initial`
    pub fn with_initial(
        manager: &Arc<RetentionManager>,
        initial: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        VersionedMap {
            inner: VersionedContainer::with_initial(manager, initial.into_iter().collect()),
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Associate `value` with `key`, returning the previous value
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.inner.apply(|map| map.insert(key, value))
    }

    /// Remove `key`, returning its value if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner.apply(|map| map.shift_remove(key))
    }

    /// Remove `key` and return its value
    ///
    /// Fails with `KeyNotFound` (and records nothing) when the key is absent.
    pub fn take<Q>(&mut self, key: &Q) -> HistoryResult<V>
    where
        Q: ?Sized + Hash + Equivalent<K> + Debug,
    {
        if !self.contains_key(key) {
            return Err(HistoryError::key_not_found(key));
        }
        self.inner
            .apply(|map| map.shift_remove(key))
            .ok_or_else(|| HistoryError::key_not_found(key))
    }

    /// Insert every entry, later entries winning
    pub fn put_all(&mut self, entries: impl IntoIterator<Item = (K, V)>) {
        self.inner.apply(|map| map.extend(entries))
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.inner.apply(|map| map.clear())
    }

    // =========================================================================
    // Present-time reads
    // =========================================================================

    /// Read-only view of the live map
    pub fn view(&self) -> &IndexMap<K, V> {
        self.inner.live()
    }

    /// Read-only view of the live keys
    pub fn keys(&self) -> KeysView<'_, K, V> {
        KeysView {
            map: self.inner.live(),
        }
    }

    /// Live value for `key`
    pub fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner.live().get(key)
    }

    /// Whether the live map contains `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner.live().contains_key(key)
    }

    /// Iterate the live entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.inner.live().iter()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.inner.live().len()
    }

    /// Whether the live map is empty
    pub fn is_empty(&self) -> bool {
        self.inner.live().is_empty()
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Independent copy of the live map
    pub fn get(&self) -> IndexMap<K, V> {
        self.inner.get()
    }

    /// Contents as of `time`
    pub fn get_at(&self, time: SimTime) -> IndexMap<K, V> {
        self.inner.get_at(time)
    }

    /// Value for `key` as of `time`, without copying the whole map
    pub fn value_at<Q>(&self, key: &Q, time: SimTime) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner
            .read_at(time, |map| map.and_then(|map| map.get(key).cloned()))
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

impl<'a, K, V> IntoIterator for &'a VersionedMap<K, V>
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Debug for VersionedMap<K, V>
where
    K: Hash + Eq + Clone + Send + Debug + 'static,
    V: Clone + Send + Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionedMap").field("inner", &self.inner).finish()
    }
}

/// Read-only view of a map's live keys
pub struct KeysView<'a, K, V> {
    map: &'a IndexMap<K, V>,
}

impl<K, V> Clone for KeysView<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for KeysView<'_, K, V> {}

impl<'a, K: Hash + Eq, V> KeysView<'a, K, V> {
    /// Number of keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no keys
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `key` is present
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.contains_key(key)
    }

    /// Iterate keys in insertion order
    pub fn iter(&self) -> indexmap::map::Keys<'a, K, V> {
        self.map.keys()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for KeysView<'a, K, V> {
    type Item = &'a K;
    type IntoIter = indexmap::map::Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.keys()
    }
}

impl<K: Debug, V> Debug for KeysView<'_, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.map.keys()).finish()
    }
}
