//! VersionedList: ordered sequence with deque operations and history
//!
//! The live representation is a [`VecDeque`], so both ends are cheap:
//!
//! | Operation | End | Empty list |
//! |-----------|-----|------------|
//! | `push` | front | - |
//! | `offer`, `add`, `add_last` | back | - |
//! | `peek` / `peek_last` | front / back | `None` |
//! | `poll` | front | `None` |
//! | `pop` | front | `IndexOutOfBounds` |
//!
//! Positional operations check the index against the live list first and
//! return [`HistoryError::IndexOutOfBounds`] without touching state or history
//! when it is out of range.
//!
//! [`VersionedList::view`] is a shared borrow of the live deque, so it cannot
//! be cleared or otherwise changed:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tempora_core::ManualClock;
//! use tempora_primitives::VersionedList;
//! use tempora_storage::RetentionManager;
//!
//! let clock = Arc::new(ManualClock::default());
//! let manager = RetentionManager::new(clock, Duration::from_secs(10), Duration::from_secs(1)).unwrap();
//! let mut list = VersionedList::with_initial(&manager, [1, 2]);
//! list.view().clear();
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use tempora_core::{HistoryError, HistoryResult, SimTime};
use tempora_storage::RetentionManager;

use crate::container::VersionedContainer;

/// List whose past contents can be queried by simulation time
pub struct VersionedList<T: Clone + Send + 'static> {
    inner: VersionedContainer<VecDeque<T>>,
}

impl<T: Clone + Send + 'static> VersionedList<T> {
    /// Create an empty list with no history
    pub fn new(manager: &Arc<RetentionManager>) -> Self {
        VersionedList {
            inner: VersionedContainer::new(manager),
        }
    }

    /// Create a list whose first record holds `initial`, front to back
    pub fn with_initial(manager: &Arc<RetentionManager>, initial: impl IntoIterator<Item = T>) -> Self {
        VersionedList {
            inner: VersionedContainer::with_initial(manager, initial.into_iter().collect()),
        }
    }

    fn check_index(&self, index: usize, len: usize) -> HistoryResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(HistoryError::IndexOutOfBounds { index, len })
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Insert `value` at the front
    pub fn push(&mut self, value: T) {
        self.inner.apply(|list| list.push_front(value))
    }

    /// Append `value` at the back
    pub fn offer(&mut self, value: T) {
        self.inner.apply(|list| list.push_back(value))
    }

    /// Append `value` at the back
    pub fn add(&mut self, value: T) {
        self.offer(value)
    }

    /// Append `value` at the back
    pub fn add_last(&mut self, value: T) {
        self.offer(value)
    }

    /// Append every value at the back, in order
    pub fn add_all(&mut self, values: impl IntoIterator<Item = T>) {
        self.inner.apply(|list| list.extend(values))
    }

    /// Insert `value` so that it ends up at `index`
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> HistoryResult<()> {
        let len = self.len();
        if index > len {
            return Err(HistoryError::IndexOutOfBounds { index, len });
        }
        self.inner.apply(|list| list.insert(index, value));
        Ok(())
    }

    /// Remove and return the front element, `None` when empty
    pub fn poll(&mut self) -> Option<T> {
        self.inner.apply(|list| list.pop_front())
    }

    /// Remove and return the front element
    pub fn pop(&mut self) -> HistoryResult<T> {
        self.remove_at(0)
    }

    /// Remove the first element equal to `value`; returns `true` if found
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.apply(|list| match list.iter().position(|v| v == value) {
            Some(index) => list.remove(index).is_some(),
            None => false,
        })
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> HistoryResult<T> {
        let len = self.len();
        self.check_index(index, len)?;
        // Validated above, so `remove` finds the element
        self.inner
            .apply(|list| list.remove(index))
            .ok_or(HistoryError::IndexOutOfBounds { index, len })
    }

    /// Replace the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, value: T) -> HistoryResult<T> {
        let len = self.len();
        self.check_index(index, len)?;
        Ok(self.inner.apply(|list| std::mem::replace(&mut list[index], value)))
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.inner.apply(|list| list.clear())
    }

    // =========================================================================
    // Present-time reads
    // =========================================================================

    /// Front element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.inner.live().front()
    }

    /// Back element without removing it
    pub fn peek_last(&self) -> Option<&T> {
        self.inner.live().back()
    }

    /// Element at `index`
    pub fn get_index(&self, index: usize) -> HistoryResult<&T> {
        let live = self.inner.live();
        live.get(index).ok_or(HistoryError::IndexOutOfBounds {
            index,
            len: live.len(),
        })
    }

    /// Read-only view of the live list
    pub fn view(&self) -> &VecDeque<T> {
        self.inner.live()
    }

    /// Iterate the live list front to back
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.inner.live().iter()
    }

    /// Whether the live list contains `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.live().contains(value)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.inner.live().len()
    }

    /// Whether the live list is empty
    pub fn is_empty(&self) -> bool {
        self.inner.live().is_empty()
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Independent copy of the live list
    pub fn get(&self) -> VecDeque<T> {
        self.inner.get()
    }

    /// Contents as of `time`
    pub fn get_at(&self, time: SimTime) -> VecDeque<T> {
        self.inner.get_at(time)
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

impl<'a, T: Clone + Send + 'static> IntoIterator for &'a VersionedList<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Send + std::fmt::Debug + 'static> std::fmt::Debug for VersionedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionedList").field("inner", &self.inner).finish()
    }
}
