//! Point-in-time query semantics shared by every container

use crate::common::*;

#[test]
fn unrecorded_containers_answer_empty() {
    let h = TestHistory::new(10.0);
    let cell: VersionedCell<u32> = VersionedCell::new(&h.manager);
    let set: VersionedSet<u32> = VersionedSet::new(&h.manager);
    let list: VersionedList<u32> = VersionedList::new(&h.manager);
    let map: VersionedMap<u32, u32> = VersionedMap::new(&h.manager);

    h.at(5.0);
    assert_eq!(cell.get_at(t(1.0)), None);
    assert!(set.get_at(t(1.0)).is_empty());
    assert!(list.get_at(t(1.0)).is_empty());
    assert!(map.get_at(t(1.0)).is_empty());
}

#[test]
fn query_before_first_record_answers_first_record() {
    let h = TestHistory::new(10.0);
    h.at(3.0);
    let list = VersionedList::with_initial(&h.manager, [1, 2]);
    assert_eq!(list.get_at(t(0.0)).into_iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn query_after_latest_record_answers_latest() {
    let h = TestHistory::new(10.0);
    let mut map = VersionedMap::new(&h.manager);
    map.put("k", 1);
    h.at(2.0);
    map.put("k", 2);
    h.at(100.0);
    assert_eq!(map.value_at("k", t(50.0)), Some(2));
    assert_eq!(map.value_at("k", t(1.99)), Some(1));
}

#[test]
fn same_time_writes_collapse_to_final_state() {
    let h = TestHistory::new(10.0);
    let mut set = VersionedSet::new(&h.manager);
    h.at(1.0);
    set.add(1);
    set.add(2);
    set.remove(&1);

    assert_eq!(set.history_len(), 1);
    assert_eq!(sorted(set.get_at(t(1.0))), vec![2]);
}

#[test]
fn returned_copies_are_independent_of_live_state() {
    let h = TestHistory::new(10.0);
    let mut set = VersionedSet::with_initial(&h.manager, [1]);
    let snapshot = set.get();
    let past = set.get_at(t(0.0));
    set.add(2);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(past.len(), 1);
    assert_eq!(set.len(), 2);
}

#[test]
fn failed_operations_leave_no_record() {
    let h = TestHistory::new(10.0);
    let mut list = VersionedList::with_initial(&h.manager, ["a"]);
    let mut map = VersionedMap::with_initial(&h.manager, [("a", 1)]);
    h.at(1.0);

    assert!(matches!(
        list.remove_at(4),
        Err(HistoryError::IndexOutOfBounds { index: 4, len: 1 })
    ));
    assert!(matches!(map.take("b"), Err(HistoryError::KeyNotFound(_))));

    assert_eq!(list.history_len(), 1);
    assert_eq!(map.history_len(), 1);
    assert_eq!(list.oldest_time(), Some(t(0.0)));
}
