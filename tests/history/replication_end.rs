//! Behavior once the replication has ended

use crate::common::*;

#[test]
fn replication_end_releases_registry_and_cancels_cleanup() {
    let h = TestHistory::with_interval(10.0, 1.0);
    let _cell = VersionedCell::with_initial(&h.manager, "x");
    assert_eq!(h.clock.pending_actions(), 1);

    h.clock.end_replication();

    assert!(h.manager.is_stopped());
    assert_eq!(h.manager.registered(), 0);
    assert_eq!(h.clock.pending_actions(), 0);
}

#[test]
fn containers_keep_working_after_replication_end() {
    let h = TestHistory::new(10.0);
    let mut list = VersionedList::with_initial(&h.manager, [1]);
    h.clock.end_replication();

    h.at(1.0);
    list.offer(2);
    assert_eq!(list.get_at(t(0.5)).into_iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(list.get_at(t(1.0)).into_iter().collect::<Vec<_>>(), vec![1, 2]);

    // Created after the end: usable, but never registered
    let late = VersionedCell::with_initial(&h.manager, 3);
    assert_eq!(late.get(), Some(3));
    assert_eq!(h.manager.registered(), 0);
}

#[test]
fn ending_twice_is_harmless() {
    let h = TestHistory::with_interval(10.0, 1.0);
    h.clock.end_replication();
    h.clock.end_replication();
    assert!(h.clock.has_ended());
    assert!(h.manager.is_stopped());
}
