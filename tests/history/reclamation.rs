//! The manager never keeps a container alive

use crate::common::*;
use std::sync::Arc;

#[test]
fn dropped_containers_leave_the_registry() {
    let h = TestHistory::new(10.0);
    let cell = VersionedCell::with_initial(&h.manager, 1);
    let set = VersionedSet::with_initial(&h.manager, [1]);
    let list: VersionedList<u8> = VersionedList::new(&h.manager);
    assert_eq!(h.manager.registered(), 3);

    drop(set);
    drop(list);
    assert_eq!(h.manager.registered(), 1);

    let stats = h.clean_up();
    assert_eq!(stats.live, 1);
    assert_eq!(stats.released, 2);
    assert_eq!(cell.get(), Some(1));

    // Released entries are gone for good
    assert_eq!(h.clean_up().released, 0);
}

#[test]
fn many_short_lived_containers_do_not_accumulate() {
    let h = TestHistory::new(1.0);
    for round in 0..50u32 {
        let mut map = VersionedMap::new(&h.manager);
        map.put(round, round);
    }
    assert_eq!(h.manager.registered(), 0);
    assert_eq!(h.clean_up().released, 50);
}

#[test]
fn containers_outlive_a_dropped_manager_handle() {
    let clock = Arc::new(ManualClock::default());
    let manager = RetentionManager::new(
        clock.clone(),
        std::time::Duration::from_secs(10),
        std::time::Duration::from_secs(1),
    )
    .unwrap();
    let mut set = VersionedSet::new(&manager);
    drop(manager);

    // The container holds its own handle, so it keeps working
    clock.advance_to(t(2.0));
    set.add("x");
    assert_eq!(sorted(set.get_at(t(2.0))), vec!["x"]);
}
