//! Cleanup driven by the clock's recurring schedule

use crate::common::*;

#[test]
fn recurring_cleanup_prunes_as_time_advances() {
    let h = TestHistory::with_interval(2.0, 1.0);
    let mut cell = VersionedCell::new(&h.manager);
    for secs in 0..=5u32 {
        h.at(f64::from(secs));
        cell.set(secs);
    }

    // Cleanup at 5.0 ran before the write at 5.0: cutoff 3.0
    assert_eq!(cell.oldest_time(), Some(t(3.0)));
    assert_eq!(cell.history_len(), 3);

    h.at(10.0);
    assert_eq!(cell.oldest_time(), Some(t(5.0)));
    assert_eq!(cell.history_len(), 1);
    assert_eq!(cell.get_at(t(0.0)), Some(5));
}

#[test]
fn window_answers_stay_exact_under_scheduled_cleanup() {
    let h = TestHistory::with_interval(3.0, 0.5);
    let mut map = VersionedMap::new(&h.manager);
    for step in 0..40u32 {
        h.at(f64::from(step) * 0.25);
        map.put("step", step);
    }

    // Now is 9.75; exact history is guaranteed back to 6.75
    for step in 27..40u32 {
        assert_eq!(map.value_at("step", t(f64::from(step) * 0.25)), Some(step));
    }
}

#[test]
fn zero_retention_keeps_only_the_floor() {
    let h = TestHistory::with_interval(0.0, 1.0);
    let mut set = VersionedSet::new(&h.manager);
    h.at(0.5);
    set.add(1);
    h.at(0.75);
    set.add(2);
    h.at(1.0);

    assert_eq!(set.history_len(), 1);
    assert_eq!(sorted(set.get_at(t(0.0))), vec![1, 2]);
}
