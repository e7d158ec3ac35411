//! Reference scenarios for each container kind

use crate::common::*;

// ============================================================================
// Cell
// ============================================================================

#[test]
fn cell_answers_between_writes() {
    let h = TestHistory::new(10.0);
    let mut cell = VersionedCell::new(&h.manager);
    for secs in [0.0, 1.0, 2.0, 2.5, 3.0] {
        h.at(secs);
        cell.set(format!("{:.1}", secs));
    }

    assert_eq!(cell.get_at(t(2.6)).as_deref(), Some("2.5"));
    assert_eq!(cell.get_at(t(3.1)).as_deref(), Some("3.0"));
    assert_eq!(cell.get().as_deref(), Some("3.0"));
}

// ============================================================================
// Set
// ============================================================================

fn scenario_set(h: &TestHistory) -> VersionedSet<&'static str> {
    let mut set = VersionedSet::new(&h.manager);
    h.at(0.0);
    set.add("0.0");
    h.at(1.0);
    set.add("1.0");
    h.at(2.0);
    set.add("2.0");
    h.at(3.0);
    set.add("3.0");
    set.remove("2.0");
    h.at(4.0);
    set.remove("3.0");
    set.add("4.0");
    set
}

#[test]
fn set_state_after_interleaved_adds_and_removes() {
    let h = TestHistory::new(10.0);
    let set = scenario_set(&h);

    assert_eq!(sorted(set.get_at(t(4.0))), vec!["0.0", "1.0", "4.0"]);
    assert_eq!(sorted(set.get_at(t(3.5))), vec!["0.0", "1.0", "3.0"]);
    assert_eq!(sorted(set.get_at(t(0.95))), vec!["0.0"]);
}

#[test]
fn set_query_before_window_returns_floor_record() {
    let h = TestHistory::new(10.0);
    let set = scenario_set(&h);

    h.at(12.1);
    let stats = h.clean_up();
    assert_eq!(stats.cutoff, t(2.1));

    // Everything before 2.0 is gone; 0.95 answers with the state as of 2.0
    assert_eq!(sorted(set.get_at(t(0.95))), vec!["0.0", "1.0", "2.0"]);
    assert_eq!(sorted(set.get_at(t(4.0))), vec!["0.0", "1.0", "4.0"]);
    assert_eq!(set.oldest_time(), Some(t(2.0)));
}

// ============================================================================
// Map
// ============================================================================

#[test]
fn map_key_view_reports_live_size() {
    let h = TestHistory::new(10.0);
    let mut map = VersionedMap::new(&h.manager);
    map.put("a", 1);
    map.put("b", 2);
    h.at(1.0);
    map.remove("a");
    map.put("c", 3);

    let keys = map.keys();
    assert_eq!(keys.len(), map.len());
    assert_eq!(keys.len(), 2);
    assert!(keys.contains("c"));
    assert!(!keys.contains("a"));
}

// ============================================================================
// List
// ============================================================================

#[test]
fn list_push_goes_to_front_and_offer_to_back() {
    let h = TestHistory::new(10.0);
    let mut list = VersionedList::new(&h.manager);
    list.offer("0.0");
    list.push("1.0");

    assert_eq!(list.get().into_iter().collect::<Vec<_>>(), vec!["1.0", "0.0"]);
    assert_eq!(list.peek(), Some(&"1.0"));
    assert_eq!(list.poll(), Some("1.0"));
    assert_eq!(list.get().into_iter().collect::<Vec<_>>(), vec!["0.0"]);
}
