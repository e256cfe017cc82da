//! Scenario: order numbers restart at 1 when the month changes.
//!
//! # Invariants under test
//!
//! 1. Stored `{2412, 7}`, today in January 2025: the next number is `2501-1`
//!    and the store holds `{2501, 2}`.
//! 2. Within one period numbers are strictly increasing without gaps.
//! 3. Rollover is lazy: crossing the boundary writes nothing until the next
//!    reservation.
//! 4. The counter value before rollover does not matter.

use jj_numbering::{MemoryCounterStore, OrderNumberRegistry};
use jj_testkit::{coffee_desk, counter, ymd, FixedClock};

#[test]
fn december_counter_rolls_over_in_january() {
    let store = MemoryCounterStore::with_counter(counter("2412", 7));
    let mut registry = OrderNumberRegistry::open(store, FixedClock::ym(2025, 1)).unwrap();

    let n = registry.reserve_next().unwrap();
    assert_eq!(n.to_string(), "2501-1");
    assert_eq!(registry.store().record(), Some(&counter("2501", 2)));
}

#[test]
fn numbers_are_gapless_within_a_month_and_restart_after() {
    let clock = FixedClock::new(ymd(2025, 6, 29));
    let mut desk = coffee_desk(MemoryCounterStore::new(), clock.clone());

    let ids: Vec<String> = (0..3)
        .map(|_| desk.submit().unwrap().summary.order_id())
        .collect();
    assert_eq!(ids, vec!["2506-1", "2506-2", "2506-3"]);

    clock.set(ymd(2025, 7, 1));
    let saves_before = desk.session().registry().store().save_count();
    assert_eq!(desk.session().registry().current_period_key().as_str(), "2507");
    assert_eq!(
        desk.session().registry().store().save_count(),
        saves_before,
        "crossing the boundary alone must not write"
    );

    assert_eq!(desk.submit().unwrap().summary.order_id(), "2507-1");
    assert_eq!(desk.submit().unwrap().summary.order_id(), "2507-2");
    assert_eq!(
        desk.session().registry().store().record(),
        Some(&counter("2507", 3))
    );
}

#[test]
fn rollover_ignores_prior_counter_value() {
    for prior in [1_u32, 2, 99, 10_000] {
        let store = MemoryCounterStore::with_counter(counter("2505", prior));
        let mut registry = OrderNumberRegistry::open(store, FixedClock::ym(2025, 6)).unwrap();
        assert_eq!(registry.reserve_next().unwrap().number, 1, "prior={prior}");
    }
}

#[test]
fn year_boundary_with_same_month_number_still_rolls_over() {
    // June 2024 and June 2025 share a month but not a period.
    let store = MemoryCounterStore::with_counter(counter("2406", 42));
    let mut registry = OrderNumberRegistry::open(store, FixedClock::ym(2025, 6)).unwrap();
    assert_eq!(registry.reserve_next().unwrap().to_string(), "2506-1");
}
