//! Scenario: one complete order from empty form to rendered summary.
//!
//! # Invariants under test
//!
//! 1. Base 5.00, quantity 2, Whipped Cream (0.50) + Sugar (0.00) prices at
//!    11.00 before submit.
//! 2. Submitting in period 2506 with a stored counter `{2506, 3}` yields order
//!    `2506-3` with labels in selection order.
//! 3. The store holds `{2506, 4}` afterwards.
//! 4. The session is back to `{name: "", quantity: 1, options: {}}`.
//! 5. Display and share collaborators receive the documented text.

use jj_numbering::MemoryCounterStore;
use jj_pricing::Micros;
use jj_testkit::{coffee_desk, counter, FixedClock, M};

#[test]
fn ana_orders_two_coffees_with_cream_and_sugar() {
    let store = MemoryCounterStore::with_counter(counter("2506", 3));
    let mut desk = coffee_desk(store, FixedClock::ym(2025, 6));

    let s = desk.session_mut();
    s.set_customer_name("Ana");
    assert_eq!(s.increment_quantity(), Ok(2));
    assert_eq!(s.toggle_option("whipped_cream", true), Ok(true));
    assert_eq!(s.toggle_option("sugar", true), Ok(true));

    assert_eq!(desk.session().current_price(), Micros::new(11 * M));
    assert_eq!(desk.price_text(), "$11.00");

    let submitted = desk.submit().expect("submit succeeds");
    let summary = &submitted.summary;
    assert_eq!(summary.customer_name, "Ana");
    assert_eq!(summary.order_id(), "2506-3");
    assert_eq!(summary.quantity, 2);
    assert_eq!(summary.selected_labels, vec!["Whipped Cream", "Sugar"]);
    assert_eq!(summary.total_price, Micros::new(11 * M));

    assert_eq!(
        desk.session().registry().store().record(),
        Some(&counter("2506", 4)),
        "write-before-acknowledge: next number persisted"
    );

    let s = desk.session();
    assert_eq!(s.customer_name(), "");
    assert_eq!(s.quantity(), 1);
    assert!(s.selected_labels().is_empty());
    assert_eq!(desk.price_text(), "$5.00");

    assert_eq!(
        submitted.summary_text,
        "Name: Ana\n#2506-3\nQuantity: 2\nOptions: Whipped Cream, Sugar\nTotal: $11.00"
    );
    assert_eq!(submitted.share.subject, "Just Java | Order #2506-3");
    assert_eq!(
        submitted.share.body,
        "Name: Ana\n#2506-3\nQuantity: 2\nOptions: Whipped Cream, Sugar\nTotal: $11.00\n\nThank you Ana!"
    );
}

#[test]
fn order_without_options_prints_na() {
    let mut desk = coffee_desk(MemoryCounterStore::new(), FixedClock::ym(2025, 6));
    desk.session_mut().set_customer_name("Bo");

    let submitted = desk.submit().unwrap();
    assert_eq!(
        submitted.summary_text,
        "Name: Bo\n#2506-1\nQuantity: 1\nOptions: N/A\nTotal: $5.00"
    );
}

#[test]
fn labels_follow_click_order_not_menu_order() {
    let mut desk = coffee_desk(MemoryCounterStore::new(), FixedClock::ym(2025, 6));
    let s = desk.session_mut();
    s.toggle_option("chocolate", true).unwrap();
    s.toggle_option("milk", true).unwrap();
    s.toggle_option("whipped_cream", true).unwrap();

    let summary = desk.submit().unwrap().summary;
    assert_eq!(summary.selected_labels, vec!["Chocolate", "Milk", "Whipped Cream"]);
    assert_eq!(summary.total_price, Micros::new(13 * M / 2));
}
