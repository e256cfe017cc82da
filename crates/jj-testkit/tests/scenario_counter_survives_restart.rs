//! Scenario: the order counter survives a process restart.
//!
//! # Invariants under test
//!
//! 1. A desk opened from config with a fresh store path starts at `-1`.
//! 2. After dropping the desk (simulated crash) and reopening from the same
//!    config, numbering continues where it stopped.
//! 3. `load()` returns exactly the record the last reservation persisted.
//! 4. The on-disk record uses the `orderNum_prefix` / `orderNum` layout.

use jj_config::{ShopConfig, UnusedKeyPolicy};
use jj_numbering::{JsonFileCounterStore, OrderNumberRegistry};
use jj_session::OrderDesk;
use jj_testkit::{counter, FixedClock};

fn config_with_store(path: &std::path::Path) -> anyhow::Result<ShopConfig> {
    let layer = format!("numbering:\n  store_path: {}\n", serde_json::to_string(path)?);
    Ok(ShopConfig::from_layers(&[layer.as_str()], UnusedKeyPolicy::Fail)?.0)
}

#[test]
fn numbering_continues_after_restart() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state").join("order_counter.json");
    let cfg = config_with_store(&path)?;

    // --- First process ------------------------------------------------------
    let clock = FixedClock::ym(2025, 6);
    let store = JsonFileCounterStore::new(&cfg.numbering.store_path);
    let mut desk = OrderDesk::with_parts(&cfg, store, clock.clone())?;
    assert_eq!(desk.submit()?.summary.order_id(), "2506-1");
    assert_eq!(desk.submit()?.summary.order_id(), "2506-2");
    drop(desk);

    // --- Second process -----------------------------------------------------
    let store = JsonFileCounterStore::new(&cfg.numbering.store_path);
    let mut desk = OrderDesk::with_parts(&cfg, store, clock)?;
    assert_eq!(desk.session().registry().peek(), &counter("2506", 3));
    assert_eq!(desk.submit()?.summary.order_id(), "2506-3");

    let raw = std::fs::read_to_string(&path)?;
    let v: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(v["orderNum_prefix"], "2506");
    assert_eq!(v["orderNum"], 4);
    Ok(())
}

#[test]
fn load_after_reserve_roundtrips_exactly() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("order_counter.json");

    let mut registry =
        OrderNumberRegistry::open(JsonFileCounterStore::new(&path), FixedClock::ym(2024, 12))?;
    registry.reserve_next()?;
    registry.reserve_next()?;
    let persisted = registry.peek().clone();

    let mut reopened =
        OrderNumberRegistry::open(JsonFileCounterStore::new(&path), FixedClock::ym(2024, 12))?;
    assert_eq!(reopened.load()?, persisted);
    assert_eq!(persisted, counter("2412", 3));
    Ok(())
}

#[test]
fn production_wiring_opens_from_config() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = config_with_store(&dir.path().join("order_counter.json"))?;

    let desk = OrderDesk::open(&cfg)?;
    assert_eq!(desk.app_name(), "Just Java");
    assert_eq!(desk.price_text(), "$5.00");
    // Nothing is written until the first order is numbered.
    assert!(!dir.path().join("order_counter.json").exists());
    Ok(())
}
