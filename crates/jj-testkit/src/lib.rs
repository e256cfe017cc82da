//! Deterministic fixtures for scenario tests.
//!
//! Nothing here is used by production wiring.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use jj_config::{ShopConfig, UnusedKeyPolicy};
use jj_numbering::{Clock, CounterStore, MemoryCounterStore, OrderCounter, PeriodKey};
use jj_pricing::{Micros, OptionDef, PriceTable};
use jj_session::OrderDesk;

/// 1 unit in micros.
pub const M: i64 = 1_000_000;

/// The four add-ons of the shop, in form order.
pub fn coffee_price_table() -> PriceTable {
    // Literal table; a failure here is a fixture bug.
    PriceTable::new(vec![
        OptionDef::new("whipped_cream", "Whipped Cream", Micros::new(M / 2)),
        OptionDef::new("milk", "Milk", Micros::new(M / 2)),
        OptionDef::new("sugar", "Sugar", Micros::ZERO),
        OptionDef::new("chocolate", "Chocolate", Micros::new(M / 2)),
    ])
    .expect("static fixture table is valid")
}

pub fn counter(period_key: &str, next_number: u32) -> OrderCounter {
    OrderCounter::new(PeriodKey::new(period_key), next_number)
}

/// A clock pinned to a date that the test moves by hand.
///
/// Clones share the date, so a test can keep one handle while the registry
/// owns another.
#[derive(Clone, Debug)]
pub struct FixedClock {
    today: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            today: Rc::new(Cell::new(date)),
        }
    }

    /// Mid-month of `year`/`month`.
    pub fn ym(year: i32, month: u32) -> Self {
        Self::new(ymd(year, month, 15))
    }

    pub fn set(&self, date: NaiveDate) {
        self.today.set(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

/// Memory store whose reads and writes can be made to fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemoryCounterStore,
    pub fail_loads: bool,
    pub fail_saves: bool,
}

impl FailingStore {
    pub fn new(inner: MemoryCounterStore) -> Self {
        Self {
            inner,
            fail_loads: false,
            fail_saves: false,
        }
    }
}

impl CounterStore for FailingStore {
    fn load(&self) -> Result<Option<OrderCounter>> {
        if self.fail_loads {
            return Err(anyhow!("counter store offline (read)"));
        }
        self.inner.load()
    }

    fn save(&mut self, counter: &OrderCounter) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("counter store offline (write)"));
        }
        self.inner.save(counter)
    }
}

/// Default shop config (the built-in coffee menu).
pub fn default_shop_config() -> ShopConfig {
    ShopConfig::from_layers(&[], UnusedKeyPolicy::Fail)
        .expect("built-in config is valid")
        .0
}

/// Desk over the default menu with an in-memory counter.
pub fn coffee_desk<S: CounterStore>(store: S, clock: FixedClock) -> OrderDesk<S, FixedClock> {
    OrderDesk::with_parts(&default_shop_config(), store, clock).expect("fixture desk opens")
}
