//! jj-pricing
//!
//! Price model for a single item sold with optional add-ons.
//! - `PriceTable`: static option → surcharge table, built once at startup
//! - `OptionSet`: selected options in selection order
//! - `compute_total`: `quantity * (base_price + options)`
//! - `Micros`: 1e-6 fixed-point money, no floats in arithmetic
//!
//! Pure deterministic logic. No IO, no clock.

mod calculator;
mod money;
mod options;
mod table;
mod types;

pub use calculator::compute_total;
pub use money::{price_to_micros, Micros, MICROS_PER_UNIT};
pub use options::OptionSet;
pub use table::{check_unit_price, OptionDef, OptionId, PriceTable, MAX_UNIT_PRICE};
pub use types::PricingError;
