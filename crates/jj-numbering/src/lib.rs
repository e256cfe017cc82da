//! jj-numbering
//!
//! Human-readable order numbers (`2506-3`) that restart at 1 each calendar
//! month and survive process restarts.
//! - `OrderNumberRegistry`: the only reader/writer of the persisted counter
//! - `CounterStore`: persistence port (JSON file for production, memory for tests)
//! - `Clock`: injectable "today" for period derivation
//!
//! Synchronous, single writer. See `registry` for the write-before-acknowledge
//! contract.

mod period;
mod registry;
mod store;
mod types;

pub use period::{Clock, PeriodKey, SystemClock};
pub use registry::OrderNumberRegistry;
pub use store::{CounterStore, JsonFileCounterStore, MemoryCounterStore};
pub use types::{NumberingError, OrderCounter, OrderNumber};
