//! jj-session
//!
//! The order form's state, decoupled from any rendering surface.
//! - `OrderSession`: name, quantity (1..=100), options, live price, submit
//! - `OrderSummary`: immutable record of a submitted order
//! - `CurrencyFormat` / `ShareMessage`: presentation-boundary text
//! - `OrderDesk`: session + presentation settings wired from `ShopConfig`

mod desk;
mod render;
mod session;
mod summary;
mod types;

pub use desk::{OrderDesk, SubmittedOrder};
pub use render::{CurrencyFormat, ShareMessage};
pub use session::OrderSession;
pub use summary::OrderSummary;
pub use types::{DisplayState, SessionError, MAX_QUANTITY, MIN_QUANTITY};
