use std::fmt;

use jj_numbering::{NumberingError, PeriodKey};
use jj_pricing::{Micros, PricingError};

/// Smallest orderable quantity.
pub const MIN_QUANTITY: u32 = 1;
/// Largest orderable quantity.
pub const MAX_QUANTITY: u32 = 100;

/// Why a session operation was rejected.
///
/// `QuantityAtMax` / `QuantityAtMin` are expected outcomes of pressing +/-
/// at a bound; see [`SessionError::is_notice`]. Everything else is a real
/// failure. A rejected operation never changes the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    UnknownOption(String),
    InvalidAmount { field: &'static str, raw: i64 },
    QuantityAtMax { max: u32 },
    QuantityAtMin { min: u32 },
    PersistenceUnavailable { reason: String },
    CounterExhausted { period_key: PeriodKey },
    Pricing(PricingError),
}

impl SessionError {
    /// Non-fatal rejections the UI shows as a short notice.
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            SessionError::QuantityAtMax { .. } | SessionError::QuantityAtMin { .. }
        )
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownOption(id) => {
                write!(f, "UNKNOWN_OPTION: '{id}' is not in the price table")
            }
            SessionError::InvalidAmount { field, raw } => {
                write!(f, "INVALID_AMOUNT: {field}={raw} is out of range")
            }
            SessionError::QuantityAtMax { max } => {
                write!(f, "QUANTITY_AT_MAX: you cannot order more than {max} cups")
            }
            SessionError::QuantityAtMin { min } => {
                write!(f, "QUANTITY_AT_MIN: you cannot order fewer than {min} cup")
            }
            SessionError::PersistenceUnavailable { reason } => {
                write!(f, "PERSISTENCE_UNAVAILABLE: {reason}")
            }
            SessionError::CounterExhausted { period_key } => {
                write!(f, "COUNTER_EXHAUSTED: no order numbers left in period {period_key}")
            }
            SessionError::Pricing(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<PricingError> for SessionError {
    fn from(e: PricingError) -> Self {
        match e {
            PricingError::UnknownOption(id) => SessionError::UnknownOption(id),
            PricingError::InvalidAmount { field, raw } => SessionError::InvalidAmount { field, raw },
            other => SessionError::Pricing(other),
        }
    }
}

impl From<NumberingError> for SessionError {
    fn from(e: NumberingError) -> Self {
        match e {
            NumberingError::PersistenceUnavailable { reason } => {
                SessionError::PersistenceUnavailable { reason }
            }
            NumberingError::CounterExhausted { period_key } => {
                SessionError::CounterExhausted { period_key }
            }
        }
    }
}

/// What the live display shows between submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayState {
    pub quantity: u32,
    pub price: Micros,
}
