use std::fmt;

use serde::{Deserialize, Serialize};

use crate::period::PeriodKey;

/// Persisted numbering state; the only record that survives a restart.
///
/// Field names on disk match the record the shop has always written:
/// `{"orderNum_prefix": "2506", "orderNum": 4}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCounter {
    /// Last period a number was issued in.
    #[serde(rename = "orderNum_prefix")]
    pub period_key: PeriodKey,
    /// Next number to issue in that period. Always >= 1.
    #[serde(rename = "orderNum")]
    pub next_number: u32,
}

impl OrderCounter {
    pub fn new(period_key: PeriodKey, next_number: u32) -> Self {
        Self {
            period_key,
            next_number,
        }
    }
}

impl Default for OrderCounter {
    /// State before any order was ever numbered.
    fn default() -> Self {
        Self {
            period_key: PeriodKey::default(),
            next_number: 1,
        }
    }
}

/// A number handed out by the registry, already durably accounted for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderNumber {
    pub period_key: PeriodKey,
    pub number: u32,
}

impl fmt::Display for OrderNumber {
    /// `2506-3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.period_key, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberingError {
    /// The counter store could not be read or written, or held a corrupt
    /// record. No number was issued.
    PersistenceUnavailable { reason: String },
    /// `next_number` reached `u32::MAX` within one period.
    CounterExhausted { period_key: PeriodKey },
}

impl fmt::Display for NumberingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberingError::PersistenceUnavailable { reason } => {
                write!(f, "PERSISTENCE_UNAVAILABLE: {reason}")
            }
            NumberingError::CounterExhausted { period_key } => {
                write!(f, "COUNTER_EXHAUSTED: no order numbers left in period {period_key}")
            }
        }
    }
}

impl std::error::Error for NumberingError {}
