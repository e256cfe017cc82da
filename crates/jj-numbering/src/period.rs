use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Order-numbering epoch: two-digit year followed by two-digit month.
///
/// June 2025 is `"2506"`. The empty key means "never numbered".
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodKey(String);

impl PeriodKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The key for the calendar month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        // rem_euclid keeps years before 0 CE two digits wide as well.
        let yy = date.year().rem_euclid(100);
        Self(format!("{yy:02}{:02}", date.month()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of "today" for period derivation.
///
/// Injected so tests can pin the date and cross month boundaries on demand.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the machine's local timezone; the month rolls over at
/// local midnight, which is what a shop counter expects.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate,
{
    fn today(&self) -> NaiveDate {
        self()
    }
}
