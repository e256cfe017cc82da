//! Fixed-point money type.
//!
//! Every amount on the pricing surface is an `i64` count of micros
//! (1 unit = 1_000_000 micros).  Unit prices, option surcharges and order
//! totals all share this scale, so `0.5 + 0.5` is exactly `1.0` and totals
//! compare with `==`.
//!
//! `f64` only appears at the configuration boundary:
//!
//! | Direction              | Function             | Notes                        |
//! |------------------------|----------------------|------------------------------|
//! | config file → internal | [`price_to_micros`]  | Parsing / ingestion only     |
//! | internal → display     | `Display` / [`Micros::round_to_cents`] | Presentation only, no floats |

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

use crate::types::PricingError;

/// Scale factor: 1 price unit = 1_000_000 micros (6 decimal places).
pub const MICROS_PER_UNIT: i64 = 1_000_000;

/// Micros per cent, used when rounding for display.
const MICROS_PER_CENT: i64 = MICROS_PER_UNIT / 100;

/// A fixed-point monetary amount at 1e-6 scale.
///
/// There is no `From<i64>`: callers say [`Micros::new`] or
/// [`Micros::from_units`] so a raw quantity can never silently become money.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Micros(i64);

impl Micros {
    pub const ZERO: Micros = Micros(0);

    /// Construct from a raw micros count.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        Micros(raw)
    }

    /// Construct from whole units, e.g. `from_units(5)` is five dollars.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Micros(units * MICROS_PER_UNIT)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Saturating addition; clamps at `i64::MAX`.
    #[inline]
    pub fn saturating_add(self, rhs: Micros) -> Micros {
        Micros(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn checked_add(self, rhs: Micros) -> Option<Micros> {
        self.0.checked_add(rhs.0).map(Micros)
    }

    /// Multiply a per-unit price by an integer quantity.
    ///
    /// Returns `None` on `i64` overflow. `qty` is a plain item count.
    #[inline]
    pub fn checked_mul_qty(self, qty: i64) -> Option<Micros> {
        self.0.checked_mul(qty).map(Micros)
    }

    /// Amount in whole cents, rounded half away from zero.
    pub fn round_to_cents(self) -> i64 {
        let half = MICROS_PER_CENT / 2;
        if self.0 >= 0 {
            (self.0 + half) / MICROS_PER_CENT
        } else {
            (self.0 - half) / MICROS_PER_CENT
        }
    }
}

impl Add for Micros {
    type Output = Micros;
    #[inline]
    fn add(self, rhs: Micros) -> Micros {
        Micros(self.0 + rhs.0)
    }
}

impl Sub for Micros {
    type Output = Micros;
    #[inline]
    fn sub(self, rhs: Micros) -> Micros {
        Micros(self.0 - rhs.0)
    }
}

impl AddAssign for Micros {
    #[inline]
    fn add_assign(&mut self, rhs: Micros) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Micros {
    fn sum<I: Iterator<Item = Micros>>(iter: I) -> Micros {
        iter.fold(Micros::ZERO, Micros::saturating_add)
    }
}

impl std::fmt::Display for Micros {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self.0 / MICROS_PER_UNIT;
        let frac = (self.0 % MICROS_PER_UNIT).abs();
        // -0.5 truncates to 0 units; keep the sign.
        if self.0 < 0 && units == 0 {
            write!(f, "-{units}.{frac:06}")
        } else {
            write!(f, "{units}.{frac:06}")
        }
    }
}

/// Convert a decimal price read from configuration into micros.
///
/// Rounds to the nearest micro.
///
/// # Errors
/// [`PricingError::NotFinite`] for NaN or infinity,
/// [`PricingError::OutOfRange`] if the scaled value does not fit in `i64`.
pub fn price_to_micros(price: f64) -> Result<Micros, PricingError> {
    if !price.is_finite() {
        return Err(PricingError::NotFinite);
    }
    let scaled = price * MICROS_PER_UNIT as f64;
    // `as` saturates; out-of-range must be rejected instead.
    if scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
        return Err(PricingError::OutOfRange);
    }
    Ok(Micros(scaled.round() as i64))
}
