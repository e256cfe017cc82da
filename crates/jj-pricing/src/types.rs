use std::fmt;

/// Errors raised by the pricing layer.
///
/// All variants fire in every build profile; none are debug-only assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// An option id was referenced that the price table never registered.
    /// This is a wiring/config defect, never a user mistake.
    UnknownOption(String),
    /// The same option id appeared twice while building a price table.
    DuplicateOption(String),
    /// A negative (or absurdly large) quantity or price was supplied.
    /// `raw` is the rejected value: a plain count for `quantity`, micros otherwise.
    InvalidAmount { field: &'static str, raw: i64 },
    /// `quantity * unit_rate` does not fit in `i64` micros.
    Overflow,
    /// Config price was NaN or infinite.
    NotFinite,
    /// Config price does not fit in `i64` after scaling to micros.
    OutOfRange,
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::UnknownOption(id) => write!(f, "UNKNOWN_OPTION: '{id}' is not in the price table"),
            PricingError::DuplicateOption(id) => {
                write!(f, "DUPLICATE_OPTION: '{id}' is registered more than once")
            }
            PricingError::InvalidAmount { field, raw } => {
                write!(f, "INVALID_AMOUNT: {field}={raw} is out of range")
            }
            PricingError::Overflow => write!(f, "PRICE_OVERFLOW: order total exceeds i64 micros"),
            PricingError::NotFinite => write!(f, "price_to_micros: non-finite input (NaN or Inf)"),
            PricingError::OutOfRange => {
                write!(f, "price_to_micros: price out of i64 range after scaling")
            }
        }
    }
}

impl std::error::Error for PricingError {}
