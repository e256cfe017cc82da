use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Micros;
use crate::types::PricingError;

/// Largest accepted unit price or option surcharge (one million units).
///
/// Keeps any sum of table entries far away from `i64` overflow, so only the
/// final quantity multiplication needs a checked path.
pub const MAX_UNIT_PRICE: Micros = Micros::from_units(1_000_000);

/// Stable option identifier (e.g. `whipped_cream`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OptionId(pub String);

impl OptionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One add-on the customer may select.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDef {
    pub id: OptionId,
    /// Display label, copied verbatim into order summaries.
    pub label: String,
    /// Extra charge per unit of quantity.
    pub unit_cost: Micros,
}

impl OptionDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, unit_cost: Micros) -> Self {
        Self {
            id: OptionId::new(id),
            label: label.into(),
            unit_cost,
        }
    }
}

/// Validate a single unit price: non-negative and at most [`MAX_UNIT_PRICE`].
pub fn check_unit_price(field: &'static str, price: Micros) -> Result<Micros, PricingError> {
    if price.is_negative() || price > MAX_UNIT_PRICE {
        return Err(PricingError::InvalidAmount {
            field,
            raw: price.raw(),
        });
    }
    Ok(price)
}

/// Static option → surcharge table, built once at startup and read-only after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    /// Declaration order is preserved for iteration.
    options: Vec<OptionDef>,
    index: BTreeMap<OptionId, usize>,
}

impl PriceTable {
    /// Build a table from a fixed list of options.
    ///
    /// Fails on a repeated id (`DuplicateOption`) or a negative / over-cap
    /// surcharge (`InvalidAmount`).
    pub fn new(options: Vec<OptionDef>) -> Result<Self, PricingError> {
        let mut index = BTreeMap::new();
        for (i, opt) in options.iter().enumerate() {
            check_unit_price("unit_cost", opt.unit_cost)?;
            if index.insert(opt.id.clone(), i).is_some() {
                return Err(PricingError::DuplicateOption(opt.id.0.clone()));
            }
        }
        Ok(Self { options, index })
    }

    pub fn get(&self, option_id: &str) -> Option<&OptionDef> {
        self.index.get(option_id).map(|&i| &self.options[i])
    }

    pub fn contains(&self, option_id: &str) -> bool {
        self.get(option_id).is_some()
    }

    /// Incremental per-unit cost of an option.
    pub fn unit_cost_of(&self, option_id: &str) -> Result<Micros, PricingError> {
        self.lookup(option_id).map(|o| o.unit_cost)
    }

    pub fn label_of(&self, option_id: &str) -> Result<&str, PricingError> {
        self.lookup(option_id).map(|o| o.label.as_str())
    }

    /// Options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDef> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub(crate) fn lookup(&self, option_id: &str) -> Result<&OptionDef, PricingError> {
        self.get(option_id).ok_or_else(|| {
            tracing::error!(option_id, "option referenced but never registered");
            PricingError::UnknownOption(option_id.to_string())
        })
    }
}
