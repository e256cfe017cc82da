use std::sync::Arc;

use crate::money::Micros;
use crate::table::{OptionId, PriceTable};
use crate::types::PricingError;

/// The options currently selected for an order.
///
/// Members are kept in the order they were selected. Summaries print labels
/// in that order, not alphabetically and not by id.
#[derive(Clone, Debug)]
pub struct OptionSet {
    table: Arc<PriceTable>,
    selected: Vec<OptionId>,
}

impl OptionSet {
    pub fn new(table: Arc<PriceTable>) -> Self {
        Self {
            table,
            selected: Vec::new(),
        }
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Select or deselect `option_id`.
    ///
    /// Returns `Ok(true)` if membership changed, `Ok(false)` if the option was
    /// already in the requested state.
    pub fn toggle(&mut self, option_id: &str, selected: bool) -> Result<bool, PricingError> {
        let def = self.table.lookup(option_id)?;

        let pos = self.selected.iter().position(|id| id.as_str() == option_id);
        let changed = match (pos, selected) {
            (None, true) => {
                self.selected.push(def.id.clone());
                true
            }
            (Some(i), false) => {
                self.selected.remove(i);
                true
            }
            _ => false,
        };

        if changed {
            tracing::debug!(
                option = %def.label,
                selected,
                unit_cost = %def.unit_cost,
                incremental_total = %self.incremental_total(),
                "option toggled"
            );
        }
        Ok(changed)
    }

    pub fn is_selected(&self, option_id: &str) -> bool {
        self.selected.iter().any(|id| id.as_str() == option_id)
    }

    /// Sum of the unit costs of all selected options; zero when empty.
    pub fn incremental_total(&self) -> Micros {
        // Members are always registered in the table, so lookups cannot miss.
        self.selected
            .iter()
            .filter_map(|id| self.table.get(id.as_str()))
            .map(|def| def.unit_cost)
            .sum()
    }

    /// Labels of the selected options, in selection order.
    pub fn ordered_labels(&self) -> Vec<String> {
        self.selected
            .iter()
            .filter_map(|id| self.table.get(id.as_str()))
            .map(|def| def.label.clone())
            .collect()
    }

    pub fn selected_ids(&self) -> &[OptionId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
