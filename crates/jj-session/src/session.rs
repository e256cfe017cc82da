//! The in-progress order behind the order form.
//!
//! Every mutation either succeeds and leaves a freshly recomputed price, or is
//! rejected and leaves the session exactly as it was. `submit` reserves an
//! order number first and only resets the session once that succeeded.

use std::sync::Arc;

use jj_numbering::{Clock, CounterStore, OrderNumberRegistry, SystemClock};
use jj_pricing::{check_unit_price, compute_total, Micros, OptionSet, PriceTable};

use crate::summary::OrderSummary;
use crate::types::{DisplayState, SessionError, MAX_QUANTITY, MIN_QUANTITY};

pub struct OrderSession<S, C = SystemClock> {
    customer_name: String,
    quantity: u32,
    options: OptionSet,
    base_price: Micros,
    /// Live price; always `compute_total(quantity, base_price, options)`.
    price: Micros,
    registry: OrderNumberRegistry<S, C>,
}

impl<S: CounterStore, C: Clock> OrderSession<S, C> {
    pub fn new(
        table: Arc<PriceTable>,
        base_price: Micros,
        registry: OrderNumberRegistry<S, C>,
    ) -> Result<Self, SessionError> {
        let base_price = check_unit_price("base_price", base_price)?;
        let options = OptionSet::new(table);
        let price = compute_total(i64::from(MIN_QUANTITY), base_price, Micros::ZERO)?;
        Ok(Self {
            customer_name: String::new(),
            quantity: MIN_QUANTITY,
            options,
            base_price,
            price,
            registry,
        })
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    /// Add one unit. Returns the new quantity.
    pub fn increment_quantity(&mut self) -> Result<u32, SessionError> {
        if self.quantity >= MAX_QUANTITY {
            tracing::warn!(quantity = self.quantity, "increment rejected at max quantity");
            return Err(SessionError::QuantityAtMax { max: MAX_QUANTITY });
        }
        self.set_quantity(self.quantity + 1)
    }

    /// Remove one unit. Returns the new quantity.
    pub fn decrement_quantity(&mut self) -> Result<u32, SessionError> {
        if self.quantity <= MIN_QUANTITY {
            tracing::warn!(quantity = self.quantity, "decrement rejected at min quantity");
            return Err(SessionError::QuantityAtMin { min: MIN_QUANTITY });
        }
        self.set_quantity(self.quantity - 1)
    }

    /// Select or deselect an add-on. Returns whether the selection changed.
    pub fn toggle_option(&mut self, option_id: &str, selected: bool) -> Result<bool, SessionError> {
        let mut next = self.options.clone();
        let changed = next.toggle(option_id, selected)?;
        if changed {
            let price = self.price_for(self.quantity, &next)?;
            self.options = next;
            self.commit_price(price);
        }
        Ok(changed)
    }

    pub fn current_price(&self) -> Micros {
        self.price
    }

    pub fn display(&self) -> DisplayState {
        DisplayState {
            quantity: self.quantity,
            price: self.price,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn base_price(&self) -> Micros {
        self.base_price
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn selected_labels(&self) -> Vec<String> {
        self.options.ordered_labels()
    }

    pub fn registry(&self) -> &OrderNumberRegistry<S, C> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut OrderNumberRegistry<S, C> {
        &mut self.registry
    }

    /// Number the current order, snapshot it, and start a fresh one.
    ///
    /// On `PersistenceUnavailable` nothing is reset, so the same submit can be
    /// retried once the store is back.
    pub fn submit(&mut self) -> Result<OrderSummary, SessionError> {
        let total_price = self.price_for(self.quantity, &self.options)?;
        let selected_labels = self.options.ordered_labels();

        let order_number = self.registry.reserve_next().map_err(|e| {
            tracing::error!(error = %e, "submit failed; session kept for retry");
            SessionError::from(e)
        })?;

        let summary = OrderSummary {
            customer_name: self.customer_name.clone(),
            order_number,
            quantity: self.quantity,
            selected_labels,
            total_price,
        };
        tracing::info!(
            order = %summary.order_number,
            customer = %summary.customer_name,
            quantity = summary.quantity,
            total = %summary.total_price,
            "order submitted"
        );

        self.reset();
        Ok(summary)
    }

    /// Back to defaults: no name, quantity 1, no options.
    pub fn reset(&mut self) {
        self.customer_name.clear();
        self.quantity = MIN_QUANTITY;
        self.options.clear();
        // quantity 1 at base price was validated in `new`.
        self.price = self.base_price;
    }

    fn set_quantity(&mut self, quantity: u32) -> Result<u32, SessionError> {
        let price = self.price_for(quantity, &self.options)?;
        self.quantity = quantity;
        self.commit_price(price);
        Ok(quantity)
    }

    fn price_for(&self, quantity: u32, options: &OptionSet) -> Result<Micros, SessionError> {
        Ok(compute_total(
            i64::from(quantity),
            self.base_price,
            options.incremental_total(),
        )?)
    }

    fn commit_price(&mut self, price: Micros) {
        self.price = price;
        tracing::debug!(quantity = self.quantity, price = %price, "price recomputed");
    }
}
