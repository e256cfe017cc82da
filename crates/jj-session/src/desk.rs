//! Wiring from configuration to a ready-to-use session.
//!
//! `OrderDesk` is what a form front-end holds: the session plus the
//! presentation settings needed to turn its output into text.

use std::sync::Arc;

use anyhow::{Context, Result};
use jj_config::ShopConfig;
use jj_numbering::{Clock, CounterStore, JsonFileCounterStore, OrderNumberRegistry, SystemClock};

use crate::render::{CurrencyFormat, ShareMessage};
use crate::session::OrderSession;
use crate::summary::OrderSummary;
use crate::types::SessionError;

/// Everything the display and share collaborators need after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedOrder {
    pub summary: OrderSummary,
    pub summary_text: String,
    pub share: ShareMessage,
}

pub struct OrderDesk<S, C = SystemClock> {
    session: OrderSession<S, C>,
    currency: CurrencyFormat,
    app_name: String,
}

impl OrderDesk<JsonFileCounterStore, SystemClock> {
    /// Production wiring: JSON counter file from `numbering.store_path`,
    /// wall-clock periods.
    pub fn open(cfg: &ShopConfig) -> Result<Self> {
        let store = JsonFileCounterStore::new(&cfg.numbering.store_path);
        Self::with_parts(cfg, store, SystemClock)
    }
}

impl<S: CounterStore, C: Clock> OrderDesk<S, C> {
    pub fn with_parts(cfg: &ShopConfig, store: S, clock: C) -> Result<Self> {
        let table = Arc::new(cfg.price_table()?);
        let base_price = cfg.base_price_micros()?;
        let registry = OrderNumberRegistry::open(store, clock).context("open order number registry")?;
        let session = OrderSession::new(table, base_price, registry).context("create order session")?;
        Ok(Self {
            session,
            currency: CurrencyFormat::new(cfg.shop.currency_symbol.clone()),
            app_name: cfg.shop.app_name.clone(),
        })
    }

    pub fn session(&self) -> &OrderSession<S, C> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut OrderSession<S, C> {
        &mut self.session
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Live price as shown next to the quantity.
    pub fn price_text(&self) -> String {
        self.currency.format(self.session.current_price())
    }

    /// Submit the current order and render it for the collaborators.
    pub fn submit(&mut self) -> Result<SubmittedOrder, SessionError> {
        let summary = self.session.submit()?;
        let summary_text = summary.render(&self.currency);
        let share = summary.share_message(&self.app_name, &self.currency);
        Ok(SubmittedOrder {
            summary,
            summary_text,
            share,
        })
    }
}
