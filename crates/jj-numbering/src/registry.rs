//! Monthly-scoped order numbering.
//!
//! # States
//!
//! The registry has no explicit state field. Comparing the cached counter's
//! period with [`PeriodKey::from_date`] of today gives two implicit states:
//!
//! - *current period*: the next reservation continues the sequence;
//! - *stale period*: the next reservation rolls over to `1` and adopts the
//!   new period.
//!
//! Rollover is lazy. It happens on the first reservation after a month
//! boundary, never on a timer.
//!
//! # Write before acknowledge
//!
//! [`OrderNumberRegistry::reserve_next`] saves `{period, number + 1}` to the
//! store **before** returning `number`. If the save fails the caller gets
//! `PersistenceUnavailable`, the cached counter is untouched, and the same
//! number is offered again on retry. A number that was returned is therefore
//! never issued twice, even if the process dies right after.

use crate::period::{Clock, PeriodKey, SystemClock};
use crate::store::CounterStore;
use crate::types::{NumberingError, OrderCounter, OrderNumber};

pub struct OrderNumberRegistry<S, C = SystemClock> {
    store: S,
    clock: C,
    counter: OrderCounter,
}

impl<S: CounterStore, C: Clock> OrderNumberRegistry<S, C> {
    /// Open the registry, reading the persisted counter once.
    pub fn open(store: S, clock: C) -> Result<Self, NumberingError> {
        let counter = read_counter(&store)?;
        tracing::debug!(
            period_key = %counter.period_key,
            next_number = counter.next_number,
            "order counter loaded"
        );
        Ok(Self {
            store,
            clock,
            counter,
        })
    }

    /// Re-read the persisted counter, replacing the cached copy.
    ///
    /// Returns the default `{"", 1}` when nothing was ever saved.
    pub fn load(&mut self) -> Result<OrderCounter, NumberingError> {
        self.counter = read_counter(&self.store)?;
        Ok(self.counter.clone())
    }

    /// The cached counter, without touching the store.
    pub fn peek(&self) -> &OrderCounter {
        &self.counter
    }

    pub fn current_period_key(&self) -> PeriodKey {
        PeriodKey::from_date(self.clock.today())
    }

    /// Hand out the next order number for the current period.
    pub fn reserve_next(&mut self) -> Result<OrderNumber, NumberingError> {
        let period_key = self.current_period_key();
        let rollover = period_key != self.counter.period_key;
        let number = if rollover { 1 } else { self.counter.next_number };

        let next_number = number
            .checked_add(1)
            .ok_or_else(|| NumberingError::CounterExhausted {
                period_key: period_key.clone(),
            })?;
        let updated = OrderCounter::new(period_key.clone(), next_number);

        if let Err(e) = self.store.save(&updated) {
            tracing::error!(
                period_key = %period_key,
                number,
                error = %format!("{e:#}"),
                "order counter save failed; number not issued"
            );
            return Err(NumberingError::PersistenceUnavailable {
                reason: format!("{e:#}"),
            });
        }

        if rollover {
            tracing::info!(
                previous_period = %self.counter.period_key,
                previous_next_number = self.counter.next_number,
                "order number reset #{}-{}",
                period_key,
                number
            );
        }
        self.counter = updated;

        let reserved = OrderNumber { period_key, number };
        tracing::debug!(order_number = %reserved, "order number reserved");
        Ok(reserved)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn read_counter<S: CounterStore>(store: &S) -> Result<OrderCounter, NumberingError> {
    let loaded = store.load().map_err(|e| {
        tracing::error!(error = %format!("{e:#}"), "order counter load failed");
        NumberingError::PersistenceUnavailable {
            reason: format!("{e:#}"),
        }
    })?;

    match loaded {
        None => Ok(OrderCounter::default()),
        Some(c) if c.next_number == 0 => Err(NumberingError::PersistenceUnavailable {
            reason: format!(
                "stored order counter for period '{}' has orderNum 0",
                c.period_key
            ),
        }),
        Some(c) => Ok(c),
    }
}
