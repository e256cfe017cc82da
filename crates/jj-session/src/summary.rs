use jj_numbering::OrderNumber;
use jj_pricing::Micros;
use serde::{Deserialize, Serialize};

use crate::render::{CurrencyFormat, ShareMessage};

/// Immutable record of one submitted order. Not persisted; it goes to the
/// display and, optionally, the share collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub customer_name: String,
    pub order_number: OrderNumber,
    pub quantity: u32,
    /// Option labels in the order the customer picked them.
    pub selected_labels: Vec<String>,
    pub total_price: Micros,
}

impl OrderSummary {
    /// `2506-3`
    pub fn order_id(&self) -> String {
        self.order_number.to_string()
    }

    /// Multi-line text for the display collaborator:
    ///
    /// ```text
    /// Name: Ana
    /// #2506-3
    /// Quantity: 2
    /// Options: Whipped Cream, Sugar
    /// Total: $11.00
    /// ```
    pub fn render(&self, currency: &CurrencyFormat) -> String {
        let options = if self.selected_labels.is_empty() {
            "N/A".to_string()
        } else {
            self.selected_labels.join(", ")
        };
        format!(
            "Name: {}\n#{}\nQuantity: {}\nOptions: {}\nTotal: {}",
            self.customer_name,
            self.order_number,
            self.quantity,
            options,
            currency.format(self.total_price)
        )
    }

    /// Subject and body for the outbound share action.
    pub fn share_message(&self, app_name: &str, currency: &CurrencyFormat) -> ShareMessage {
        ShareMessage {
            subject: format!("{app_name} | Order #{}", self.order_number),
            body: format!(
                "{}\n\nThank you {}!",
                self.render(currency),
                self.customer_name
            ),
        }
    }
}
