//! Presentation-boundary formatting. Rounding to cents happens here and
//! nowhere else.

use jj_pricing::Micros;

/// Formats totals as `$1,234.50`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Two decimals, half away from zero, thousands grouped with `,`.
    /// Negative amounts put the sign before the symbol.
    pub fn format(&self, amount: Micros) -> String {
        let cents = amount.round_to_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        format!(
            "{sign}{}{}.{:02}",
            self.symbol,
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Payload for the optional outbound share (e-mail) collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareMessage {
    pub subject: String,
    pub body: String,
}
