use serde::{Deserialize, Serialize};

/// Currency a quote is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Pln,
}

impl Currency {
    /// Symbol printed before the amount.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Pln => "zł",
        }
    }
}

/// Formats an amount with two decimals, e.g. `$29.10`.
#[must_use]
pub fn format_price(amount: f64, currency: Currency) -> String {
    format!("{}{amount:.2}", currency.symbol())
}
