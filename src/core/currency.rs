//! Static INR exchange rates and currency conversion.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Currencies an INR amount can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Multiplicative rate against INR.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Usd => 0.011,
            Currency::Eur => 0.0091,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(anyhow::anyhow!(
                "Unsupported currency: {} (expected one of USD, EUR)",
                s
            )),
        }
    }
}

/// Converts an INR amount into `currency`.
pub fn convert(amount_inr: f64, currency: Currency) -> f64 {
    amount_inr * currency.rate()
}
