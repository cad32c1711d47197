//! Currencies quoted in NBP table A that the calculator understands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported foreign currencies, quoted against PLN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Jpy,
    Gbp,
    Chf,
}

impl Currency {
    /// Returns the ISO 4217 code used in NBP API paths.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Gbp => "GBP",
            Currency::Chf => "CHF",
        }
    }

    /// Returns the descriptive name as NBP publishes it.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "dolar amerykański",
            Currency::Eur => "euro",
            Currency::Jpy => "jen (Japonia)",
            Currency::Gbp => "funt szterling",
            Currency::Chf => "frank szwajcarski",
        }
    }

    /// Returns the currency symbol used when echoing price inputs.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Jpy => "¥",
            Currency::Gbp => "£",
            Currency::Chf => "CHF",
        }
    }

    /// Returns all supported currencies.
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Eur, Currency::Jpy, Currency::Gbp, Currency::Chf]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "JPY" => Ok(Currency::Jpy),
            "GBP" => Ok(Currency::Gbp),
            "CHF" => Ok(Currency::Chf),
            _ => Err(CurrencyParseError(s.to_string())),
        }
    }
}

/// Raised when a currency code is not in NBP table A or not supported here.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown currency '{0}'. Valid currencies: USD, EUR, JPY, GBP, CHF")]
pub struct CurrencyParseError(String);
