//! Data models for NBP exchange rate documents.

use super::currency::Currency;
use serde::{Deserialize, Serialize};

/// One rate document from `exchangerates/rates/A/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSeries {
    /// NBP table letter ("A" for mid rates)
    pub table: String,
    /// Descriptive currency name, e.g. "dolar amerykański"
    pub currency: String,
    /// ISO 4217 code
    pub code: String,
    /// Published observations, most recent last
    pub rates: Vec<RateObservation>,
}

impl RateSeries {
    /// Returns the most recent observation, if any were published.
    pub fn latest(&self) -> Option<&RateObservation> {
        self.rates.last()
    }
}

/// A single published mid-rate observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateObservation {
    /// Table publication number, e.g. "170/A/NBP/2025"
    pub no: String,
    /// Publication date (YYYY-MM-DD)
    #[serde(rename = "effectiveDate")]
    pub effective_date: String,
    /// Mid rate in PLN per one unit of the currency
    pub mid: f64,
}

/// A resolved rate as used by the calculator: one currency, one mid value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQuote {
    pub currency: Currency,
    /// PLN per one unit of the currency
    pub mid: f64,
    /// Publication date of the quote
    pub effective_date: String,
    /// NBP table publication number
    pub table_no: String,
}

impl RateQuote {
    /// Renders the quote the way the rates banner does: four decimal places.
    pub fn banner_line(&self) -> String {
        format!("1 {} = {:.4} PLN", self.currency, self.mid)
    }

    /// Converts an amount in this currency to PLN.
    pub fn to_pln(&self, amount: f64) -> f64 {
        amount * self.mid
    }
}
