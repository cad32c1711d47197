//! NBP (Narodowy Bank Polski) exchange rate API integration.

pub mod client;
pub mod currency;
pub mod models;

pub use client::{NbpClient, RateProvider};
pub use currency::Currency;
pub use models::{RateObservation, RateQuote, RateSeries};
