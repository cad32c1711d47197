//! import-calc - Vehicle import cost calculator CLI
//!
//! Estimates the landed cost of importing a vehicle into Poland from the USA
//! or Japan, using daily NBP reference exchange rates.

pub mod calc;
pub mod commands;
pub mod config;
pub mod format;
pub mod nbp;

pub use calc::{CostBreakdown, Fees, ImportRoute};
pub use config::Config;
pub use nbp::{Currency, NbpClient, RateProvider};
