//! CLI command implementations.

pub mod calculate;
pub mod rates;

pub use calculate::CalculateCommand;
pub use rates::RatesCommand;
