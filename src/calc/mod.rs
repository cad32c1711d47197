//! Landed cost calculation: routes, duty and tax rates, cost breakdowns.

pub mod costs;
pub mod route;

pub use costs::{CostBreakdown, Fees};
pub use route::ImportRoute;
