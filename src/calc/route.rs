//! Import routes and their customs parameters.

use crate::nbp::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported import routes into Poland.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImportRoute {
    #[default]
    Usa,
    Japan,
}

impl ImportRoute {
    /// Returns the currency vehicle prices are quoted in on this route.
    pub fn source_currency(&self) -> Currency {
        match self {
            ImportRoute::Usa => Currency::Usd,
            ImportRoute::Japan => Currency::Jpy,
        }
    }

    /// Returns the customs duty rate for passenger cars on this route.
    ///
    /// Imports from Japan are duty-free under the EU-Japan Economic
    /// Partnership Agreement; the USA rate is the standard EU 10%.
    pub fn duty_rate(&self) -> f64 {
        match self {
            ImportRoute::Usa => 0.10,
            ImportRoute::Japan => 0.0,
        }
    }

    /// Returns the default ocean shipping cost in EUR.
    pub fn default_shipping_eur(&self) -> f64 {
        match self {
            ImportRoute::Usa => 1100.0,
            ImportRoute::Japan => 1700.0,
        }
    }

    /// Returns the human-readable route label.
    pub fn label(&self) -> &'static str {
        match self {
            ImportRoute::Usa => "Import z USA",
            ImportRoute::Japan => "Import z Japonii",
        }
    }

    /// Returns all supported routes.
    pub fn all() -> &'static [ImportRoute] {
        &[ImportRoute::Usa, ImportRoute::Japan]
    }
}

impl fmt::Display for ImportRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ImportRoute::Usa => "usa",
            ImportRoute::Japan => "japan",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for ImportRoute {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usa" | "us" | "ameryka" => Ok(ImportRoute::Usa),
            "japan" | "jp" | "japonia" => Ok(ImportRoute::Japan),
            _ => Err(RouteParseError(s.to_string())),
        }
    }
}

/// Raised when a route name is not recognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown import route '{0}'. Valid routes: usa, japan")]
pub struct RouteParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing_all() {
        assert_eq!(ImportRoute::from_str("usa").unwrap(), ImportRoute::Usa);
        assert_eq!(ImportRoute::from_str("us").unwrap(), ImportRoute::Usa);
        assert_eq!(ImportRoute::from_str("ameryka").unwrap(), ImportRoute::Usa);
        assert_eq!(ImportRoute::from_str("japan").unwrap(), ImportRoute::Japan);
        assert_eq!(ImportRoute::from_str("jp").unwrap(), ImportRoute::Japan);
        assert_eq!(ImportRoute::from_str("japonia").unwrap(), ImportRoute::Japan);
        assert_eq!(ImportRoute::from_str("USA").unwrap(), ImportRoute::Usa);

        assert!(ImportRoute::from_str("mars").is_err());
        assert!(ImportRoute::from_str("").is_err());
    }

    #[test]
    fn test_route_source_currencies() {
        assert_eq!(ImportRoute::Usa.source_currency(), Currency::Usd);
        assert_eq!(ImportRoute::Japan.source_currency(), Currency::Jpy);
    }

    #[test]
    fn test_route_duty_rates() {
        assert_eq!(ImportRoute::Usa.duty_rate(), 0.10);
        assert_eq!(ImportRoute::Japan.duty_rate(), 0.0);
    }

    #[test]
    fn test_route_default_shipping() {
        assert_eq!(ImportRoute::Usa.default_shipping_eur(), 1100.0);
        assert_eq!(ImportRoute::Japan.default_shipping_eur(), 1700.0);
    }

    #[test]
    fn test_route_labels() {
        assert_eq!(ImportRoute::Usa.label(), "Import z USA");
        assert_eq!(ImportRoute::Japan.label(), "Import z Japonii");
    }

    #[test]
    fn test_route_display() {
        assert_eq!(ImportRoute::Usa.to_string(), "usa");
        assert_eq!(ImportRoute::Japan.to_string(), "japan");
    }

    #[test]
    fn test_route_all() {
        let all = ImportRoute::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&ImportRoute::Usa));
        assert!(all.contains(&ImportRoute::Japan));
    }

    #[test]
    fn test_route_parse_error_display() {
        let err = ImportRoute::from_str("mars").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("mars"));
        assert!(msg.contains("Valid routes"));
    }

    #[test]
    fn test_route_serde() {
        let json = serde_json::to_string(&ImportRoute::Usa).unwrap();
        assert_eq!(json, "\"usa\"");

        let parsed: ImportRoute = serde_json::from_str("\"japan\"").unwrap();
        assert_eq!(parsed, ImportRoute::Japan);
    }
}
