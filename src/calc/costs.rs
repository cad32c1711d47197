//! Landed cost computation for an imported vehicle.

use super::route::ImportRoute;
use crate::nbp::{Currency, RateQuote};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Polish VAT rate on imported vehicles.
pub const VAT_RATE: f64 = 0.23;

/// Excise rate for petrol engines of 2000 cm³ or less.
pub const EXCISE_RATE_LOW: f64 = 0.031;

/// Excise rate for engines above 2000 cm³.
pub const EXCISE_RATE_HIGH: f64 = 0.186;

/// Engine size threshold between the two excise bands, in cm³.
pub const EXCISE_THRESHOLD_CC: u32 = 2000;

/// Returns the excise rate for a given engine size.
pub fn excise_rate(engine_cc: u32) -> f64 {
    if engine_cc <= EXCISE_THRESHOLD_CC {
        EXCISE_RATE_LOW
    } else {
        EXCISE_RATE_HIGH
    }
}

/// Fixed cost factors applied on top of duty and taxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fees {
    /// Customs agency fee in EUR
    #[serde(default = "default_agency_fee_eur")]
    pub agency_fee_eur: f64,

    /// Sworn translation of vehicle documents, in PLN
    #[serde(default = "default_translation_pln")]
    pub translation_pln: f64,

    /// First technical inspection of an imported vehicle, in PLN
    #[serde(default = "default_inspection_pln")]
    pub inspection_pln: f64,

    /// Registration and plates, in PLN
    #[serde(default = "default_registration_pln")]
    pub registration_pln: f64,
}

fn default_agency_fee_eur() -> f64 {
    120.0
}

fn default_translation_pln() -> f64 {
    450.0
}

fn default_inspection_pln() -> f64 {
    169.0
}

fn default_registration_pln() -> f64 {
    160.0
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            agency_fee_eur: default_agency_fee_eur(),
            translation_pln: default_translation_pln(),
            inspection_pln: default_inspection_pln(),
            registration_pln: default_registration_pln(),
        }
    }
}

/// Full landed cost estimate for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Route the vehicle is imported on
    pub route: ImportRoute,
    /// Vehicle price in the source currency
    pub vehicle_price: f64,
    /// Source currency (USD or JPY)
    pub currency: Currency,
    /// Engine size in cm³
    pub engine_cc: u32,
    /// Rate used to convert the vehicle price
    pub source_rate: RateQuote,
    /// Rate used to convert EUR-denominated costs
    pub eur_rate: RateQuote,

    /// Vehicle price converted to PLN
    pub vehicle_pln: f64,
    /// Ocean shipping converted to PLN
    pub shipping_pln: f64,
    /// Customs value (vehicle + shipping), the duty base
    pub customs_value_pln: f64,
    /// Duty rate applied
    pub duty_rate: f64,
    /// Customs duty in PLN
    pub duty_pln: f64,
    /// Excise rate applied
    pub excise_rate: f64,
    /// Excise duty in PLN
    pub excise_pln: f64,
    /// VAT in PLN
    pub vat_pln: f64,
    /// Customs agency fee converted to PLN
    pub agency_pln: f64,
    /// Sworn translation in PLN
    pub translation_pln: f64,
    /// Technical inspection in PLN
    pub inspection_pln: f64,
    /// Registration in PLN
    pub registration_pln: f64,
    /// Estimated total landed cost in PLN
    pub total_pln: f64,
}

impl CostBreakdown {
    /// Computes the landed cost estimate.
    ///
    /// Pure arithmetic over the fetched rates: duty is charged on the customs
    /// value (vehicle + shipping), excise on the duty-inclusive value, VAT on
    /// the excise-inclusive value. Fixed fees are added last.
    pub fn compute(
        route: ImportRoute,
        vehicle_price: f64,
        engine_cc: u32,
        shipping_eur: Option<f64>,
        source_rate: &RateQuote,
        eur_rate: &RateQuote,
        fees: &Fees,
    ) -> Result<Self> {
        if !vehicle_price.is_finite() || vehicle_price <= 0.0 {
            anyhow::bail!("Vehicle price must be a positive number, got {}", vehicle_price);
        }
        if engine_cc == 0 {
            anyhow::bail!("Engine size must be positive");
        }
        if source_rate.currency != route.source_currency() {
            anyhow::bail!(
                "Rate currency mismatch: route {} needs {}, got {}",
                route,
                route.source_currency(),
                source_rate.currency
            );
        }
        if eur_rate.currency != Currency::Eur {
            anyhow::bail!("Expected EUR rate, got {}", eur_rate.currency);
        }

        let shipping_eur = shipping_eur.unwrap_or_else(|| route.default_shipping_eur());
        if !shipping_eur.is_finite() || shipping_eur < 0.0 {
            anyhow::bail!("Shipping cost must be non-negative, got {}", shipping_eur);
        }

        let vehicle_pln = source_rate.to_pln(vehicle_price);
        let shipping_pln = eur_rate.to_pln(shipping_eur);
        let customs_value_pln = vehicle_pln + shipping_pln;

        let duty_rate = route.duty_rate();
        let duty_pln = customs_value_pln * duty_rate;

        let excise_rate = excise_rate(engine_cc);
        let excise_pln = (customs_value_pln + duty_pln) * excise_rate;

        let vat_pln = (customs_value_pln + duty_pln + excise_pln) * VAT_RATE;

        let agency_pln = eur_rate.to_pln(fees.agency_fee_eur);

        let total_pln = customs_value_pln
            + duty_pln
            + excise_pln
            + vat_pln
            + agency_pln
            + fees.translation_pln
            + fees.inspection_pln
            + fees.registration_pln;

        Ok(Self {
            route,
            vehicle_price,
            currency: route.source_currency(),
            engine_cc,
            source_rate: source_rate.clone(),
            eur_rate: eur_rate.clone(),
            vehicle_pln,
            shipping_pln,
            customs_value_pln,
            duty_rate,
            duty_pln,
            excise_rate,
            excise_pln,
            vat_pln,
            agency_pln,
            translation_pln: fees.translation_pln,
            inspection_pln: fees.inspection_pln,
            registration_pln: fees.registration_pln,
            total_pln,
        })
    }

    /// Total duty and taxes (duty + excise + VAT) in PLN.
    pub fn taxes_pln(&self) -> f64 {
        self.duty_pln + self.excise_pln + self.vat_pln
    }

    /// Fixed fees (agency, translation, inspection, registration) in PLN.
    pub fn fixed_fees_pln(&self) -> f64 {
        self.agency_pln + self.translation_pln + self.inspection_pln + self.registration_pln
    }
}
