//! Full cost calculation command implementation.

use crate::calc::{CostBreakdown, ImportRoute};
use crate::config::Config;
use crate::format::Formatter;
use crate::nbp::{Currency, NbpClient, RateProvider};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a landed cost calculation for one import route.
pub struct CalculateCommand {
    config: Config,
    route: ImportRoute,
}

impl CalculateCommand {
    /// Creates a new calculate command.
    pub fn new(config: Config, route: ImportRoute) -> Self {
        Self { config, route }
    }

    /// Executes the calculation and returns formatted output.
    pub async fn execute(
        &self,
        vehicle_price: f64,
        engine_cc: Option<u32>,
        shipping_eur: Option<f64>,
    ) -> Result<String> {
        let client = NbpClient::with_base_url(self.config.api_base.clone(), self.config.timeout_secs)
            .context("Failed to create HTTP client")?;

        self.execute_with_client(&client, vehicle_price, engine_cc, shipping_eur).await
    }

    /// Executes the calculation with a provided rate source (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl RateProvider,
        vehicle_price: f64,
        engine_cc: Option<u32>,
        shipping_eur: Option<f64>,
    ) -> Result<String> {
        let source_currency = self.route.source_currency();
        info!("Calculating {} for {} {}", self.route, vehicle_price, source_currency);

        // Two independent requests: the source currency and EUR. Both must
        // succeed before any cost is computed.
        let (source_rate, eur_rate) = tokio::try_join!(
            client.mid_rate(source_currency),
            client.mid_rate(Currency::Eur)
        )
        .context("Błąd pobierania kursów walut")?;

        debug!(
            "Rates: {} / {}",
            source_rate.banner_line(),
            eur_rate.banner_line()
        );

        let engine_cc = engine_cc.unwrap_or(self.config.engine_cc);

        let breakdown = CostBreakdown::compute(
            self.route,
            vehicle_price,
            engine_cc,
            shipping_eur,
            &source_rate,
            &eur_rate,
            &self.config.fees,
        )?;

        info!("Estimated landed cost: {:.2} PLN", breakdown.total_pln);

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_breakdown(&breakdown))
    }
}
