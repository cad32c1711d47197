//! Rates listing command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::nbp::{Currency, NbpClient, RateProvider, RateQuote};
use anyhow::{Context, Result};
use tracing::info;

/// Fetches and displays current NBP mid rates.
pub struct RatesCommand {
    config: Config,
}

impl RatesCommand {
    /// Creates a new rates command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the given currencies and returns formatted output.
    pub async fn execute(&self, currencies: &[Currency]) -> Result<String> {
        let client = NbpClient::with_base_url(self.config.api_base.clone(), self.config.timeout_secs)
            .context("Failed to create HTTP client")?;

        self.execute_with_client(&client, currencies).await
    }

    /// Fetches rates with a provided rate source (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl RateProvider,
        currencies: &[Currency],
    ) -> Result<String> {
        let mut quotes: Vec<RateQuote> = Vec::with_capacity(currencies.len());

        for &currency in currencies {
            let quote = client
                .mid_rate(currency)
                .await
                .context("Błąd pobierania kursów walut")?;
            quotes.push(quote);
        }

        info!("Fetched {} NBP rates", quotes.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_rates(&quotes))
    }
}
