//! HTTP client for the NBP exchange rate API.

use super::currency::Currency;
use super::models::{RateQuote, RateSeries};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

const NBP_API_BASE: &str = "https://api.nbp.pl";

/// Trait for rate lookups - enables mocking for tests.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest mid rate for a currency.
    async fn mid_rate(&self, currency: Currency) -> Result<RateQuote>;
}

/// NBP API HTTP client.
pub struct NbpClient {
    client: reqwest::Client,
    base_url: String,
}

impl NbpClient {
    /// Creates a new client against the public NBP API.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Self::with_base_url(NBP_API_BASE.to_string(), timeout_secs)
    }

    /// Creates a new client with a custom base URL (for testing).
    pub fn with_base_url(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    async fn fetch_series(&self, currency: Currency) -> Result<RateSeries> {
        let url = format!(
            "{}/api/exchangerates/rates/A/{}/?format=json",
            self.base_url,
            currency.code()
        );

        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Błąd pobierania kursów walut")?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("NBP has no table A entry for {}", currency);
        }
        if !status.is_success() {
            anyhow::bail!("NBP API returned status: {}", status);
        }

        response
            .json::<RateSeries>()
            .await
            .context("Failed to parse NBP rate document")
    }
}

#[async_trait]
impl RateProvider for NbpClient {
    async fn mid_rate(&self, currency: Currency) -> Result<RateQuote> {
        let series = self.fetch_series(currency).await?;

        let observation = series
            .latest()
            .with_context(|| format!("NBP rate document for {} has no observations", currency))?;

        info!(
            "NBP {} mid rate: {:.4} PLN ({})",
            currency, observation.mid, observation.effective_date
        );

        Ok(RateQuote {
            currency,
            mid: observation.mid,
            effective_date: observation.effective_date.clone(),
            table_no: observation.no.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn usd_doc(mid: f64) -> serde_json::Value {
        serde_json::json!({
            "table": "A",
            "currency": "dolar amerykański",
            "code": "USD",
            "rates": [
                { "no": "170/A/NBP/2025", "effectiveDate": "2025-09-03", "mid": mid }
            ]
        })
    }

    #[tokio::test]
    async fn test_mid_rate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/exchangerates/rates/A/USD/"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(usd_doc(4.05)))
            .mount(&mock_server)
            .await;

        let client = NbpClient::with_base_url(mock_server.uri(), 15).unwrap();
        let quote = client.mid_rate(Currency::Usd).await.unwrap();

        assert_eq!(quote.currency, Currency::Usd);
        assert_eq!(quote.mid, 4.05);
        assert_eq!(quote.effective_date, "2025-09-03");
        assert_eq!(quote.table_no, "170/A/NBP/2025");
    }

    #[tokio::test]
    async fn test_mid_rate_uses_latest_observation() {
        let mock_server = MockServer::start().await;

        let doc = serde_json::json!({
            "table": "A",
            "currency": "euro",
            "code": "EUR",
            "rates": [
                { "no": "169/A/NBP/2025", "effectiveDate": "2025-09-02", "mid": 4.31 },
                { "no": "170/A/NBP/2025", "effectiveDate": "2025-09-03", "mid": 4.35 }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/api/exchangerates/rates/A/EUR/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(doc))
            .mount(&mock_server)
            .await;

        let client = NbpClient::with_base_url(mock_server.uri(), 15).unwrap();
        let quote = client.mid_rate(Currency::Eur).await.unwrap();

        assert_eq!(quote.mid, 4.35);
        assert_eq!(quote.effective_date, "2025-09-03");
    }

    #[tokio::test]
    async fn test_mid_rate_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/exchangerates/rates/A/CHF/"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404 NotFound"))
            .mount(&mock_server)
            .await;

        let client = NbpClient::with_base_url(mock_server.uri(), 15).unwrap();
        let result = client.mid_rate(Currency::Chf).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no table A entry"));
    }

    #[tokio::test]
    async fn test_mid_rate_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/exchangerates/rates/A/USD/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = NbpClient::with_base_url(mock_server.uri(), 15).unwrap();
        let result = client.mid_rate(Currency::Usd).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_mid_rate_empty_observations() {
        let mock_server = MockServer::start().await;

        let doc = serde_json::json!({
            "table": "A",
            "currency": "dolar amerykański",
            "code": "USD",
            "rates": []
        });

        Mock::given(method("GET"))
            .and(path("/api/exchangerates/rates/A/USD/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(doc))
            .mount(&mock_server)
            .await;

        let client = NbpClient::with_base_url(mock_server.uri(), 15).unwrap();
        let result = client.mid_rate(Currency::Usd).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no observations"));
    }

    #[tokio::test]
    async fn test_mid_rate_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/exchangerates/rates/A/USD/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = NbpClient::with_base_url(mock_server.uri(), 15).unwrap();
        let result = client.mid_rate(Currency::Usd).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/exchangerates/rates/A/JPY/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "table": "A",
                "currency": "jen (Japonia)",
                "code": "JPY",
                "rates": [
                    { "no": "170/A/NBP/2025", "effectiveDate": "2025-09-03", "mid": 0.028 }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = NbpClient::with_base_url(format!("{}/", mock_server.uri()), 15).unwrap();
        let quote = client.mid_rate(Currency::Jpy).await.unwrap();

        assert_eq!(quote.mid, 0.028);
    }

    #[test]
    fn test_new_client() {
        let client = NbpClient::new(15);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url, NBP_API_BASE);
    }
}
