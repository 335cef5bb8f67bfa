use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::error::RateError;
use crate::rate_source::{RateDate, RateSource};

/// Rate provider for a fixer.io-style API.
///
/// The remote serves one JSON document per date, with all rates expressed
/// against the Euro: `GET {endpoint}/{YYYY-MM-DD}?access_key={key}` returns
/// `{"rates": {"USD": 1.2, ...}, ...}`. Documents are fetched fresh on every
/// call; nothing is cached or retried.
pub struct FixerProvider {
    endpoint: Url,
    access_key: String,
}

impl FixerProvider {
    /// Creates a provider from a base endpoint and a pre-loaded access key.
    ///
    /// The endpoint is validated here; no network I/O happens until the
    /// first lookup. Loading the key from configuration is the caller's
    /// concern.
    pub fn new(endpoint: &str, access_key: &str) -> Result<Self, RateError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| RateError::InvalidEndpoint(e.to_string()))?;
        if endpoint.cannot_be_a_base() {
            return Err(RateError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(FixerProvider {
            endpoint,
            access_key: access_key.to_string(),
        })
    }

    // Derived fresh for every call; the stored endpoint is never mutated.
    fn request_url(&self, date: RateDate) -> Url {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .expect("endpoint validated at construction")
            .pop_if_empty()
            .push(&date.to_string());
        url.query_pairs_mut()
            .append_pair("access_key", &self.access_key);
        url
    }

    async fn fetch_document(&self, date: RateDate) -> Result<Value, RateError> {
        let url = self.request_url(date);
        debug!("Requesting rate document from {}", url);

        let client = reqwest::Client::builder().user_agent("fxr/0.1").build()?;
        let response = client.get(url).send().await?.error_for_status()?;
        let text = response.text().await?;

        let document: Value =
            serde_json::from_str(&text).map_err(|e| RateError::Parse(e.to_string()))?;
        if !document.is_object() {
            return Err(RateError::Parse(format!(
                "expected a JSON object, got: {document}"
            )));
        }
        Ok(document)
    }
}

fn extract_rate(document: &Value, currency: &str) -> Result<f64, RateError> {
    document
        .get("rates")
        .and_then(Value::as_object)
        .and_then(|rates| rates.get(currency))
        .and_then(Value::as_f64)
        .ok_or_else(|| RateError::RateNotFound(currency.to_string()))
}

#[async_trait]
impl RateSource for FixerProvider {
    async fn rate(&self, currency: &str, date: RateDate) -> Result<f64, RateError> {
        let document = self.fetch_document(date).await?;
        extract_rate(&document, currency)
    }

    async fn cross_rate(
        &self,
        from: &str,
        to: &str,
        date: RateDate,
    ) -> Result<f64, RateError> {
        // Both legs come from the same document, so one round-trip and one
        // consistent snapshot.
        let document = self.fetch_document(date).await?;
        let from_rate = extract_rate(&document, from)?;
        let to_rate = extract_rate(&document, to)?;
        if to_rate == 0.0 {
            return Err(RateError::DivisionUndefined(to.to_string()));
        }
        Ok(from_rate / to_rate)
    }
}
