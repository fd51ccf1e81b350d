use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope::ResponseEnvelope;
use crate::error::FixerError;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::models::{Conversion, Fluctuation, HistoricalRates, LatestRates, SymbolTable, Timeseries};
use crate::query::{build_url, format_amount, join_symbols, QueryParams};

/// fixer.io API client.
///
/// Each query issues one GET, checks the `{success, error}` envelope and then
/// decodes the endpoint's record. Nothing is cached or retried.
#[derive(Clone)]
pub struct FixerClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl FixerClient {
    /// Create a client using the default reqwest transport.
    ///
    /// Fails with [`FixerError::Configuration`] when `api_key` is empty.
    pub fn new(
        api_key: impl Into<String>,
        base_currency: impl AsRef<str>,
        secure: bool,
    ) -> Result<Self, FixerError> {
        ClientConfig::new(api_key, base_currency, secure).map(Self::from_config)
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: Arc::new(ReqwestHttpClient::default()),
        }
    }

    /// Replace the transport used for every subsequent request.
    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_currency(&self) -> &str {
        self.config.base_currency()
    }

    /// Set the base currency (uppercased) for all subsequent requests.
    pub fn set_base_currency(&mut self, code: impl AsRef<str>) -> &mut Self {
        self.config.set_base_currency(code);
        self
    }

    /// All currency codes supported by the API, with display names.
    pub async fn symbols(&self) -> Result<SymbolTable, FixerError> {
        self.request("symbols", QueryParams::new()).await
    }

    /// Latest rates for `symbols`; an empty slice asks for every currency.
    pub async fn latest<S: AsRef<str>>(&self, symbols: &[S]) -> Result<LatestRates, FixerError> {
        let params = QueryParams::new().with("symbols", join_symbols(symbols));
        self.request("latest", params).await
    }

    /// Rates as of `date` (`YYYY-MM-DD`); an empty slice asks for every currency.
    pub async fn historical<S: AsRef<str>>(
        &self,
        date: &str,
        symbols: &[S],
    ) -> Result<HistoricalRates, FixerError> {
        let params = QueryParams::new().with("symbols", join_symbols(symbols));
        self.request(date, params).await
    }

    /// Convert `amount` from one currency to another, optionally at a past
    /// `date` (pass `""` for today).
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
        date: &str,
    ) -> Result<Conversion, FixerError> {
        let params = QueryParams::new()
            .with("from", from)
            .with("to", to)
            .with("amount", format_amount(amount))
            .with("date", date);
        self.request("convert", params).await
    }

    /// Daily rates between two dates.
    pub async fn timeseries(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Timeseries, FixerError> {
        self.request("timeseries", date_range(start_date, end_date))
            .await
    }

    /// Rate changes between two dates.
    pub async fn fluctuation(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Fluctuation, FixerError> {
        self.request("fluctuation", date_range(start_date, end_date))
            .await
    }

    fn url(&self, method: &str, params: &QueryParams) -> String {
        build_url(
            self.config.secure(),
            method,
            self.config.api_key(),
            self.config.base_currency(),
            params,
        )
    }

    async fn request<T>(&self, method: &str, params: QueryParams) -> Result<T, FixerError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(method, &params);
        tracing::debug!(
            method = method,
            secure = self.config.secure(),
            "sending fixer.io request"
        );

        let response = self.http_client.execute(HttpRequest::get(url)).await?;
        tracing::trace!(
            method = method,
            status = response.status,
            bytes = response.body.len(),
            "received fixer.io response"
        );

        if let Some(error) = ResponseEnvelope::decode(&response.body)?.failure() {
            return Err(error);
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

impl Debug for FixerClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixerClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// The API expects the end date under `end_data`.
fn date_range(start_date: &str, end_date: &str) -> QueryParams {
    QueryParams::new()
        .with("start_date", start_date)
        .with("end_data", end_date)
}
