//! # fixerio-core
//!
//! Client for the [fixer.io](https://fixer.io) foreign exchange rates and
//! currency conversion JSON API.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`FixerClient`] and its query operations |
//! | [`config`] | API key, base currency and scheme settings |
//! | [`envelope`] | `{success, error}` wrapper checked before decoding |
//! | [`error`] | Client error type |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`models`] | Decoded result records |
//! | [`query`] | Request URL construction |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixerio_core::FixerClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fixerio_core::FixerError> {
//!     let api_key = std::env::var("FIXERIO_API_KEY").unwrap_or_default();
//!     let client = FixerClient::new(api_key, "eur", true)?;
//!
//!     let latest = client.latest(&["USD", "GBP"]).await?;
//!     println!("1 {} = {:?} USD", latest.base, latest.rate("USD"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use fixerio_core::{FixerError, FixerErrorKind};
//!
//! fn describe(error: &FixerError) -> String {
//!     match error.kind() {
//!         FixerErrorKind::Api => format!("rejected by fixer.io: {}", error.message()),
//!         FixerErrorKind::Transport if error.retryable() => String::from("try again later"),
//!         _ => error.to_string(),
//!     }
//! }
//! ```
//!
//! API keys are sourced by the caller and never logged.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod models;
pub mod query;

pub use client::FixerClient;

pub use config::ClientConfig;

pub use envelope::{ErrorDetail, ResponseEnvelope};

pub use error::{FixerError, FixerErrorKind};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

pub use models::{
    Conversion, ConversionInfo, ConversionQuery, Fluctuation, HistoricalRates, LatestRates,
    NestedRates, RateChange, Rates, SymbolTable, Timeseries,
};

pub use query::{build_url, QueryParams, API_HOST, API_PREFIX};
