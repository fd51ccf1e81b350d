//! Decoded result records, one per endpoint.
//!
//! Every field falls back to its zero value when the API leaves it out.
//!
//! | Endpoint | Record |
//! |----------|--------|
//! | `symbols` | [`SymbolTable`] |
//! | `latest` | [`LatestRates`] |
//! | `<YYYY-MM-DD>` | [`HistoricalRates`] |
//! | `convert` | [`Conversion`] |
//! | `timeseries` | [`Timeseries`] |
//! | `fluctuation` | [`Fluctuation`] |

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Currency code → rate.
pub type Rates = BTreeMap<String, f64>;

/// Date (or currency code) → inner map.
pub type NestedRates = BTreeMap<String, Rates>;

/// Supported currency codes and their display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolTable {
    pub success: bool,
    pub symbols: BTreeMap<String, String>,
}

impl SymbolTable {
    pub fn name(&self, code: &str) -> Option<&str> {
        self.symbols.get(code).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestRates {
    pub success: bool,
    pub timestamp: i64,
    pub base: String,
    pub date: String,
    pub rates: Rates,
}

impl LatestRates {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// `timestamp` as a UTC datetime; `None` when absent or out of range.
    pub fn as_of(&self) -> Option<OffsetDateTime> {
        unix_time(self.timestamp)
    }
}

/// Rates for a past date: the `latest` shape plus the `historical` flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRates {
    #[serde(flatten)]
    pub rates: LatestRates,
    #[serde(default)]
    pub historical: bool,
}

impl HistoricalRates {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.rate(code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionQuery {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionInfo {
    pub timestamp: i64,
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversion {
    pub success: bool,
    pub query: ConversionQuery,
    pub info: ConversionInfo,
    #[serde(deserialize_with = "lenient_bool")]
    pub historical: bool,
    pub date: String,
    pub result: f64,
}

impl Conversion {
    pub fn as_of(&self) -> Option<OffsetDateTime> {
        unix_time(self.info.timestamp)
    }
}

/// Daily rates between two dates, keyed by date then currency code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeseries {
    pub success: bool,
    pub timeseries: bool,
    pub start_date: String,
    pub end_date: String,
    pub base: String,
    pub rates: NestedRates,
}

impl Timeseries {
    pub fn rates_on(&self, date: &str) -> Option<&Rates> {
        self.rates.get(date)
    }
}

/// Change of each rate between two dates.
///
/// The live API keys `rates` by currency code, each holding `start_rate`,
/// `end_rate`, `change` and `change_pct`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fluctuation {
    pub success: bool,
    pub fluctuation: bool,
    pub start_date: String,
    pub end_date: String,
    pub base: String,
    pub rates: NestedRates,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateChange {
    pub start_rate: f64,
    pub end_rate: f64,
    pub change: f64,
    pub change_pct: f64,
}

impl Fluctuation {
    /// Typed view of the entry for `code`; `None` unless all four figures are present.
    pub fn change(&self, code: &str) -> Option<RateChange> {
        let entry = self.rates.get(code)?;
        Some(RateChange {
            start_rate: *entry.get("start_rate")?,
            end_rate: *entry.get("end_rate")?,
            change: *entry.get("change")?,
            change_pct: *entry.get("change_pct")?,
        })
    }
}

// The convert endpoint sends `"historical": ""` for non-historical queries.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => Ok(value),
        Some(Flag::Text(text)) => Ok(text.eq_ignore_ascii_case("true") || text == "1"),
        None => Ok(false),
    }
}

fn unix_time(timestamp: i64) -> Option<OffsetDateTime> {
    if timestamp == 0 {
        return None;
    }
    OffsetDateTime::from_unix_timestamp(timestamp).ok()
}
