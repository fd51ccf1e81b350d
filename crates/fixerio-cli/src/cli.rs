//! CLI argument definitions for fixerio.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `symbols` | List supported currency codes |
//! | `latest` | Latest rates |
//! | `historical` | Rates for a past date |
//! | `convert` | Convert an amount between currencies |
//! | `timeseries` | Daily rates between two dates |
//! | `fluctuation` | Rate changes between two dates |
//!
//! # Global Options
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--api-key` | `FIXERIO_API_KEY` | (required) | fixer.io access key |
//! | `--base` | `FIXERIO_BASE` | API default | Base currency |
//! | `--secure` | `FIXERIO_SECURE` | `false` | Use https |
//! | `--timeout-ms` | | `10000` | Request timeout |
//! | `--pretty` | | `false` | Indent JSON output |
//!
//! # Examples
//!
//! ```bash
//! FIXERIO_API_KEY=... fixerio latest USD GBP --base eur
//! fixerio convert GBP JPY 25 --date 2018-02-22 --pretty
//! fixerio timeseries 2024-01-01 2024-01-31
//! ```

use clap::{Args, Parser, Subcommand};

/// Foreign exchange rates from fixer.io.
#[derive(Debug, Parser)]
#[command(name = "fixerio", author, version, about = "Foreign exchange rates from fixer.io")]
pub struct Cli {
    /// fixer.io access key.
    #[arg(long, global = true, env = "FIXERIO_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Base currency all rates are quoted against (API default when empty).
    #[arg(long, global = true, env = "FIXERIO_BASE", default_value = "")]
    pub base: String,

    /// Request over https. Free fixer.io plans only allow http.
    #[arg(long, global = true, env = "FIXERIO_SECURE", default_value_t = false)]
    pub secure: bool,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all supported currency codes with their names.
    Symbols,

    /// Fetch the latest rates.
    ///
    ///   fixerio latest
    ///   fixerio latest USD GBP JPY
    Latest(LatestArgs),

    /// Fetch rates for a past date.
    ///
    ///   fixerio historical 2013-12-24 USD
    Historical(HistoricalArgs),

    /// Convert an amount from one currency to another.
    ///
    ///   fixerio convert GBP JPY 25
    ///   fixerio convert GBP JPY 25 --date 2018-02-22
    Convert(ConvertArgs),

    /// Fetch daily rates between two dates.
    Timeseries(DateRangeArgs),

    /// Fetch rate changes between two dates.
    Fluctuation(DateRangeArgs),
}

#[derive(Debug, Args)]
pub struct LatestArgs {
    /// Currency codes to include; all when omitted.
    pub symbols: Vec<String>,
}

#[derive(Debug, Args)]
pub struct HistoricalArgs {
    /// Date in YYYY-MM-DD form.
    pub date: String,

    /// Currency codes to include; all when omitted.
    pub symbols: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Source currency code.
    pub from: String,

    /// Target currency code.
    pub to: String,

    /// Amount to convert.
    pub amount: f64,

    /// Use the rate of a past date (YYYY-MM-DD).
    #[arg(long, default_value = "")]
    pub date: String,
}

#[derive(Debug, Args)]
pub struct DateRangeArgs {
    /// First date (YYYY-MM-DD).
    pub start_date: String,

    /// Last date (YYYY-MM-DD).
    pub end_date: String,
}
