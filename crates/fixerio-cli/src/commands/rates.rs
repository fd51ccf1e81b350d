use fixerio_core::FixerClient;
use serde_json::Value;

use crate::cli::{HistoricalArgs, LatestArgs};
use crate::error::CliError;

pub async fn latest(client: &FixerClient, args: &LatestArgs) -> Result<Value, CliError> {
    let symbols = normalize(&args.symbols);
    let rates = client.latest(&symbols).await?;
    Ok(serde_json::to_value(rates)?)
}

pub async fn historical(client: &FixerClient, args: &HistoricalArgs) -> Result<Value, CliError> {
    let symbols = normalize(&args.symbols);
    let rates = client.historical(&args.date, &symbols).await?;
    Ok(serde_json::to_value(rates)?)
}

// Accept `usd,eur` as well as `usd eur`.
fn normalize(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
        .collect()
}
