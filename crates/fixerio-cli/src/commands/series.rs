use fixerio_core::FixerClient;
use serde_json::Value;

use crate::cli::DateRangeArgs;
use crate::error::CliError;

pub async fn timeseries(client: &FixerClient, args: &DateRangeArgs) -> Result<Value, CliError> {
    let series = client
        .timeseries(&args.start_date, &args.end_date)
        .await?;
    Ok(serde_json::to_value(series)?)
}

pub async fn fluctuation(client: &FixerClient, args: &DateRangeArgs) -> Result<Value, CliError> {
    let fluctuation = client
        .fluctuation(&args.start_date, &args.end_date)
        .await?;
    Ok(serde_json::to_value(fluctuation)?)
}
