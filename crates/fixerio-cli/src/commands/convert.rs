use fixerio_core::FixerClient;
use serde_json::Value;

use crate::cli::ConvertArgs;
use crate::error::CliError;

pub async fn run(client: &FixerClient, args: &ConvertArgs) -> Result<Value, CliError> {
    let conversion = client
        .convert(&args.from, &args.to, args.amount, &args.date)
        .await?;
    Ok(serde_json::to_value(conversion)?)
}
