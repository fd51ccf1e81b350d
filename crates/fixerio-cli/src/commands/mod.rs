mod convert;
mod rates;
mod series;

use std::sync::Arc;
use std::time::Duration;

use fixerio_core::{FixerClient, ReqwestHttpClient};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Run the selected command and return its result as JSON.
pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = build_client(cli)?;

    match &cli.command {
        Command::Symbols => Ok(serde_json::to_value(client.symbols().await?)?),
        Command::Latest(args) => rates::latest(&client, args).await,
        Command::Historical(args) => rates::historical(&client, args).await,
        Command::Convert(args) => convert::run(&client, args).await,
        Command::Timeseries(args) => series::timeseries(&client, args).await,
        Command::Fluctuation(args) => series::fluctuation(&client, args).await,
    }
}

fn build_client(cli: &Cli) -> Result<FixerClient, CliError> {
    let http = reqwest::Client::builder()
        .user_agent(concat!("fixerio-cli/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_millis(cli.timeout_ms))
        .build()?;

    let client = FixerClient::new(cli.api_key.as_str(), &cli.base, cli.secure)?
        .with_http_client(Arc::new(ReqwestHttpClient::with_client(http)));
    tracing::debug!(
        base = client.base_currency(),
        secure = cli.secure,
        timeout_ms = cli.timeout_ms,
        "configured fixer.io client"
    );
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fixerio_core::FixerErrorKind;

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let cli = Cli::try_parse_from(["fixerio", "--api-key", "", "symbols"]).expect("parses");

        match build_client(&cli) {
            Err(CliError::Fixer(error)) => assert_eq!(error.kind(), FixerErrorKind::Configuration),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn client_takes_base_and_scheme_from_flags() {
        let cli = Cli::try_parse_from([
            "fixerio", "--api-key", "k", "--base", "gbp", "--secure", "symbols",
        ])
        .expect("parses");

        let client = build_client(&cli).expect("valid client");
        assert_eq!(client.base_currency(), "GBP");
        assert!(client.config().secure());
    }
}
