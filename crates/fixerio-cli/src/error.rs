use fixerio_core::{FixerError, FixerErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fixer(#[from] FixerError),

    #[error("failed to build http client: {0}")]
    HttpSetup(#[from] reqwest::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Fixer(error) => match error.kind() {
                FixerErrorKind::Configuration => 2,
                FixerErrorKind::Api => 3,
                FixerErrorKind::Decode => 4,
                FixerErrorKind::Transport => 6,
            },
            Self::HttpSetup(_) => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
