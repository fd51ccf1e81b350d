use thiserror::Error;

use crate::http_client::HttpError;

/// Coarse classification of a [`FixerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixerErrorKind {
    Configuration,
    Transport,
    Decode,
    Api,
}

/// Errors surfaced by the fixer.io client.
#[derive(Debug, Error)]
pub enum FixerError {
    /// Client construction rejected its input.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// The API could not be reached or its response could not be read.
    #[error("fixer.io transport error: {0}")]
    Transport(#[from] HttpError),

    /// The body is not JSON or does not have the expected shape.
    #[error("failed to decode fixer.io response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with `success: false` and an error code.
    #[error("fixer.io request error: {message}")]
    Api { code: i64, message: String },
}

impl FixerError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub const fn kind(&self) -> FixerErrorKind {
        match self {
            Self::Configuration(_) => FixerErrorKind::Configuration,
            Self::Transport(_) => FixerErrorKind::Transport,
            Self::Decode(_) => FixerErrorKind::Decode,
            Self::Api { .. } => FixerErrorKind::Api,
        }
    }

    /// Whether issuing the same call again may succeed. The client itself
    /// never retries.
    pub fn retryable(&self) -> bool {
        match self {
            Self::Transport(error) => error.retryable(),
            _ => false,
        }
    }

    /// Numeric API error code, for [`FixerError::Api`] only.
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Human-readable message without the category prefix used by `Display`.
    pub fn message(&self) -> String {
        match self {
            Self::Configuration(message) | Self::Api { message, .. } => message.clone(),
            Self::Transport(error) => error.message().to_owned(),
            Self::Decode(error) => error.to_string(),
        }
    }
}
