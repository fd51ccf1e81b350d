use std::fmt::{Debug, Formatter};

use crate::error::FixerError;

/// Settings read on every request.
///
/// The base currency is stored uppercased. An empty base is allowed and lets
/// the API fall back to its default (EUR).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_currency: String,
    secure: bool,
}

impl ClientConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_currency: impl AsRef<str>,
        secure: bool,
    ) -> Result<Self, FixerError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(FixerError::configuration("api key is required"));
        }

        Ok(Self {
            api_key,
            base_currency: base_currency.as_ref().to_uppercase(),
            secure,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub const fn secure(&self) -> bool {
        self.secure
    }

    /// Replace the base currency. No check is made that the code exists; the
    /// API reports unknown codes on the next call.
    pub fn set_base_currency(&mut self, code: impl AsRef<str>) {
        self.base_currency = code.as_ref().to_uppercase();
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_currency", &self.base_currency)
            .field("secure", &self.secure)
            .finish()
    }
}
