//! Request URL construction.
//!
//! Every request has the shape
//! `<scheme>://data.fixer.io/api/<method>?access_key=<key>&base=<base>[&<name>=<value>...]`.
//! Optional parameters use an empty string to mean "absent" and are left out of
//! the URL entirely.

/// API host; fixed for every request.
pub const API_HOST: &str = "data.fixer.io";

/// Path prefix placed in front of every method segment.
pub const API_PREFIX: &str = "/api";

/// Ordered query parameters for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an earlier value for the same name.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Entries that will be written to the URL, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (*name, value.as_str()))
    }
}

/// Build the full request URL for `method`.
///
/// `access_key` and `base` are always written, even when `base` is empty.
pub fn build_url(
    secure: bool,
    method: &str,
    api_key: &str,
    base: &str,
    params: &QueryParams,
) -> String {
    let scheme = if secure { "https" } else { "http" };
    let mut url = format!(
        "{scheme}://{API_HOST}{API_PREFIX}/{}?access_key={}&base={}",
        encode_value(method),
        encode_value(api_key),
        encode_value(base),
    );

    for (name, value) in params.present() {
        url.push('&');
        url.push_str(name);
        url.push('=');
        url.push_str(&encode_value(value));
    }

    url
}

/// Join currency codes into the comma-separated `symbols` value.
pub fn join_symbols<S: AsRef<str>>(symbols: &[S]) -> String {
    symbols
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Shortest decimal representation that parses back to `amount`, with no
/// exponent and no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}

// Commas are list separators for `symbols` and stay literal.
fn encode_value(value: &str) -> String {
    value
        .split(',')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
