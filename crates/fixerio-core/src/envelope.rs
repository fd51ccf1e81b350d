//! Generic `{success, error}` wrapper found on every fixer.io response.
//!
//! The envelope is decoded first as a discriminator. Its fields are a subset
//! of every concrete response shape, so a well-formed success body decodes
//! into it as well.

use serde::{Deserialize, Serialize};

use crate::error::FixerError;

/// Error payload reported by the API. Absent fields decode to zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub code: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
}

impl ErrorDetail {
    /// `info` when present, else `type`, else the numeric code.
    pub fn message(&self) -> String {
        if !self.info.is_empty() {
            self.info.clone()
        } else if !self.kind.is_empty() {
            self.kind.clone()
        } else {
            self.code.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub error: Option<ErrorDetail>,
}

impl ResponseEnvelope {
    pub fn decode(body: &str) -> Result<Self, FixerError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The API error carried by this envelope, if it reports one.
    ///
    /// A failure needs both `success: false` and a non-zero error code.
    pub fn failure(&self) -> Option<FixerError> {
        let detail = self.error.as_ref()?;
        if self.success || detail.code == 0 {
            return None;
        }

        Some(FixerError::Api {
            code: detail.code,
            message: detail.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixerErrorKind;

    #[test]
    fn info_takes_priority_over_type() {
        let envelope = ResponseEnvelope::decode(
            r#"{"success":false,"error":{"code":104,"type":"usage_limit_reached","info":"plan limit"}}"#,
        )
        .expect("valid envelope");

        let error = envelope.failure().expect("api failure");
        assert_eq!(error.code(), Some(104));
        assert_eq!(error.message(), "plan limit");
    }

    #[test]
    fn type_is_used_when_info_is_empty() {
        let envelope = ResponseEnvelope::decode(
            r#"{"success":false,"error":{"code":101,"type":"invalid_access_key","info":""}}"#,
        )
        .expect("valid envelope");

        assert_eq!(
            envelope.failure().map(|error| error.message()).as_deref(),
            Some("invalid_access_key")
        );
    }

    #[test]
    fn code_is_used_when_info_and_type_are_missing() {
        let envelope = ResponseEnvelope::decode(r#"{"success":false,"error":{"code":202}}"#)
            .expect("valid envelope");

        let error = envelope.failure().expect("api failure");
        assert_eq!(error.kind(), FixerErrorKind::Api);
        assert_eq!(error.message(), "202");
    }

    #[test]
    fn zero_code_or_success_flag_is_not_a_failure() {
        let no_code = ResponseEnvelope::decode(r#"{"success":false,"error":{"info":"odd"}}"#)
            .expect("valid envelope");
        assert!(no_code.failure().is_none());

        let succeeded =
            ResponseEnvelope::decode(r#"{"success":true,"error":{"code":104,"info":"ignored"}}"#)
                .expect("valid envelope");
        assert!(succeeded.failure().is_none());

        let bare = ResponseEnvelope::decode(r#"{"success":false}"#).expect("valid envelope");
        assert!(bare.failure().is_none());
    }

    #[test]
    fn success_payload_decodes_as_envelope() {
        let envelope = ResponseEnvelope::decode(
            r#"{"success":true,"timestamp":1519296206,"base":"USD","rates":{"EUR":0.9}}"#,
        )
        .expect("success body is a valid envelope");

        assert!(envelope.success);
        assert!(envelope.error.is_none());
    }

    #[test]
    fn non_object_body_is_a_decode_error() {
        let error = ResponseEnvelope::decode("<html>502</html>").expect_err("not json");
        assert_eq!(error.kind(), FixerErrorKind::Decode);

        let error = ResponseEnvelope::decode("[1,2,3]").expect_err("wrong shape");
        assert_eq!(error.kind(), FixerErrorKind::Decode);
    }
}
