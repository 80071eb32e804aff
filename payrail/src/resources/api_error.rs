//! Structured API error objects.
//!
//! The same error shape appears in two places: as the body of the API's
//! `{"error": {...}}` failure envelope, and embedded in resources that
//! record a failed payment attempt (`payment_intent.last_payment_error`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt;

use crate::error::{DeclineCode, ErrorCode, ErrorType};
use crate::resources::PaymentSource;

/// Details of a failed request or failed payment attempt.
///
/// The `source` field is itself polymorphic: its shape depends on the
/// nested `object` discriminant (see [`PaymentSource`]).
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Classification of the error.
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    /// ID of the charge the failure relates to, if any.
    pub charge: Option<String>,
    /// Short code describing the failure.
    pub code: Option<ErrorCode>,
    /// Issuer decline reason, present for declined card payments.
    pub decline_code: Option<DeclineCode>,
    /// Link to documentation about the error code.
    pub doc_url: Option<String>,
    /// Human-readable description of the error.
    pub message: Option<String>,
    /// Name of the request parameter the error relates to, if any.
    pub param: Option<String>,
    /// The payment source involved in the failure.
    pub source: Option<PaymentSource>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.error_type),
            None => write!(f, "{}", self.error_type),
        }
    }
}

impl std::error::Error for ApiErrorDetail {}

/// The `{"error": {...}}` wrapper around failure responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The wrapped error object.
    pub error: ApiErrorDetail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_decode() {
        let body = json!({
            "error": {
                "type": "invalid_request_error",
                "code": "parameter_missing",
                "message": "Missing required param: amount.",
                "param": "amount"
            }
        });

        let envelope: ErrorEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.error.error_type, ErrorType::InvalidRequestError);
        assert_eq!(envelope.error.code, Some(ErrorCode::ParameterMissing));
        assert_eq!(envelope.error.param.as_deref(), Some("amount"));
        assert!(envelope.error.source.is_none());
    }

    #[test]
    fn test_error_detail_display_includes_message() {
        let detail = ApiErrorDetail {
            error_type: ErrorType::CardError,
            charge: None,
            code: None,
            decline_code: None,
            doc_url: None,
            message: Some("Your card was declined.".to_owned()),
            param: None,
            source: None,
        };
        assert_eq!(detail.to_string(), "card_error: Your card was declined.");
    }
}
