//! Decode errors and the API error code taxonomy.
//!
//! [`DecodeError`] is the single failure mode of the decoding layer. The
//! remaining types model the machine-readable error codes the API attaches
//! to failed requests and failed payments. Each code enum keeps an
//! `Unknown` catch-all so values introduced by the API after this crate was
//! released decode instead of aborting the surrounding payload.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Failure to decode an API response payload.
///
/// Raised when response bytes are not well-formed JSON or do not match the
/// expected shape. Surfaced directly to the caller; no retry or recovery
/// happens at this layer.
#[derive(Debug, thiserror::Error)]
#[error("decode error: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Top-level classification of an API error.
///
/// Wire format is the `snake_case` string in the error object's `type`
/// field (e.g., `"card_error"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorType {
    /// Internal API failure.
    ApiError,
    /// Failure to connect to the API.
    ApiConnectionError,
    /// Invalid or missing API key.
    AuthenticationError,
    /// The card could not be charged.
    CardError,
    /// An idempotency key was reused with different parameters.
    IdempotencyError,
    /// The request has invalid parameters.
    InvalidRequestError,
    /// Too many requests in too short a time.
    RateLimitError,
    /// An error type this crate does not know about.
    Unknown(String),
}

impl ErrorType {
    /// Returns the `snake_case` string representation matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ApiError => "api_error",
            Self::ApiConnectionError => "api_connection_error",
            Self::AuthenticationError => "authentication_error",
            Self::CardError => "card_error",
            Self::IdempotencyError => "idempotency_error",
            Self::InvalidRequestError => "invalid_request_error",
            Self::RateLimitError => "rate_limit_error",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for ErrorType {
    fn from(s: &str) -> Self {
        match s {
            "api_error" => Self::ApiError,
            "api_connection_error" => Self::ApiConnectionError,
            "authentication_error" => Self::AuthenticationError,
            "card_error" => Self::CardError,
            "idempotency_error" => Self::IdempotencyError,
            "invalid_request_error" => Self::InvalidRequestError,
            "rate_limit_error" => Self::RateLimitError,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Short code describing why a request or charge failed.
///
/// Wire format is the `snake_case` string in the error object's `code`
/// field (e.g., `"card_declined"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The amount is below the minimum the API accepts.
    AmountTooSmall,
    /// The amount is above the maximum the API accepts.
    AmountTooLarge,
    /// The card was declined; `decline_code` carries the issuer's reason.
    CardDeclined,
    /// The card has expired.
    ExpiredCard,
    /// The CVC check failed.
    IncorrectCvc,
    /// The card number is incorrect.
    IncorrectNumber,
    /// A required parameter was missing.
    ParameterMissing,
    /// A provided parameter is not supported for this request.
    ParameterUnknown,
    /// An error occurred while processing the card.
    ProcessingError,
    /// Too many requests in too short a time.
    RateLimit,
    /// The referenced resource does not exist.
    ResourceMissing,
    /// An error code this crate does not know about.
    Unknown(String),
}

impl ErrorCode {
    /// Returns the `snake_case` string representation matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AmountTooSmall => "amount_too_small",
            Self::AmountTooLarge => "amount_too_large",
            Self::CardDeclined => "card_declined",
            Self::ExpiredCard => "expired_card",
            Self::IncorrectCvc => "incorrect_cvc",
            Self::IncorrectNumber => "incorrect_number",
            Self::ParameterMissing => "parameter_missing",
            Self::ParameterUnknown => "parameter_unknown",
            Self::ProcessingError => "processing_error",
            Self::RateLimit => "rate_limit",
            Self::ResourceMissing => "resource_missing",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "amount_too_small" => Self::AmountTooSmall,
            "amount_too_large" => Self::AmountTooLarge,
            "card_declined" => Self::CardDeclined,
            "expired_card" => Self::ExpiredCard,
            "incorrect_cvc" => Self::IncorrectCvc,
            "incorrect_number" => Self::IncorrectNumber,
            "parameter_missing" => Self::ParameterMissing,
            "parameter_unknown" => Self::ParameterUnknown,
            "processing_error" => Self::ProcessingError,
            "rate_limit" => Self::RateLimit,
            "resource_missing" => Self::ResourceMissing,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Issuer-provided reason a card payment was declined.
///
/// Only present when [`ErrorCode::CardDeclined`] is set. Wire format is the
/// `snake_case` string in the error object's `decline_code` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeclineCode {
    /// The card issuer asked the cardholder to contact them.
    CallIssuer,
    /// The card does not support this kind of purchase.
    CardNotSupported,
    /// The allowed charge velocity on the card was exceeded.
    CardVelocityExceeded,
    /// The card does not support the charge currency.
    CurrencyNotSupported,
    /// The issuer declined without a specific reason.
    DoNotHonor,
    /// The card has expired.
    ExpiredCard,
    /// The issuer suspects fraud.
    Fraudulent,
    /// A decline with no further information from the issuer.
    GenericDecline,
    /// The card balance is insufficient.
    InsufficientFunds,
    /// The card was reported lost.
    LostCard,
    /// An error occurred while processing the card.
    ProcessingError,
    /// The card was reported stolen.
    StolenCard,
    /// The transaction is not allowed on this card.
    TransactionNotAllowed,
    /// The issuer asked to retry later.
    TryAgainLater,
    /// A decline code this crate does not know about.
    Unknown(String),
}

impl DeclineCode {
    /// Returns the `snake_case` string representation matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CallIssuer => "call_issuer",
            Self::CardNotSupported => "card_not_supported",
            Self::CardVelocityExceeded => "card_velocity_exceeded",
            Self::CurrencyNotSupported => "currency_not_supported",
            Self::DoNotHonor => "do_not_honor",
            Self::ExpiredCard => "expired_card",
            Self::Fraudulent => "fraudulent",
            Self::GenericDecline => "generic_decline",
            Self::InsufficientFunds => "insufficient_funds",
            Self::LostCard => "lost_card",
            Self::ProcessingError => "processing_error",
            Self::StolenCard => "stolen_card",
            Self::TransactionNotAllowed => "transaction_not_allowed",
            Self::TryAgainLater => "try_again_later",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for DeclineCode {
    fn from(s: &str) -> Self {
        match s {
            "call_issuer" => Self::CallIssuer,
            "card_not_supported" => Self::CardNotSupported,
            "card_velocity_exceeded" => Self::CardVelocityExceeded,
            "currency_not_supported" => Self::CurrencyNotSupported,
            "do_not_honor" => Self::DoNotHonor,
            "expired_card" => Self::ExpiredCard,
            "fraudulent" => Self::Fraudulent,
            "generic_decline" => Self::GenericDecline,
            "insufficient_funds" => Self::InsufficientFunds,
            "lost_card" => Self::LostCard,
            "processing_error" => Self::ProcessingError,
            "stolen_card" => Self::StolenCard,
            "transaction_not_allowed" => Self::TransactionNotAllowed,
            "try_again_later" => Self::TryAgainLater,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl fmt::Display for DeclineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeclineCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeclineCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}
