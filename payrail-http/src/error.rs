//! Error types for the HTTP transport layer.

use payrail::error::DecodeError;
use payrail::resources::ApiErrorDetail;

/// Errors that can occur while executing an API request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HttpError {
    /// The HTTP request itself failed (connection, timeout, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response bytes could not be decoded into the expected type.
    #[error("{0}")]
    Decode(#[from] DecodeError),

    /// The API returned a structured error response.
    #[error("API error ({status}): {detail}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// The decoded error object.
        detail: ApiErrorDetail,
    },

    /// The API returned a non-success status without a decodable error body.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The configured API base URL is not a valid URL.
    #[error("invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl HttpError {
    /// Returns the structured API error, if this is one.
    #[must_use]
    pub fn api_detail(&self) -> Option<&ApiErrorDetail> {
        match self {
            Self::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
