//! The request seam between typed decoding and the network.
//!
//! This crate never performs I/O itself. Anything that can execute
//! `request(method, path, params)` against the API and hand back the raw
//! response bytes can drive it, via the [`Transport`] trait. The
//! `payrail-http` crate provides the reqwest-based implementation; tests
//! can substitute an in-memory one.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type returned by [`Transport`] methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Retrieve a resource or collection.
    Get,
    /// Create or mutate a resource.
    Post,
    /// Delete a resource.
    Delete,
}

impl Method {
    /// Returns the method's canonical uppercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a [`Transport`] implementation.
///
/// Transports collapse their implementation-specific failures (connection
/// errors, non-2xx statuses, ...) into a message at this boundary; richer
/// error types stay in the transport crate.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    /// Creates a transport error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<String> for TransportError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for TransportError {
    fn from(message: &str) -> Self {
        Self(message.to_owned())
    }
}

/// Executes API requests and returns raw JSON response bytes.
///
/// `params` carries the request parameters as a JSON object; transports
/// send it as the query string for [`Method::Get`]/[`Method::Delete`] and
/// as the request body for [`Method::Post`].
pub trait Transport: Send + Sync {
    /// Executes a request against the API and returns the response bytes.
    fn request<'a>(
        &'a self,
        method: Method,
        path: &'a str,
        params: Option<&'a serde_json::Value>,
    ) -> BoxFuture<'a, Result<Vec<u8>, TransportError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::from("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }
}
