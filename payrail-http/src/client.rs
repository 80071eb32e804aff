//! The reqwest-based API client.
//!
//! [`ApiClient`] executes authenticated requests and returns raw response
//! bytes; typed decoding happens in the `payrail` core crate. It also
//! implements [`payrail::transport::Transport`], so anything written
//! against the core seam can be driven by it.

use std::time::Duration;

use payrail::decode;
use payrail::resources::ErrorEnvelope;
use payrail::transport::{BoxFuture, Method, Transport, TransportError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::charges::Charges;
use crate::constants::{API_VERSION, DEFAULT_API_BASE_URL, VERSION_HEADER};
use crate::error::HttpError;
use crate::payment_intents::PaymentIntents;

/// Configuration for [`ApiClient`].
pub struct ClientConfig {
    /// Secret API key used for bearer authentication.
    pub api_key: String,

    /// API base URL (without trailing slash).
    pub api_base: String,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout.
    pub http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    /// Creates a config with the given secret API key and default base URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
            http_client: None,
        }
    }

    /// Sets the API base URL (e.g., for test or mock servers).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

/// Async HTTP client for the Payrail API.
///
/// Sends bearer-authenticated JSON requests, pins the API version via the
/// `Payrail-Version` header, and decodes the `{"error": {...}}` envelope
/// on non-success responses. Retry, backoff, and rate limiting are left to
/// the caller.
pub struct ApiClient {
    api_base: String,
    api_key: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the configured base URL does
    /// not parse.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let api_base = config.api_base.trim_end_matches('/').to_owned();
        Url::parse(&api_base)?;

        let client = config.http_client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(config.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .expect("failed to build reqwest::Client")
        });

        Ok(Self {
            api_base,
            api_key: config.api_key,
            client,
        })
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the payment intent request builders.
    #[must_use]
    pub fn payment_intents(&self) -> PaymentIntents<'_> {
        PaymentIntents::new(self)
    }

    /// Returns the charge request builders.
    #[must_use]
    pub fn charges(&self) -> Charges<'_> {
        Charges::new(self)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Executes a request and returns the raw response bytes.
    ///
    /// `params` is sent as the query string for GET/DELETE and as the JSON
    /// request body for POST. Query parameters must be a flat object.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] when the API responds with a structured
    /// error, [`HttpError::Status`] for other non-success responses, and
    /// [`HttpError::Request`] on connection-level failures.
    pub async fn request_bytes(
        &self,
        method: Method,
        path: &str,
        params: Option<&serde_json::Value>,
    ) -> Result<Vec<u8>, HttpError> {
        let url = self.url_for(path);
        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        request = request
            .bearer_auth(&self.api_key)
            .header(VERSION_HEADER, API_VERSION);

        if let Some(params) = params {
            request = match method {
                Method::Post => request.json(params),
                Method::Get | Method::Delete => request.query(params),
            };
        }

        debug!(method = %method, path, "sending API request");
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(method = %method, path, status = %status, "API response received");

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        match decode::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => Err(HttpError::Api {
                status: status.as_u16(),
                detail: envelope.error,
            }),
            Err(_) => Err(HttpError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }),
        }
    }

    /// GETs `path` and decodes the response.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let bytes = self.request_bytes(Method::Get, path, None).await?;
        Ok(decode::from_slice(&bytes)?)
    }

    /// GETs `path` with query parameters and decodes the response.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn get_query_json<T, P>(&self, path: &str, params: &P) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let params = serde_json::to_value(params).map_err(decode_error)?;
        let bytes = self
            .request_bytes(Method::Get, path, Some(&params))
            .await?;
        Ok(decode::from_slice(&bytes)?)
    }

    /// POSTs `params` as JSON to `path` and decodes the response.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn post_json<T, P>(&self, path: &str, params: &P) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let params = serde_json::to_value(params).map_err(decode_error)?;
        let bytes = self
            .request_bytes(Method::Post, path, Some(&params))
            .await?;
        Ok(decode::from_slice(&bytes)?)
    }
}

fn decode_error(err: serde_json::Error) -> HttpError {
    HttpError::Decode(err.into())
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl Transport for ApiClient {
    fn request<'a>(
        &'a self,
        method: Method,
        path: &'a str,
        params: Option<&'a serde_json::Value>,
    ) -> BoxFuture<'a, Result<Vec<u8>, TransportError>> {
        Box::pin(async move {
            self.request_bytes(method, path, params)
                .await
                .map_err(|e| TransportError::new(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payrail::error::ErrorType;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ApiClient {
        ApiClient::new(ClientConfig::new("sk_test_123").with_api_base(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_request_sends_auth_and_version_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_intents/pi_123"))
            .and(header("Authorization", "Bearer sk_test_123"))
            .and(header(VERSION_HEADER, API_VERSION))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "pi_123", "object": "payment_intent"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let bytes = client
            .request_bytes(Method::Get, "payment_intents/pi_123", None)
            .await
            .unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn test_error_envelope_surfaces_as_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment_intents"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": {
                    "type": "card_error",
                    "code": "card_declined",
                    "decline_code": "insufficient_funds",
                    "message": "Your card has insufficient funds."
                }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let err = client
            .request_bytes(Method::Post, "payment_intents", Some(&json!({"amount": 100})))
            .await
            .unwrap_err();

        match err {
            HttpError::Api { status, detail } => {
                assert_eq!(status, 402);
                assert_eq!(detail.error_type, ErrorType::CardError);
                assert_eq!(
                    detail.message.as_deref(),
                    Some("Your card has insufficient funds.")
                );
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_error_body_degrades_to_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_intents/pi_123"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let err = client
            .request_bytes(Method::Get, "payment_intents/pi_123", None)
            .await
            .unwrap_err();

        match err {
            HttpError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_trait_returns_raw_bytes() {
        let mock_server = MockServer::start().await;
        let body = json!({"id": "ch_123", "object": "charge"});

        Mock::given(method("GET"))
            .and(path("/charges/ch_123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let transport: &dyn Transport = &client;
        let bytes = transport
            .request(Method::Get, "charges/ch_123", None)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, body);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = ApiClient::new(ClientConfig::new("sk_test_123").with_api_base("not a url"));
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let config = ClientConfig::new("sk_live_supersecret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk_live_supersecret"));
        assert!(rendered.contains("<redacted>"));
    }
}
