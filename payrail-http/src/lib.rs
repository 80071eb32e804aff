//! HTTP transport and request builders for the Payrail API client.
//!
//! This crate supplies the network half of the client: [`client::ApiClient`]
//! executes authenticated requests against the API and hands the raw
//! response bytes to the `payrail` core crate for decoding. Request
//! builders for individual resources live in their own modules.
//!
//! # Modules
//!
//! - [`client`] - The reqwest-based API client and its configuration
//! - [`constants`] - Default base URL and API version pinning
//! - [`error`] - HTTP-layer error types
//! - [`payment_intents`] - Payment intent request builders
//! - [`charges`] - Charge request builders
//!
//! # Example
//!
//! ```no_run
//! use payrail_http::client::{ApiClient, ClientConfig};
//!
//! # async fn run() -> Result<(), payrail_http::error::HttpError> {
//! let client = ApiClient::new(ClientConfig::new("sk_test_123"))?;
//! let intent = client.payment_intents().retrieve("pi_123").await?;
//! println!("status: {:?}", intent.status);
//! # Ok(())
//! # }
//! ```

pub mod charges;
pub mod client;
pub mod constants;
pub mod error;
pub mod payment_intents;
