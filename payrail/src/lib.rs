//! Core types for the Payrail payment processing API.
//!
//! This crate provides the typed wire format for Payrail API responses and
//! the decoding logic that turns raw JSON bytes into those types. It is
//! transport-agnostic: fetching bytes from the API is delegated to an
//! implementation of [`transport::Transport`], with an HTTP implementation
//! provided by the separate `payrail-http` crate.
//!
//! # Overview
//!
//! Payrail responses are plain JSON objects, several of which are
//! polymorphic: a discriminant field (`type` or `object`) selects which
//! concrete shape the remaining fields follow. Those payloads decode into
//! Rust enums with one variant per discriminant value. Discriminant values
//! this crate does not know about degrade to an `Unknown` variant instead of
//! failing the decode, so new API values never break existing callers.
//!
//! # Modules
//!
//! - [`decode`] - Entry points for decoding raw response bytes
//! - [`error`] - Decode errors and the API error code taxonomy
//! - [`expand`] - Expandable object references (ID string or full object)
//! - [`list`] - The paginated list envelope
//! - [`resources`] - Typed API resources (payment intents, charges, sources)
//! - [`timestamp`] - Unix timestamp wire type
//! - [`transport`] - The request seam implemented by transport crates

pub mod decode;
pub mod error;
pub mod expand;
pub mod list;
pub mod resources;
pub mod timestamp;
pub mod transport;
