//! HTTP-specific constants for the Payrail API.

/// Default API base URL, including the version path segment.
pub const DEFAULT_API_BASE_URL: &str = "https://api.payrail.dev/v1";

/// API version this crate's types were written against.
///
/// Pinning the version keeps response shapes stable regardless of the
/// account's default version.
pub const API_VERSION: &str = "2025-06-30";

/// Request header carrying the pinned API version.
pub const VERSION_HEADER: &str = "Payrail-Version";
