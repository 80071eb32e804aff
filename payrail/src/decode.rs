//! Entry points for decoding raw API response bytes.
//!
//! The transport layer hands back raw JSON bytes; these functions turn them
//! into typed values, failing with [`DecodeError`] when the bytes are not
//! well-formed JSON or do not match the expected shape. Variant selection
//! for polymorphic payloads happens inside the individual `Deserialize`
//! impls in [`crate::resources`].

use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// Decodes a typed value from raw JSON bytes.
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are not well-formed JSON or the
/// JSON does not match the shape of `T`.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes a typed value from a JSON string.
///
/// # Errors
///
/// Returns [`DecodeError`] if the string is not well-formed JSON or the
/// JSON does not match the shape of `T`.
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(s)?)
}

/// Decodes a typed value from an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`DecodeError`] if the value does not match the shape of `T`.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, DecodeError> {
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_malformed_json() {
        let result: Result<serde_json::Value, _> = from_slice(b"{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str_type_mismatch() {
        let result: Result<Vec<u64>, _> = from_str("{\"a\": 1}");
        assert!(result.is_err());
    }
}
