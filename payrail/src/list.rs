//! The paginated list envelope.
//!
//! Collection endpoints wrap their results in a common envelope:
//!
//! ```json
//! { "object": "list", "data": [...], "has_more": true, "url": "/v1/charges" }
//! ```
//!
//! [`List`] is the typed form of that envelope. The `object` field decodes
//! through [`ListObject`], a marker that only accepts the literal string
//! `"list"`, so an envelope can never be confused with a resource object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::skip_serializing_none;

/// Marker for the list envelope's `object` field.
///
/// Serializes as the literal string `"list"` and rejects any other value on
/// deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListObject;

impl Serialize for ListObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("list")
    }
}

impl<'de> Deserialize<'de> for ListObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == "list" {
            Ok(Self)
        } else {
            Err(serde::de::Error::custom(format!(
                "expected object \"list\", got \"{s}\""
            )))
        }
    }
}

/// A page of results from a collection endpoint.
///
/// Entries in [`data`](Self::data) keep the order the API returned them in.
/// When [`has_more`](Self::has_more) is `true`, the next page starts after
/// the last entry of this one (see [`ListParams::starting_after`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Envelope marker; always the string `"list"` on the wire.
    pub object: ListObject,
    /// The entries of this page, in API order.
    pub data: Vec<T>,
    /// Whether more entries exist beyond this page.
    pub has_more: bool,
    /// Total number of entries in the collection, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// The URL this page was fetched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<T> List<T> {
    /// Returns the number of entries in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the entries of this page in API order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the envelope and returns the entries.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Objects that can anchor cursor pagination.
///
/// Implemented by list-able resources so traversal helpers can continue a
/// listing from the last entry of the previous page.
pub trait PagedObject {
    /// The object's unique API identifier.
    fn id(&self) -> &str;
}

/// Cursor pagination parameters shared by all collection endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Page size limit (the API caps this server-side).
    pub limit: Option<u64>,
    /// Return entries strictly after the object with this ID.
    pub starting_after: Option<String>,
    /// Return entries strictly before the object with this ID.
    pub ending_before: Option<String>,
}

impl ListParams {
    /// Creates parameters with the given page size limit.
    #[must_use]
    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_length_and_order() {
        let json = r#"{
            "object": "list",
            "has_more": true,
            "data": ["a", "b", "c"]
        }"#;
        let list: List<String> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.has_more);
        assert_eq!(list.data, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_list_empty_page() {
        let json = r#"{"object": "list", "has_more": false, "data": []}"#;
        let list: List<String> = serde_json::from_str(json).unwrap();
        assert!(list.is_empty());
        assert!(!list.has_more);
    }

    #[test]
    fn test_list_object_rejects_other_markers() {
        let json = r#"{"object": "charge", "has_more": false, "data": []}"#;
        let result: Result<List<String>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_total_count_optional() {
        let json = r#"{"object": "list", "has_more": false, "data": [], "total_count": 7}"#;
        let list: List<String> = serde_json::from_str(json).unwrap();
        assert_eq!(list.total_count, Some(7));
    }

    #[test]
    fn test_list_params_skip_unset_fields() {
        let params = ListParams::with_limit(10);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({"limit": 10}));
    }
}
