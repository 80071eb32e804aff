//! Expandable object references.
//!
//! Reference fields in API responses are returned as a bare object ID by
//! default; when the request asked for expansion, the full object is
//! embedded instead. [`Expandable`] decodes both forms.

use serde::{Deserialize, Serialize};

/// A reference field that is either an object ID or the full object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// The collapsed form: just the referenced object's ID.
    Id(String),
    /// The expanded form: the full referenced object.
    Object(Box<T>),
}

impl<T> Expandable<T> {
    /// Returns the bare ID if this reference is collapsed.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Object(_) => None,
        }
    }

    /// Returns the full object if this reference is expanded.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }

    /// Consumes the reference and returns the full object, if expanded.
    #[must_use]
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(*object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::PaymentIntent;

    #[test]
    fn test_expandable_decodes_bare_id() {
        let reference: Expandable<PaymentIntent> = serde_json::from_str("\"pi_123\"").unwrap();
        assert_eq!(reference.id(), Some("pi_123"));
        assert!(reference.as_object().is_none());
    }

    #[test]
    fn test_expandable_decodes_full_object() {
        let reference: Expandable<PaymentIntent> =
            serde_json::from_str("{\"id\": \"pi_123\", \"object\": \"payment_intent\"}").unwrap();
        assert!(reference.id().is_none());
        assert_eq!(reference.as_object().unwrap().id, "pi_123");
    }
}
