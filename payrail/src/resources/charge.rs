//! Charge objects.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::skip_serializing_none;

use crate::expand::Expandable;
use crate::list::PagedObject;
use crate::resources::PaymentIntent;
use crate::timestamp::Timestamp;

/// A single charge attempt against a payment source.
///
/// Charges embedded in other resources can be partial objects, so every
/// field except `id` tolerates absence.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Unique identifier of the charge.
    pub id: String,
    /// Amount in the smallest currency unit (e.g., cents).
    #[serde(default)]
    pub amount: i64,
    /// Lowercase ISO currency code.
    pub currency: Option<String>,
    /// When the charge was created.
    pub created: Option<Timestamp>,
    /// Whether the charge succeeded in moving funds.
    #[serde(default)]
    pub paid: bool,
    /// Lifecycle status of the charge.
    pub status: Option<ChargeStatus>,
    /// The payment intent this charge belongs to, collapsed or expanded.
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    /// Human-readable failure description, for failed charges.
    pub failure_message: Option<String>,
}

impl PagedObject for Charge {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Lifecycle status of a charge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChargeStatus {
    /// The charge succeeded.
    Succeeded,
    /// The charge is awaiting settlement.
    Pending,
    /// The charge failed.
    Failed,
    /// A status this crate does not know about.
    Unknown(String),
}

impl ChargeStatus {
    /// Returns the `snake_case` string representation matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for ChargeStatus {
    fn from(s: &str) -> Self {
        match s {
            "succeeded" => Self::Succeeded,
            "pending" => Self::Pending,
            "failed" => Self::Failed,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl std::fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChargeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChargeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charge_decode_full_object() {
        let payload = json!({
            "id": "ch_123",
            "object": "charge",
            "amount": 2000,
            "currency": "usd",
            "created": 1_699_999_999,
            "paid": true,
            "status": "succeeded",
            "payment_intent": "pi_123"
        });

        let charge: Charge = serde_json::from_value(payload).unwrap();
        assert_eq!(charge.id, "ch_123");
        assert_eq!(charge.amount, 2000);
        assert!(charge.paid);
        assert_eq!(charge.status, Some(ChargeStatus::Succeeded));
        assert_eq!(charge.payment_intent.unwrap().id(), Some("pi_123"));
    }

    #[test]
    fn test_charge_decode_partial_object() {
        // Nested contexts can carry charges with only identifying fields.
        let charge: Charge =
            serde_json::from_value(json!({"id": "ch_123", "object": "charge"})).unwrap();
        assert_eq!(charge.id, "ch_123");
        assert_eq!(charge.amount, 0);
        assert!(!charge.paid);
        assert!(charge.status.is_none());
    }

    #[test]
    fn test_charge_unknown_status_degrades() {
        let charge: Charge =
            serde_json::from_value(json!({"id": "ch_123", "status": "disputed"})).unwrap();
        assert_eq!(charge.status, Some(ChargeStatus::Unknown("disputed".to_owned())));
    }
}
