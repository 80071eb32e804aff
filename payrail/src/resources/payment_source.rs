//! Payment source objects.
//!
//! A source describes the instrument a payment was attempted with. On the
//! wire it is a single JSON object whose `object` field selects the
//! concrete shape; the remaining fields belong to that shape only. Decoding
//! dispatches on `object` before populating the matching variant, so a card
//! source never carries bank account fields and vice versa.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::skip_serializing_none;

/// The instrument a payment was attempted with.
///
/// Discriminated on the wire by the `object` field. Shapes this crate does
/// not know about decode to [`PaymentSource::Unknown`], which keeps the raw
/// payload so nothing is lost on re-serialization.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PaymentSource {
    /// A card (`"object": "card"`).
    Card(Card),
    /// A bank account (`"object": "bank_account"`).
    BankAccount(BankAccount),
    /// A source shape this crate does not know about.
    Unknown {
        /// The unrecognized `object` discriminant.
        object: String,
        /// The full raw payload.
        raw: serde_json::Value,
    },
}

impl PaymentSource {
    /// Returns the wire value of the `object` discriminant.
    #[must_use]
    pub fn object(&self) -> &str {
        match self {
            Self::Card(_) => "card",
            Self::BankAccount(_) => "bank_account",
            Self::Unknown { object, .. } => object,
        }
    }

    /// Returns the card if this source is one.
    #[must_use]
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card),
            _ => None,
        }
    }

    /// Returns the bank account if this source is one.
    #[must_use]
    pub fn as_bank_account(&self) -> Option<&BankAccount> {
        match self {
            Self::BankAccount(account) => Some(account),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for PaymentSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let object = value
            .get("object")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("object"))?
            .to_owned();

        match object.as_str() {
            "card" => serde_json::from_value(value)
                .map(Self::Card)
                .map_err(D::Error::custom),
            "bank_account" => serde_json::from_value(value)
                .map(Self::BankAccount)
                .map_err(D::Error::custom),
            _ => Ok(Self::Unknown { object, raw: value }),
        }
    }
}

impl Serialize for PaymentSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self {
            Self::Card(card) => tag_object(card, "card").map_err(S::Error::custom)?,
            Self::BankAccount(account) => {
                tag_object(account, "bank_account").map_err(S::Error::custom)?
            }
            Self::Unknown { raw, .. } => raw.clone(),
        };
        value.serialize(serializer)
    }
}

/// Serializes `inner` to a JSON object and sets its `object` discriminant.
fn tag_object<T: Serialize>(inner: &T, object: &str) -> Result<serde_json::Value, String> {
    let mut value = serde_json::to_value(inner).map_err(|e| e.to_string())?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("object".to_owned(), serde_json::Value::from(object));
            Ok(value)
        }
        None => Err(format!("source variant \"{object}\" is not a JSON object")),
    }
}

/// A card source.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier of the card.
    pub id: String,
    /// Card brand (e.g., `"Visa"`).
    pub brand: Option<String>,
    /// Two-letter country code of the issuing bank.
    pub country: Option<String>,
    /// ID of the customer the card is attached to, if any.
    pub customer: Option<String>,
    /// Expiration month (1-12).
    pub exp_month: Option<u32>,
    /// Four-digit expiration year.
    pub exp_year: Option<u32>,
    /// Fingerprint uniquely identifying the card number.
    pub fingerprint: Option<String>,
    /// Last four digits of the card number.
    pub last4: Option<String>,
}

/// A bank account source.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier of the bank account.
    pub id: String,
    /// Name of the bank.
    pub bank_name: Option<String>,
    /// Two-letter country code of the bank.
    pub country: Option<String>,
    /// Lowercase currency the account holds.
    pub currency: Option<String>,
    /// Last four digits of the account number.
    pub last4: Option<String>,
    /// Bank routing number.
    pub routing_number: Option<String>,
    /// Verification status of the account.
    pub status: Option<BankAccountStatus>,
}

/// Verification status of a bank account source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BankAccountStatus {
    /// Not yet validated or verified.
    New,
    /// Account and routing numbers passed validation.
    Validated,
    /// Ownership of the account was verified.
    Verified,
    /// Ownership verification failed.
    VerificationFailed,
    /// A debit against the account failed.
    Errored,
    /// A status this crate does not know about.
    Unknown(String),
}

impl BankAccountStatus {
    /// Returns the `snake_case` string representation matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Validated => "validated",
            Self::Verified => "verified",
            Self::VerificationFailed => "verification_failed",
            Self::Errored => "errored",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for BankAccountStatus {
    fn from(s: &str) -> Self {
        match s {
            "new" => Self::New,
            "validated" => Self::Validated,
            "verified" => Self::Verified,
            "verification_failed" => Self::VerificationFailed,
            "errored" => Self::Errored,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl std::fmt::Display for BankAccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BankAccountStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BankAccountStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}
