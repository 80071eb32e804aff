//! Payment intent objects.
//!
//! A payment intent tracks a payment flow from creation through settlement.
//! Two of its fields are polymorphic on the wire:
//!
//! - `next_action` is discriminated by `type`, with the variant payload in
//!   a sibling field named after the discriminant value
//! - `last_payment_error.source` is discriminated by the nested `object`
//!   field (see [`PaymentSource`](crate::resources::PaymentSource))

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

use crate::list::{List, PagedObject};
use crate::resources::{ApiErrorDetail, Charge};
use crate::timestamp::Timestamp;

/// A payment flow from creation through settlement.
///
/// Payment intents embedded in other resources can be partial objects, so
/// every field except `id` tolerates absence.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Unique identifier of the payment intent.
    pub id: String,
    /// Amount intended to be collected, in the smallest currency unit.
    #[serde(default)]
    pub amount: i64,
    /// Amount that can still be captured.
    pub amount_capturable: Option<i64>,
    /// Amount already received.
    pub amount_received: Option<i64>,
    /// When the intent was canceled, if it was.
    pub canceled_at: Option<Timestamp>,
    /// Secret used by client-side confirmation flows.
    pub client_secret: Option<String>,
    /// When the intent was created.
    pub created: Option<Timestamp>,
    /// Lowercase ISO currency code.
    pub currency: Option<String>,
    /// ID of the customer the intent belongs to, if any.
    pub customer: Option<String>,
    /// Arbitrary description attached by the merchant.
    pub description: Option<String>,
    /// Charges made with this intent, newest first.
    pub charges: Option<List<Charge>>,
    /// The most recent payment error, if the last attempt failed.
    pub last_payment_error: Option<ApiErrorDetail>,
    /// Whether the intent exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Key-value pairs attached by the merchant.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    /// Action the customer must take to continue the payment, if any.
    pub next_action: Option<NextAction>,
    /// Payment method types the intent may use (e.g., `"card"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_method_types: Vec<String>,
    /// Email address to send the receipt to.
    pub receipt_email: Option<String>,
    /// Lifecycle status of the intent.
    pub status: Option<PaymentIntentStatus>,
}

impl PagedObject for PaymentIntent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Lifecycle status of a payment intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PaymentIntentStatus {
    /// A payment method must be attached before confirmation.
    RequiresPaymentMethod,
    /// The intent must be confirmed to proceed.
    RequiresConfirmation,
    /// The customer must complete an additional action (see
    /// [`PaymentIntent::next_action`]).
    RequiresAction,
    /// The payment is being processed.
    Processing,
    /// Funds are authorized and await capture.
    RequiresCapture,
    /// The intent was canceled.
    Canceled,
    /// The payment succeeded.
    Succeeded,
    /// A status this crate does not know about.
    Unknown(String),
}

impl PaymentIntentStatus {
    /// Returns the `snake_case` string representation matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RequiresPaymentMethod => "requires_payment_method",
            Self::RequiresConfirmation => "requires_confirmation",
            Self::RequiresAction => "requires_action",
            Self::Processing => "processing",
            Self::RequiresCapture => "requires_capture",
            Self::Canceled => "canceled",
            Self::Succeeded => "succeeded",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for PaymentIntentStatus {
    fn from(s: &str) -> Self {
        match s {
            "requires_payment_method" => Self::RequiresPaymentMethod,
            "requires_confirmation" => Self::RequiresConfirmation,
            "requires_action" => Self::RequiresAction,
            "processing" => Self::Processing,
            "requires_capture" => Self::RequiresCapture,
            "canceled" => Self::Canceled,
            "succeeded" => Self::Succeeded,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl std::fmt::Display for PaymentIntentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PaymentIntentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentIntentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Action the customer must take to continue a payment.
///
/// On the wire this is an object whose `type` field names the variant and
/// whose payload sits in a sibling field of the same name:
///
/// ```json
/// {
///   "type": "redirect_to_url",
///   "redirect_to_url": { "url": "...", "return_url": "..." }
/// }
/// ```
///
/// Exactly one payload field is populated per `type`; a known `type` whose
/// payload field is absent fails the decode. Types this crate does not know
/// about decode to [`NextAction::Unknown`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NextAction {
    /// Redirect the customer to an external URL to complete the payment.
    RedirectToUrl(NextActionRedirectToUrl),
    /// A next action this crate does not know about.
    Unknown {
        /// The unrecognized `type` discriminant.
        kind: String,
    },
}

impl NextAction {
    /// Returns the wire value of the `type` discriminant.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::RedirectToUrl(_) => "redirect_to_url",
            Self::Unknown { kind } => kind,
        }
    }

    /// Returns the redirect payload if this action is a redirect.
    #[must_use]
    pub fn as_redirect_to_url(&self) -> Option<&NextActionRedirectToUrl> {
        match self {
            Self::RedirectToUrl(redirect) => Some(redirect),
            Self::Unknown { .. } => None,
        }
    }
}

/// Payload of a `redirect_to_url` next action.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextActionRedirectToUrl {
    /// The URL the customer must be redirected to.
    pub url: String,
    /// Where the customer is sent back to after completing the redirect.
    pub return_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize)]
struct NextActionWire {
    #[serde(rename = "type")]
    kind: String,
    redirect_to_url: Option<NextActionRedirectToUrl>,
}

impl Serialize for NextAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::RedirectToUrl(redirect) => NextActionWire {
                kind: "redirect_to_url".to_owned(),
                redirect_to_url: Some(redirect.clone()),
            },
            Self::Unknown { kind } => NextActionWire {
                kind: kind.clone(),
                redirect_to_url: None,
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NextAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = NextActionWire::deserialize(deserializer)?;
        match wire.kind.as_str() {
            "redirect_to_url" => wire
                .redirect_to_url
                .map(Self::RedirectToUrl)
                .ok_or_else(|| D::Error::missing_field("redirect_to_url")),
            _ => Ok(Self::Unknown { kind: wire.kind }),
        }
    }
}
