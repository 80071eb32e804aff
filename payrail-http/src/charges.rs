//! Charge request builders.

use payrail::list::{List, ListParams};
use payrail::resources::Charge;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::client::ApiClient;
use crate::error::HttpError;

/// Parameters for listing charges.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListChargesParams {
    /// Cursor pagination parameters.
    #[serde(flatten)]
    pub page: ListParams,
    /// Only return charges belonging to this payment intent.
    pub payment_intent: Option<String>,
}

/// Request builders for the `charges` endpoints.
#[derive(Debug)]
pub struct Charges<'a> {
    client: &'a ApiClient,
}

impl<'a> Charges<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Retrieves the charge with the given ID.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn retrieve(&self, id: &str) -> Result<Charge, HttpError> {
        self.client.get_json(&format!("charges/{id}")).await
    }

    /// Lists one page of charges.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn list(&self, params: &ListChargesParams) -> Result<List<Charge>, HttpError> {
        self.client.get_query_json("charges", params).await
    }
}
