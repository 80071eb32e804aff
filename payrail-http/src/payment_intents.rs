//! Payment intent request builders.

use payrail::list::{List, ListParams, PagedObject};
use payrail::resources::PaymentIntent;
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::collections::HashMap;

use crate::client::ApiClient;
use crate::error::HttpError;

/// Parameters for creating a payment intent.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePaymentIntentParams {
    /// Amount to collect, in the smallest currency unit.
    pub amount: i64,
    /// Lowercase ISO currency code.
    pub currency: String,
    /// Confirm the intent immediately on creation.
    pub confirm: Option<bool>,
    /// ID of the customer the intent belongs to.
    pub customer: Option<String>,
    /// Arbitrary description attached to the intent.
    pub description: Option<String>,
    /// Key-value pairs attached to the intent.
    pub metadata: Option<HashMap<String, String>>,
    /// Payment method types the intent may use.
    pub payment_method_types: Option<Vec<String>>,
    /// Email address to send the receipt to.
    pub receipt_email: Option<String>,
}

impl CreatePaymentIntentParams {
    /// Creates parameters for the given amount and currency.
    #[must_use]
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            confirm: None,
            customer: None,
            description: None,
            metadata: None,
            payment_method_types: None,
            receipt_email: None,
        }
    }

    /// Attaches the intent to a customer.
    #[must_use]
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Confirms the intent immediately on creation.
    #[must_use]
    pub const fn confirmed(mut self) -> Self {
        self.confirm = Some(true);
        self
    }
}

/// Parameters for capturing a payment intent.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CapturePaymentIntentParams {
    /// Amount to capture; defaults to the full capturable amount.
    pub amount_to_capture: Option<i64>,
}

/// Parameters for canceling a payment intent.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CancelPaymentIntentParams {
    /// Why the intent is being canceled (e.g., `"requested_by_customer"`).
    pub cancellation_reason: Option<String>,
}

/// Parameters for listing payment intents.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPaymentIntentsParams {
    /// Cursor pagination parameters.
    #[serde(flatten)]
    pub page: ListParams,
    /// Only return intents belonging to this customer.
    pub customer: Option<String>,
}

/// Request builders for the `payment_intents` endpoints.
#[derive(Debug)]
pub struct PaymentIntents<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentIntents<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Creates a payment intent.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn create(
        &self,
        params: &CreatePaymentIntentParams,
    ) -> Result<PaymentIntent, HttpError> {
        self.client.post_json("payment_intents", params).await
    }

    /// Retrieves the payment intent with the given ID.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn retrieve(&self, id: &str) -> Result<PaymentIntent, HttpError> {
        self.client.get_json(&format!("payment_intents/{id}")).await
    }

    /// Confirms the payment intent with the given ID.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn confirm(&self, id: &str) -> Result<PaymentIntent, HttpError> {
        self.client
            .post_json(&format!("payment_intents/{id}/confirm"), &serde_json::json!({}))
            .await
    }

    /// Captures the authorized funds on the payment intent.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn capture(
        &self,
        id: &str,
        params: &CapturePaymentIntentParams,
    ) -> Result<PaymentIntent, HttpError> {
        self.client
            .post_json(&format!("payment_intents/{id}/capture"), params)
            .await
    }

    /// Cancels the payment intent with the given ID.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn cancel(
        &self,
        id: &str,
        params: &CancelPaymentIntentParams,
    ) -> Result<PaymentIntent, HttpError> {
        self.client
            .post_json(&format!("payment_intents/{id}/cancel"), params)
            .await
    }

    /// Lists one page of payment intents.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors.
    pub async fn list(
        &self,
        params: &ListPaymentIntentsParams,
    ) -> Result<List<PaymentIntent>, HttpError> {
        self.client.get_query_json("payment_intents", params).await
    }

    /// Lists all payment intents, following `has_more` across pages.
    ///
    /// Pages are fetched sequentially with `starting_after` set to the last
    /// entry of the previous page; entries keep API order across pages.
    ///
    /// # Errors
    ///
    /// Propagates request failures and decode errors; a failed page fetch
    /// abandons the traversal.
    pub async fn list_all(
        &self,
        params: ListPaymentIntentsParams,
    ) -> Result<Vec<PaymentIntent>, HttpError> {
        let mut page_params = params;
        let mut entries = Vec::new();

        loop {
            let page = self.list(&page_params).await?;
            let has_more = page.has_more;
            let cursor = page.data.last().map(|intent| intent.id().to_owned());
            entries.extend(page);

            if !has_more {
                return Ok(entries);
            }
            // has_more with an empty page would loop forever; stop instead.
            let Some(cursor) = cursor else {
                return Ok(entries);
            };
            page_params.page.starting_after = Some(cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiClient, ClientConfig};
    use payrail::resources::PaymentIntentStatus;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ApiClient {
        ApiClient::new(ClientConfig::new("sk_test_123").with_api_base(server.uri())).unwrap()
    }

    fn intent_body(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "object": "payment_intent",
            "amount": 1099,
            "currency": "usd",
            "status": "requires_confirmation"
        })
    }

    #[tokio::test]
    async fn test_create_posts_params_as_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment_intents"))
            .and(body_json(json!({
                "amount": 1099,
                "currency": "usd",
                "customer": "cus_123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(intent_body("pi_123")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let params = CreatePaymentIntentParams::new(1099, "usd").with_customer("cus_123");
        let intent = client.payment_intents().create(&params).await.unwrap();

        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.status, Some(PaymentIntentStatus::RequiresConfirmation));
    }

    #[tokio::test]
    async fn test_retrieve_decodes_intent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_intents/pi_123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(intent_body("pi_123")))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let intent = client.payment_intents().retrieve("pi_123").await.unwrap();
        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.amount, 1099);
    }

    #[tokio::test]
    async fn test_cancel_posts_to_subpath() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment_intents/pi_123/cancel"))
            .and(body_json(json!({"cancellation_reason": "requested_by_customer"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_123",
                "object": "payment_intent",
                "status": "canceled"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let params = CancelPaymentIntentParams {
            cancellation_reason: Some("requested_by_customer".to_owned()),
        };
        let intent = client
            .payment_intents()
            .cancel("pi_123", &params)
            .await
            .unwrap();
        assert_eq!(intent.status, Some(PaymentIntentStatus::Canceled));
    }

    #[tokio::test]
    async fn test_list_all_follows_has_more() {
        let mock_server = MockServer::start().await;

        let first_page = json!({
            "object": "list",
            "has_more": true,
            "data": [intent_body("pi_1"), intent_body("pi_2")]
        });
        let second_page = json!({
            "object": "list",
            "has_more": false,
            "data": [intent_body("pi_3")]
        });

        Mock::given(method("GET"))
            .and(path("/payment_intents"))
            .and(query_param_is_missing("starting_after"))
            .respond_with(ResponseTemplate::new(200).set_body_json(first_page))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/payment_intents"))
            .and(query_param("starting_after", "pi_2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(second_page))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let intents = client
            .payment_intents()
            .list_all(ListPaymentIntentsParams::default())
            .await
            .unwrap();

        let ids: Vec<&str> = intents.iter().map(|pi| pi.id.as_str()).collect();
        assert_eq!(ids, vec!["pi_1", "pi_2", "pi_3"]);
    }

    #[tokio::test]
    async fn test_list_sends_filter_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_intents"))
            .and(query_param("customer", "cus_123"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "has_more": false,
                "data": []
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let params = ListPaymentIntentsParams {
            page: ListParams::with_limit(5),
            customer: Some("cus_123".to_owned()),
        };
        let page = client.payment_intents().list(&params).await.unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more);
    }
}
