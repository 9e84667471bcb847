//! HTTP implementation of the payment gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use stripe_entities_core::money::CURRENCY;

use super::types::{
    CardParams, Charge, Customer, Deleted, Plan, StripeErrorResponse, Subscription, Token,
};
use super::{ChargeSource, PaymentGateway};
use crate::error::StripeError;

/// Billing interval for created plans. The platform also supports "year",
/// but this adapter is fixed to monthly billing.
const INTERVAL: &str = "month";

/// Payment gateway client backed by the Stripe HTTP API.
#[derive(Debug, Clone)]
pub struct StripeGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StripeGateway {
    /// Stripe API base URL.
    const DEFAULT_BASE_URL: &'static str = "https://api.stripe.com/v1";

    /// Create a gateway against the production API endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, StripeError> {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL)
    }

    /// Create a gateway against a custom base URL (mock servers, proxies).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, StripeError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, StripeError> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .form(params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, StripeError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn delete<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, StripeError> {
        let response = self
            .client
            .delete(format!("{}{path}", self.base_url))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse the error envelope; surface it verbatim.
        let error_body: Result<StripeErrorResponse, _> = response.json().await;

        match error_body {
            Ok(stripe_error) => Err(StripeError::Api {
                error_type: stripe_error.error.error_type,
                message: stripe_error.error.message,
                code: stripe_error.error.code,
            }),
            Err(_) => Err(StripeError::Api {
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
            }),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_plan(
        &self,
        id: Option<&str>,
        name: &str,
        amount: i64,
        trial_days: u32,
    ) -> Result<Plan, StripeError> {
        let mut params = vec![
            ("amount", amount.to_string()),
            ("currency", CURRENCY.to_string()),
            ("interval", INTERVAL.to_string()),
            ("interval_count", "1".to_string()),
            ("name", name.to_string()),
            ("trial_period_days", trial_days.to_string()),
        ];
        if let Some(id) = id {
            params.push(("id", id.to_string()));
        }

        self.post_form("/plans", &params).await
    }

    async fn update_plan(&self, id: &str, name: &str) -> Result<Plan, StripeError> {
        let params = [("name", name.to_string())];
        self.post_form(&format!("/plans/{id}"), &params).await
    }

    async fn get_plan(&self, id: &str) -> Result<Plan, StripeError> {
        self.get(&format!("/plans/{id}")).await
    }

    async fn delete_plan(&self, id: &str) -> Result<Deleted, StripeError> {
        self.delete(&format!("/plans/{id}")).await
    }

    async fn create_customer(
        &self,
        email: &str,
        source_token: Option<&str>,
    ) -> Result<Customer, StripeError> {
        let mut params = vec![("email", email.to_string())];
        if let Some(token) = source_token {
            params.push(("source", token.to_string()));
        }

        self.post_form("/customers", &params).await
    }

    async fn get_customer(&self, id: &str) -> Result<Customer, StripeError> {
        self.get(&format!("/customers/{id}")).await
    }

    async fn update_customer(
        &self,
        id: &str,
        email: &str,
        source_token: Option<&str>,
    ) -> Result<Customer, StripeError> {
        let mut params = vec![("email", email.to_string())];
        if let Some(token) = source_token {
            params.push(("source", token.to_string()));
        }

        self.post_form(&format!("/customers/{id}"), &params).await
    }

    async fn create_subscription(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<Subscription, StripeError> {
        let params = [("plan", plan_id.to_string())];
        self.post_form(&format!("/customers/{customer_id}/subscriptions"), &params)
            .await
    }

    async fn update_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
        plan_id: &str,
    ) -> Result<Subscription, StripeError> {
        let params = [("plan", plan_id.to_string())];
        self.post_form(
            &format!("/customers/{customer_id}/subscriptions/{subscription_id}"),
            &params,
        )
        .await
    }

    async fn cancel_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Subscription, StripeError> {
        self.delete(&format!(
            "/customers/{customer_id}/subscriptions/{subscription_id}"
        ))
        .await
    }

    async fn create_charge(
        &self,
        source: ChargeSource<'_>,
        amount: i64,
        description: &str,
    ) -> Result<Charge, StripeError> {
        let mut params = vec![
            ("amount", amount.to_string()),
            ("currency", CURRENCY.to_string()),
            ("description", description.to_string()),
            ("capture", "true".to_string()),
        ];
        match source {
            ChargeSource::Customer(customer_id) => {
                params.push(("customer", customer_id.to_string()));
            }
            ChargeSource::Token(token) => {
                params.push(("source", token.to_string()));
            }
        }

        self.post_form("/charges", &params).await
    }

    async fn create_card_token(&self, card: &CardParams) -> Result<Token, StripeError> {
        let mut params = vec![
            ("card[number]", card.number.clone()),
            ("card[exp_month]", card.exp_month.clone()),
            ("card[exp_year]", card.exp_year.clone()),
        ];
        if let Some(cvc) = &card.cvc {
            params.push(("card[cvc]", cvc.clone()));
        }
        if let Some(name) = &card.name {
            params.push(("card[name]", name.clone()));
        }

        self.post_form("/tokens", &params).await
    }
}
