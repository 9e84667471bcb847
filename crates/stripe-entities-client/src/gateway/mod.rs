//! Payment gateway client.
//!
//! The remote payment platform is an opaque dependency: the rest of the
//! crate only talks to it through the [`PaymentGateway`] trait, whose
//! operations mirror the platform's resource endpoints for plans, customers,
//! subscriptions, charges, and payment-method tokens. [`StripeGateway`] is
//! the HTTP implementation.

use async_trait::async_trait;

use crate::error::StripeError;

mod client;
pub mod types;

pub use client::StripeGateway;

use types::{CardParams, Charge, Customer, Deleted, Plan, Subscription, Token};

/// Funding source for a one-time charge.
#[derive(Debug, Clone, Copy)]
pub enum ChargeSource<'a> {
    /// The stored default payment source of a registered customer.
    Customer(&'a str),

    /// A one-time payment-method token, for purchases with no customer
    /// record.
    Token(&'a str),
}

/// Remote operations exposed by the payment platform.
///
/// One method per resource endpoint; implementations issue exactly one
/// outbound call per invocation and perform no retries. All failures
/// surface as [`StripeError`] with the remote error text intact.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a plan.
    ///
    /// When `id` is `None` the gateway assigns an identifier itself.
    /// The billing interval is fixed to monthly.
    async fn create_plan(
        &self,
        id: Option<&str>,
        name: &str,
        amount: i64,
        trial_days: u32,
    ) -> Result<Plan, StripeError>;

    /// Update a plan's display name. Other plan fields are immutable on the
    /// remote platform.
    async fn update_plan(&self, id: &str, name: &str) -> Result<Plan, StripeError>;

    /// Fetch a plan by ID.
    async fn get_plan(&self, id: &str) -> Result<Plan, StripeError>;

    /// Delete a plan.
    async fn delete_plan(&self, id: &str) -> Result<Deleted, StripeError>;

    /// Create a customer, optionally attaching a payment-source token.
    async fn create_customer(
        &self,
        email: &str,
        source_token: Option<&str>,
    ) -> Result<Customer, StripeError>;

    /// Fetch a customer by ID.
    async fn get_customer(&self, id: &str) -> Result<Customer, StripeError>;

    /// Update a customer's email and, when a token is supplied, replace the
    /// default payment source.
    async fn update_customer(
        &self,
        id: &str,
        email: &str,
        source_token: Option<&str>,
    ) -> Result<Customer, StripeError>;

    /// Subscribe a customer to a plan.
    async fn create_subscription(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<Subscription, StripeError>;

    /// Move an existing subscription to a different plan.
    async fn update_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
        plan_id: &str,
    ) -> Result<Subscription, StripeError>;

    /// Cancel a subscription.
    async fn cancel_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Subscription, StripeError>;

    /// Execute a one-time charge against the given funding source.
    ///
    /// `amount` is in minor currency units; the charge is captured
    /// immediately.
    async fn create_charge(
        &self,
        source: ChargeSource<'_>,
        amount: i64,
        description: &str,
    ) -> Result<Charge, StripeError>;

    /// Exchange raw card details for a one-time token (test tooling).
    async fn create_card_token(&self, card: &CardParams) -> Result<Token, StripeError>;
}
