//! Manager façade mapping host entities onto gateway calls.

use stripe_entities_core::entity::{
    ChargeEntity, CustomerEntity, PlanEntity, SubscriptionEntity,
};
use stripe_entities_core::money::to_minor_units;

use crate::error::StripeError;
use crate::gateway::types::{Customer, Deleted, Plan, Subscription};
use crate::gateway::{ChargeSource, PaymentGateway};

/// Stateless façade wrapping the payment platform, taking only host models
/// as input and output.
///
/// Each operation constructs one gateway request from the entity's fields,
/// issues it, and translates the response back into local terms:
///
/// 1. create a plan
/// 2. create a customer (optionally with a payment token)
/// 3. subscribe a customer to a plan
/// 4. execute one-time charges
///
/// Contract, applied uniformly: every operation returns the remote
/// representation produced by the call, and operations that register or
/// clear a remote identifier also write it back onto the entity. Guarded
/// operations return `Ok(None)` when their idempotency guard
/// short-circuits; that is a deliberate skip, never an error. Remote
/// failures surface verbatim and are never retried.
#[derive(Debug, Clone)]
pub struct StripeManager<G> {
    gateway: G,
}

impl<G: PaymentGateway> StripeManager<G> {
    /// Create a manager over the given gateway.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    // ------------------------------------------------------------------
    // Plans
    // ------------------------------------------------------------------

    /// Create the plan on the payment platform.
    ///
    /// The price is converted to minor currency units and the billing
    /// interval is fixed to monthly. The plan's pre-assigned local
    /// identifier is used as the remote identifier (the platform assigns
    /// one when none is set); the confirmed identifier is written back
    /// onto the entity.
    ///
    /// # Errors
    ///
    /// Remote rejections (e.g. a duplicate identifier) surface unretried.
    pub async fn create_plan(&self, plan: &mut impl PlanEntity) -> Result<Plan, StripeError> {
        let created = self
            .gateway
            .create_plan(
                plan.payment_system_id(),
                plan.title(),
                to_minor_units(plan.price()),
                plan.trial_days(),
            )
            .await?;

        plan.set_payment_system_id(Some(created.id.clone()));
        tracing::info!(title = %plan.title(), id = %created.id, "created new plan in stripe");

        Ok(created)
    }

    /// Update the plan's title on the payment platform.
    ///
    /// The platform only permits the name to change after creation; price,
    /// interval, and trial length are immutable.
    ///
    /// # Errors
    ///
    /// Calling this for a plan with no remote identifier is a caller
    /// error; the outcome is whatever the gateway reports.
    pub async fn update_plan(&self, plan: &impl PlanEntity) -> Result<Plan, StripeError> {
        let id = plan.payment_system_id().unwrap_or_default();
        let updated = self.gateway.update_plan(id, plan.title()).await?;

        tracing::info!(title = %plan.title(), id = %id, "updated plan in stripe");

        Ok(updated)
    }

    /// Delete the plan from the payment platform and clear the entity's
    /// remote identifier.
    ///
    /// Removing the local record afterwards is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Deleting a plan that was already deleted or never created is a
    /// reportable gateway error, not silently ignored.
    pub async fn delete_plan(&self, plan: &mut impl PlanEntity) -> Result<Deleted, StripeError> {
        let id = plan.payment_system_id().unwrap_or_default().to_string();
        let deleted = self.gateway.delete_plan(&id).await?;

        plan.set_payment_system_id(None);
        tracing::info!(title = %plan.title(), id = %id, "deleted plan in stripe");

        Ok(deleted)
    }

    // ------------------------------------------------------------------
    // Customers
    // ------------------------------------------------------------------

    /// Register the customer on the payment platform, optionally attaching
    /// a payment-method token as the initial payment source.
    ///
    /// Returns `Ok(None)` without calling the gateway if the customer
    /// already carries a remote identifier; an existing registration is
    /// never overwritten. On success the new identifier is written back
    /// onto the customer.
    ///
    /// The guard is check-then-act: two concurrent calls for the same
    /// entity can both pass it before either writes back. Callers sharing
    /// an entity across tasks must serialize registration themselves.
    ///
    /// # Errors
    ///
    /// Remote rejections (e.g. an invalid payment source) surface
    /// unretried.
    pub async fn create_customer(
        &self,
        customer: &mut impl CustomerEntity,
        payment_token: Option<&str>,
    ) -> Result<Option<Customer>, StripeError> {
        if customer.has_payment_id() {
            tracing::debug!(email = %customer.email(), "customer already registered, skipping create");
            return Ok(None);
        }

        self.register_customer(customer, payment_token).await.map(Some)
    }

    /// Fetch the remote customer record. Read-only; no local mutation.
    ///
    /// # Errors
    ///
    /// Calling this for a customer with no remote identifier is a caller
    /// error; the outcome is whatever the gateway reports.
    pub async fn retrieve_customer(
        &self,
        customer: &impl CustomerEntity,
    ) -> Result<Customer, StripeError> {
        self.gateway
            .get_customer(customer.payment_system_id().unwrap_or_default())
            .await
    }

    /// Update the customer's email and, when a token is supplied, replace
    /// the default payment source.
    ///
    /// # Errors
    ///
    /// Calling this for a customer with no remote identifier is a caller
    /// error; the outcome is whatever the gateway reports.
    pub async fn update_customer(
        &self,
        customer: &impl CustomerEntity,
        payment_token: Option<&str>,
    ) -> Result<Customer, StripeError> {
        let id = customer.payment_system_id().unwrap_or_default();
        let updated = self
            .gateway
            .update_customer(id, customer.email(), payment_token)
            .await?;

        tracing::info!(email = %customer.email(), id = %id, "updated customer in stripe");

        Ok(updated)
    }

    /// Register or update the customer, dispatching on the presence of a
    /// remote identifier.
    ///
    /// The canonical upsert entry point host applications should prefer.
    ///
    /// # Errors
    ///
    /// Remote rejections surface unretried.
    pub async fn create_or_update_customer(
        &self,
        customer: &mut impl CustomerEntity,
        payment_token: Option<&str>,
    ) -> Result<Customer, StripeError> {
        if customer.has_payment_id() {
            self.update_customer(customer, payment_token).await
        } else {
            self.register_customer(customer, payment_token).await
        }
    }

    async fn register_customer(
        &self,
        customer: &mut impl CustomerEntity,
        payment_token: Option<&str>,
    ) -> Result<Customer, StripeError> {
        let created = self
            .gateway
            .create_customer(customer.email(), payment_token)
            .await?;

        customer.set_payment_system_id(Some(created.id.clone()));
        tracing::info!(email = %customer.email(), id = %created.id, "created customer in stripe");

        Ok(created)
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Subscribe the customer to the plan, using the payment information
    /// already on the platform for that customer.
    ///
    /// Returns `Ok(None)` without calling the gateway if the subscription
    /// already carries a remote identifier. On success the new identifier
    /// is written back onto the subscription.
    ///
    /// The guard is check-then-act: two concurrent calls for the same
    /// entity can both pass it before either writes back.
    ///
    /// # Errors
    ///
    /// Remote rejections surface unretried.
    pub async fn subscribe(
        &self,
        customer: &impl CustomerEntity,
        subscription: &mut impl SubscriptionEntity,
        plan: &impl PlanEntity,
    ) -> Result<Option<Subscription>, StripeError> {
        if subscription.has_payment_id() {
            tracing::debug!(email = %customer.email(), "subscription already active, skipping subscribe");
            return Ok(None);
        }

        let created = self
            .gateway
            .create_subscription(
                customer.payment_system_id().unwrap_or_default(),
                plan.payment_system_id().unwrap_or_default(),
            )
            .await?;

        subscription.set_payment_system_id(Some(created.id.clone()));
        tracing::info!(email = %customer.email(), subscription = %created.id, "subscribed customer in stripe");

        Ok(Some(created))
    }

    /// Move the existing remote subscription onto a new plan.
    ///
    /// The subscription identifier is unchanged. No check is made that the
    /// new plan differs from the current one.
    ///
    /// # Errors
    ///
    /// Calling this when either identifier is missing is a caller error;
    /// the outcome is whatever the gateway reports.
    pub async fn change_subscription_plan(
        &self,
        customer: &impl CustomerEntity,
        subscription: &impl SubscriptionEntity,
        new_plan: &impl PlanEntity,
    ) -> Result<Subscription, StripeError> {
        let changed = self
            .gateway
            .update_subscription(
                customer.payment_system_id().unwrap_or_default(),
                subscription.payment_system_id().unwrap_or_default(),
                new_plan.payment_system_id().unwrap_or_default(),
            )
            .await?;

        tracing::info!(email = %customer.email(), subscription = %changed.id, "changed subscription plan in stripe");

        Ok(changed)
    }

    /// Cancel the remote subscription and clear the local identifier.
    ///
    /// Returns `Ok(None)` without calling the gateway if either the
    /// subscription or the customer lacks a remote identifier; there is
    /// nothing to cancel. A successful cancellation is terminal for this
    /// subscription instance (remote status `"canceled"`); re-subscribing
    /// assigns a fresh identifier.
    ///
    /// # Errors
    ///
    /// Remote rejections surface unretried.
    pub async fn unsubscribe(
        &self,
        customer: &impl CustomerEntity,
        subscription: &mut impl SubscriptionEntity,
    ) -> Result<Option<Subscription>, StripeError> {
        if !subscription.has_payment_id() || !customer.has_payment_id() {
            tracing::debug!(email = %customer.email(), "no active subscription, skipping unsubscribe");
            return Ok(None);
        }

        let canceled = self
            .gateway
            .cancel_subscription(
                customer.payment_system_id().unwrap_or_default(),
                subscription.payment_system_id().unwrap_or_default(),
            )
            .await?;

        subscription.set_payment_system_id(None);
        tracing::info!(email = %customer.email(), subscription = %canceled.id, "unsubscribed customer in stripe");

        Ok(Some(canceled))
    }

    // ------------------------------------------------------------------
    // Charges
    // ------------------------------------------------------------------

    /// Charge the customer's stored default payment source once, returning
    /// the remote charge identifier.
    ///
    /// The amount is in major currency units and is captured immediately.
    /// No local record of the charge is kept; persisting a receipt is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Calling this for a customer with no remote identifier or no stored
    /// source is a caller error; the outcome is whatever the gateway
    /// reports.
    pub async fn charge_customer(
        &self,
        customer: &impl CustomerEntity,
        amount: f64,
        description: &str,
    ) -> Result<String, StripeError> {
        self.execute_charge(
            ChargeSource::Customer(customer.payment_system_id().unwrap_or_default()),
            amount,
            description,
        )
        .await
    }

    /// Charge a one-time payment-method token, returning the remote charge
    /// identifier.
    ///
    /// For guest or one-off purchases with no persisted customer record.
    /// The token is consumed by this call.
    ///
    /// # Errors
    ///
    /// Remote rejections (e.g. an already-used token) surface unretried.
    pub async fn charge_token(
        &self,
        token: &str,
        amount: f64,
        description: &str,
    ) -> Result<String, StripeError> {
        self.execute_charge(ChargeSource::Token(token), amount, description)
            .await
    }

    /// Charge the customer for the given product, reading amount and
    /// description from the charge descriptor.
    ///
    /// # Errors
    ///
    /// See [`charge_customer`](Self::charge_customer).
    pub async fn charge_product(
        &self,
        customer: &impl CustomerEntity,
        product: &impl ChargeEntity,
    ) -> Result<String, StripeError> {
        self.charge_customer(customer, product.price(), product.title())
            .await
    }

    async fn execute_charge(
        &self,
        source: ChargeSource<'_>,
        amount: f64,
        description: &str,
    ) -> Result<String, StripeError> {
        let amount_cents = to_minor_units(amount);
        let charge = self
            .gateway
            .create_charge(source, amount_cents, description)
            .await?;

        tracing::info!(description = %description, amount_cents, id = %charge.id, "created new charge in stripe");

        Ok(charge.id)
    }
}
