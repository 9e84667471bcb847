//! Base model types implementing the entity contracts.
//!
//! Convenience implementations for host applications that do not already
//! have their own models. Applications with an existing domain model should
//! implement the [`entity`](crate::entity) traits directly instead; nothing
//! in the adapter requires these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{
    ChargeEntity, CustomerEntity, PaymentSystemEntity, PlanEntity, SubscriptionEntity,
};

/// A recurring billing tier, mirrored into the payment system by the manager.
///
/// There should be one of these for each pricing/service tier in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Display title for the plan. The only field the payment platform
    /// allows to change after creation.
    pub title: String,

    /// The identifier used by the payment system for this plan.
    ///
    /// Must be set before the plan can be created remotely, and once set it
    /// should never be modified without destroying the remote plan first.
    pub payment_system_id: Option<String>,

    /// Number of trial days before the customer is first billed.
    pub trial_days: u32,

    /// Price in major currency units. Immutable after remote creation.
    pub price: f64,

    /// Availability state for this plan.
    pub state: PlanState,
}

impl Plan {
    /// Create a pending plan that has not been registered remotely.
    #[must_use]
    pub fn new(title: impl Into<String>, price: f64, trial_days: u32) -> Self {
        Self {
            title: title.into(),
            payment_system_id: None,
            trial_days,
            price,
            state: PlanState::Pending,
        }
    }
}

impl PaymentSystemEntity for Plan {
    fn payment_system_id(&self) -> Option<&str> {
        self.payment_system_id.as_deref()
    }

    fn set_payment_system_id(&mut self, id: Option<String>) {
        self.payment_system_id = id;
    }
}

impl PlanEntity for Plan {
    fn price(&self) -> f64 {
        self.price
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn trial_days(&self) -> u32 {
        self.trial_days
    }
}

/// Availability states of a [`Plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanState {
    /// The plan is entered, but not yet available.
    Pending,

    /// The plan is entered and available.
    Available,

    /// The plan was once available, but is no longer.
    Retired,
}

/// A payer record mirrored on the payment system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// E-mail address uniquely identifying this customer in the payment
    /// system.
    pub email: String,

    /// The identifier used by the payment system for this customer.
    pub payment_system_id: Option<String>,
}

impl Customer {
    /// Create an unregistered customer.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            payment_system_id: None,
        }
    }
}

impl PaymentSystemEntity for Customer {
    fn payment_system_id(&self) -> Option<&str> {
        self.payment_system_id.as_deref()
    }

    fn set_payment_system_id(&mut self, id: Option<String>) {
        self.payment_system_id = id;
    }
}

impl CustomerEntity for Customer {
    fn email(&self) -> &str {
        &self.email
    }
}

/// A link from a customer to a plan, representing an active recurring charge
/// relationship.
///
/// One instance per payment relationship between the system and a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subscription {
    /// The identifier used by the payment system for this subscription.
    pub payment_system_id: Option<String>,

    /// When this subscription expires and is no longer valid.
    ///
    /// Constantly pushed forward by the recurring billing action of the
    /// payment system.
    pub active_until: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Create an unlinked subscription.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentSystemEntity for Subscription {
    fn payment_system_id(&self) -> Option<&str> {
        self.payment_system_id.as_deref()
    }

    fn set_payment_system_id(&mut self, id: Option<String>) {
        self.payment_system_id = id;
    }
}

impl SubscriptionEntity for Subscription {}

/// A product: a repeatable type of one-time transaction.
///
/// Purely a descriptor for a purchase; products are not themselves tracked
/// in the payment system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display title for the product, used as the charge description.
    pub title: String,

    /// Longer description of the product.
    pub description: Option<String>,

    /// Price in major currency units.
    pub price: f64,

    /// Availability state for this product.
    pub state: ProductState,
}

impl Product {
    /// Create a pending product.
    #[must_use]
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            description: None,
            price,
            state: ProductState::Pending,
        }
    }
}

impl ChargeEntity for Product {
    fn price(&self) -> f64 {
        self.price
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Availability states of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductState {
    /// The product is entered, but not yet available.
    Pending,

    /// The product is entered and available.
    Available,

    /// The product was once available, but is no longer.
    Retired,
}
