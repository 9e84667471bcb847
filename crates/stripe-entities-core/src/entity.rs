//! Entity contracts for objects mirrored in the payment system.
//!
//! Host applications implement these traits on their own model types; the
//! manager façade is generic over them and never sees a concrete model
//! hierarchy. The [`model`](crate::model) module provides ready-made
//! implementations for applications that do not have their own.

/// Common contract for any local object that mirrors a resource persisted in
/// the payment system.
///
/// The payment system identifier is the gateway-assigned key used to address
/// the remote resource on subsequent calls. It is `None` until the entity has
/// been registered. Once assigned it must never be reassigned without first
/// deleting the remote-side resource.
pub trait PaymentSystemEntity {
    /// The remote identifier for this entity, if it has been registered.
    fn payment_system_id(&self) -> Option<&str>;

    /// Set or clear the remote identifier.
    fn set_payment_system_id(&mut self, id: Option<String>);

    /// Whether this entity has been registered with the payment system.
    ///
    /// An empty identifier counts as unregistered.
    fn has_payment_id(&self) -> bool {
        self.payment_system_id().is_some_and(|id| !id.is_empty())
    }

    /// Assign a freshly generated remote identifier to this entity.
    ///
    /// Only meaningful before first registration, and only when the host
    /// system has no better human-readable identifier of its own.
    fn generate_payment_system_id(&mut self) {
        self.set_payment_system_id(Some(uuid::Uuid::new_v4().simple().to_string()));
    }
}

/// Contract for an object that provides subscription plan information.
///
/// Price and trial length are immutable once the plan has been created
/// remotely; only the title may change afterwards.
pub trait PlanEntity: PaymentSystemEntity {
    /// Price in major currency units (e.g. 19.99 dollars).
    fn price(&self) -> f64;

    /// Display title for the plan.
    fn title(&self) -> &str;

    /// Number of days that lapse before the customer is first billed.
    fn trial_days(&self) -> u32;
}

/// Contract for an object able to present data for payment-system customers.
///
/// This is often implemented by the same object that identifies authenticated
/// users in the host system.
pub trait CustomerEntity: PaymentSystemEntity {
    /// E-mail address identifying this customer in the payment system.
    fn email(&self) -> &str;
}

/// Contract for an object storing a subscription (a link from a customer to
/// a plan).
///
/// A present remote identifier implies an active remote subscription;
/// absence implies none.
pub trait SubscriptionEntity: PaymentSystemEntity {}

/// Contract for a one-time charge descriptor.
///
/// Charges are not tracked locally, so this is not a
/// [`PaymentSystemEntity`]; it only describes one purchase.
pub trait ChargeEntity {
    /// Amount to charge in major currency units.
    fn price(&self) -> f64;

    /// Description attached to the charge.
    fn title(&self) -> &str;
}
