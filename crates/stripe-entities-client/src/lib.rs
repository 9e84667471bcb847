//! Stripe adapter over host-application billing entities.
//!
//! This crate maps an application's own domain models (plans, customers,
//! subscriptions, one-time charges) onto calls against the Stripe API. The
//! application implements the entity contracts from `stripe-entities-core`
//! on its model types (or uses the base models shipped there); the
//! [`StripeManager`] façade reads their fields before each call and writes
//! the gateway-assigned identifiers back after.
//!
//! The manager holds no state beyond the injected [`PaymentGateway`]
//! handle. Every operation is one synchronous request/response exchange:
//! no retries, no caching, no background work. Remote errors surface
//! verbatim as [`StripeError`].
//!
//! # Example
//!
//! ```no_run
//! use stripe_entities_client::{StripeGateway, StripeManager};
//! use stripe_entities_core::{Customer, PaymentSystemEntity, Plan, Subscription};
//!
//! # async fn example() -> Result<(), stripe_entities_client::StripeError> {
//! let gateway = StripeGateway::new("sk_test_...")?;
//! let manager = StripeManager::new(gateway);
//!
//! let mut plan = Plan::new("Gold", 19.99, 13);
//! plan.generate_payment_system_id();
//! manager.create_plan(&mut plan).await?;
//!
//! let mut customer = Customer::new("erik@code.com");
//! manager.create_customer(&mut customer, None).await?;
//!
//! let mut subscription = Subscription::new();
//! manager.subscribe(&customer, &mut subscription, &plan).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
pub mod gateway;
mod manager;

pub use config::StripeConfig;
pub use error::StripeError;
pub use gateway::{ChargeSource, PaymentGateway, StripeGateway};
pub use manager::StripeManager;
