//! Core types for the stripe-entities adapter.
//!
//! This crate provides the local side of the adapter: the contracts an
//! application's own model types must satisfy to be usable with the manager
//! façade, optional base implementations of those contracts, and the monetary
//! conversion between local decimal prices and the integer minor units the
//! payment platform expects.
//!
//! - **Entity contracts**: [`PaymentSystemEntity`], [`PlanEntity`],
//!   [`CustomerEntity`], [`SubscriptionEntity`], [`ChargeEntity`]
//! - **Base models**: [`Plan`], [`Customer`], [`Subscription`], [`Product`]
//! - **Money**: [`to_minor_units`], [`CURRENCY`]
//!
//! Persistence of the entities is entirely the host application's
//! responsibility; this crate only defines the field surface the adapter
//! reads before a call and writes back after.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod model;
pub mod money;

pub use entity::{
    ChargeEntity, CustomerEntity, PaymentSystemEntity, PlanEntity, SubscriptionEntity,
};
pub use model::{Customer, Plan, PlanState, Product, ProductState, Subscription};
pub use money::{to_minor_units, CURRENCY};
