//! # Order Registry
//!
//! In-memory registry of storefront garment orders, run as a single actor.
//!
//! - **[model]**: [`Order`](model::Order), its id, size and status types
//! - **[pricing]**: the fixed unit price table
//! - **[order_actor]**: the registry actor, its actions and [`OrderError`](order_actor::OrderError)
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the API callers use
//! - **[report]**: order count and revenue
//! - **[config]**: settings read from the environment
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem), start and shutdown

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod report;
