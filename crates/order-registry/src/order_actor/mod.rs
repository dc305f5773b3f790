//! # Order Actor
//!
//! The order registry: a [`ResourceActor`] that owns every [`Order`] and applies requests
//! one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for status changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_registry::clients::OrderClient;
//! use order_registry::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32);
//!     let client = OrderClient::new(generic_client);
//!
//!     // No dependencies, so context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let order = client.place_order("alice@example.com", "M", 3).await?;
//!     assert_eq!(order.id.to_string(), "ODR#00001");
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Sequential ids**: `ODR#00001`, `ODR#00002`, ... never reused, not spent by rejected creates
//! - **Creation order**: listings and searches return orders oldest first
//! - **Type-safe errors**: client operations return `Result<T, OrderError>`

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
///
/// `buffer_size` bounds the request channel and must be non-zero.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
