//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource must satisfy to be owned by a
//! [`ResourceActor`](crate::ResourceActor). It names the associated types for identifiers,
//! creation payloads, query filters, actions, context and errors, and exposes the lifecycle
//! hooks (`on_create`, `on_delete`, `handle_action`) the actor calls while it processes
//! requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override them only when the entity needs extra checks or side
//! effects at those points.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Identifiers and ordering
/// The actor issues identifiers from an [`IdSequence`](crate::IdSequence), converting each
/// `u64` into `Self::Id`. Identifiers are issued in ascending order, and the store is keyed
/// by `Self::Id`, so the `Ord` implementation must agree with the numeric order of the
/// sequence. Iterating the store then yields entities in creation order.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors. `Context` is handed to the
/// actor in `run()` and passed to every hook.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Built from the actor's `u64` sequence.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Selection criteria for [`ResourceClient::find`](crate::ResourceClient::find).
    type Filter: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per entity covers creation, actions and hooks. Clients get it back
    /// by downcasting [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the candidate id and payload.
    ///
    /// Returning an error rejects the request; the candidate id is not consumed.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action. An error must leave the entity unchanged.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
