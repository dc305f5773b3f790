//! # Actor Framework
//!
//! Building blocks for resources that live inside a single Tokio task and are reached only
//! through message passing. It pairs a **resource-oriented** API (create, read, list,
//! find, delete, plus custom actions) with the **Actor Model**: one task owns the store,
//! every other task holds a cheap cloneable client.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - your domain type, its payloads and its rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop that owns the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!
//! Business rules live in the entity's hooks; the framework handles channels, id issuing,
//! ordering and error transport.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests are handled **sequentially**, so mutations never interleave
//! - Reads return clones taken at the moment the request is handled
//! - No locks, no shared mutable state
//!
//! ## Identifiers
//!
//! Each actor owns an [`IdSequence`]. Ids start at 1, only grow, are never reused after a
//! delete, and are only consumed by creates that succeed.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so the
//! code around a client can be tested without an actor. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod sequence;
pub mod telemetry;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use sequence::IdSequence;
