//! # Generic Messages
//!
//! Request types exchanged between [`ResourceClient`](crate::ResourceClient) and
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// # The Resource Pattern
/// Every resource gets the same small set of lifecycle and query operations, plus an
/// `Action` variant for resource-specific logic:
///
/// - **Create**: Builds a new resource from [`ActorEntity::Create`] and returns it.
/// - **Get**: Fetches one resource by id.
/// - **List**: Snapshot of every resource, in creation order.
/// - **Find**: Snapshot of the resources selected by an [`ActorEntity::Filter`].
/// - **Delete**: Removes a resource.
/// - **Action**: Runs an [`ActorEntity::Action`] against one resource.
///
/// Read responses are owned clones. Nothing outside the actor holds a reference into
/// the store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
