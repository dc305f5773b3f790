//! Error types for the Order actor.

use crate::model::OrderId;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The size code is not one of XS, S, M, L, XL, XXL.
    #[error("Invalid size: {0:?}")]
    InvalidSize(String),

    /// Orders need at least one unit.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order is already delivered and cannot move further.
    #[error("Order {0} is already delivered")]
    TerminalStatus(OrderId),

    /// Text that is not an order number.
    #[error("Invalid order id: {0:?}")]
    InvalidOrderId(String),

    /// Every order number has been issued; no further order can be placed.
    #[error("No order numbers left to issue")]
    IdSpaceExhausted,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::IdSpaceExhausted => OrderError::IdSpaceExhausted,
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_is_recovered() {
        let e = FrameworkError::entity(OrderError::TerminalStatus(OrderId(3)));
        assert_eq!(OrderError::from(e), OrderError::TerminalStatus(OrderId(3)));
    }

    #[test]
    fn test_not_found_keeps_id_text() {
        let e = FrameworkError::NotFound("ODR#00009".to_string());
        assert_eq!(
            OrderError::from(e),
            OrderError::NotFound("ODR#00009".to_string())
        );
    }

    #[test]
    fn test_plumbing_failures_become_communication_errors() {
        assert!(matches!(
            OrderError::from(FrameworkError::ActorClosed),
            OrderError::ActorCommunicationError(_)
        ));
        assert!(matches!(
            OrderError::from(FrameworkError::ActorDropped),
            OrderError::ActorCommunicationError(_)
        ));
    }

    #[test]
    fn test_exhausted_ids_stay_typed() {
        assert_eq!(
            OrderError::from(FrameworkError::IdSpaceExhausted),
            OrderError::IdSpaceExhausted
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            OrderError::TerminalStatus(OrderId(12)).to_string(),
            "Order ODR#00012 is already delivered"
        );
        assert_eq!(OrderError::InvalidSize("XXXL".into()).to_string(), "Invalid size: \"XXXL\"");
    }
}
