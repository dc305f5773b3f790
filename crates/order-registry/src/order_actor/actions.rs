//! Custom actions for the Order actor.
//!
//! Status changes are the only mutation an order supports after it is placed. They are
//! handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

/// Operations on a stored order beyond create, read and delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Moves the order one stage forward.
    ///
    /// # Errors
    /// Fails with [`TerminalStatus`](super::OrderError::TerminalStatus) when the order is
    /// already delivered.
    AdvanceStatus,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    /// The order after the change.
    AdvanceStatus(crate::model::Order),
}
