//! ActorEntity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Filter = OrderFilter;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    /// Builds a priced order in `PROCESSING`.
    ///
    /// # Errors
    /// [`OrderError::InvalidQuantity`] when `quantity` is zero.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.quantity == 0 {
            return Err(OrderError::InvalidQuantity(params.quantity));
        }
        Ok(Self::new(id, params.customer_id, params.size, params.quantity))
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }

    /// Handles status changes.
    ///
    /// # Actions
    /// - `AdvanceStatus`: `PROCESSING` to `DELIVERING` to `DELIVERED`; a delivered order is
    ///   left untouched and the call fails.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AdvanceStatus => {
                let next = self.status.next().ok_or(OrderError::TerminalStatus(self.id))?;
                debug!(id = %self.id, from = %self.status, to = %next, "Advancing status");
                self.status = next;
                Ok(OrderActionResult::AdvanceStatus(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, Size};

    fn params(quantity: u32) -> OrderCreate {
        OrderCreate {
            customer_id: "c1".to_string(),
            size: Size::L,
            quantity,
        }
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        assert_eq!(
            Order::from_create_params(OrderId(1), params(0)),
            Err(OrderError::InvalidQuantity(0))
        );
    }

    #[tokio::test]
    async fn test_advance_walks_every_stage_then_stops() {
        let mut order = Order::from_create_params(OrderId(1), params(2)).unwrap();

        let OrderActionResult::AdvanceStatus(after) =
            order.handle_action(OrderAction::AdvanceStatus, &()).await.unwrap();
        assert_eq!(after.status, OrderStatus::Delivering);

        order.handle_action(OrderAction::AdvanceStatus, &()).await.unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);

        let before = order.clone();
        let result = order.handle_action(OrderAction::AdvanceStatus, &()).await;
        assert_eq!(result, Err(OrderError::TerminalStatus(OrderId(1))));
        assert_eq!(order, before);
    }
}
