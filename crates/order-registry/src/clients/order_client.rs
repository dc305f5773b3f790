//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and exposes the storefront operations.
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, Size};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::report::{self, Report, ReportSummary};
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Cheap to clone; every clone talks to the same registry.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it as stored.
    ///
    /// # Errors
    /// - [`OrderError::InvalidSize`] for an unknown size code
    /// - [`OrderError::InvalidQuantity`] for a quantity of zero
    ///
    /// A rejected order does not consume an order number.
    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        customer_id: &str,
        size_code: &str,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        let size = size_code.parse::<Size>()?;
        let order = self
            .create_order(OrderCreate {
                customer_id: customer_id.to_string(),
                size,
                quantity,
            })
            .await?;
        info!(id = %order.id, total = %order.total_amount, "Order placed");
        Ok(order)
    }

    /// Like [`place_order`](OrderClient::place_order) with an already parsed size.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Orders placed with exactly this customer id, oldest first.
    #[instrument(skip(self))]
    pub async fn find_by_customer(&self, customer_id: &str) -> Result<Vec<Order>, OrderError> {
        self.find(OrderFilter::Customer(customer_id.to_string()))
            .await
    }

    /// Orders currently at `status`, oldest first.
    #[instrument(skip(self))]
    pub async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        self.find(OrderFilter::Status(status)).await
    }

    /// # Errors
    /// [`OrderError::NotFound`] if no order has this id.
    #[instrument(skip(self))]
    pub async fn find_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Looks up an order from id text as typed into a form (`" ODR#00007 "`).
    ///
    /// # Errors
    /// [`OrderError::InvalidOrderId`] for text that is not an order number, otherwise as
    /// [`find_order`](OrderClient::find_order).
    #[instrument(skip(self))]
    pub async fn find_order_by_text(&self, id_text: &str) -> Result<Order, OrderError> {
        let id = id_text.parse::<OrderId>()?;
        self.find_order(id).await
    }

    /// Moves an order one stage forward and returns it after the change.
    ///
    /// # Errors
    /// - [`OrderError::NotFound`] if no order has this id
    /// - [`OrderError::TerminalStatus`] if it is already delivered; nothing changes
    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        let OrderActionResult::AdvanceStatus(order) = self
            .inner
            .perform_action(id, OrderAction::AdvanceStatus)
            .await
            .map_err(Self::map_error)?;
        info!(id = %order.id, status = %order.status, "Status advanced");
        Ok(order)
    }

    /// Removes an order. Its id is never issued again.
    ///
    /// # Errors
    /// [`OrderError::NotFound`] if no order has this id.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }

    /// Every order, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    /// Count and revenue over all current orders.
    #[instrument(skip(self))]
    pub async fn summarize(&self) -> Result<ReportSummary, OrderError> {
        let orders = self.list().await?;
        Ok(report::summarize(&orders))
    }

    /// Listing and summary from the same snapshot.
    #[instrument(skip(self))]
    pub async fn report(&self) -> Result<Report, OrderError> {
        let report = Report::new(self.list().await?);
        info!(
            count = report.summary.count,
            revenue = %report.summary.total_revenue,
            "Report built"
        );
        Ok(report)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
