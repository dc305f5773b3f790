use crate::model::{OrderStatus, Size};
use crate::order_actor::OrderError;
use crate::pricing;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Text in front of every order number.
pub const ORDER_ID_PREFIX: &str = "ODR#";

/// Order numbers are zero-padded to at least this many digits.
pub const ORDER_ID_MIN_DIGITS: usize = 5;

/// Type-safe identifier for Orders, rendered as `ODR#00042`.
///
/// Numbers past 99999 simply widen (`ODR#100000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{ORDER_ID_PREFIX}{:0width$}",
            self.0,
            width = ORDER_ID_MIN_DIGITS
        )
    }
}

impl FromStr for OrderId {
    type Err = OrderError;

    /// Parses order-number text as typed into a form.
    ///
    /// Surrounding whitespace is ignored. Anything else must be the exact rendering of an
    /// id: `ODR#` followed by at least five digits, without extra leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || OrderError::InvalidOrderId(text.to_string());

        let digits = text.strip_prefix(ORDER_ID_PREFIX).ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id = OrderId(digits.parse().map_err(|_| invalid())?);
        if id.to_string() != text {
            return Err(invalid());
        }
        Ok(id)
    }
}

impl Serialize for OrderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Query filters ([`OrderFilter`])
/// - Status transitions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Contact the customer entered; one customer may own many orders.
    pub customer_id: String,
    pub size: Size,
    pub quantity: u32,
    /// Unit price for `size` times `quantity`, fixed when the order is placed.
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new Order in [`OrderStatus::Processing`] and prices it.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (issued by the registry actor)
    /// * `customer_id` - Contact of the customer placing the order
    /// * `size` - Garment size
    /// * `quantity` - Number of units
    pub fn new(id: OrderId, customer_id: impl Into<String>, size: Size, quantity: u32) -> Self {
        Self {
            id,
            customer_id: customer_id.into(),
            size,
            quantity,
            total_amount: pricing::total_for(size, quantity),
            status: OrderStatus::Processing,
        }
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: String,
    pub size: Size,
    pub quantity: u32,
}

/// Selects orders for a [`find`](actor_framework::ActorClient::find).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFilter {
    /// Orders whose customer id equals this one exactly.
    Customer(String),
    /// Orders currently at this status.
    Status(OrderStatus),
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::Customer(customer_id) => order.customer_id == *customer_id,
            Self::Status(status) => order.status == *status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_is_zero_padded() {
        assert_eq!(OrderId(1).to_string(), "ODR#00001");
        assert_eq!(OrderId(42).to_string(), "ODR#00042");
        assert_eq!(OrderId(99_999).to_string(), "ODR#99999");
    }

    #[test]
    fn test_order_id_widens_past_five_digits() {
        assert_eq!(OrderId(100_000).to_string(), "ODR#100000");
        assert_eq!(OrderId(1_234_567).to_string(), "ODR#1234567");
    }

    #[test]
    fn test_order_id_parses_form_text() {
        assert_eq!("ODR#00007".parse::<OrderId>(), Ok(OrderId(7)));
        assert_eq!("  ODR#00007\n".parse::<OrderId>(), Ok(OrderId(7)));
        assert_eq!("ODR#100000".parse::<OrderId>(), Ok(OrderId(100_000)));
    }

    #[test]
    fn test_order_id_rejects_malformed_text() {
        for text in ["", "   ", "ODR#", "ODR#7", "odr#00007", "ODR#0000x", "ODR#000007", "00007"] {
            assert!(
                matches!(text.parse::<OrderId>(), Err(OrderError::InvalidOrderId(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_order_is_priced_and_processing() {
        let order = Order::new(OrderId(1), "c1", Size::M, 3);
        assert_eq!(order.total_amount, Decimal::from(2700));
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.customer_id, "c1");
    }

    #[test]
    fn test_filter_matches_exact_customer() {
        let order = Order::new(OrderId(1), "alice@example.com", Size::S, 1);
        assert!(OrderFilter::Customer("alice@example.com".into()).matches(&order));
        assert!(!OrderFilter::Customer("Alice@example.com".into()).matches(&order));
        assert!(!OrderFilter::Customer("alice".into()).matches(&order));
    }

    #[test]
    fn test_filter_matches_status() {
        let mut order = Order::new(OrderId(1), "c1", Size::S, 1);
        assert!(OrderFilter::Status(OrderStatus::Processing).matches(&order));
        order.status = OrderStatus::Delivering;
        assert!(!OrderFilter::Status(OrderStatus::Processing).matches(&order));
    }
}
