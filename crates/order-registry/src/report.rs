//! # Reports
//!
//! Aggregates over a snapshot of orders. Nothing here talks to the actor; the client takes
//! the snapshot and hands it to [`summarize`].

use crate::model::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Count and revenue over a set of orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub count: usize,
    pub total_revenue: Decimal,
}

/// Sums `total_amount` over `orders`, whatever their status.
pub fn summarize(orders: &[Order]) -> ReportSummary {
    ReportSummary {
        count: orders.len(),
        total_revenue: orders.iter().map(|order| order.total_amount).sum(),
    }
}

/// Full listing plus its summary, taken from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub orders: Vec<Order>,
    pub summary: ReportSummary,
}

impl Report {
    pub fn new(orders: Vec<Order>) -> Self {
        let summary = summarize(&orders);
        Self { orders, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, OrderStatus, Size};

    #[test]
    fn test_empty_report() {
        assert_eq!(
            summarize(&[]),
            ReportSummary {
                count: 0,
                total_revenue: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_revenue_includes_every_status() {
        let mut delivered = Order::new(OrderId(1), "c1", Size::M, 3);
        delivered.status = OrderStatus::Delivered;
        let processing = Order::new(OrderId(2), "c2", Size::Xs, 1);

        let report = Report::new(vec![delivered, processing]);

        assert_eq!(report.summary.count, 2);
        assert_eq!(report.summary.total_revenue, Decimal::from(3300));
        assert_eq!(report.orders.len(), 2);
    }
}
