//! # Order Registry Demo
//!
//! Walks one storefront session against a live registry:
//! 1.  Starting the [`OrderSystem`] from environment settings.
//! 2.  Placing orders, including one with a bad size.
//! 3.  Searching, advancing status and deleting.
//! 4.  Printing the report.
//!
//! `RUST_LOG=debug` shows every request the actor handles.

use actor_framework::telemetry::setup_tracing;
use order_registry::config::RegistryConfig;
use order_registry::lifecycle::OrderSystem;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = RegistryConfig::from_env()?;
    info!(?config, "Starting order registry");

    let system = OrderSystem::with_config(&config);
    let client = system.order_client.clone();

    let span = tracing::info_span!("placing_orders");
    let (first, _second) = async {
        let first = client.place_order("alice@example.com", "M", 3).await?;
        let second = client.place_order("bob@example.com", "XL", 1).await?;
        if let Err(e) = client.place_order("alice@example.com", "XXXL", 1).await {
            warn!(error = %e, "Size refused before reaching the registry");
        }
        if let Err(e) = client.place_order("alice@example.com", "S", 0).await {
            warn!(error = %e, "Order rejected by the registry");
        }
        let third = client.place_order("alice@example.com", "S", 2).await?;
        info!(id = %third.id, "Rejected orders used no id");
        Ok::<_, order_registry::order_actor::OrderError>((first, second))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("customer_lookup");
    async {
        let alice = client.find_by_customer("alice@example.com").await?;
        info!(count = alice.len(), "Orders for alice@example.com");

        let looked_up = client.find_order_by_text(" ODR#00002 ").await?;
        info!(id = %looked_up.id, customer = %looked_up.customer_id, "Found by typed id");
        Ok::<_, order_registry::order_actor::OrderError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("fulfillment");
    async {
        client.advance_status(first.id).await?;
        let delivered = client.advance_status(first.id).await?;
        info!(id = %delivered.id, status = %delivered.status, "Order fulfilled");
        if let Err(e) = client.advance_status(first.id).await {
            warn!(error = %e, "Advance refused");
        }
        client.delete_order(first.id).await?;
        Ok::<_, order_registry::order_actor::OrderError>(())
    }
    .instrument(span)
    .await?;

    let report = client.report().await?;
    for order in &report.orders {
        info!(
            id = %order.id,
            customer = %order.customer_id,
            size = %order.size,
            quantity = order.quantity,
            total = %order.total_amount,
            status = %order.status,
            "Order"
        );
    }
    info!(
        count = report.summary.count,
        revenue = %report.summary.total_revenue,
        "Report"
    );

    // Shutdown system gracefully
    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
