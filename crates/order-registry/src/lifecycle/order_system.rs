use crate::clients::OrderClient;
use crate::config::RegistryConfig;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// The runtime orchestrator for the order registry.
///
/// Owns the registry actor's task and hands out the [`OrderClient`] used to reach it.
/// Must be created inside a Tokio runtime.
///
/// # Example
///
/// ```rust
/// use order_registry::lifecycle::OrderSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new();
///
///     let order = system.order_client.place_order("bob@example.com", "L", 2).await?;
///     let found = system.order_client.find_order(order.id).await?;
///     assert_eq!(found, order);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    handle: JoinHandle<()>,
}

impl OrderSystem {
    /// Starts the registry with default settings.
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Starts the registry with `config`.
    pub fn with_config(config: &RegistryConfig) -> Self {
        let (order_actor, generic_client) = crate::order_actor::new(config.channel_capacity);

        // Order has no dependencies (Context = ())
        let handle = tokio::spawn(order_actor.run(()));
        info!(channel_capacity = config.channel_capacity, "Order system started");

        Self {
            order_client: OrderClient::new(generic_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor to drain its queue and exit.
    /// Clones of the client still held elsewhere keep the actor alive, so drop those first.
    ///
    /// # Errors
    /// [`SystemError::ActorTask`] if the actor task panicked or was cancelled.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Closing the last sender ends the actor's receive loop
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
