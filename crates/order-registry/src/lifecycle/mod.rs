//! # System Lifecycle
//!
//! Starting and stopping the order registry.
//!
//! [`OrderSystem`] creates the registry actor, spawns it on the current Tokio runtime and
//! keeps its task handle. Shutdown follows the channel-closure pattern:
//!
//! 1. **Drop the clients** - closes the sender side of the channel
//! 2. **Actor drains** - requests already queued are still answered
//! 3. **Actor exits** - `receiver.recv()` returns `None` and the loop ends
//! 4. **Await completion** - `shutdown()` waits on the task and reports a panic as an error
//!
//! Logging is set up by the binary with
//! [`setup_tracing`](actor_framework::telemetry::setup_tracing), not here.

pub mod order_system;

pub use order_system::*;
