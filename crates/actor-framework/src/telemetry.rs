//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. Every actor logs with
//! an `entity_type` field, so module paths are hidden (`with_target(false)`) and the compact
//! format keeps client spans inline, e.g. `place_order:` in front of the actor's events.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Mutations** (`info`): `Created`, `Deleted`, `Action ok`
//! - **Reads and payloads** (`debug`): `Get`, `List`, `Find`, `Create params=...`
//! - **Rejections** (`warn`): `Create failed`, `Action failed`, `Not found`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run                               # mutations only
//! RUST_LOG=debug cargo run                              # reads and payloads too
//! RUST_LOG=order_registry=debug,actor_framework=info cargo run
//! ```
//!
//! With `RUST_LOG=info` a placed order shows up as:
//!
//! ```text
//! INFO place_order: Created entity_type="Order" id=ODR#00001 size=1
//! ```

/// Installs a compact, `RUST_LOG`-filtered subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
