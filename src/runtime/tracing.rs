//! # Observability & Tracing
//!
//! Actors log each request with its `entity_type` and record id, clients open a span per
//! call, and the demo groups its flows under named spans. The compact format prints
//! spans inline, so a checkout reads as
//! `order_placement:create_order: Order placed id=order_1 total=250.00`.
//!
//! ```bash
//! # Request-level logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads (create params, updates, actions)
//! RUST_LOG=debug cargo run
//! ```

/// Installs the global subscriber. Filtering comes from `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}
