//! # Observability & Tracing
//!
//! Structured logging setup for the whole service.
//!
//! Every actor operation is traced with structured fields (`entity_type`,
//! the entity id, failure reasons), and every client method opens a span, so
//! a single request reads as a hierarchy:
//!
//! ```text
//! INFO Created product_id="product_1" size=1
//! DEBUG Action product_id="product_1" action=AdjustStock(30)
//! INFO Action ok product_id="product_1"
//! INFO Created quote_id="quote_1" size=1
//! ```
//!
//! Levels follow the usual split: `info` for lifecycle milestones, `debug`
//! for full payloads at function entry (`debug!(?params, ...)`), `warn` for
//! rejected operations. Filter with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run            # compact milestones
//! RUST_LOG=debug cargo run           # payloads included
//! RUST_LOG=matstock::framework=debug cargo run
//! ```

/// Initializes the subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields carry the context instead
        .compact()
        .init();
}
