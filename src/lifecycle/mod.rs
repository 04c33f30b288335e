//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle**: starting, wiring, and shutting down actors
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`InventorySystem`] - spawns the actors and wires their dependencies
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
