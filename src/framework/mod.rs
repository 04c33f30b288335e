//! Generic actor framework for resource management.
//!
//! The building blocks for type-safe actors that manage resource entities
//! with CRUD operations, a collection read, and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait resource types implement to be managed by actors
//! - [`ResourceActor`] - generic actor owning a store of entities
//! - [`ResourceClient`] - type-safe handle to a running actor
//! - [`FrameworkError`] - plumbing error type
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
