//! # matstock
//!
//! > **An actor-based inventory and quoting service for a construction-materials distributor.**
//!
//! The business sells tiles, sanitaryware, adhesives and steel by the box, bag and
//! unit. The counter staff need four things from the system: a searchable catalog,
//! fast stock adjustments when goods arrive or leave, a *takeoff* calculator that
//! turns "my bathroom is 5m × 4m" into "buy 16 boxes and 8 bags of adhesive", and
//! quotes built from those numbers.
//!
//! ## 🏗️ Architecture
//!
//! State lives in actors; arithmetic lives in pure functions.
//!
//! - Each resource (products, quotes) is owned by a [`ResourceActor`](framework::ResourceActor)
//!   running in its own Tokio task. Messages are processed sequentially, so no
//!   locks guard the stores.
//! - Everything with actual math in it — the takeoff calculator, catalog filters,
//!   the dashboard summary — is a plain synchronous function with no I/O. Those
//!   modules can be unit-tested (and property-tested) without a runtime.
//!
//! ## 🗺️ Module Tour
//!
//! ### The Engine ([`framework`])
//! The generic actor plumbing: [`ActorEntity`](framework::ActorEntity),
//! [`ResourceActor`](framework::ResourceActor), [`ResourceClient`](framework::ResourceClient),
//! and the [`mock`](framework::mock) utilities for testing clients in isolation.
//!
//! ### The Math ([`takeoff`], [`catalog`], [`numeric`])
//! - [`takeoff`] converts an area to cover into whole boxes, waste allowance
//!   included, plus derived quantities for secondary consumables. This is the
//!   heart of the crate; start there if you read only one module.
//! - [`catalog`] filters the product list and computes the dashboard summary.
//! - [`numeric`] normalizes locale-formatted decimal input ("1,44") before it
//!   ever reaches the calculator.
//!
//! ### The Implementation ([`product_actor`], [`quote_actor`], [`model`])
//! Concrete [`ActorEntity`](framework::ActorEntity) implementations over the
//! [`model`] types. The product actor owns the catalog and stock levels; the
//! quote actor prices customer quotes and depends on the product actor via the
//! injected-context pattern.
//!
//! ### The Interface ([`clients`]) and the Orchestrator ([`lifecycle`])
//! Domain clients ([`ProductClient`](clients::ProductClient),
//! [`QuoteClient`](clients::QuoteClient)) hide raw message passing;
//! [`InventorySystem`](lifecycle::InventorySystem) spawns and wires the actors
//! and owns graceful shutdown.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! Client logic is tested without spawning real actors; see [`framework::mock`].

pub mod catalog;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod numeric;
pub mod product_actor;
pub mod quote_actor;
pub mod takeoff;
