//! Error types for the Product actor.

use crate::takeoff::TakeoffError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data failed registration checks (empty code, name, brand).
    #[error("Product validation error: {0}")]
    Validation(String),

    /// Price must be a finite number ≥ 0.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// A declared coverage rate must be a finite number > 0.
    #[error("Invalid coverage rate: {0} m² per box")]
    InvalidCoverage(f64),

    /// A stock adjustment of zero units is meaningless.
    #[error("Invalid stock adjustment: {0}")]
    InvalidAdjustment(i64),

    /// A dispatch would leave the stock level below zero.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Takeoff estimation was requested for a product sold per unit.
    #[error("Not an area-priced product (category: {0})")]
    NotAreaPriced(String),

    /// The takeoff calculator rejected the request.
    #[error("Takeoff failed: {0}")]
    Takeoff(#[from] TakeoffError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
