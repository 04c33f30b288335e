//! Error types for the Quote actor.

use thiserror::Error;

/// Errors that can occur while creating or reading quotes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuoteError {
    /// The requested quote was not found.
    #[error("Quote not found: {0}")]
    NotFound(String),

    /// A quote needs at least one item.
    #[error("Quote has no items")]
    Empty,

    /// A quoted product does not exist in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// An area-demand line could not be priced for this product.
    #[error("Cannot quote {product_id} by area: {reason}")]
    AreaQuote { product_id: String, reason: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for QuoteError {
    fn from(msg: String) -> Self {
        QuoteError::ActorCommunicationError(msg)
    }
}
