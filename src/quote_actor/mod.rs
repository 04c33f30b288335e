//! Quote-specific resource logic: pricing customer quotes against the
//! product catalog.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::QuoteClient;
use crate::framework::ResourceActor;
use crate::model::Quote;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Quote actor and its client.
pub fn new() -> (ResourceActor<Quote>, QuoteClient) {
    let quote_id_counter = Arc::new(AtomicU64::new(1));
    let next_quote_id = move || {
        let id = quote_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("quote_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_quote_id);
    let client = QuoteClient::new(generic_client);

    (actor, client)
}
