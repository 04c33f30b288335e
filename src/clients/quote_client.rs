use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Quote, QuoteCreate};
use crate::quote_actor::QuoteError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Quote actor.
///
/// Pricing (product lookup, takeoff calculation) happens in the Quote
/// actor's `on_create` hook, not here.
#[derive(Clone)]
pub struct QuoteClient {
    inner: ResourceClient<Quote>,
}

impl QuoteClient {
    pub fn new(inner: ResourceClient<Quote>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_quote(&self, params: QuoteCreate) -> Result<String, QuoteError> {
        debug!(?params, "create_quote called");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Quote> for QuoteClient {
    type Error = QuoteError;

    fn inner(&self) -> &ResourceClient<Quote> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => QuoteError::NotFound(id),
            other => QuoteError::ActorCommunicationError(other.to_string()),
        }
    }
}
