use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::takeoff::{SecondaryMaterial, TakeoffRequest, TakeoffResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!(?params, "create_product called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: String,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!(?update, "update_product called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Snapshot of the whole catalog, for the filter and dashboard views.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.inner.list().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        self.stock_action(id, ProductAction::CheckStock).await
    }

    /// Receive goods (positive delta) or dispatch them (negative). Returns
    /// the stock level after the adjustment.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: String, delta: i64) -> Result<u32, ProductError> {
        self.stock_action(id, ProductAction::AdjustStock(delta)).await
    }

    /// Runs the takeoff calculator against the product's coverage rate.
    #[instrument(skip(self, takeoff, secondaries))]
    pub async fn estimate_requirement(
        &self,
        id: String,
        takeoff: TakeoffRequest,
        secondaries: Vec<SecondaryMaterial>,
    ) -> Result<TakeoffResult, ProductError> {
        debug!(?takeoff, "estimate_requirement called");
        let action = ProductAction::EstimateRequirement {
            takeoff,
            secondaries,
        };
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Estimate(result) => Ok(result),
            other => Err(Self::unexpected_result(other)),
        }
    }

    async fn stock_action(&self, id: String, action: ProductAction) -> Result<u32, ProductError> {
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Stock(level) => Ok(level),
            other => Err(Self::unexpected_result(other)),
        }
    }

    fn unexpected_result(result: ProductActionResult) -> ProductError {
        ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
