//! [`ActorEntity`] implementation for the [`Quote`] type.
//!
//! Pricing happens in `on_create`, the async hook that runs before the quote
//! is stored: each demanded item fetches its product through the injected
//! [`ProductClient`], unit demands price as quantity × unit price, and area
//! demands run the takeoff calculator against the product's coverage rate.
//! A quote that fails any line is rejected whole — a half-priced quote on
//! the counter is worse than no quote.

use super::error::QuoteError;
use crate::clients::{ActorClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{Demand, Quote, QuoteCreate, QuoteLine};
use crate::takeoff;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Quote {
    type Id = String;
    type CreateParams = QuoteCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Context = ProductClient;

    fn from_create_params(id: String, params: QuoteCreate) -> Result<Self, String> {
        if params.items.is_empty() {
            return Err(QuoteError::Empty.to_string());
        }
        Ok(Self {
            id,
            customer: params.customer.trim().to_string(),
            items: params.items,
            lines: Vec::new(),
            total: 0.0,
        })
    }

    /// Prices every line; failing aborts the create.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), String> {
        let mut lines = Vec::with_capacity(self.items.len());

        for item in &self.items {
            let product = products
                .get(item.product_id.clone())
                .await
                .map_err(|e| e.to_string())?
                .ok_or_else(|| QuoteError::UnknownProduct(item.product_id.clone()).to_string())?;

            let line = match &item.demand {
                Demand::Units(quantity) => QuoteLine {
                    product_id: product.id.clone(),
                    description: product.name.clone(),
                    units: u64::from(*quantity),
                    unit_price: product.price,
                    line_total: f64::from(*quantity) * product.price,
                },
                Demand::Area(request) => {
                    if !product.category.is_area_priced() {
                        return Err(QuoteError::AreaQuote {
                            product_id: product.id.clone(),
                            reason: format!("sold per unit (category: {})", product.category),
                        }
                        .to_string());
                    }
                    let spec = product.coverage_spec().ok_or_else(|| {
                        QuoteError::AreaQuote {
                            product_id: product.id.clone(),
                            reason: takeoff::TakeoffError::MissingCoverageRate.to_string(),
                        }
                        .to_string()
                    })?;
                    let estimate = takeoff::compute(&spec, request, &[]).map_err(|e| {
                        QuoteError::AreaQuote {
                            product_id: product.id.clone(),
                            reason: e.to_string(),
                        }
                        .to_string()
                    })?;
                    QuoteLine {
                        product_id: product.id.clone(),
                        description: product.name.clone(),
                        units: estimate.units_required,
                        unit_price: product.price,
                        line_total: estimate.total_cost,
                    }
                }
            };
            lines.push(line);
        }

        self.total = lines.iter().map(|line| line.line_total).sum();
        self.lines = lines;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &ProductClient) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &ProductClient) -> Result<(), String> {
        Ok(())
    }
}
