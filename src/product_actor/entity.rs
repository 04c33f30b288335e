//! [`ActorEntity`] implementation for the [`Product`] catalog type.
//!
//! Registration enforces the catalog invariants (a product the counter staff
//! cannot search for or price correctly must never enter the store), updates
//! re-check the numeric fields, and the action handler carries the stock
//! screens and the takeoff estimation.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::takeoff;
use async_trait::async_trait;

fn required(field: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProductError::Validation(format!("{field} must not be empty")).to_string());
    }
    Ok(trimmed.to_string())
}

fn checked_price(price: f64) -> Result<f64, String> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice(price).to_string());
    }
    Ok(price)
}

fn checked_coverage(coverage: Option<f64>) -> Result<Option<f64>, String> {
    match coverage {
        Some(value) if !value.is_finite() || value <= 0.0 => {
            Err(ProductError::InvalidCoverage(value).to_string())
        }
        other => Ok(other),
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            code: required("code", &params.code)?,
            name: required("name", &params.name)?,
            category: params.category,
            brand: required("brand", &params.brand)?,
            color: params
                .color
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            price: checked_price(params.price)?,
            stock: params.stock,
            coverage_m2_per_box: checked_coverage(params.coverage_m2_per_box)?,
            image_urls: params.image_urls,
        })
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = required("name", &name)?;
        }
        if let Some(brand) = update.brand {
            self.brand = required("brand", &brand)?;
        }
        if let Some(color) = update.color {
            let trimmed = color.trim().to_string();
            self.color = (!trimmed.is_empty()).then_some(trimmed);
        }
        if let Some(price) = update.price {
            self.price = checked_price(price)?;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(coverage) = update.coverage_m2_per_box {
            self.coverage_m2_per_box = checked_coverage(Some(coverage))?;
        }
        if let Some(image_urls) = update.image_urls {
            self.image_urls = image_urls;
        }
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: current level.
    /// - `AdjustStock`: receive/dispatch; the level never goes below zero.
    /// - `EstimateRequirement`: takeoff calculation for area-priced products.
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::Stock(self.stock)),
            ProductAction::AdjustStock(delta) => {
                if delta == 0 {
                    return Err(ProductError::InvalidAdjustment(delta).to_string());
                }
                let adjusted = i64::from(self.stock) + delta;
                if adjusted < 0 {
                    return Err(ProductError::InsufficientStock {
                        requested: delta.unsigned_abs().try_into().unwrap_or(u32::MAX),
                        available: self.stock,
                    }
                    .to_string());
                }
                self.stock = adjusted as u32;
                Ok(ProductActionResult::Stock(self.stock))
            }
            ProductAction::EstimateRequirement {
                takeoff: request,
                secondaries,
            } => {
                if !self.category.is_area_priced() {
                    return Err(
                        ProductError::NotAreaPriced(self.category.to_string()).to_string()
                    );
                }
                let spec = self
                    .coverage_spec()
                    .ok_or_else(|| {
                        ProductError::Takeoff(takeoff::TakeoffError::MissingCoverageRate)
                            .to_string()
                    })?;
                takeoff::compute(&spec, &request, &secondaries)
                    .map(ProductActionResult::Estimate)
                    .map_err(|e| ProductError::Takeoff(e).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::takeoff::{SecondaryMaterial, TakeoffRequest};

    fn tile_create() -> ProductCreate {
        ProductCreate {
            code: "POR-GR-60".to_string(),
            name: "Grey porcelain 60x60".to_string(),
            category: Category::PorcelainTile,
            brand: "Celima".to_string(),
            color: Some("grey".to_string()),
            price: 45.0,
            stock: 80,
            coverage_m2_per_box: Some(1.44),
            image_urls: vec![],
        }
    }

    fn tile() -> Product {
        Product::from_create_params("product_1".to_string(), tile_create()).unwrap()
    }

    #[test]
    fn registration_trims_text_fields() {
        let product = Product::from_create_params(
            "product_1".to_string(),
            ProductCreate {
                code: "  POR-GR-60 ".to_string(),
                name: " Grey porcelain ".to_string(),
                brand: " Celima ".to_string(),
                color: Some("   ".to_string()),
                ..tile_create()
            },
        )
        .unwrap();

        assert_eq!(product.code, "POR-GR-60");
        assert_eq!(product.name, "Grey porcelain");
        assert_eq!(product.brand, "Celima");
        assert_eq!(product.color, None);
    }

    #[test]
    fn registration_rejects_blank_required_fields() {
        let err = Product::from_create_params(
            "product_1".to_string(),
            ProductCreate {
                name: "".to_string(),
                ..tile_create()
            },
        )
        .unwrap_err();
        assert!(err.contains("name must not be empty"));
    }

    #[test]
    fn registration_rejects_bad_numbers() {
        let err = Product::from_create_params(
            "product_1".to_string(),
            ProductCreate {
                price: -1.0,
                ..tile_create()
            },
        )
        .unwrap_err();
        assert!(err.contains("Invalid price"));

        let err = Product::from_create_params(
            "product_1".to_string(),
            ProductCreate {
                coverage_m2_per_box: Some(0.0),
                ..tile_create()
            },
        )
        .unwrap_err();
        assert!(err.contains("Invalid coverage rate"));
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let mut product = tile();
        product
            .on_update(
                ProductUpdate {
                    price: Some(47.5),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!(product.price, 47.5);
        assert_eq!(product.name, "Grey porcelain 60x60");
        assert_eq!(product.stock, 80);
    }

    #[tokio::test]
    async fn stock_moves_both_ways_but_never_below_zero() {
        let mut product = tile();

        let up = product
            .handle_action(ProductAction::AdjustStock(20), &())
            .await
            .unwrap();
        assert_eq!(up, ProductActionResult::Stock(100));

        let down = product
            .handle_action(ProductAction::AdjustStock(-30), &())
            .await
            .unwrap();
        assert_eq!(down, ProductActionResult::Stock(70));

        let err = product
            .handle_action(ProductAction::AdjustStock(-71), &())
            .await
            .unwrap_err();
        assert!(err.contains("Insufficient stock"));
        assert_eq!(product.stock, 70);

        let err = product
            .handle_action(ProductAction::AdjustStock(0), &())
            .await
            .unwrap_err();
        assert!(err.contains("Invalid stock adjustment"));
    }

    #[tokio::test]
    async fn estimate_runs_the_takeoff_calculator() {
        let mut product = tile();
        let result = product
            .handle_action(
                ProductAction::EstimateRequirement {
                    takeoff: TakeoffRequest {
                        length_m: 5.0,
                        width_m: 4.0,
                        waste: 0.10,
                    },
                    secondaries: vec![SecondaryMaterial::new("adhesive", 3.0)],
                },
                &(),
            )
            .await
            .unwrap();

        let ProductActionResult::Estimate(estimate) = result else {
            panic!("expected an estimate");
        };
        assert_eq!(estimate.units_required, 16);
        assert!((estimate.total_cost - 720.0).abs() < 1e-9);
        assert_eq!(estimate.secondary_units["adhesive"], 8);
    }

    #[tokio::test]
    async fn estimate_refuses_unit_priced_products() {
        let mut rods = Product::from_create_params(
            "product_2".to_string(),
            ProductCreate {
                code: "VAR-12".to_string(),
                name: "Rebar 12mm".to_string(),
                category: Category::SteelRod,
                coverage_m2_per_box: None,
                ..tile_create()
            },
        )
        .unwrap();

        let err = rods
            .handle_action(
                ProductAction::EstimateRequirement {
                    takeoff: TakeoffRequest {
                        length_m: 5.0,
                        width_m: 4.0,
                        waste: 0.10,
                    },
                    secondaries: vec![],
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(err.contains("Not an area-priced product"));
    }

    #[tokio::test]
    async fn estimate_surfaces_missing_coverage_as_blocking() {
        let mut tile_without_rate = Product::from_create_params(
            "product_3".to_string(),
            ProductCreate {
                coverage_m2_per_box: None,
                ..tile_create()
            },
        )
        .unwrap();

        let err = tile_without_rate
            .handle_action(
                ProductAction::EstimateRequirement {
                    takeoff: TakeoffRequest {
                        length_m: 0.0,
                        width_m: 0.0,
                        waste: 0.05,
                    },
                    secondaries: vec![],
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(err.contains("missing coverage rate"));
    }
}
