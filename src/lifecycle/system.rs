use crate::clients::{ProductClient, QuoteClient};
use tracing::{error, info};

/// The runtime orchestrator for the inventory service.
///
/// `InventorySystem` starts both actors, wires the quote actor to the
/// product actor, and owns graceful shutdown.
///
/// # Architecture
///
/// - **Product actor**: the catalog, stock levels, and takeoff estimation.
///   No dependencies (`Context = ()`).
/// - **Quote actor**: prices customer quotes. Needs catalog access, so its
///   context is a [`ProductClient`] — injected at `run()` time, after both
///   actors exist, which is what the late-binding context is for.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new();
///
/// let product_id = system.product_client.create_product(params).await?;
/// let quote_id = system.quote_client.create_quote(quote).await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for the Product actor.
    pub product_client: ProductClient,

    /// Client for the Quote actor.
    pub quote_client: QuoteClient,

    /// Task handles for all running actors, joined at shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Creates the system with both actors running and wired.
    pub fn new() -> Self {
        let (product_actor, product_client) = crate::product_actor::new();
        let (quote_actor, quote_client) = crate::quote_actor::new();

        let product_handle = tokio::spawn(product_actor.run(()));
        let quote_handle = tokio::spawn(quote_actor.run(product_client.clone()));

        Self {
            product_client,
            quote_client,
            handles: vec![product_handle, quote_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits its loop. The join surfaces any actor panic.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.product_client);
        drop(self.quote_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InventorySummary;
    use crate::clients::ActorClient;
    use crate::model::{Category, ProductCreate, QuoteCreate, QuoteItem};
    use crate::takeoff::{SecondaryMaterial, TakeoffRequest};

    fn tile_create() -> ProductCreate {
        ProductCreate {
            code: "POR-GR-60".to_string(),
            name: "Grey porcelain 60x60".to_string(),
            category: Category::PorcelainTile,
            brand: "Celima".to_string(),
            color: Some("grey".to_string()),
            price: 45.0,
            stock: 50,
            coverage_m2_per_box: Some(1.44),
            image_urls: vec![],
        }
    }

    fn adhesive_create() -> ProductCreate {
        ProductCreate {
            code: "PEG-25".to_string(),
            name: "Tile adhesive 25kg".to_string(),
            category: Category::Adhesive,
            brand: "Topex".to_string(),
            color: None,
            price: 22.0,
            stock: 8,
            coverage_m2_per_box: None,
            image_urls: vec![],
        }
    }

    #[tokio::test]
    async fn counter_flow_end_to_end() {
        let system = InventorySystem::new();

        // Goods arrive.
        let tile_id = system
            .product_client
            .create_product(tile_create())
            .await
            .unwrap();
        let adhesive_id = system
            .product_client
            .create_product(adhesive_create())
            .await
            .unwrap();
        let level = system
            .product_client
            .adjust_stock(tile_id.clone(), 30)
            .await
            .unwrap();
        assert_eq!(level, 80);

        // A customer brings room dimensions.
        let estimate = system
            .product_client
            .estimate_requirement(
                tile_id.clone(),
                TakeoffRequest {
                    length_m: 5.0,
                    width_m: 4.0,
                    waste: 0.10,
                },
                vec![SecondaryMaterial::new("adhesive", 3.0)],
            )
            .await
            .unwrap();
        assert_eq!(estimate.units_required, 16);
        assert_eq!(estimate.secondary_units["adhesive"], 8);

        // The estimate becomes a quote.
        let quote_id = system
            .quote_client
            .create_quote(QuoteCreate {
                customer: "Sra. Flores".to_string(),
                items: vec![
                    QuoteItem::area(
                        tile_id.clone(),
                        TakeoffRequest {
                            length_m: 5.0,
                            width_m: 4.0,
                            waste: 0.10,
                        },
                    ),
                    QuoteItem::units(adhesive_id, 8),
                ],
            })
            .await
            .unwrap();
        let quote = system
            .quote_client
            .get(quote_id)
            .await
            .unwrap()
            .expect("quote should be stored");
        assert!((quote.total - (720.0 + 176.0)).abs() < 1e-9);

        // Quoting never moved stock.
        let level = system.product_client.check_stock(tile_id).await.unwrap();
        assert_eq!(level, 80);

        // The dashboard flags the adhesive (8 < 10).
        let summary =
            InventorySummary::from_products(&system.product_client.list_products().await.unwrap());
        assert_eq!(summary.distinct_products, 2);
        assert_eq!(summary.low_stock.len(), 1);
        assert_eq!(summary.low_stock[0].code, "PEG-25");

        system.shutdown().await.unwrap();
    }
}
