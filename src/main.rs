//! Demo of the counter workflow: register products, receive stock, run a
//! takeoff estimate from user-typed dimensions, and turn it into a quote.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use matstock::catalog::InventorySummary;
use matstock::clients::ActorClient;
use matstock::lifecycle::{setup_tracing, InventorySystem};
use matstock::model::{Category, ProductCreate, QuoteCreate, QuoteItem};
use matstock::numeric::parse_decimal;
use matstock::takeoff::{SecondaryMaterial, TakeoffRequest, WASTE_PRESETS};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting inventory system");
    let system = InventorySystem::new();

    // Register the day's catalog.
    let tile_id = system
        .product_client
        .create_product(ProductCreate {
            code: "POR-GR-60".to_string(),
            name: "Grey porcelain 60x60".to_string(),
            category: Category::PorcelainTile,
            brand: "Celima".to_string(),
            color: Some("grey".to_string()),
            price: 45.0,
            stock: 20,
            coverage_m2_per_box: Some(1.44),
            image_urls: vec!["https://img.example/por-gr-60.jpg".to_string()],
        })
        .await
        .map_err(|e| e.to_string())?;

    let adhesive_id = system
        .product_client
        .create_product(ProductCreate {
            code: "PEG-25".to_string(),
            name: "Tile adhesive 25kg".to_string(),
            category: Category::Adhesive,
            brand: "Topex".to_string(),
            color: None,
            price: 22.0,
            stock: 120,
            coverage_m2_per_box: None,
            image_urls: vec![],
        })
        .await
        .map_err(|e| e.to_string())?;

    // A delivery arrives.
    let level = system
        .product_client
        .adjust_stock(tile_id.clone(), 60)
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %tile_id, level, "Stock received");

    // A customer asks for a 5m × 4m floor; dimensions come off the form as
    // text, comma decimal separator included.
    let length_m = parse_decimal("5,0").map_err(|e| e.to_string())?;
    let width_m = parse_decimal("4").map_err(|e| e.to_string())?;
    let takeoff = TakeoffRequest {
        length_m,
        width_m,
        waste: WASTE_PRESETS[1], // 10%
    };

    let span = tracing::info_span!("takeoff_estimate");
    let estimate = async {
        system
            .product_client
            .estimate_requirement(
                tile_id.clone(),
                takeoff.clone(),
                vec![SecondaryMaterial::new("adhesive", 3.0)],
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        boxes = estimate.units_required,
        covered_m2 = estimate.covered_area,
        cost = estimate.total_cost,
        adhesive_bags = estimate.secondary_units["adhesive"],
        "Takeoff estimate ready"
    );

    // The customer takes the offer home as a quote.
    let quote_id = system
        .quote_client
        .create_quote(QuoteCreate {
            customer: "Sra. Flores".to_string(),
            items: vec![
                QuoteItem::area(tile_id.clone(), takeoff),
                QuoteItem::units(adhesive_id, estimate.secondary_units["adhesive"] as u32),
            ],
        })
        .await
        .map_err(|e| e.to_string())?;

    let quote = system
        .quote_client
        .get(quote_id.clone())
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("quote {quote_id} disappeared"))?;
    info!(quote_id = %quote.id, total = quote.total, lines = quote.lines.len(), "Quote created");

    // End-of-day dashboard.
    let catalog = system
        .product_client
        .list_products()
        .await
        .map_err(|e| e.to_string())?;
    let summary = InventorySummary::from_products(&catalog);
    info!(
        products = summary.distinct_products,
        stock_value = summary.stock_value,
        restock_alerts = summary.low_stock.len(),
        "Inventory summary"
    );

    system.shutdown().await
}
