//! Dashboard numbers: stock valuation, category spread, restock alerts.
//!
//! The summary is raw data; rendering it (charts, currency formatting) is a
//! presentation concern outside this crate.

use crate::model::{Category, Product};
use serde::Serialize;
use std::collections::BTreeMap;

/// Products at or below this level show up on the restock list.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// The restock list is capped to the worst offenders.
pub const LOW_STOCK_TOP: usize = 10;

/// One product running out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockAlert {
    pub code: String,
    pub name: String,
    pub stock: u32,
}

/// Business snapshot of the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    /// Distinct catalog entries.
    pub distinct_products: usize,
    /// Capital on the shelves: Σ price × stock.
    pub stock_value: f64,
    /// Catalog entries per category.
    pub by_category: BTreeMap<Category, usize>,
    /// Products below [`LOW_STOCK_THRESHOLD`], scarcest first, at most
    /// [`LOW_STOCK_TOP`] entries.
    pub low_stock: Vec<LowStockAlert>,
}

impl InventorySummary {
    pub fn from_products(products: &[Product]) -> Self {
        Self::with_threshold(products, LOW_STOCK_THRESHOLD)
    }

    pub fn with_threshold(products: &[Product], threshold: u32) -> Self {
        let stock_value = products.iter().map(Product::stock_value).sum();

        let mut by_category: BTreeMap<Category, usize> = BTreeMap::new();
        for product in products {
            *by_category.entry(product.category).or_default() += 1;
        }

        let mut low_stock: Vec<LowStockAlert> = products
            .iter()
            .filter(|p| p.stock < threshold)
            .map(|p| LowStockAlert {
                code: p.code.clone(),
                name: p.name.clone(),
                stock: p.stock,
            })
            .collect();
        // Scarcest first; code as tiebreak so the list is stable run to run.
        low_stock.sort_by(|a, b| a.stock.cmp(&b.stock).then_with(|| a.code.cmp(&b.code)));
        low_stock.truncate(LOW_STOCK_TOP);

        Self {
            distinct_products: products.len(),
            stock_value,
            by_category,
            low_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(code: &str, category: Category, price: f64, stock: u32) -> Product {
        Product {
            id: format!("product_{code}"),
            code: code.to_string(),
            name: format!("name of {code}"),
            category,
            brand: "brand".to_string(),
            color: None,
            price,
            stock,
            coverage_m2_per_box: None,
            image_urls: vec![],
        }
    }

    #[test]
    fn sums_value_and_counts_categories() {
        let catalog = vec![
            product("A", Category::PorcelainTile, 45.0, 20),
            product("B", Category::PorcelainTile, 19.5, 100),
            product("C", Category::Adhesive, 22.0, 4),
        ];
        let summary = InventorySummary::from_products(&catalog);

        assert_eq!(summary.distinct_products, 3);
        assert!((summary.stock_value - (45.0 * 20.0 + 19.5 * 100.0 + 22.0 * 4.0)).abs() < 1e-9);
        assert_eq!(summary.by_category[&Category::PorcelainTile], 2);
        assert_eq!(summary.by_category[&Category::Adhesive], 1);
    }

    #[test]
    fn restock_list_is_scarcest_first_and_capped() {
        let mut catalog: Vec<Product> = (0..15)
            .map(|i| product(&format!("P{i:02}"), Category::Other, 10.0, i as u32))
            .collect();
        catalog.push(product("FULL", Category::Other, 10.0, 500));

        let summary = InventorySummary::from_products(&catalog);

        // Stocks 0..=9 qualify; the cap keeps all ten, scarcest first.
        assert_eq!(summary.low_stock.len(), LOW_STOCK_TOP);
        assert_eq!(summary.low_stock[0].stock, 0);
        assert_eq!(summary.low_stock[9].stock, 9);
        assert!(summary.low_stock.iter().all(|a| a.stock < LOW_STOCK_THRESHOLD));
    }

    #[test]
    fn threshold_is_exclusive_at_the_boundary() {
        let catalog = vec![
            product("EDGE", Category::Other, 10.0, LOW_STOCK_THRESHOLD),
            product("LOW", Category::Other, 10.0, LOW_STOCK_THRESHOLD - 1),
        ];
        let summary = InventorySummary::from_products(&catalog);

        assert_eq!(summary.low_stock.len(), 1);
        assert_eq!(summary.low_stock[0].code, "LOW");
    }

    #[test]
    fn empty_catalog_is_an_empty_summary() {
        let summary = InventorySummary::from_products(&[]);
        assert_eq!(summary.distinct_products, 0);
        assert_eq!(summary.stock_value, 0.0);
        assert!(summary.by_category.is_empty());
        assert!(summary.low_stock.is_empty());
    }
}
