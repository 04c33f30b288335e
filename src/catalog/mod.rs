//! Catalog views: filtering, search, and the dashboard summary.
//!
//! Everything here is a pure function over a product snapshot (what
//! [`ProductClient::list_products`](crate::clients::ProductClient::list_products)
//! returns). The actor owns the data; these modules only arrange it.

pub mod report;

pub use report::*;

use crate::model::{Category, Product};

/// Criteria for the catalog browse screen.
///
/// Empty collections and `None` fields mean "don't filter on this"; the
/// default value matches everything.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub categories: Vec<Category>,
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    /// Inclusive price bounds.
    pub price_range: Option<(f64, f64)>,
    /// Free-text needle matched case-insensitively against code, name,
    /// brand and color.
    pub query: Option<String>,
}

impl CatalogFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.brands.is_empty()
            && !self
                .brands
                .iter()
                .any(|brand| brand.eq_ignore_ascii_case(&product.brand))
        {
            return false;
        }
        if !self.colors.is_empty() {
            match &product.color {
                Some(color) => {
                    if !self.colors.iter().any(|c| c.eq_ignore_ascii_case(color)) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if let Some((low, high)) = self.price_range {
            if product.price < low || product.price > high {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.trim().to_lowercase();
            if !needle.is_empty() && !Self::text_matches(product, &needle) {
                return false;
            }
        }
        true
    }

    /// Filters a catalog snapshot, preserving its order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    fn text_matches(product: &Product, needle: &str) -> bool {
        let mut haystacks = vec![
            product.code.to_lowercase(),
            product.name.to_lowercase(),
            product.brand.to_lowercase(),
        ];
        if let Some(color) = &product.color {
            haystacks.push(color.to_lowercase());
        }
        haystacks.iter().any(|hay| hay.contains(needle))
    }
}
