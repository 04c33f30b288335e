use crate::takeoff::TakeoffRequest;
use serde::{Deserialize, Serialize};

/// What the customer asked for in one quote line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Demand {
    /// A straight count of sales units.
    Units(u32),
    /// A surface to cover; the takeoff calculator decides the box count.
    Area(TakeoffRequest),
}

/// One requested item, before pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub product_id: String,
    pub demand: Demand,
}

impl QuoteItem {
    pub fn units(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            demand: Demand::Units(quantity),
        }
    }

    pub fn area(product_id: impl Into<String>, takeoff: TakeoffRequest) -> Self {
        Self {
            product_id: product_id.into(),
            demand: Demand::Area(takeoff),
        }
    }
}

/// A priced line, derived from a [`QuoteItem`] when the quote is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_id: String,
    pub description: String,
    pub units: u64,
    pub unit_price: f64,
    pub line_total: f64,
}

/// A customer quote.
///
/// Quotes are offers, not sales: creating one never touches stock. Stock
/// moves through the product actor's `AdjustStock` action when goods
/// actually leave the warehouse.
///
/// The raw `items` are kept alongside the priced `lines` so a quote records
/// what was asked (a 5m × 4m floor) and not only what was answered
/// (16 boxes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub customer: String,
    pub items: Vec<QuoteItem>,
    pub lines: Vec<QuoteLine>,
    pub total: f64,
}

/// DTO for quote creation.
#[derive(Debug, Clone)]
pub struct QuoteCreate {
    pub customer: String,
    pub items: Vec<QuoteItem>,
}
