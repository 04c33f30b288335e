use crate::takeoff::CoverageSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales categories carried by the store.
///
/// This is a closed set on purpose: the category decides how a product is
/// priced and which screens it appears on, so "just type something" is not
/// an option at the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    PorcelainTile,
    CeramicTile,
    Sanitaryware,
    Adhesive,
    SteelRod,
    Other,
}

impl Category {
    /// Whether products in this category are priced by covered area
    /// (m² per box) rather than per unit.
    ///
    /// Only area-priced products may be routed to the takeoff calculator.
    pub fn is_area_priced(&self) -> bool {
        matches!(self, Category::PorcelainTile | Category::CeramicTile)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::PorcelainTile => "porcelain tile",
            Category::CeramicTile => "ceramic tile",
            Category::Sanitaryware => "sanitaryware",
            Category::Adhesive => "adhesive",
            Category::SteelRod => "steel rod",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity)
/// trait (see [`crate::product_actor::entity`]), allowing it to be managed by
/// a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Actor-assigned identifier (e.g. `product_7`).
    pub id: String,
    /// Shelf/SKU code chosen by the store (e.g. `POR-GR-60`).
    pub code: String,
    pub name: String,
    pub category: Category,
    pub brand: String,
    /// Color or finish, when it matters for the product.
    pub color: Option<String>,
    /// Price of one sales unit (box, bag, piece).
    pub price: f64,
    /// Units on hand.
    pub stock: u32,
    /// m² one box covers. Present only for area-priced products.
    pub coverage_m2_per_box: Option<f64>,
    /// Hosted photo URLs, in display order.
    pub image_urls: Vec<String>,
}

impl Product {
    /// Coverage spec for the takeoff calculator, if this product declares a
    /// coverage rate.
    pub fn coverage_spec(&self) -> Option<CoverageSpec> {
        self.coverage_m2_per_box.map(|area_per_box| CoverageSpec {
            area_per_box,
            unit_price: self.price,
        })
    }

    /// Capital sitting on the shelf for this product.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

/// DTO for product registration.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub code: String,
    pub name: String,
    pub category: Category,
    pub brand: String,
    pub color: Option<String>,
    pub price: f64,
    pub stock: u32,
    pub coverage_m2_per_box: Option<f64>,
    pub image_urls: Vec<String>,
}

/// DTO for product edits; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub coverage_m2_per_box: Option<f64>,
    pub image_urls: Option<Vec<String>>,
}
