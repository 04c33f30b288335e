//! Custom actions for the Product actor, beyond plain CRUD.

use crate::takeoff::{SecondaryMaterial, TakeoffRequest, TakeoffResult};

/// Resource-specific operations on one product.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Read the current stock level.
    CheckStock,

    /// Receive goods (positive) or dispatch them (negative). The resulting
    /// level may not drop below zero.
    AdjustStock(i64),

    /// Run the takeoff calculator against this product's coverage rate.
    ///
    /// Only area-priced products accept this; the actor refuses to estimate
    /// a product sold by unit or weight.
    EstimateRequirement {
        takeoff: TakeoffRequest,
        secondaries: Vec<SecondaryMaterial>,
    },
}

/// Results of [`ProductAction`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The stock level after the action.
    Stock(u32),
    /// The computed material requirement.
    Estimate(TakeoffResult),
}
