//! # Takeoff Calculator
//!
//! Converts "an area to cover" into "whole boxes to sell".
//!
//! Tiled materials are priced by coverage: one box of porcelain covers, say,
//! 1.44 m². A customer covering a 5m × 4m floor cannot buy 13.9 boxes, and the
//! installer will lose material to cuts and breakage (the *merma*), so the
//! counter flow is always the same:
//!
//! 1. inflate the requested area by a waste fraction,
//! 2. round the box count **up** to whole units,
//! 3. derive consumables (adhesive, grout) from the same inflated area.
//!
//! The waste fraction is applied to the area *before* rounding. Rounding first
//! and then padding the box count would double-charge the customer for waste
//! the ceiling already absorbed.
//!
//! Secondary materials are derived from the adjusted area, **not** from the
//! covered area of the primary product: adhesive consumption tracks the surface
//! actually tiled, not the extra coverage sitting in the last partial box.
//!
//! [`compute`] is a pure function: no I/O, no shared state, safe to call
//! concurrently from any number of tasks. All failures are synchronous
//! [`TakeoffError`] values describing bad input; there is nothing to retry.

mod error;

pub use error::TakeoffError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Waste fractions offered in the calculator menu: 5%, 10%, 15%.
///
/// These are the default affordance, not a hard constraint — [`compute`]
/// accepts any fraction in `[0, 1)`.
pub const WASTE_PRESETS: [f64; 3] = [0.05, 0.10, 0.15];

/// Per-unit coverage and price of the primary product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSpec {
    /// Surface one sales unit (box) covers, in m². Must be > 0.
    pub area_per_box: f64,
    /// Price of one box. Must be ≥ 0.
    pub unit_price: f64,
}

/// User-entered dimensions and waste allowance for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffRequest {
    /// Length of the surface, in meters. Zero means "not yet entered".
    pub length_m: f64,
    /// Width of the surface, in meters. Zero means "not yet entered".
    pub width_m: f64,
    /// Waste fraction in `[0, 1)`; see [`WASTE_PRESETS`].
    pub waste: f64,
}

/// A consumable whose required quantity derives from the covered surface but
/// has its own coverage rate (m² per bag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryMaterial {
    pub name: String,
    /// Surface one bag/unit serves, in m². Must be > 0.
    pub coverage_per_unit: f64,
}

impl SecondaryMaterial {
    pub fn new(name: impl Into<String>, coverage_per_unit: f64) -> Self {
        Self {
            name: name.into(),
            coverage_per_unit,
        }
    }
}

/// The full result of one takeoff calculation.
///
/// All fields are raw numbers; formatting (currency symbol, decimal places,
/// locale) is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffResult {
    /// `length × width`, before the waste allowance.
    pub requested_area: f64,
    /// `requested_area × (1 + waste)`.
    pub adjusted_area: f64,
    /// Whole boxes to sell: `ceil(adjusted_area / area_per_box)`.
    pub units_required: u64,
    /// `units_required × area_per_box`.
    pub covered_area: f64,
    /// `covered_area − adjusted_area`; never negative.
    pub overage_area: f64,
    /// `units_required × unit_price`.
    pub total_cost: f64,
    /// Required bag counts per secondary material, keyed by name.
    pub secondary_units: BTreeMap<String, u64>,
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), TakeoffError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TakeoffError::InvalidNumericInput { field, value })
    }
}

fn ensure_dimension(field: &'static str, value: f64) -> Result<(), TakeoffError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(TakeoffError::InvalidNumericInput { field, value });
    }
    Ok(())
}

fn whole_units(adjusted_area: f64, coverage: f64) -> u64 {
    // Exact multiples stay at the exact quotient; anything else rounds up.
    (adjusted_area / coverage).ceil() as u64
}

/// Computes box and consumable requirements for covering a rectangular surface.
///
/// Validation runs before any arithmetic, so a product with a missing coverage
/// rate is reported even while the dimensions are still zero — the caller can
/// block the form up front instead of after the customer has typed everything.
///
/// A requested area of zero (either dimension zero) is the "not yet entered"
/// state and yields a valid all-zero result, not an error.
///
/// # Errors
///
/// See [`TakeoffError`] for the full taxonomy. Every error is a local
/// validation failure returned to the caller; nothing is logged or retried.
pub fn compute(
    spec: &CoverageSpec,
    request: &TakeoffRequest,
    secondaries: &[SecondaryMaterial],
) -> Result<TakeoffResult, TakeoffError> {
    ensure_dimension("length_m", request.length_m)?;
    ensure_dimension("width_m", request.width_m)?;

    ensure_finite("waste", request.waste)?;
    if !(0.0..1.0).contains(&request.waste) {
        return Err(TakeoffError::InvalidWastePercent(request.waste));
    }

    ensure_finite("area_per_box", spec.area_per_box)?;
    if spec.area_per_box <= 0.0 {
        return Err(TakeoffError::MissingCoverageRate);
    }

    ensure_finite("unit_price", spec.unit_price)?;
    if spec.unit_price < 0.0 {
        return Err(TakeoffError::InvalidPrice(spec.unit_price));
    }

    for secondary in secondaries {
        ensure_finite("coverage_per_unit", secondary.coverage_per_unit)?;
        if secondary.coverage_per_unit <= 0.0 {
            return Err(TakeoffError::InvalidNumericInput {
                field: "coverage_per_unit",
                value: secondary.coverage_per_unit,
            });
        }
    }

    let requested_area = request.length_m * request.width_m;
    let adjusted_area = requested_area * (1.0 + request.waste);

    let units_required = if requested_area == 0.0 {
        0
    } else {
        whole_units(adjusted_area, spec.area_per_box)
    };

    let covered_area = units_required as f64 * spec.area_per_box;
    // The ceiling guarantees covered ≥ adjusted; the clamp only eats float dust.
    let overage_area = (covered_area - adjusted_area).max(0.0);
    let total_cost = units_required as f64 * spec.unit_price;

    let secondary_units = secondaries
        .iter()
        .map(|secondary| {
            let units = if requested_area == 0.0 {
                0
            } else {
                whole_units(adjusted_area, secondary.coverage_per_unit)
            };
            (secondary.name.clone(), units)
        })
        .collect();

    Ok(TakeoffResult {
        requested_area,
        adjusted_area,
        units_required,
        covered_area,
        overage_area,
        total_cost,
        secondary_units,
    })
}
