//! Error types for the takeoff calculator.

use thiserror::Error;

/// Validation failures produced by [`compute`](super::compute).
///
/// Every variant is an input-shape problem: nothing here is transient, so the
/// caller must fix the input rather than retry. The calculator never logs;
/// surfacing the problem (inline warning, blocked form) belongs to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TakeoffError {
    /// The product declares no usable coverage rate (m² per box missing or ≤ 0).
    ///
    /// Area-priced products must carry this field; the calculator refuses to
    /// guess. Products sold by weight or unit should never be routed here.
    #[error("missing coverage rate: product does not declare m² per box")]
    MissingCoverageRate,

    /// Unit price below zero.
    #[error("invalid unit price: {0}")]
    InvalidPrice(f64),

    /// A dimension, coverage rate or price was not a finite number, or a
    /// dimension was negative.
    #[error("invalid numeric input for {field}: {value}")]
    InvalidNumericInput { field: &'static str, value: f64 },

    /// Waste fraction outside `[0, 1)`.
    #[error("invalid waste percent: {0} (expected a fraction in [0, 1))")]
    InvalidWastePercent(f64),
}
