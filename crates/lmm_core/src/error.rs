//! Curve error types.
//!
//! This module provides structured error handling for curve construction,
//! curve evolution preconditions and par coupon calculation.

use thiserror::Error;

/// Curve operation errors.
///
/// Every variant describes a violated precondition. Numeric context is
/// stored as `f64` so the error type stays independent of the scalar type
/// used by the curve.
///
/// # Variants
///
/// - `LengthMismatch`: Tenor, value and volatility sequences differ in length
/// - `NonFiniteInput`: A NaN or infinite entry in one of the sequences
/// - `NonPositiveTime`: First tenor boundary is not after the valuation time
/// - `NonIncreasingTimes`: Tenor boundaries are not strictly increasing
/// - `InvalidHorizon`: Negative or non-finite evolution horizon
/// - `Empty`: Operation needs at least one bucket
/// - `DegenerateAnnuity`: Annuity of the curve is zero
///
/// # Examples
///
/// ```
/// use lmm_core::CurveError;
///
/// let err = CurveError::InvalidHorizon { u: -0.5 };
/// assert!(format!("{}", err).contains("-0.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Parallel sequences have different lengths.
    #[error("Length mismatch: times = {times}, values = {values}, vols = {vols}")]
    LengthMismatch {
        /// Number of tenor boundaries
        times: usize,
        /// Number of values
        values: usize,
        /// Number of volatilities
        vols: usize,
    },

    /// NaN or infinite input.
    #[error("Non-finite {field} at index {index}")]
    NonFiniteInput {
        /// Name of the offending sequence
        field: &'static str,
        /// Bucket index
        index: usize,
    },

    /// First tenor boundary at or before the valuation time.
    #[error("Non-positive tenor boundary: t[0] = {t}")]
    NonPositiveTime {
        /// The offending boundary
        t: f64,
    },

    /// Tenor boundaries not strictly increasing.
    #[error("Tenor boundaries not strictly increasing at index {index}: {prev} >= {t}")]
    NonIncreasingTimes {
        /// Index of the offending boundary
        index: usize,
        /// Previous boundary
        prev: f64,
        /// Offending boundary
        t: f64,
    },

    /// Evolution horizon negative or non-finite.
    #[error("Invalid horizon: u = {u}")]
    InvalidHorizon {
        /// The offending horizon
        u: f64,
    },

    /// Curve has no buckets.
    #[error("Curve has no buckets")]
    Empty,

    /// Annuity is zero so the par coupon is undefined.
    #[error("Degenerate annuity: sum of discounted accrual periods is zero")]
    DegenerateAnnuity,
}
