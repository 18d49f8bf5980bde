//! # lmm_core: Curve Foundation for the Two-Factor LIBOR Market Model
//!
//! ## Layer 1 (Foundation) Role
//!
//! lmm_core is the bottom layer of the workspace, providing:
//! - Tenor-bucketed curves with a movable visible window (`curve`)
//! - Forward / futures quote conversion (`quotes`)
//! - Par coupon, discount factors and annuity (`par`)
//! - Error types: `CurveError` (`error`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//!
//! Randomness and curve evolution live in `lmm_simulation`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use lmm_core::quotes::{to_forwards, to_futures};
//! use lmm_core::Curve;
//!
//! let mut curve = Curve::new(
//!     vec![1.0, 2.0, 3.0],
//!     vec![0.03, 0.035, 0.04],
//!     vec![0.01, 0.01, 0.01],
//! )
//! .unwrap();
//!
//! let coupon = curve.par_coupon().unwrap();
//! assert!(coupon > 0.03 && coupon < 0.04);
//!
//! to_futures(&mut curve);
//! to_forwards(&mut curve);
//! # assert!((curve.values()[2] - 0.04_f64).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curve;
pub mod error;
pub mod par;
pub mod quotes;

/// Generic floating-point trait for curve computations.
///
/// All curve types and operations are generic over `T: Float` so callers
/// choose the precision (`f64`, `f32`).
///
/// # Examples
/// ```
/// use lmm_core::Float;
///
/// fn discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let df: f64 = discount(0.05, 1.0);
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

// Re-export commonly used types
pub use curve::{Bucket, Curve, CurveWindow};
pub use error::CurveError;
pub use par::par_coupon;
pub use quotes::{to_forwards, to_futures};
