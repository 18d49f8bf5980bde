//! Conversion between forward-rate and futures-quote conventions.
//!
//! Under the model the futures quote and the forward rate of bucket `j`
//! differ by a convexity term:
//!
//! ```text
//! phi[j] = f[j] + sigma[j]^2 * t[j]^2 / 2
//! ```
//!
//! Both conversions are elementwise, in place and allocation free. They
//! operate on the visible window of the curve only.

use num_traits::Float;

use crate::curve::Curve;

/// Convexity term `sigma^2 * t^2 / 2` separating futures from forwards.
///
/// # Example
///
/// ```
/// use lmm_core::quotes::convexity_adjustment;
///
/// let adj = convexity_adjustment(2.0_f64, 0.01);
/// assert!((adj - 0.0002).abs() < 1e-15);
/// ```
#[inline]
pub fn convexity_adjustment<T: Float>(t: T, sigma: T) -> T {
    let two = T::one() + T::one();
    sigma * sigma * t * t / two
}

/// Convert forward rates to futures quotes in place.
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
/// use lmm_core::quotes::{to_forwards, to_futures};
///
/// let mut curve = Curve::flat(vec![1.0, 2.0], 0.03_f64, 0.01).unwrap();
/// to_futures(&mut curve);
/// assert!(curve.values()[1] > 0.03);
///
/// to_forwards(&mut curve);
/// assert!((curve.values()[1] - 0.03).abs() < 1e-15);
/// ```
pub fn to_futures<T: Float>(curve: &mut Curve<T>) {
    let (times, values, vols) = curve.buckets_mut();
    for ((value, &t), &sigma) in values.iter_mut().zip(times.iter()).zip(vols) {
        *value = *value + convexity_adjustment(t, sigma);
    }
}

/// Convert futures quotes to forward rates in place.
///
/// Exact inverse of [`to_futures`] for the same tenors and volatilities,
/// up to floating-point rounding.
pub fn to_forwards<T: Float>(curve: &mut Curve<T>) {
    let (times, values, vols) = curve.buckets_mut();
    for ((value, &t), &sigma) in values.iter_mut().zip(times.iter()).zip(vols) {
        *value = *value - convexity_adjustment(t, sigma);
    }
}
