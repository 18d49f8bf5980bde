//! Single-step evolution of a curve to a later valuation time.
//!
//! Futures quotes follow
//!
//! ```text
//! Phi_j(u) = phi[j] * exp(sigma[j] * B_u - sigma[j]^2 * u / 2)
//! B_u      = W0_u * cos(alpha * t) + W1_u * sin(alpha * t)
//! ```
//!
//! where `W0_u`, `W1_u` are the two independent standard normal draws of the
//! step, `t` is the bucket's boundary measured from `u`, and `alpha` rotates
//! the two factors across tenors. The draws are not scaled by the horizon,
//! so the expected quote is preserved exactly at `u = 1`.

use lmm_core::quotes::{to_forwards, to_futures};
use lmm_core::{Curve, CurveError, CurveWindow, Float};
use tracing::debug;

use crate::rng::NormalSource;

/// Check that an evolution horizon is finite and non-negative.
///
/// # Example
///
/// ```
/// use lmm_simulation::evolve::validate_horizon;
///
/// assert!(validate_horizon(0.0_f64).is_ok());
/// assert!(validate_horizon(-1.0_f64).is_err());
/// assert!(validate_horizon(f64::NAN).is_err());
/// ```
pub fn validate_horizon<T: Float>(u: T) -> Result<(), CurveError> {
    if !u.is_finite() || u < T::zero() {
        return Err(CurveError::InvalidHorizon {
            u: u.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// Advance a futures-quoted curve to valuation time `u`.
///
/// Draws two standard normals from `source`, drops every bucket whose
/// boundary satisfies `t[j] <= u`, rebases the surviving boundaries to
/// `t[j] - u` and applies the martingale update to their quotes. The two
/// draws are consumed even when the curve is empty.
///
/// # Arguments
///
/// * `u` - Horizon measured from the current valuation time (must be >= 0)
/// * `curve` - Curve in futures-quote convention; updated in place
/// * `alpha` - Rotation angle between the two driving factors
/// * `source` - Standard normal draws
///
/// # Returns
///
/// * `Ok(CurveWindow)` - Window of surviving buckets (also set on `curve`)
/// * `Err(CurveError::InvalidHorizon)` - `u` negative or non-finite; the
///   curve is untouched and nothing is drawn
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
/// use lmm_simulation::evolve::advance_futures;
/// use lmm_simulation::rng::CurveRng;
///
/// let mut curve = Curve::flat(vec![1.0, 2.0, 3.0], 0.03_f64, 0.01).unwrap();
/// let mut rng = CurveRng::from_seed(42);
///
/// let window = advance_futures(2.0, &mut curve, 0.5, &mut rng).unwrap();
/// assert_eq!(window.len(), 1);
/// assert_eq!(curve.times(), &[1.0]);
/// ```
pub fn advance_futures<T, S>(
    u: T,
    curve: &mut Curve<T>,
    alpha: T,
    source: &mut S,
) -> Result<CurveWindow, CurveError>
where
    T: Float,
    S: NormalSource + ?Sized,
{
    validate_horizon(u)?;

    let (z0, z1) = source.next_pair();
    let w0 = T::from(z0).unwrap_or(T::zero());
    let w1 = T::from(z1).unwrap_or(T::zero());

    let before = curve.len();
    let window = curve.rebase(u)?;
    let expired = before - window.len();

    let two = T::one() + T::one();
    let (times, values, vols) = curve.buckets_mut();
    for ((&t, value), &sigma) in times.iter().zip(values.iter_mut()).zip(vols) {
        let bu = w0 * (alpha * t).cos() + w1 * (alpha * t).sin();
        *value = *value * (sigma * bu - sigma * sigma * u / two).exp();
    }

    debug!(
        horizon = u.to_f64().unwrap_or(f64::NAN),
        expired,
        surviving = window.len(),
        "advanced futures curve"
    );

    Ok(window)
}

/// Advance a forward-quoted curve to valuation time `u` along one
/// simulated path.
///
/// Converts to futures quotes, applies [`advance_futures`] and converts the
/// surviving buckets back to forwards using their rebased boundaries. An
/// empty curve is returned unchanged without drawing from `source`.
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
/// use lmm_simulation::evolve::advance;
/// use lmm_simulation::rng::CurveRng;
///
/// let mut curve = Curve::<f64>::empty();
/// let mut rng = CurveRng::from_seed(1);
///
/// let window = advance(1.0, &mut curve, 0.1, &mut rng).unwrap();
/// assert!(window.is_empty());
/// ```
pub fn advance<T, S>(
    u: T,
    curve: &mut Curve<T>,
    alpha: T,
    source: &mut S,
) -> Result<CurveWindow, CurveError>
where
    T: Float,
    S: NormalSource + ?Sized,
{
    validate_horizon(u)?;
    if curve.is_empty() {
        return Ok(curve.window());
    }

    to_futures(curve);
    let window = advance_futures(u, curve, alpha, source)?;
    to_forwards(curve);

    Ok(window)
}
