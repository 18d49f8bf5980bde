//! Par coupon and discounting from a forward curve.
//!
//! With continuously compounded forwards `f[j]` on buckets `(t[j-1], t[j]]`
//! the discount factor to `t[j]` is
//!
//! ```text
//! D_j = exp(-sum_{k<=j} f[k] * (t[k] - t[k-1]))
//! ```
//!
//! and the par coupon `c` satisfies `c * sum_j D_j * dt_j = 1 - D_n`.

use num_traits::Float;

use crate::curve::validate_times;
use crate::error::CurveError;

fn check_inputs<T: Float>(times: &[T], forwards: &[T]) -> Result<(), CurveError> {
    if times.len() != forwards.len() {
        return Err(CurveError::LengthMismatch {
            times: times.len(),
            values: forwards.len(),
            vols: forwards.len(),
        });
    }
    if times.is_empty() {
        return Err(CurveError::Empty);
    }
    validate_times(times)
}

/// Running discount factors `D_j` at each tenor boundary.
///
/// # Example
///
/// ```
/// use lmm_core::par::discount_factors;
///
/// let dfs = discount_factors(&[1.0_f64, 2.0], &[0.05, 0.05]).unwrap();
/// assert!((dfs[1] - (-0.1_f64).exp()).abs() < 1e-15);
/// ```
pub fn discount_factors<T: Float>(times: &[T], forwards: &[T]) -> Result<Vec<T>, CurveError> {
    check_inputs(times, forwards)?;

    let mut t0 = T::zero();
    let mut dn = T::one();
    Ok(times
        .iter()
        .zip(forwards)
        .map(|(&t, &f)| {
            dn = dn * (-f * (t - t0)).exp();
            t0 = t;
            dn
        })
        .collect())
}

/// Annuity `sum_j D_j * dt_j` of the fixed leg.
pub fn annuity<T: Float>(times: &[T], forwards: &[T]) -> Result<T, CurveError> {
    let (_, d) = discount_and_annuity(times, forwards)?;
    Ok(d)
}

/// Par coupon rate implied by a forward curve.
///
/// Returns `(1 - D_n) / sum_j D_j * dt_j`, the fixed rate at which a unit
/// notional swap paying on each tenor boundary is worth zero.
///
/// # Arguments
///
/// * `times` - Tenor boundaries, positive and strictly increasing
/// * `forwards` - Forward rate per bucket
///
/// # Returns
///
/// * `Ok(c)` - Par coupon
/// * `Err(CurveError::Empty)` - No buckets
/// * `Err(CurveError::LengthMismatch)` - Slices differ in length
/// * `Err(CurveError::DegenerateAnnuity)` - Annuity is zero
///
/// # Example
///
/// ```
/// use lmm_core::par::par_coupon;
///
/// let c = par_coupon(&[1.0_f64], &[0.05]).unwrap();
/// let d = (-0.05_f64).exp();
/// assert!((c - (1.0 - d) / d).abs() < 1e-12);
/// ```
pub fn par_coupon<T: Float>(times: &[T], forwards: &[T]) -> Result<T, CurveError> {
    let (dn, d) = discount_and_annuity(times, forwards)?;
    if d == T::zero() {
        return Err(CurveError::DegenerateAnnuity);
    }
    Ok((T::one() - dn) / d)
}

fn discount_and_annuity<T: Float>(times: &[T], forwards: &[T]) -> Result<(T, T), CurveError> {
    check_inputs(times, forwards)?;

    let mut t0 = T::zero();
    let mut dn = T::one();
    let mut d = T::zero();
    for (&t, &f) in times.iter().zip(forwards) {
        let dt = t - t0;
        dn = dn * (-f * dt).exp();
        d = d + dn * dt;
        t0 = t;
    }
    Ok((dn, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ========================================
    // Par Coupon Tests
    // ========================================

    #[test]
    fn test_single_bucket_closed_form() {
        let c = par_coupon(&[1.0_f64], &[0.05]).unwrap();
        let d = (-0.05_f64).exp();
        assert_relative_eq!(c, (1.0 - d) / d, epsilon = 1e-14);
    }

    #[test]
    fn test_two_buckets_by_hand() {
        let times = [0.5_f64, 1.5];
        let forwards = [0.02, 0.04];

        let d1 = (-0.02_f64 * 0.5).exp();
        let d2 = d1 * (-0.04_f64 * 1.0).exp();
        let expected = (1.0 - d2) / (d1 * 0.5 + d2 * 1.0);

        assert_relative_eq!(par_coupon(&times, &forwards).unwrap(), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_forwards_give_zero_coupon() {
        let c = par_coupon(&[1.0_f64, 2.0, 3.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(c, 0.0);
    }

    #[test]
    fn test_negative_forwards() {
        let c = par_coupon(&[1.0_f64, 2.0], &[-0.01, -0.01]).unwrap();
        assert!(c < 0.0);
    }

    #[test]
    fn test_curve_par_coupon_uses_window() {
        let mut curve = Curve::new(vec![1.0, 2.0], vec![0.10, 0.05], vec![0.0, 0.0]).unwrap();
        curve.consume(1);
        // Remaining bucket (0, 2] at 5%: not rebased, so dt = 2
        let d = (-0.05_f64 * 2.0).exp();
        assert_relative_eq!(curve.par_coupon().unwrap(), (1.0 - d) / (2.0 * d), epsilon = 1e-14);
    }

    // ========================================
    // Error Tests
    // ========================================

    #[test]
    fn test_empty_curve_error() {
        let result = par_coupon::<f64>(&[], &[]);
        assert_eq!(result.unwrap_err(), CurveError::Empty);
        assert_eq!(Curve::<f64>::empty().par_coupon().unwrap_err(), CurveError::Empty);
    }

    #[test]
    fn test_length_mismatch_error() {
        let result = par_coupon(&[1.0_f64, 2.0], &[0.05]);
        assert!(matches!(result, Err(CurveError::LengthMismatch { .. })));
    }

    #[test]
    fn test_non_increasing_error() {
        let result = par_coupon(&[1.0_f64, 0.5], &[0.05, 0.05]);
        assert!(matches!(result, Err(CurveError::NonIncreasingTimes { .. })));
    }

    // ========================================
    // Discount Factor / Annuity Tests
    // ========================================

    #[test]
    fn test_discount_factors() {
        let dfs = discount_factors(&[1.0_f64, 2.0, 4.0], &[0.01, 0.02, 0.03]).unwrap();
        assert_relative_eq!(dfs[0], (-0.01_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(dfs[1], (-0.03_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(dfs[2], (-0.09_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_annuity_zero_rates() {
        let a = annuity(&[0.25_f64, 0.5, 1.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_relative_eq!(a, 1.0, epsilon = 1e-15);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn test_flat_curve_swap_identity(
            rate in -0.02_f64..0.15,
            n in 1_usize..40,
            dt in 0.1_f64..1.0,
        ) {
            let times: Vec<f64> = (1..=n).map(|j| j as f64 * dt).collect();
            let forwards = vec![rate; n];

            let c = par_coupon(&times, &forwards).unwrap();
            let dfs = discount_factors(&times, &forwards).unwrap();
            let fixed_leg: f64 = dfs.iter().map(|d| c * dt * d).sum();
            let floating_leg = 1.0 - dfs[n - 1];

            prop_assert!((fixed_leg - floating_leg).abs() < 1e-12);
        }
    }
}
