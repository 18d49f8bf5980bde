//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths
//! and that the re-exports at the crate root agree with the modules.

use approx::assert_relative_eq;

/// Curve types are accessible from the crate root and from `curve`.
#[test]
fn test_curve_exports() {
    use lmm_core::curve::{Bucket, Curve, CurveWindow};

    let curve: lmm_core::Curve<f64> = Curve::flat(vec![1.0, 2.0], 0.03, 0.01).unwrap();
    let first: Bucket<f64> = curve.bucket(0).unwrap();
    assert_eq!(first.time, 1.0);
    assert_eq!(curve.window(), CurveWindow::new(0, 2));
}

/// Quote conversion is accessible from the crate root.
#[test]
fn test_quote_exports() {
    use lmm_core::{to_forwards, to_futures, Curve};

    let mut curve = Curve::flat(vec![1.0, 2.0], 0.03_f64, 0.2).unwrap();
    to_futures(&mut curve);
    assert_relative_eq!(curve.values()[1], 0.03 + 0.04 * 4.0 / 2.0, epsilon = 1e-15);
    to_forwards(&mut curve);
    assert_relative_eq!(curve.values()[1], 0.03, epsilon = 1e-15);
}

/// Par coupon free function and method agree.
#[test]
fn test_par_exports() {
    use lmm_core::par::{annuity, discount_factors};
    use lmm_core::{par_coupon, Curve};

    let times = vec![0.5, 1.0, 1.5, 2.0];
    let forwards = vec![0.02, 0.025, 0.03, 0.035];
    let curve = Curve::new(times.clone(), forwards.clone(), vec![0.0; 4]).unwrap();

    let c = par_coupon(&times, &forwards).unwrap();
    assert_eq!(curve.par_coupon().unwrap(), c);

    let dfs = discount_factors(&times, &forwards).unwrap();
    let a = annuity(&times, &forwards).unwrap();
    assert_relative_eq!(c * a, 1.0 - dfs[3], epsilon = 1e-14);
}

/// Error type is accessible and implements `std::error::Error`.
#[test]
fn test_error_exports() {
    use lmm_core::error::CurveError;

    let err: Box<dyn std::error::Error> = Box::new(CurveError::Empty);
    assert_eq!(err.to_string(), "Curve has no buckets");
    assert_eq!(lmm_core::CurveError::Empty, CurveError::Empty);
}
