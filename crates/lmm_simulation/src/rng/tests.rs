//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility and per-path seed derivation
//! - Normal moments
//! - Scripted replay and the `&mut` forwarding impl

use super::*;
use proptest::prelude::*;

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = CurveRng::from_seed(12345);
    let mut rng2 = CurveRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    }
}

#[test]
fn test_different_seeds_differ() {
    let mut rng1 = CurveRng::from_seed(1);
    let mut rng2 = CurveRng::from_seed(2);

    let a: Vec<f64> = (0..10).map(|_| rng1.gen_normal()).collect();
    let b: Vec<f64> = (0..10).map(|_| rng2.gen_normal()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_for_path_seed() {
    assert_eq!(CurveRng::for_path(100, 7).seed(), 107);
    assert_eq!(CurveRng::for_path(u64::MAX, 1).seed(), 0);
}

#[test]
fn test_next_pair_matches_gen_normal() {
    let mut rng1 = CurveRng::from_seed(9);
    let mut rng2 = CurveRng::from_seed(9);

    let (z0, z1) = rng1.next_pair();
    assert_eq!(z0, rng2.gen_normal());
    assert_eq!(z1, rng2.gen_normal());
}

#[test]
fn test_normal_moments() {
    let mut rng = CurveRng::from_seed(42);
    let buffer: Vec<f64> = (0..50_000)
        .flat_map(|_| {
            let (z0, z1) = rng.next_pair();
            [z0, z1]
        })
        .collect();

    let n = buffer.len() as f64;
    let mean = buffer.iter().sum::<f64>() / n;
    let var = buffer.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);

    assert!(mean.abs() < 0.02, "Mean {} too far from 0", mean);
    assert!((var - 1.0).abs() < 0.03, "Variance {} too far from 1", var);
}

#[test]
fn test_scripted_replay() {
    let mut source = ScriptedNormals::new(vec![0.1, 0.2, 0.3]);
    assert_eq!(source.next_normal(), 0.1);
    assert_eq!(source.next_pair(), (0.2, 0.3));
    assert_eq!(source.consumed(), 3);
    assert_eq!(source.remaining(), 0);
}

#[test]
#[should_panic(expected = "exhausted")]
fn test_scripted_exhausted_panics() {
    let mut source = ScriptedNormals::new(vec![0.1]);
    let _ = source.next_pair();
}

#[test]
fn test_mut_ref_forwarding() {
    fn draw<S: NormalSource>(mut source: S) -> f64 {
        source.next_normal()
    }

    let mut source = ScriptedNormals::new(vec![1.5, 2.5]);
    assert_eq!(draw(&mut source), 1.5);
    assert_eq!(source.consumed(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_any_seed_is_reproducible(seed in any::<u64>()) {
        let mut rng1 = CurveRng::from_seed(seed);
        let mut rng2 = CurveRng::from_seed(seed);
        prop_assert_eq!(rng1.next_pair(), rng2.next_pair());
    }
}
