//! Property-based tests for qtoss using proptest
//!
//! Invariants that must hold for every generated state and every toss count.

use proptest::prelude::*;
use num_complex::Complex;
use qtoss::{QuantumState, ReferenceCurve, generate_state, simulate};
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    /// Property: generated states are normalized
    #[test]
    fn generated_state_normalized(seed in any::<u64>()) {
        let state = generate_state(&mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!((state.norm_sqr() - 1.0).abs() < 1e-9, "norm^2 = {}", state.norm_sqr());
    }

    /// Property: the Bloch vector of any generated state has unit length
    #[test]
    fn orientation_unit_norm(seed in any::<u64>()) {
        let state = generate_state(&mut StdRng::seed_from_u64(seed)).unwrap();
        let v = state.orientation();
        prop_assert!((v.norm() - 1.0).abs() < 1e-9, "|v| = {}", v.norm());
        for c in v.components() {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&c));
        }
    }

    /// Property: counts always add up to the toss count, probabilities to one
    #[test]
    fn counts_and_probabilities_consistent(seed in any::<u64>(), tosses in 1u64..2000) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = generate_state(&mut rng).unwrap();
        let result = simulate(&state, tosses, &mut rng).unwrap();

        prop_assert_eq!(result.head_count() + result.tail_count(), tosses);
        let (p, q) = (result.head_probability(), result.tail_probability());
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert!((0.0..=1.0).contains(&q));
        prop_assert!((p + q - 1.0).abs() < 1e-9);
    }

    /// Property: normalization of arbitrary non-zero amplitudes
    #[test]
    fn from_unnormalized_normalizes(
        re_a in -10.0f64..10.0, im_a in -10.0f64..10.0,
        re_b in -10.0f64..10.0, im_b in -10.0f64..10.0
    ) {
        let a = Complex::new(re_a, im_a);
        let b = Complex::new(re_b, im_b);
        prop_assume!(a.norm_sqr() + b.norm_sqr() > 1e-6);
        let state = QuantumState::from_unnormalized(a, b).unwrap();
        prop_assert!((state.norm_sqr() - 1.0).abs() < 1e-9);
        prop_assert!((state.orientation().norm() - 1.0).abs() < 1e-9);
    }

    /// Property: the reference curve is finite and peaks at no more than the toss count
    #[test]
    fn reference_curve_finite(tosses in 1u64..5000, p in 0.0f64..=1.0, resolution in 2usize..500) {
        let curve = ReferenceCurve::binomial_approximation(tosses, p, resolution).unwrap();
        prop_assert_eq!(curve.points().len(), resolution);
        prop_assert!(curve.points().iter().all(|&(x, y)| x.is_finite() && y.is_finite() && y >= 0.0));
        prop_assert!(curve.peak() <= tosses as f64 + 1e-9);
    }
}
