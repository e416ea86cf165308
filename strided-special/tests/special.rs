use approx::assert_relative_eq;
use proptest::prelude::*;
use strided_special::{
    boxcox_strided, evalpoly, evalrational, evalrational_fn, powm1_strided, tanh,
    tanh_strided_ndarray,
};

fn naive_rational(p: &[f64], q: &[f64], x: f64) -> f64 {
    let horner = |c: &[f64]| c.iter().rev().fold(0.0, |acc, &v| acc * x + v);
    horner(p) / horner(q)
}

#[test]
fn test_evalrational_reference_value() {
    assert_eq!(evalrational(&[-6.0, -5.0], &[3.0, 0.5], 6.0), -6.0);
}

#[test]
fn test_tanh_strided_with_offsets() {
    let x = [9.0, 0.5, 9.0, -0.5];
    let mut y = [0.0; 2];
    tanh_strided_ndarray(2, &x[..], 2, 1, &mut y[..], 1, 0);
    assert_relative_eq!(y[0], 0.5f64.tanh(), max_relative = 1e-14);
    assert_relative_eq!(y[1], -(0.5f64.tanh()), max_relative = 1e-14);
}

#[test]
fn test_powm1_and_boxcox_strided() {
    let b = [2.0f64, 3.0, 4.0];
    let x = [2.0, 2.0, 0.5];
    let mut y = [0.0; 3];
    powm1_strided(3, &b[..], 1, &x[..], 1, &mut y[..], 1);
    assert_relative_eq!(y[0], 3.0, max_relative = 1e-15);
    assert_relative_eq!(y[1], 8.0, max_relative = 1e-15);
    assert_relative_eq!(y[2], 1.0, max_relative = 1e-15);

    // one lambda broadcast through a zero stride
    let lambda = [0.5];
    boxcox_strided(3, &b[..], 1, &lambda[..], 0, &mut y[..], 1);
    for (yi, bi) in y.iter().zip(b.iter()) {
        assert_relative_eq!(*yi, 2.0 * (bi.sqrt() - 1.0), max_relative = 1e-14);
    }
}

#[test]
fn test_tanh_is_odd() {
    for i in 0..200 {
        let x = -5.0 + 0.05 * i as f64;
        assert_eq!(tanh(-x), -tanh(x));
    }
}

proptest! {
    #[test]
    fn prop_evalrational_matches_naive_horner(
        p in prop::collection::vec(-10.0f64..10.0, 1..6),
        shift in 1.0f64..5.0,
        x in -50.0f64..50.0,
    ) {
        // positive denominator keeps the naive evaluation well conditioned
        let q: Vec<f64> = p.iter().enumerate().map(|(i, _)| if i == 0 { shift } else { 0.0 }).collect();
        let got = evalrational(&p, &q, x);
        let want = naive_rational(&p, &q, x);
        let scale: f64 = p
            .iter()
            .enumerate()
            .map(|(i, c)| c.abs() * x.abs().powi(i as i32))
            .sum::<f64>()
            / shift;
        prop_assert!((got - want).abs() <= 1e-12 * (1.0 + scale));
    }

    #[test]
    fn prop_evalrational_fn_agrees(p in prop::collection::vec(-3.0f64..3.0, 1..5), x in -4.0f64..4.0) {
        let q = vec![1.0; p.len()];
        let f = evalrational_fn(&p, &q);
        prop_assert_eq!(f(x).to_bits(), evalrational(&p, &q, x).to_bits());
    }

    #[test]
    fn prop_evalpoly_is_rational_with_unit_denominator(c in prop::collection::vec(-3.0f64..3.0, 1..5), x in -0.9f64..0.9) {
        let mut q = vec![0.0; c.len()];
        q[0] = 1.0;
        prop_assert!((evalpoly(&c, x) - evalrational(&c, &q, x)).abs() <= 1e-12);
    }
}
