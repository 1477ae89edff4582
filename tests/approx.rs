//! Precision tests for the approximate reciprocal and square root operations.
//!
//! Each backend advertises its bound through `APPROX_RELATIVE_ERROR`. These
//! tests measure the relative error against an `f64` reference over positive,
//! normal, finite inputs and require it to stay within that bound.

use lanewise::simd::width::{Float32x16, Float32x4, Float32x8};
use lanewise::simd::{SimdFloat, SimdVector, BACKEND};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Default)]
struct ErrorStats {
    max_rel_error: f64,
    violations: usize,
}

impl ErrorStats {
    fn record(&mut self, input: f32, got: f32, want: f64, bound: f32) {
        let rel_error = ((got as f64 - want) / want).abs();
        self.max_rel_error = self.max_rel_error.max(rel_error);

        if rel_error > bound as f64 {
            self.violations += 1;
            if self.violations <= 10 {
                println!("  input {input:e}: got {got:e}, want {want:e}, rel error {rel_error:.2e}");
            }
        }
    }
}

fn check_precision<F: SimdFloat>(label: &str, inputs: &[f32]) {
    let bound = F::APPROX_RELATIVE_ERROR;
    let mut sqrt = ErrorStats::default();
    let mut rsqrt = ErrorStats::default();
    let mut rcp = ErrorStats::default();

    for chunk in inputs.chunks_exact(F::LANES) {
        let v = F::from_slice(chunk);
        let (s, r, c) = (v.approx_sqrt(), v.approx_rsqrt(), v.approx_rcp());

        for (lane, &x) in chunk.iter().enumerate() {
            let exact = (x as f64).sqrt();
            sqrt.record(x, s.extract(lane), exact, bound);
            rsqrt.record(x, r.extract(lane), 1.0 / exact, bound);
            rcp.record(x, c.extract(lane), 1.0 / x as f64, bound);
        }
    }

    println!(
        "{label} on {BACKEND}: bound {bound:.2e}, max rel error sqrt {:.2e}, rsqrt {:.2e}, rcp {:.2e}",
        sqrt.max_rel_error, rsqrt.max_rel_error, rcp.max_rel_error
    );

    assert_eq!(sqrt.violations, 0, "{label}: approx_sqrt exceeded {bound:e}");
    assert_eq!(rsqrt.violations, 0, "{label}: approx_rsqrt exceeded {bound:e}");
    assert_eq!(rcp.violations, 0, "{label}: approx_rcp exceeded {bound:e}");
}

/// Random inputs spread over many binades.
#[test]
fn test_approx_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);

    let inputs: Vec<f32> = (0..4096)
        .map(|_| {
            let exponent = rng.random_range(-20..=20);
            rng.random_range(1.0f32..2.0) * 2.0f32.powi(exponent)
        })
        .collect();

    check_precision::<Float32x4>("Float32x4", &inputs);
    check_precision::<Float32x8>("Float32x8", &inputs);
    check_precision::<Float32x16>("Float32x16", &inputs);
}

/// Perfect squares and powers of two.
#[test]
fn test_approx_precision_exact_values() {
    let inputs: Vec<f32> = (1..=64).map(|i| (i * i) as f32).collect();
    check_precision::<Float32x8>("perfect squares", &inputs);

    let powers: Vec<f32> = (-16..16).map(|e| 2.0f32.powi(e)).collect();
    check_precision::<Float32x16>("powers of two", &powers);
}

/// `approx_sqrt` maps zero lanes to zero instead of `0 * inf`.
#[test]
fn test_approx_sqrt_of_zero() {
    let v = Float32x8::from_slice(&[0.0, 4.0, 0.0, 9.0, 16.0, 0.0, 1.0, 0.0]);
    let s = v.approx_sqrt();

    for lane in [0, 2, 5, 7] {
        assert_eq!(s.extract(lane), 0.0, "lane {lane}");
    }

    let bound = <Float32x8 as SimdFloat>::APPROX_RELATIVE_ERROR;
    assert!((s.extract(1) - 2.0).abs() / 2.0 <= bound);
    assert!((s.extract(3) - 3.0).abs() / 3.0 <= bound);
}

/// The exact square root is correctly rounded on every backend.
#[test]
fn test_exact_sqrt_matches_std() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..500 {
        let lanes: Vec<f32> = (0..8).map(|_| rng.random::<f32>() * 1e6).collect();
        let got = Float32x8::from_slice(&lanes).sqrt().to_vec();
        let want: Vec<f32> = lanes.iter().map(|x| x.sqrt()).collect();
        assert_eq!(got, want);
    }
}

/// The advertised bound is consistent across widths of one build.
#[test]
fn test_bound_is_width_independent() {
    let bound = <Float32x4 as SimdFloat>::APPROX_RELATIVE_ERROR;
    assert_eq!(<Float32x8 as SimdFloat>::APPROX_RELATIVE_ERROR, bound);
    assert_eq!(<Float32x16 as SimdFloat>::APPROX_RELATIVE_ERROR, bound);
    assert!(bound > 0.0 && bound < 1e-3);
}
