//! Horizontal reduction tests.
//!
//! Integer reductions are checked for exact equality against an iterator fold.
//! Float sums are checked against an `f64` reference within a tolerance that
//! scales with the lane count and magnitude; min and max are exact.

use lanewise::simd::reduce::{
    horizontal_max, horizontal_min, horizontal_sum, max_with_mask, min_with_mask, reduce_find,
    sum_with_mask, And, Max, Min, Or, Product, Xor,
};
use lanewise::simd::width::{Float32x16, Float32x4, Float32x8, Int32x16, Int32x8, UInt32x8};
use lanewise::simd::{reduce, SimdMask, SimdVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Element-wise add followed by a max reduction on four lanes.
#[test]
fn test_add_then_reduce_max() {
    let a = Float32x4::from_slice(&[-0.27787193, 0.70154146, -2.0518163, -0.35385]);
    let b = Float32x4::from_slice(&[-0.23645458, 2.0236909, -2.258354, 2.2294457]);

    let expected = [-0.51432651f32, 2.72523235, -4.31017027, 1.87559568];
    let sum = (a + b).to_vec();

    for (lane, (&got, &want)) in sum.iter().zip(expected.iter()).enumerate() {
        println!("lane {lane}: got {got:.8}, expected {want:.8}");
        assert!((got - want).abs() < 1e-6, "lane {lane}: {got} vs {want}");
    }

    let max = reduce::<Max, _>(a);
    assert_eq!(max.to_vec(), vec![0.70154146; 4]);
    assert_eq!(reduce_find::<Max, _>(a), Some(1));
    assert_eq!(reduce_find::<Min, _>(a), Some(2));
}

/// Integer sums wrap and are exact at every width.
#[test]
fn test_integer_sum_is_exact() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..200 {
        let lanes: Vec<i32> = (0..16).map(|_| rng.random::<i32>()).collect();

        let expected16 = lanes.iter().fold(0i32, |acc, &x| acc.wrapping_add(x));
        let expected8 = lanes[..8].iter().fold(0i32, |acc, &x| acc.wrapping_add(x));

        assert_eq!(horizontal_sum(Int32x16::from_slice(&lanes)), expected16);
        assert_eq!(horizontal_sum(Int32x8::from_slice(&lanes)), expected8);
    }
}

/// Integer product, min, max and the bitwise reductions.
#[test]
fn test_integer_reductions_match_fold() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..200 {
        let lanes: Vec<i32> = (0..8).map(|_| rng.random_range(-1000..=1000)).collect();
        let v = Int32x8::from_slice(&lanes);

        let product = lanes.iter().fold(1i32, |acc, &x| acc.wrapping_mul(x));
        let and = lanes.iter().fold(-1i32, |acc, &x| acc & x);
        let or = lanes.iter().fold(0i32, |acc, &x| acc | x);
        let xor = lanes.iter().fold(0i32, |acc, &x| acc ^ x);

        assert_eq!(reduce::<Product, _>(v).extract(0), product);
        assert_eq!(horizontal_min(v), *lanes.iter().min().unwrap_or(&0));
        assert_eq!(horizontal_max(v), *lanes.iter().max().unwrap_or(&0));
        assert_eq!(reduce::<And, _>(v).extract(7), and);
        assert_eq!(reduce::<Or, _>(v).extract(3), or);
        assert_eq!(reduce::<Xor, _>(v).extract(5), xor);
    }
}

/// Unsigned min/max order lanes as unsigned values.
#[test]
fn test_unsigned_ordering() {
    let v = UInt32x8::from_slice(&[5, u32::MAX, 0x8000_0000, 7, 0, 1, 0x7fff_ffff, 3]);
    assert_eq!(horizontal_max(v), u32::MAX);
    assert_eq!(horizontal_min(v), 0);
    assert_eq!(reduce_find::<Max, _>(v), Some(1));
    assert_eq!(reduce_find::<Min, _>(v), Some(4));
}

/// Float sums stay within a bound relative to the sum of magnitudes.
#[test]
fn test_float_sum_precision() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut max_rel_error = 0.0f64;

    for _ in 0..500 {
        let lanes: Vec<f32> = (0..16).map(|_| rng.random_range(-1000.0..=1000.0)).collect();

        let reference: f64 = lanes.iter().map(|&x| x as f64).sum();
        let magnitude: f64 = lanes.iter().map(|&x| (x as f64).abs()).sum();
        let got = horizontal_sum(Float32x16::from_slice(&lanes)) as f64;

        let rel_error = (got - reference).abs() / magnitude;
        max_rel_error = max_rel_error.max(rel_error);

        assert!(
            rel_error < 16.0 * f32::EPSILON as f64,
            "sum {got} vs reference {reference}, rel error {rel_error:.2e}"
        );
    }

    println!("max relative error of 16-lane float sum: {max_rel_error:.2e}");
}

/// Float min and max are exact and every lane receives the result.
#[test]
fn test_float_min_max_broadcast() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..200 {
        let lanes: Vec<f32> = (0..8).map(|_| rng.random_range(-1e6..=1e6)).collect();
        let v = Float32x8::from_slice(&lanes);

        let min = lanes.iter().copied().fold(f32::INFINITY, f32::min);
        let max = lanes.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        assert_eq!(reduce::<Min, _>(v).to_vec(), vec![min; 8]);
        assert_eq!(reduce::<Max, _>(v).to_vec(), vec![max; 8]);

        let argmin = lanes.iter().position(|&x| x == min);
        assert_eq!(reduce_find::<Min, _>(v), argmin);
    }
}

/// Inactive lanes contribute the operator's neutral element.
#[test]
fn test_masked_reductions() {
    let v = Float32x8::from_slice(&[1.0, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0]);
    let odd = <Float32x8 as SimdVector>::Mask::from_bitmask(0b1010_1010);
    let none = <Float32x8 as SimdVector>::Mask::splat(false);

    assert_eq!(sum_with_mask(v, odd), -20.0);
    assert_eq!(min_with_mask(v, odd), -8.0);
    assert_eq!(max_with_mask(v, odd), -2.0);

    assert_eq!(sum_with_mask(v, none), 0.0);
    assert_eq!(min_with_mask(v, none), f32::INFINITY);
    assert_eq!(max_with_mask(v, none), f32::NEG_INFINITY);

    let i = Int32x16::splat(3);
    let none16 = <Int32x16 as SimdVector>::Mask::splat(false);
    assert_eq!(min_with_mask(i, none16), i32::MAX);
    assert_eq!(max_with_mask(i, none16), i32::MIN);
}

/// Ties resolve to the lowest lane.
#[test]
fn test_reduce_find_ties() {
    let v = Int32x16::from_slice(&[2, 9, 1, 9, 1, 0, 9, 0, 3, 3, 3, 3, 3, 3, 3, 0]);
    assert_eq!(reduce_find::<Max, _>(v), Some(1));
    assert_eq!(reduce_find::<Min, _>(v), Some(5));
}
