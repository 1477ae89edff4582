//! Memory access tests.
//!
//! Aligned, unaligned and strided loads and stores are exercised at every
//! logical width, along with the checked slice helpers and their errors.

use lanewise::simd::utils::Aligned;
use lanewise::simd::width::{Float32x16, Float32x4, Float32x8, Int32x16, Int32x8, UInt32x4};
use lanewise::simd::SimdVector;
use lanewise::LanewiseError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_unaligned<V: SimdVector<Lane = f32>>(rng: &mut StdRng) {
    let data: Vec<f32> = (0..V::LANES + 3).map(|_| rng.random::<f32>()).collect();

    // every offset, aligned or not
    for offset in 0..4 {
        let v = V::from_slice(&data[offset..]);
        assert_eq!(v.to_vec(), data[offset..offset + V::LANES].to_vec());

        let mut out = vec![0.0f32; V::LANES + 3];
        v.write_to_slice(&mut out[offset..]);
        assert_eq!(&out[offset..offset + V::LANES], &data[offset..offset + V::LANES]);
    }
}

fn check_strided<V: SimdVector<Lane = i32>>() {
    for stride in [1usize, 2, 3, 5] {
        let span = (V::LANES - 1) * stride + 1;
        let data: Vec<i32> = (0..span as i32).collect();

        let v = V::try_load_strided(&data, stride).unwrap();
        let expected: Vec<i32> = (0..V::LANES).map(|i| (i * stride) as i32).collect();
        assert_eq!(v.to_vec(), expected, "stride {stride}");

        let mut out = vec![-1i32; span];
        v.try_store_strided(&mut out, stride).unwrap();
        for (i, &x) in out.iter().enumerate() {
            let want = if i % stride == 0 { i as i32 } else { -1 };
            assert_eq!(x, want, "stride {stride}, slot {i}");
        }
    }
}

/// Unaligned round trips at every offset and width.
#[test]
fn test_unaligned_round_trip() {
    let mut rng = StdRng::seed_from_u64(12345);

    check_unaligned::<Float32x4>(&mut rng);
    check_unaligned::<Float32x8>(&mut rng);
    check_unaligned::<Float32x16>(&mut rng);
}

/// Aligned loads and stores through a 64-byte aligned buffer.
#[test]
fn test_aligned_round_trip() {
    let mut rng = StdRng::seed_from_u64(12345);

    let mut input = Aligned([0.0f32; 32]);
    for x in input.iter_mut() {
        *x = rng.random_range(-100.0..=100.0);
    }

    let mut output = Aligned([0.0f32; 32]);

    for chunk in (0..32).step_by(16) {
        let v = Float32x16::try_load_aligned(&input[chunk..]).unwrap();
        v.try_store_aligned(&mut output[chunk..]).unwrap();
    }

    assert_eq!(input.0, output.0);

    let v = Float32x8::try_load_aligned(&input[8..]).unwrap();
    assert_eq!(v.to_vec(), input[8..16].to_vec());

    let i = UInt32x4::splat(9);
    let mut slots = Aligned([0u32; 8]);
    i.try_store_aligned(&mut slots[4..]).unwrap();
    assert_eq!(slots.0, [0, 0, 0, 0, 9, 9, 9, 9]);
}

/// Strided access touches exactly every `stride`-th element.
#[test]
fn test_strided_round_trip() {
    check_strided::<Int32x8>();
    check_strided::<Int32x16>();
}

/// Short slices are reported, not read past.
#[test]
fn test_length_errors() {
    let data = [1.0f32; 7];

    match Float32x8::try_from_slice(&data) {
        Err(LanewiseError::LengthError { required, actual, .. }) => {
            assert_eq!(required, 8);
            assert_eq!(actual, 7);
        }
        other => panic!("expected a length error, got {other:?}"),
    }

    let mut out = [0.0f32; 3];
    assert!(Float32x4::splat(1.0).try_write_to_slice(&mut out).is_err());

    let strided = [0i32; 14];
    let err = Int32x8::try_load_strided(&strided, 2);
    assert!(matches!(err, Err(LanewiseError::LengthError { required: 15, .. })));
}

/// A pointer one lane past an aligned base fails the alignment check.
#[test]
fn test_alignment_errors() {
    let alignment = <Float32x8 as SimdVector>::ALIGNMENT;
    if alignment <= std::mem::align_of::<f32>() {
        println!("alignment {alignment} is met by every f32 pointer, nothing to reject");
        return;
    }

    let data = Aligned([0.0f32; 40]);

    match Float32x8::try_load_aligned(&data[1..]) {
        Err(err @ LanewiseError::AlignmentError { .. }) => {
            println!("{err}");
            assert!(matches!(err, LanewiseError::AlignmentError { alignment: a, .. } if a == alignment));
        }
        other => panic!("expected an alignment error, got {other:?}"),
    }
}

/// A stride whose span overflows `usize` is rejected before any access.
#[test]
fn test_stride_overflow() {
    let data = [0i32; 16];
    let err = Int32x8::try_load_strided(&data, usize::MAX);
    assert!(matches!(err, Err(LanewiseError::StrideError { .. })));
}

/// Out-of-range lane access panics.
#[test]
#[should_panic]
fn test_extract_out_of_range_panics() {
    let v = Float32x8::splat(1.0);
    let _ = v.extract(8);
}
