//! Free-function forms of the common vector operations.
//!
//! These read better than method chains in numeric kernels
//! (`cond(x.lt_elements(lo), lo, x)`) and are generic over every vector type,
//! native or composed.

use crate::simd::mask::BitMask;
use crate::simd::traits::{Condition, SimdBits, SimdFloat, SimdInt, SimdMask, SimdVector};

/// Compresses a predicate vector into a [`BitMask`].
#[inline(always)]
pub fn mask<M: SimdMask>(m: M) -> BitMask {
    m.bitmask()
}

/// True if at least one lane of `m` is true.
#[inline(always)]
pub fn any<M: SimdMask>(m: M) -> bool {
    m.any()
}

/// True if every lane of `m` is true.
#[inline(always)]
pub fn all<M: SimdMask>(m: M) -> bool {
    m.all()
}

/// True if no lane of `m` is true.
#[inline(always)]
pub fn none<M: SimdMask>(m: M) -> bool {
    m.none()
}

/// Lane-wise `pred ? if_true : if_false`.
///
/// `pred` may be a mask or the lazy complement of one; `cond(!m, a, b)`
/// selects `b` where `m` holds without computing `!m`.
///
/// ```rust
/// use lanewise::simd::width::Float32x4;
/// use lanewise::simd::{cond, SimdVector};
///
/// let x = Float32x4::from_slice(&[-2.0, -0.5, 0.5, 2.0]);
/// let negative = x.lt_elements(Float32x4::zero());
/// let clamped = cond(!negative, x, Float32x4::zero());
/// assert_eq!(clamped.to_vec(), vec![0.0, 0.0, 0.5, 2.0]);
/// ```
#[inline(always)]
pub fn cond<V, P>(pred: P, if_true: V, if_false: V) -> V
where
    V: SimdVector,
    P: Condition<V::Mask>,
{
    pred.choose(if_true, if_false)
}

/// `(!a) & b` as one operation.
#[inline(always)]
pub fn andnot<V: SimdBits>(a: V, b: V) -> V {
    a.andnot(b)
}

/// Float to signed integer, round to nearest with ties to even.
#[inline(always)]
pub fn round_to_int<F: SimdFloat>(v: F) -> F::Int {
    v.round_to_int()
}

/// Signed integer to the nearest float.
#[inline(always)]
pub fn int_to_float<F: SimdFloat>(v: F::Int) -> F {
    F::from_int(v)
}

/// Reinterprets signed lanes as unsigned; negative values wrap.
#[inline(always)]
pub fn int_to_uint<I: SimdInt>(v: I) -> I::UInt {
    v.to_uint()
}

/// Reinterprets unsigned lanes as signed; values above `i32::MAX` wrap.
#[inline(always)]
pub fn uint_to_int<I: SimdInt>(v: I::UInt) -> I {
    I::from_uint(v)
}

/// IEEE-754 bit patterns of the lanes.
#[inline(always)]
pub fn float_to_bits<F: SimdFloat>(v: F) -> F::UInt {
    v.to_bits()
}

/// Floats from IEEE-754 bit patterns.
#[inline(always)]
pub fn float_from_bits<F: SimdFloat>(bits: F::UInt) -> F {
    F::from_bits(bits)
}
