//! Horizontal reductions.
//!
//! A reduction folds the lanes of one vector into a single value with an
//! associative lane operator. The engine lives in
//! [`SimdVector::reduce`]: native backends run a butterfly tree of
//! permute-then-combine rounds at distances 1, 2, 4, ..., and
//! [`Dual`](crate::simd::Dual) reduces each half, combines the two results
//! and broadcasts. The native tree broadcasts its lane 0, which combines the
//! halves in the same order, so a composed vector and a native vector of the
//! same width produce bit-identical results. This holds for float `Min` and
//! `Max` on ties, signed zeros and NaN too.
//!
//! Operators are zero-sized types implementing [`LaneOp`]; their `apply` is
//! generic over the vector type so the same operator works at every nesting
//! depth of a composed vector.

use crate::simd::lane::Lane;
use crate::simd::traits::{SimdMask, SimdVector};

/// An associative lane-wise binary operator.
pub trait LaneOp {
    /// Combines `a` and `b` lane by lane.
    fn apply<V: SimdVector>(a: V, b: V) -> V;
}

/// Lane-wise wrapping / IEEE addition.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sum;

/// Lane-wise multiplication.
#[derive(Copy, Clone, Debug, Default)]
pub struct Product;

/// Lane-wise minimum.
#[derive(Copy, Clone, Debug, Default)]
pub struct Min;

/// Lane-wise maximum.
#[derive(Copy, Clone, Debug, Default)]
pub struct Max;

/// Lane-wise bitwise AND.
#[derive(Copy, Clone, Debug, Default)]
pub struct And;

/// Lane-wise bitwise OR.
#[derive(Copy, Clone, Debug, Default)]
pub struct Or;

/// Lane-wise bitwise XOR.
#[derive(Copy, Clone, Debug, Default)]
pub struct Xor;

impl LaneOp for Sum {
    #[inline(always)]
    fn apply<V: SimdVector>(a: V, b: V) -> V {
        a + b
    }
}

impl LaneOp for Product {
    #[inline(always)]
    fn apply<V: SimdVector>(a: V, b: V) -> V {
        a * b
    }
}

impl LaneOp for Min {
    #[inline(always)]
    fn apply<V: SimdVector>(a: V, b: V) -> V {
        a.min(b)
    }
}

impl LaneOp for Max {
    #[inline(always)]
    fn apply<V: SimdVector>(a: V, b: V) -> V {
        a.max(b)
    }
}

impl LaneOp for And {
    #[inline(always)]
    fn apply<V: SimdVector>(a: V, b: V) -> V {
        a & b
    }
}

impl LaneOp for Or {
    #[inline(always)]
    fn apply<V: SimdVector>(a: V, b: V) -> V {
        a | b
    }
}

impl LaneOp for Xor {
    #[inline(always)]
    fn apply<V: SimdVector>(a: V, b: V) -> V {
        a ^ b
    }
}

/// Folds all lanes of `v` with `Op`; every output lane holds the result.
#[inline(always)]
pub fn reduce<Op: LaneOp, V: SimdVector>(v: V) -> V {
    v.reduce::<Op>()
}

/// Index of the lowest lane equal to the `Op`-reduction of `v`.
///
/// Ties resolve to the lowest index. Returns `None` only when no lane
/// compares equal to the result, which happens when the reduction is NaN.
///
/// ```rust
/// use lanewise::simd::reduce::{reduce_find, Max, Min};
/// use lanewise::simd::width::Int32x4;
/// use lanewise::simd::SimdVector;
///
/// let v = Int32x4::from_slice(&[3, 9, -2, 9]);
/// assert_eq!(reduce_find::<Max, _>(v), Some(1));
/// assert_eq!(reduce_find::<Min, _>(v), Some(2));
/// ```
#[inline(always)]
pub fn reduce_find<Op: LaneOp, V: SimdVector>(v: V) -> Option<usize> {
    let reduced = v.reduce::<Op>();
    v.eq_elements(reduced).first()
}

/// Sum of all lanes.
#[inline(always)]
pub fn horizontal_sum<V: SimdVector>(v: V) -> V::Lane {
    v.reduce::<Sum>().extract(0)
}

/// Product of all lanes.
#[inline(always)]
pub fn horizontal_product<V: SimdVector>(v: V) -> V::Lane {
    v.reduce::<Product>().extract(0)
}

/// Smallest lane.
#[inline(always)]
pub fn horizontal_min<V: SimdVector>(v: V) -> V::Lane {
    v.reduce::<Min>().extract(0)
}

/// Largest lane.
#[inline(always)]
pub fn horizontal_max<V: SimdVector>(v: V) -> V::Lane {
    v.reduce::<Max>().extract(0)
}

/// Sum of the lanes selected by `mask`; `0` when no lane is selected.
#[inline(always)]
pub fn sum_with_mask<V: SimdVector>(v: V, mask: V::Mask) -> V::Lane {
    horizontal_sum(V::select(mask, v, V::zero()))
}

/// Product of the lanes selected by `mask`; `1` when no lane is selected.
#[inline(always)]
pub fn product_with_mask<V: SimdVector>(v: V, mask: V::Mask) -> V::Lane {
    let one = V::splat(<V::Lane as num::One>::one());
    horizontal_product(V::select(mask, v, one))
}

/// Minimum of the lanes selected by `mask`; `+inf` (or the integer maximum)
/// when no lane is selected.
#[inline(always)]
pub fn min_with_mask<V: SimdVector>(v: V, mask: V::Mask) -> V::Lane {
    let neutral = V::splat(<V::Lane as Lane>::min_identity());
    horizontal_min(V::select(mask, v, neutral))
}

/// Maximum of the lanes selected by `mask`; `-inf` (or the integer minimum)
/// when no lane is selected.
#[inline(always)]
pub fn max_with_mask<V: SimdVector>(v: V, mask: V::Mask) -> V::Lane {
    let neutral = V::splat(<V::Lane as Lane>::max_identity());
    horizontal_max(V::select(mask, v, neutral))
}
