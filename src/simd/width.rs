//! Fixed logical widths, resolved per build.
//!
//! Code that needs "8 floats" names [`Float32x8`] and gets the native AVX2
//! register on an AVX2 build, a pair of 4-lane registers on SSE or NEON, and
//! eight paired scalars on the fallback. All resolutions implement the same
//! traits and produce the same lane values and masks.
//!
//! | build    | x4              | x8                | x16                     |
//! |----------|-----------------|-------------------|-------------------------|
//! | avx2     | `sse::*32x4`    | `avx2::*32x8`     | `Dual<avx2::*32x8>`     |
//! | sse/neon | `*32x4`         | `Dual<*32x4>`     | `Dual<Dual<*32x4>>`     |
//! | fallback | `Dual<Dual<x1>>`| `Dual<Dual<Dual<x1>>>` | one more `Dual`    |

use crate::simd::Dual;

#[cfg(any(sse, avx2))]
use crate::simd::sse as quad;

#[cfg(neon)]
use crate::simd::neon as quad;

#[cfg(not(any(sse, avx2, neon)))]
mod quad {
    use crate::simd::scalar::{B32x1, F32x1, I32x1, U32x1};
    use crate::simd::Dual;

    pub type B32x4 = Dual<Dual<B32x1>>;
    pub type F32x4 = Dual<Dual<F32x1>>;
    pub type I32x4 = Dual<Dual<I32x1>>;
    pub type U32x4 = Dual<Dual<U32x1>>;
}

/// 4 predicate lanes.
pub type Mask32x4 = quad::B32x4;
/// 4 `f32` lanes.
pub type Float32x4 = quad::F32x4;
/// 4 `i32` lanes.
pub type Int32x4 = quad::I32x4;
/// 4 `u32` lanes.
pub type UInt32x4 = quad::U32x4;

#[cfg(avx2)]
mod octo {
    pub use crate::simd::avx2::{B32x8, F32x8, I32x8, U32x8};
}

#[cfg(not(avx2))]
mod octo {
    use crate::simd::Dual;

    pub type B32x8 = Dual<super::Mask32x4>;
    pub type F32x8 = Dual<super::Float32x4>;
    pub type I32x8 = Dual<super::Int32x4>;
    pub type U32x8 = Dual<super::UInt32x4>;
}

/// 8 predicate lanes.
pub type Mask32x8 = octo::B32x8;
/// 8 `f32` lanes.
pub type Float32x8 = octo::F32x8;
/// 8 `i32` lanes.
pub type Int32x8 = octo::I32x8;
/// 8 `u32` lanes.
pub type UInt32x8 = octo::U32x8;

/// 16 predicate lanes.
pub type Mask32x16 = Dual<Mask32x8>;
/// 16 `f32` lanes.
pub type Float32x16 = Dual<Float32x8>;
/// 16 `i32` lanes.
pub type Int32x16 = Dual<Int32x8>;
/// 16 `u32` lanes.
pub type UInt32x16 = Dual<UInt32x8>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{SimdFloat, SimdMask, SimdVector};

    #[test]
    fn test_lane_counts() {
        assert_eq!(<Float32x4 as SimdVector>::LANES, 4);
        assert_eq!(<Int32x8 as SimdVector>::LANES, 8);
        assert_eq!(<UInt32x16 as SimdVector>::LANES, 16);
        assert_eq!(<Mask32x16 as SimdMask>::LANES, 16);
    }

    #[test]
    fn test_kinds_share_size() {
        let size = std::mem::size_of::<Float32x8>();
        assert_eq!(size, 8 * 4);
        assert_eq!(std::mem::size_of::<Int32x8>(), size);
        assert_eq!(std::mem::size_of::<UInt32x8>(), size);
        assert_eq!(std::mem::size_of::<Mask32x8>(), size);
        assert_eq!(std::mem::size_of::<Float32x16>(), 2 * size);
    }

    #[test]
    fn test_mask_types_line_up() {
        let v = Float32x16::splat(1.0);
        let m: Mask32x16 = v.gt_elements(Float32x16::zero());
        assert!(m.all());
        let i: Int32x16 = v.round_to_int();
        assert_eq!(i.to_vec(), vec![1; 16]);
    }
}
