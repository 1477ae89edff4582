//! SSE 4-lane predicate.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{BitAnd, BitOr, BitXor};

use crate::simd::inverted::{impl_condition, impl_inverted_ops};
use crate::simd::mask::BitMask;
use crate::simd::traits::{SimdBits, SimdMask};

use super::LANE_COUNT;

/// Four predicate lanes in a 128-bit integer register.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct B32x4 {
    pub(crate) elements: __m128i,
}

impl B32x4 {
    #[inline(always)]
    pub(crate) fn from_m128i(elements: __m128i) -> Self {
        Self { elements }
    }

    #[inline(always)]
    pub(crate) fn from_m128(elements: __m128) -> Self {
        Self {
            elements: unsafe { _mm_castps_si128(elements) },
        }
    }

    #[inline(always)]
    pub(crate) fn as_m128(self) -> __m128 {
        unsafe { _mm_castsi128_ps(self.elements) }
    }
}

impl BitAnd for B32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_and_si128(self.elements, rhs.elements) })
    }
}

impl BitOr for B32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_or_si128(self.elements, rhs.elements) })
    }
}

impl BitXor for B32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_xor_si128(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(B32x4);
impl_condition!(B32x4);

impl SimdBits for B32x4 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::from_m128i(unsafe { _mm_set1_epi32(-1) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::from_m128i(unsafe { _mm_setzero_si128() })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_andnot_si128(self.elements, rhs.elements) })
    }
}

impl SimdMask for B32x4 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        match value {
            true => Self::all_bits(),
            false => Self::no_bits(),
        }
    }

    #[inline(always)]
    fn from_bitmask(bits: u64) -> Self {
        unsafe {
            let lane_bits = _mm_setr_epi32(1, 2, 4, 8);
            let broadcast = _mm_set1_epi32(bits as i32);
            Self::from_m128i(_mm_cmpeq_epi32(_mm_and_si128(broadcast, lane_bits), lane_bits))
        }
    }

    #[inline(always)]
    fn bitmask(self) -> BitMask {
        let bits = unsafe { _mm_movemask_ps(self.as_m128()) };
        BitMask::new(bits as u64, LANE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask_round_trip() {
        for bits in 0..16u64 {
            assert_eq!(B32x4::from_bitmask(bits).bitmask().bits(), bits);
        }
    }

    #[test]
    fn test_partial_mask_queries() {
        let m = B32x4::from_bitmask(0b1011);
        assert!(m.any());
        assert!(!m.all());
        assert_eq!(m.bitmask().iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn test_lazy_not_on_masks() {
        let m = B32x4::from_bitmask(0b0011);
        let n = B32x4::from_bitmask(0b0110);
        assert_eq!((!m & n).bitmask().bits(), 0b0100);
        assert_eq!(B32x4::from(!m).bitmask().bits(), 0b1100);
    }
}
