//! AVX2 8-lane predicate.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{BitAnd, BitOr, BitXor};

use crate::simd::inverted::{impl_condition, impl_inverted_ops};
use crate::simd::mask::BitMask;
use crate::simd::traits::{SimdBits, SimdMask};

use super::LANE_COUNT;

/// Eight predicate lanes in a 256-bit integer register.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct B32x8 {
    pub(crate) elements: __m256i,
}

impl B32x8 {
    #[inline(always)]
    pub(crate) fn from_m256i(elements: __m256i) -> Self {
        Self { elements }
    }

    #[inline(always)]
    pub(crate) fn from_m256(elements: __m256) -> Self {
        Self {
            elements: unsafe { _mm256_castps_si256(elements) },
        }
    }

    #[inline(always)]
    pub(crate) fn as_m256(self) -> __m256 {
        unsafe { _mm256_castsi256_ps(self.elements) }
    }
}

impl BitAnd for B32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_and_si256(self.elements, rhs.elements) })
    }
}

impl BitOr for B32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_or_si256(self.elements, rhs.elements) })
    }
}

impl BitXor for B32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_xor_si256(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(B32x8);
impl_condition!(B32x8);

impl SimdBits for B32x8 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::from_m256i(unsafe { _mm256_set1_epi32(-1) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::from_m256i(unsafe { _mm256_setzero_si256() })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_andnot_si256(self.elements, rhs.elements) })
    }
}

impl SimdMask for B32x8 {
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
            let lane_bits = _mm256_setr_epi32(1, 2, 4, 8, 16, 32, 64, 128);
            let broadcast = _mm256_set1_epi32(bits as i32);
            Self::from_m256i(_mm256_cmpeq_epi32(
                _mm256_and_si256(broadcast, lane_bits),
                lane_bits,
            ))
        }
    }

    #[inline(always)]
    fn bitmask(self) -> BitMask {
        let bits = unsafe { _mm256_movemask_ps(self.as_m256()) };
        BitMask::new(bits as u64, LANE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask_round_trip() {
        for bits in [0u64, 1, 0b1000_0000, 0b1010_0101, 0xff] {
            assert_eq!(B32x8::from_bitmask(bits).bitmask().bits(), bits);
        }
    }

    #[test]
    fn test_any_all_none() {
        assert!(B32x8::splat(true).all());
        assert!(B32x8::splat(false).none());
        assert!(B32x8::from_bitmask(0b0100_0000).any());
        assert!(!B32x8::from_bitmask(0b0111_1111).all());
    }

    #[test]
    fn test_lazy_not() {
        let m = B32x8::from_bitmask(0b0000_1111);
        let n = B32x8::from_bitmask(0b0011_1100);
        assert_eq!((n & !m).bitmask().bits(), 0b0011_0000);
        assert_eq!((!m & !n).force().bitmask().bits(), 0b1100_0000);
    }
}
