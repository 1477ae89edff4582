//! NEON 4-lane predicate.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{BitAnd, BitOr, BitXor};

use crate::simd::inverted::{impl_condition, impl_inverted_ops};
use crate::simd::mask::BitMask;
use crate::simd::traits::{SimdBits, SimdMask};

use super::LANE_COUNT;

const LANE_BITS: [u32; LANE_COUNT] = [1, 2, 4, 8];

/// Four predicate lanes in a `uint32x4_t`.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct B32x4 {
    pub(crate) elements: uint32x4_t,
}

impl B32x4 {
    #[inline(always)]
    pub(crate) fn from_u32x4(elements: uint32x4_t) -> Self {
        Self { elements }
    }
}

impl BitAnd for B32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vandq_u32(self.elements, rhs.elements) })
    }
}

impl BitOr for B32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vorrq_u32(self.elements, rhs.elements) })
    }
}

impl BitXor for B32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { veorq_u32(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(B32x4);
impl_condition!(B32x4);

impl SimdBits for B32x4 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::from_u32x4(unsafe { vdupq_n_u32(u32::MAX) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::from_u32x4(unsafe { vdupq_n_u32(0) })
    }

    // vbic computes first & !second
    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vbicq_u32(rhs.elements, self.elements) })
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
            let lane_bits = vld1q_u32(LANE_BITS.as_ptr());
            Self::from_u32x4(vtstq_u32(vdupq_n_u32(bits as u32), lane_bits))
        }
    }

    #[inline(always)]
    fn bitmask(self) -> BitMask {
        let bits = unsafe {
            let lane_bits = vld1q_u32(LANE_BITS.as_ptr());
            vaddvq_u32(vandq_u32(self.elements, lane_bits))
        };
        BitMask::new(bits as u64, LANE_COUNT)
    }
}
