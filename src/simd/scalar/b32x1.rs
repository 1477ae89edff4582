//! Single-lane predicate.

use std::ops::{BitAnd, BitOr, BitXor};

use crate::simd::inverted::{impl_condition, impl_inverted_ops};
use crate::simd::mask::BitMask;
use crate::simd::traits::{SimdBits, SimdMask};

/// One predicate lane stored as `0` (false) or `u32::MAX` (true).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct B32x1 {
    pub(crate) bits: u32,
}

impl B32x1 {
    #[inline(always)]
    pub(crate) fn from_bool(value: bool) -> Self {
        Self {
            bits: if value { u32::MAX } else { 0 },
        }
    }

    #[inline(always)]
    pub(crate) fn is_set(self) -> bool {
        self.bits != 0
    }
}

impl BitAnd for B32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self { bits: self.bits & rhs.bits }
    }
}

impl BitOr for B32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self { bits: self.bits | rhs.bits }
    }
}

impl BitXor for B32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self { bits: self.bits ^ rhs.bits }
    }
}

impl_inverted_ops!(B32x1);
impl_condition!(B32x1);

impl SimdBits for B32x1 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self { bits: u32::MAX }
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self { bits: 0 }
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self { bits: !self.bits & rhs.bits }
    }
}

impl SimdMask for B32x1 {
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Self::from_bool(value)
    }

    #[inline(always)]
    fn from_bitmask(bits: u64) -> Self {
        Self::from_bool(bits & 1 == 1)
    }

    #[inline(always)]
    fn bitmask(self) -> BitMask {
        BitMask::new(self.is_set() as u64, 1)
    }
}
