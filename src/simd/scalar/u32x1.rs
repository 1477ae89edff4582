//! Single-lane `u32` vector.

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

use super::{B32x1, SCALAR_ALIGNMENT};
use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdUInt, SimdVector};

/// One `u32` lane with wrapping arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct U32x1 {
    pub(crate) element: u32,
}

impl Add for U32x1 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self { element: self.element.wrapping_add(rhs.element) }
    }
}

impl Sub for U32x1 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self { element: self.element.wrapping_sub(rhs.element) }
    }
}

impl Mul for U32x1 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self { element: self.element.wrapping_mul(rhs.element) }
    }
}

impl BitAnd for U32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self { element: self.element & rhs.element }
    }
}

impl BitOr for U32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self { element: self.element | rhs.element }
    }
}

impl BitXor for U32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self { element: self.element ^ rhs.element }
    }
}

impl_inverted_ops!(U32x1);
impl_assign_ops!(U32x1: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for U32x1 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self { element: u32::MAX }
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self { element: 0 }
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self { element: !self.element & rhs.element }
    }
}

impl SimdVector for U32x1 {
    type Lane = u32;
    type Mask = B32x1;
    type Register = u32;

    const LANES: usize = 1;
    const ALIGNMENT: usize = SCALAR_ALIGNMENT;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self { element: value }
    }

    #[inline(always)]
    fn from_register(register: u32) -> Self {
        Self { element: register }
    }

    #[inline(always)]
    fn into_register(self) -> u32 {
        self.element
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const u32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self { element: *ptr }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u32) -> Self {
        Self {
            element: ptr.read_unaligned(),
        }
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const u32, _stride: usize) -> Self {
        Self::load_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        *ptr = self.element;
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u32) {
        ptr.write_unaligned(self.element);
    }

    #[inline(always)]
    unsafe fn store_strided(self, ptr: *mut u32, _stride: usize) {
        self.store_unaligned(ptr);
    }

    #[inline(always)]
    fn extract(self, index: usize) -> u32 {
        assert!(index < Self::LANES, "lane {index} out of range");
        self.element
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> B32x1 {
        B32x1::from_bool(self.element == rhs.element)
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x1 {
        B32x1::from_bool(self.element != rhs.element)
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x1 {
        B32x1::from_bool(self.element < rhs.element)
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x1 {
        B32x1::from_bool(self.element <= rhs.element)
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x1 {
        B32x1::from_bool(self.element > rhs.element)
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x1 {
        B32x1::from_bool(self.element >= rhs.element)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self { element: self.element.min(rhs.element) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self { element: self.element.max(rhs.element) }
    }

    #[inline(always)]
    fn select(mask: B32x1, if_true: Self, if_false: Self) -> Self {
        Self {
            element: (mask.bits & if_true.element) | (!mask.bits & if_false.element),
        }
    }

    #[inline(always)]
    fn swap_lanes(self, _distance: usize) -> Self {
        self
    }
}

impl SimdUInt for U32x1 {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self {
            element: self.element.checked_shl(count).unwrap_or(0),
        }
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self {
            element: self.element.checked_shr(count).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::SimdMask;

    #[test]
    fn test_arithmetic_wraps() {
        let zero = U32x1::splat(0);
        let one = U32x1::splat(1);
        assert_eq!((zero - one).extract(0), u32::MAX);
        assert_eq!((U32x1::splat(u32::MAX) + one).extract(0), 0);
        assert_eq!((U32x1::splat(0x8000_0000) * U32x1::splat(2)).extract(0), 0);
    }

    #[test]
    fn test_comparisons_are_unsigned() {
        let big = U32x1::splat(0x8000_0000);
        let small = U32x1::splat(1);
        assert!(big.gt_elements(small).all());
        assert!(small.lt_elements(big).all());
        assert_eq!(big.min(small).extract(0), 1);
        assert_eq!(big.max(small).extract(0), 0x8000_0000);
    }

    #[test]
    fn test_shift_right_is_logical() {
        let v = U32x1::splat(0x8000_0000);
        assert_eq!(v.shift_right(31).extract(0), 1);
        assert_eq!(v.shift_left(1).extract(0), 0);
    }
}
