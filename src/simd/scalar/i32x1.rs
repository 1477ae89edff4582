//! Single-lane `i32` vector.

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Sub};

use super::{B32x1, U32x1, SCALAR_ALIGNMENT};
use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdInt, SimdVector};

/// One `i32` lane with wrapping arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct I32x1 {
    pub(crate) element: i32,
}

impl Add for I32x1 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self { element: self.element.wrapping_add(rhs.element) }
    }
}

impl Sub for I32x1 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self { element: self.element.wrapping_sub(rhs.element) }
    }
}

impl Mul for I32x1 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self { element: self.element.wrapping_mul(rhs.element) }
    }
}

impl Neg for I32x1 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self { element: self.element.wrapping_neg() }
    }
}

impl BitAnd for I32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self { element: self.element & rhs.element }
    }
}

impl BitOr for I32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self { element: self.element | rhs.element }
    }
}

impl BitXor for I32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self { element: self.element ^ rhs.element }
    }
}

impl_inverted_ops!(I32x1);
impl_assign_ops!(I32x1: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for I32x1 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self { element: -1 }
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

impl SimdVector for I32x1 {
    type Lane = i32;
    type Mask = B32x1;
    type Register = i32;

    const LANES: usize = 1;
    const ALIGNMENT: usize = SCALAR_ALIGNMENT;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self { element: value }
    }

    #[inline(always)]
    fn from_register(register: i32) -> Self {
        Self { element: register }
    }

    #[inline(always)]
    fn into_register(self) -> i32 {
        self.element
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self { element: *ptr }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        Self {
            element: ptr.read_unaligned(),
        }
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const i32, _stride: usize) -> Self {
        Self::load_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        *ptr = self.element;
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        ptr.write_unaligned(self.element);
    }

    #[inline(always)]
    unsafe fn store_strided(self, ptr: *mut i32, _stride: usize) {
        self.store_unaligned(ptr);
    }

    #[inline(always)]
    fn extract(self, index: usize) -> i32 {
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
        let bits = mask.bits as i32;
        Self {
            element: (bits & if_true.element) | (!bits & if_false.element),
        }
    }

    #[inline(always)]
    fn swap_lanes(self, _distance: usize) -> Self {
        self
    }
}

impl SimdInt for I32x1 {
    type UInt = U32x1;

    #[inline(always)]
    fn abs(self) -> Self {
        Self { element: self.element.wrapping_abs() }
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self {
            element: self.element.checked_shl(count).unwrap_or(0),
        }
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self {
            element: self.element >> count.min(31),
        }
    }

    #[inline(always)]
    fn to_uint(self) -> U32x1 {
        U32x1 {
            element: self.element as u32,
        }
    }

    #[inline(always)]
    fn from_uint(value: U32x1) -> Self {
        Self {
            element: value.element as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::SimdMask;

    #[test]
    fn test_arithmetic_wraps() {
        let max = I32x1::splat(i32::MAX);
        let one = I32x1::splat(1);
        assert_eq!((max + one).extract(0), i32::MIN);
        assert_eq!((I32x1::splat(i32::MIN) - one).extract(0), i32::MAX);
        assert_eq!((max * I32x1::splat(2)).extract(0), -2);
        assert_eq!((-I32x1::splat(i32::MIN)).extract(0), i32::MIN);
    }

    #[test]
    fn test_abs_wraps_at_min() {
        assert_eq!(I32x1::splat(-7).abs().extract(0), 7);
        assert_eq!(I32x1::splat(i32::MIN).abs().extract(0), i32::MIN);
    }

    #[test]
    fn test_shifts() {
        let v = I32x1::splat(-16);
        assert_eq!(v.shift_right(2).extract(0), -4);
        assert_eq!(v.shift_left(1).extract(0), -32);
        assert_eq!(I32x1::splat(1).shift_left(31).extract(0), i32::MIN);
    }

    #[test]
    fn test_comparisons_are_signed() {
        let a = I32x1::splat(-1);
        let b = I32x1::splat(1);
        assert!(a.lt_elements(b).all());
        assert!(b.ge_elements(a).all());
        assert_eq!(a.min(b).extract(0), -1);
        assert_eq!(a.max(b).extract(0), 1);
    }

    #[test]
    fn test_uint_round_trip() {
        let v = I32x1::splat(-1);
        assert_eq!(v.to_uint().element, u32::MAX);
        assert_eq!(I32x1::from_uint(v.to_uint()).extract(0), -1);
    }
}
