//! Single-lane `f32` vector.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub};

use super::{B32x1, I32x1, U32x1, SCALAR_ALIGNMENT};
use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdFloat, SimdVector};

/// One `f32` lane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct F32x1 {
    pub(crate) element: f32,
}

impl F32x1 {
    #[inline(always)]
    fn raw(self) -> u32 {
        self.element.to_bits()
    }

    #[inline(always)]
    fn with_raw(bits: u32) -> Self {
        Self {
            element: f32::from_bits(bits),
        }
    }
}

impl Add for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self { element: self.element + rhs.element }
    }
}

impl Sub for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self { element: self.element - rhs.element }
    }
}

impl Mul for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self { element: self.element * rhs.element }
    }
}

impl Div for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self { element: self.element / rhs.element }
    }
}

impl Neg for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self { element: -self.element }
    }
}

impl BitAnd for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::with_raw(self.raw() & rhs.raw())
    }
}

impl BitOr for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::with_raw(self.raw() | rhs.raw())
    }
}

impl BitXor for F32x1 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::with_raw(self.raw() ^ rhs.raw())
    }
}

impl_inverted_ops!(F32x1);
impl_assign_ops!(F32x1: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for F32x1 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::with_raw(u32::MAX)
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::with_raw(0)
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::with_raw(!self.raw() & rhs.raw())
    }
}

impl SimdVector for F32x1 {
    type Lane = f32;
    type Mask = B32x1;
    type Register = f32;

    const LANES: usize = 1;
    const ALIGNMENT: usize = SCALAR_ALIGNMENT;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self { element: value }
    }

    #[inline(always)]
    fn from_register(register: f32) -> Self {
        Self { element: register }
    }

    #[inline(always)]
    fn into_register(self) -> f32 {
        self.element
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self { element: *ptr }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            element: ptr.read_unaligned(),
        }
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const f32, _stride: usize) -> Self {
        Self::load_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        *ptr = self.element;
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        ptr.write_unaligned(self.element);
    }

    #[inline(always)]
    unsafe fn store_strided(self, ptr: *mut f32, _stride: usize) {
        self.store_unaligned(ptr);
    }

    #[inline(always)]
    fn extract(self, index: usize) -> f32 {
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
        if self.element < rhs.element {
            self
        } else {
            rhs
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        if self.element > rhs.element {
            self
        } else {
            rhs
        }
    }

    #[inline(always)]
    fn select(mask: B32x1, if_true: Self, if_false: Self) -> Self {
        Self::with_raw((mask.bits & if_true.raw()) | (!mask.bits & if_false.raw()))
    }

    // A single lane has no partner to swap with.
    #[inline(always)]
    fn swap_lanes(self, _distance: usize) -> Self {
        self
    }
}

impl SimdFloat for F32x1 {
    type Int = I32x1;
    type UInt = U32x1;

    const APPROX_RELATIVE_ERROR: f32 = 2.0 * f32::EPSILON;

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            element: self.element.sqrt(),
        }
    }

    #[inline(always)]
    fn approx_sqrt(self) -> Self {
        self.sqrt()
    }

    #[inline(always)]
    fn approx_rsqrt(self) -> Self {
        Self {
            element: 1.0 / self.element.sqrt(),
        }
    }

    #[inline(always)]
    fn approx_rcp(self) -> Self {
        Self {
            element: 1.0 / self.element,
        }
    }

    /// Out-of-range lanes and NaN match the target's register backend:
    /// `i32::MIN` on x86, otherwise saturation with NaN becoming `0`.
    #[inline(always)]
    fn round_to_int(self) -> I32x1 {
        let rounded = self.element.round_ties_even();
        let in_range = (-2_147_483_648.0..2_147_483_648.0).contains(&rounded);

        let element = match cfg!(any(target_arch = "x86", target_arch = "x86_64")) && !in_range {
            true => i32::MIN,
            false => rounded as i32,
        };

        I32x1 { element }
    }

    #[inline(always)]
    fn from_int(value: I32x1) -> Self {
        Self {
            element: value.element as f32,
        }
    }

    #[inline(always)]
    fn to_bits(self) -> U32x1 {
        U32x1 { element: self.raw() }
    }

    #[inline(always)]
    fn from_bits(bits: U32x1) -> Self {
        Self::with_raw(bits.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::SimdMask;

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_basic_ops() {
            let a = F32x1::splat(6.0);
            let b = F32x1::splat(1.5);
            assert_eq!((a + b).extract(0), 7.5);
            assert_eq!((a - b).extract(0), 4.5);
            assert_eq!((a * b).extract(0), 9.0);
            assert_eq!((a / b).extract(0), 4.0);
            assert_eq!((-a).extract(0), -6.0);
        }

        #[test]
        fn test_abs_clears_sign_bit() {
            assert_eq!(F32x1::splat(-3.5).abs().extract(0), 3.5);
            assert_eq!(F32x1::splat(-0.0).abs().extract(0).to_bits(), 0);
        }

        #[test]
        fn test_round_ties_to_even() {
            let cases = [(0.5, 0), (1.5, 2), (2.5, 2), (-0.5, 0), (-1.5, -2), (2.4, 2)];
            for (input, expected) in cases {
                assert_eq!(F32x1::splat(input).round_to_int().element, expected, "{input}");
            }
        }

        #[test]
        fn test_round_out_of_range() {
            let round = |x: f32| F32x1::splat(x).round_to_int().element;

            assert_eq!(round(-2_147_483_648.0), i32::MIN);
            assert_eq!(round(2_147_483_520.0), 2_147_483_520);

            if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
                for x in [f32::NAN, 3e9, -3e9, f32::INFINITY, f32::NEG_INFINITY] {
                    assert_eq!(round(x), i32::MIN, "{x}");
                }
            } else {
                assert_eq!(round(f32::NAN), 0);
                assert_eq!(round(3e9), i32::MAX);
                assert_eq!(round(-3e9), i32::MIN);
            }
        }
    }

    mod comparison_tests {
        use super::*;

        #[test]
        fn test_min_max_pick_rhs_on_nan() {
            let nan = F32x1::splat(f32::NAN);
            let one = F32x1::splat(1.0);
            assert_eq!(nan.min(one).extract(0), 1.0);
            assert!(one.min(nan).extract(0).is_nan());
            assert_eq!(nan.max(one).extract(0), 1.0);
            assert!(one.max(nan).extract(0).is_nan());
        }

        #[test]
        fn test_nan_compares_unequal() {
            let nan = F32x1::splat(f32::NAN);
            assert!(nan.eq_elements(nan).none());
            assert!(nan.ne_elements(nan).all());
            assert!(nan.is_nan().all());
        }

        #[test]
        fn test_select() {
            let t = F32x1::splat(1.0);
            let f = F32x1::splat(2.0);
            assert_eq!(F32x1::select(B32x1::splat(true), t, f).extract(0), 1.0);
            assert_eq!(F32x1::select(B32x1::splat(false), t, f).extract(0), 2.0);
        }
    }

    mod memory_tests {
        use super::*;

        #[test]
        fn test_slice_round_trip() {
            let mut out = [0.0f32; 3];
            F32x1::from_slice(&[4.25]).write_to_slice(&mut out[1..]);
            assert_eq!(out, [0.0, 4.25, 0.0]);
        }

        #[test]
        fn test_bits_round_trip() {
            let v = F32x1::splat(-1.0);
            assert_eq!(v.to_bits().element, 0xbf80_0000);
            assert_eq!(F32x1::from_bits(v.to_bits()).extract(0), -1.0);
        }
    }
}
