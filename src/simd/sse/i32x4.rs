//! SSE 4-lane `i32` vector.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdInt, SimdVector};

use super::{B32x4, U32x4, LANE_COUNT, SSE_ALIGNMENT, SWAP_HALVES, SWAP_PAIRS};

/// Four packed `i32` lanes with wrapping arithmetic.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x4 {
    pub(crate) elements: __m128i,
}

impl I32x4 {
    #[inline(always)]
    pub(crate) fn from_m128i(elements: __m128i) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [i32; LANE_COUNT] {
        let mut lanes = [0i32; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
        lanes
    }
}

impl Add for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_add_epi32(self.elements, rhs.elements) })
    }
}

impl Sub for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_sub_epi32(self.elements, rhs.elements) })
    }
}

impl Mul for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_mullo_epi32(self.elements, rhs.elements) })
    }
}

impl Neg for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl BitAnd for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_and_si128(self.elements, rhs.elements) })
    }
}

impl BitOr for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_or_si128(self.elements, rhs.elements) })
    }
}

impl BitXor for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_xor_si128(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(I32x4);
impl_assign_ops!(I32x4: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for I32x4 {
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

impl SimdVector for I32x4 {
    type Lane = i32;
    type Mask = B32x4;
    type Register = __m128i;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = SSE_ALIGNMENT;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self::from_m128i(unsafe { _mm_set1_epi32(value) })
    }

    #[inline(always)]
    fn from_register(register: __m128i) -> Self {
        Self::from_m128i(register)
    }

    #[inline(always)]
    fn into_register(self) -> __m128i {
        self.elements
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_m128i(_mm_load_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        Self::from_m128i(_mm_loadu_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const i32, stride: usize) -> Self {
        Self::from_m128i(_mm_setr_epi32(
            *ptr,
            *ptr.add(stride),
            *ptr.add(2 * stride),
            *ptr.add(3 * stride),
        ))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        _mm_store_si128(ptr as *mut __m128i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        _mm_storeu_si128(ptr as *mut __m128i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_strided(self, ptr: *mut i32, stride: usize) {
        for (i, lane) in self.lanes().into_iter().enumerate() {
            *ptr.add(i * stride) = lane;
        }
    }

    #[inline(always)]
    fn extract(self, index: usize) -> i32 {
        assert!(index < LANE_COUNT, "lane {index} out of range");
        self.lanes()[index]
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128i(unsafe { _mm_cmpeq_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x4 {
        B32x4::from(!self.eq_elements(rhs))
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128i(unsafe { _mm_cmplt_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x4 {
        B32x4::from(!self.gt_elements(rhs))
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128i(unsafe { _mm_cmpgt_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x4 {
        B32x4::from(!self.lt_elements(rhs))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_min_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_max_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn select(mask: B32x4, if_true: Self, if_false: Self) -> Self {
        Self::from_m128i(unsafe {
            _mm_blendv_epi8(if_false.elements, if_true.elements, mask.elements)
        })
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        let e = self.elements;
        match distance {
            1 => Self::from_m128i(unsafe { _mm_shuffle_epi32::<SWAP_PAIRS>(e) }),
            2 => Self::from_m128i(unsafe { _mm_shuffle_epi32::<SWAP_HALVES>(e) }),
            _ => unreachable!("swap distance {distance} is not valid for 4 lanes"),
        }
    }
}

impl SimdInt for I32x4 {
    type UInt = U32x4;

    #[inline(always)]
    fn abs(self) -> Self {
        Self::from_m128i(unsafe { _mm_abs_epi32(self.elements) })
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self::from_m128i(unsafe { _mm_sll_epi32(self.elements, _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self::from_m128i(unsafe { _mm_sra_epi32(self.elements, _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn to_uint(self) -> U32x4 {
        U32x4::from_m128i(self.elements)
    }

    #[inline(always)]
    fn from_uint(value: U32x4) -> Self {
        Self::from_m128i(value.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::SimdMask;

    #[test]
    fn test_wrapping_arithmetic() {
        let v = I32x4::from_slice(&[i32::MAX, i32::MIN, 7, -3]);
        let one = I32x4::splat(1);
        assert_eq!((v + one).to_vec(), vec![i32::MIN, i32::MIN + 1, 8, -2]);
        assert_eq!((v * I32x4::splat(2)).to_vec(), vec![-2, 0, 14, -6]);
        assert_eq!((-v).to_vec(), vec![-i32::MAX, i32::MIN, -7, 3]);
        assert_eq!(v.abs().to_vec(), vec![i32::MAX, i32::MIN, 7, 3]);
    }

    #[test]
    fn test_signed_comparisons() {
        let a = I32x4::from_slice(&[-1, 0, 5, 5]);
        let b = I32x4::from_slice(&[1, 0, 4, 6]);
        assert_eq!(a.lt_elements(b).bitmask().bits(), 0b1001);
        assert_eq!(a.le_elements(b).bitmask().bits(), 0b1011);
        assert_eq!(a.gt_elements(b).bitmask().bits(), 0b0100);
        assert_eq!(a.ge_elements(b).bitmask().bits(), 0b0110);
        assert_eq!(a.ne_elements(b).bitmask().bits(), 0b1101);
    }

    #[test]
    fn test_shifts() {
        let v = I32x4::from_slice(&[-16, 16, 1, i32::MIN]);
        assert_eq!(v.shift_right(2).to_vec(), vec![-4, 4, 0, i32::MIN >> 2]);
        assert_eq!(v.shift_left(1).to_vec(), vec![-32, 32, 2, 0]);
    }

    #[test]
    fn test_reduce_matches_scalar_fold() {
        let v = I32x4::from_slice(&[3, -9, 12, 4]);
        assert_eq!(v.reduce::<crate::simd::reduce::Sum>().to_vec(), vec![10; 4]);
        assert_eq!(v.reduce::<crate::simd::reduce::Min>().extract(2), -9);
    }
}
