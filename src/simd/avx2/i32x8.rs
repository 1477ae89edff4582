//! AVX2 8-lane `i32` vector.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdInt, SimdVector};

use super::{B32x8, U32x8, AVX_ALIGNMENT, LANE_COUNT, SWAP_128, SWAP_HALVES, SWAP_PAIRS};

/// Eight packed `i32` lanes with wrapping arithmetic.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x8 {
    pub(crate) elements: __m256i,
}

impl I32x8 {
    #[inline(always)]
    pub(crate) fn from_m256i(elements: __m256i) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [i32; LANE_COUNT] {
        let mut lanes = [0i32; LANE_COUNT];
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, self.elements) };
        lanes
    }
}

impl Add for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_add_epi32(self.elements, rhs.elements) })
    }
}

impl Sub for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_sub_epi32(self.elements, rhs.elements) })
    }
}

impl Mul for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_mullo_epi32(self.elements, rhs.elements) })
    }
}

impl Neg for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl BitAnd for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_and_si256(self.elements, rhs.elements) })
    }
}

impl BitOr for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_or_si256(self.elements, rhs.elements) })
    }
}

impl BitXor for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_xor_si256(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(I32x8);
impl_assign_ops!(I32x8: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for I32x8 {
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

impl SimdVector for I32x8 {
    type Lane = i32;
    type Mask = B32x8;
    type Register = __m256i;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = AVX_ALIGNMENT;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self::from_m256i(unsafe { _mm256_set1_epi32(value) })
    }

    #[inline(always)]
    fn from_register(register: __m256i) -> Self {
        Self::from_m256i(register)
    }

    #[inline(always)]
    fn into_register(self) -> __m256i {
        self.elements
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_m256i(_mm256_load_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        Self::from_m256i(_mm256_loadu_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const i32, stride: usize) -> Self {
        Self::from_m256i(_mm256_setr_epi32(
            *ptr,
            *ptr.add(stride),
            *ptr.add(2 * stride),
            *ptr.add(3 * stride),
            *ptr.add(4 * stride),
            *ptr.add(5 * stride),
            *ptr.add(6 * stride),
            *ptr.add(7 * stride),
        ))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        _mm256_store_si256(ptr as *mut __m256i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        _mm256_storeu_si256(ptr as *mut __m256i, self.elements)
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
    fn eq_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256i(unsafe { _mm256_cmpeq_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x8 {
        B32x8::from(!self.eq_elements(rhs))
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x8 {
        rhs.gt_elements(self)
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x8 {
        B32x8::from(!self.gt_elements(rhs))
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256i(unsafe { _mm256_cmpgt_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x8 {
        B32x8::from(!rhs.gt_elements(self))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_min_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_max_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn select(mask: B32x8, if_true: Self, if_false: Self) -> Self {
        Self::from_m256i(unsafe {
            _mm256_blendv_epi8(if_false.elements, if_true.elements, mask.elements)
        })
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        let e = self.elements;
        match distance {
            1 => Self::from_m256i(unsafe { _mm256_shuffle_epi32::<SWAP_PAIRS>(e) }),
            2 => Self::from_m256i(unsafe { _mm256_shuffle_epi32::<SWAP_HALVES>(e) }),
            4 => Self::from_m256i(unsafe { _mm256_permute2x128_si256::<SWAP_128>(e, e) }),
            _ => unreachable!("swap distance {distance} is not valid for 8 lanes"),
        }
    }
}

impl SimdInt for I32x8 {
    type UInt = U32x8;

    #[inline(always)]
    fn abs(self) -> Self {
        Self::from_m256i(unsafe { _mm256_abs_epi32(self.elements) })
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self::from_m256i(unsafe {
            _mm256_sll_epi32(self.elements, _mm_cvtsi32_si128(count as i32))
        })
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self::from_m256i(unsafe {
            _mm256_sra_epi32(self.elements, _mm_cvtsi32_si128(count as i32))
        })
    }

    #[inline(always)]
    fn to_uint(self) -> U32x8 {
        U32x8::from_m256i(self.elements)
    }

    #[inline(always)]
    fn from_uint(value: U32x8) -> Self {
        Self::from_m256i(value.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::reduce::{Product, Sum};
    use crate::simd::SimdMask;

    #[test]
    fn test_swap_across_halves() {
        let v = I32x8::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(v.swap_lanes(4).to_vec(), vec![4, 5, 6, 7, 0, 1, 2, 3]);
        assert_eq!(v.swap_lanes(1).to_vec(), vec![1, 0, 3, 2, 5, 4, 7, 6]);
    }

    #[test]
    fn test_reductions() {
        let v = I32x8::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(v.reduce::<Sum>().extract(7), 36);
        assert_eq!(v.reduce::<Product>().extract(0), 40320);
    }

    #[test]
    fn test_comparisons() {
        let a = I32x8::from_slice(&[-3, -2, -1, 0, 1, 2, 3, 4]);
        let z = I32x8::zero();
        assert_eq!(a.lt_elements(z).bitmask().bits(), 0b0000_0111);
        assert_eq!(a.le_elements(z).bitmask().bits(), 0b0000_1111);
        assert_eq!(a.ge_elements(z).bitmask().bits(), 0b1111_1000);
        assert_eq!(a.ne_elements(z).bitmask().bits(), 0b1111_0111);
    }

    #[test]
    fn test_shift_and_abs() {
        let v = I32x8::splat(-256);
        assert_eq!(v.shift_right(4).extract(3), -16);
        assert_eq!(v.shift_left(2).extract(5), -1024);
        assert_eq!(v.abs().extract(0), 256);
    }
}
