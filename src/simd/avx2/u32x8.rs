//! AVX2 8-lane `u32` vector.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdUInt, SimdVector};

use super::{B32x8, AVX_ALIGNMENT, LANE_COUNT, SWAP_128, SWAP_HALVES, SWAP_PAIRS};

/// Eight packed `u32` lanes with wrapping arithmetic.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct U32x8 {
    pub(crate) elements: __m256i,
}

impl U32x8 {
    #[inline(always)]
    pub(crate) fn from_m256i(elements: __m256i) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [u32; LANE_COUNT] {
        let mut lanes = [0u32; LANE_COUNT];
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, self.elements) };
        lanes
    }

    // flips the sign bit so signed compares order unsigned values
    #[inline(always)]
    fn biased(self) -> __m256i {
        unsafe { _mm256_xor_si256(self.elements, _mm256_set1_epi32(i32::MIN)) }
    }
}

impl Add for U32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_add_epi32(self.elements, rhs.elements) })
    }
}

impl Sub for U32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_sub_epi32(self.elements, rhs.elements) })
    }
}

impl Mul for U32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_mullo_epi32(self.elements, rhs.elements) })
    }
}

impl BitAnd for U32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_and_si256(self.elements, rhs.elements) })
    }
}

impl BitOr for U32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_or_si256(self.elements, rhs.elements) })
    }
}

impl BitXor for U32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_xor_si256(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(U32x8);
impl_assign_ops!(U32x8: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for U32x8 {
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

impl SimdVector for U32x8 {
    type Lane = u32;
    type Mask = B32x8;
    type Register = __m256i;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = AVX_ALIGNMENT;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self::from_m256i(unsafe { _mm256_set1_epi32(value as i32) })
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
    unsafe fn load_aligned(ptr: *const u32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_m256i(_mm256_load_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u32) -> Self {
        Self::from_m256i(_mm256_loadu_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const u32, stride: usize) -> Self {
        Self::from_m256i(_mm256_setr_epi32(
            *ptr as i32,
            *ptr.add(stride) as i32,
            *ptr.add(2 * stride) as i32,
            *ptr.add(3 * stride) as i32,
            *ptr.add(4 * stride) as i32,
            *ptr.add(5 * stride) as i32,
            *ptr.add(6 * stride) as i32,
            *ptr.add(7 * stride) as i32,
        ))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        _mm256_store_si256(ptr as *mut __m256i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u32) {
        _mm256_storeu_si256(ptr as *mut __m256i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_strided(self, ptr: *mut u32, stride: usize) {
        for (i, lane) in self.lanes().into_iter().enumerate() {
            *ptr.add(i * stride) = lane;
        }
    }

    #[inline(always)]
    fn extract(self, index: usize) -> u32 {
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
        B32x8::from_m256i(unsafe { _mm256_cmpgt_epi32(self.biased(), rhs.biased()) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x8 {
        B32x8::from(!rhs.gt_elements(self))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_min_epu32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_m256i(unsafe { _mm256_max_epu32(self.elements, rhs.elements) })
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

impl SimdUInt for U32x8 {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self::from_m256i(unsafe {
            _mm256_sll_epi32(self.elements, _mm_cvtsi32_si128(count as i32))
        })
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self::from_m256i(unsafe {
            _mm256_srl_epi32(self.elements, _mm_cvtsi32_si128(count as i32))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::reduce::{horizontal_max, horizontal_min};
    use crate::simd::SimdMask;

    #[test]
    fn test_unsigned_order_past_sign_bit() {
        let v = U32x8::from_slice(&[0, 1, 0x7fff_ffff, 0x8000_0000, u32::MAX, 2, 3, 4]);
        assert_eq!(horizontal_max(v), u32::MAX);
        assert_eq!(horizontal_min(v), 0);
        let big = v.gt_elements(U32x8::splat(0x7fff_ffff));
        assert_eq!(big.bitmask().bits(), 0b0001_1000);
    }

    #[test]
    fn test_logical_shift() {
        let v = U32x8::splat(u32::MAX);
        assert_eq!(v.shift_right(28).extract(1), 0xf);
        assert_eq!(v.shift_left(28).extract(6), 0xf000_0000);
    }
}
