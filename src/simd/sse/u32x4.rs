//! SSE 4-lane `u32` vector.
//!
//! SSE only has signed 32-bit compares. Ordering compares flip the sign bit
//! of both operands first, which maps unsigned order onto signed order.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdUInt, SimdVector};

use super::{B32x4, LANE_COUNT, SSE_ALIGNMENT, SWAP_HALVES, SWAP_PAIRS};

/// Four packed `u32` lanes with wrapping arithmetic.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct U32x4 {
    pub(crate) elements: __m128i,
}

impl U32x4 {
    #[inline(always)]
    pub(crate) fn from_m128i(elements: __m128i) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [u32; LANE_COUNT] {
        let mut lanes = [0u32; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
        lanes
    }

    #[inline(always)]
    fn biased(self) -> __m128i {
        unsafe { _mm_xor_si128(self.elements, _mm_set1_epi32(i32::MIN)) }
    }
}

impl Add for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_add_epi32(self.elements, rhs.elements) })
    }
}

impl Sub for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_sub_epi32(self.elements, rhs.elements) })
    }
}

impl Mul for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_mullo_epi32(self.elements, rhs.elements) })
    }
}

impl BitAnd for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_and_si128(self.elements, rhs.elements) })
    }
}

impl BitOr for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_or_si128(self.elements, rhs.elements) })
    }
}

impl BitXor for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_xor_si128(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(U32x4);
impl_assign_ops!(U32x4: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for U32x4 {
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

impl SimdVector for U32x4 {
    type Lane = u32;
    type Mask = B32x4;
    type Register = __m128i;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = SSE_ALIGNMENT;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self::from_m128i(unsafe { _mm_set1_epi32(value as i32) })
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
    unsafe fn load_aligned(ptr: *const u32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_m128i(_mm_load_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u32) -> Self {
        Self::from_m128i(_mm_loadu_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const u32, stride: usize) -> Self {
        Self::from_m128i(_mm_setr_epi32(
            *ptr as i32,
            *ptr.add(stride) as i32,
            *ptr.add(2 * stride) as i32,
            *ptr.add(3 * stride) as i32,
        ))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        _mm_store_si128(ptr as *mut __m128i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u32) {
        _mm_storeu_si128(ptr as *mut __m128i, self.elements)
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
    fn eq_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128i(unsafe { _mm_cmpeq_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x4 {
        B32x4::from(!self.eq_elements(rhs))
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128i(unsafe { _mm_cmplt_epi32(self.biased(), rhs.biased()) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x4 {
        B32x4::from(!self.gt_elements(rhs))
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128i(unsafe { _mm_cmpgt_epi32(self.biased(), rhs.biased()) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x4 {
        B32x4::from(!self.lt_elements(rhs))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_min_epu32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_m128i(unsafe { _mm_max_epu32(self.elements, rhs.elements) })
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

impl SimdUInt for U32x4 {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self::from_m128i(unsafe { _mm_sll_epi32(self.elements, _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self::from_m128i(unsafe { _mm_srl_epi32(self.elements, _mm_cvtsi32_si128(count as i32)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::SimdMask;

    #[test]
    fn test_unsigned_ordering() {
        let a = U32x4::from_slice(&[0x8000_0000, 1, u32::MAX, 5]);
        let b = U32x4::from_slice(&[1, 0x8000_0000, 0, 5]);
        assert_eq!(a.gt_elements(b).bitmask().bits(), 0b0101);
        assert_eq!(a.lt_elements(b).bitmask().bits(), 0b0010);
        assert_eq!(a.ge_elements(b).bitmask().bits(), 0b1101);
        assert_eq!(a.le_elements(b).bitmask().bits(), 0b1010);
        assert_eq!(a.min(b).to_vec(), vec![1, 1, 0, 5]);
        assert_eq!(a.max(b).to_vec(), vec![0x8000_0000, 0x8000_0000, u32::MAX, 5]);
    }

    #[test]
    fn test_logical_shift_right() {
        let v = U32x4::splat(0x8000_0000);
        assert_eq!(v.shift_right(31).to_vec(), vec![1; 4]);
        assert_eq!(v.shift_left(1).to_vec(), vec![0; 4]);
    }

    #[test]
    fn test_wrapping() {
        let v = U32x4::from_slice(&[0, 1, u32::MAX, 2]);
        assert_eq!((v - U32x4::splat(1)).to_vec(), vec![u32::MAX, 0, u32::MAX - 1, 1]);
    }
}
