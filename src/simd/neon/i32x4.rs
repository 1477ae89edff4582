//! NEON 4-lane `i32` vector.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdInt, SimdVector};

use super::{B32x4, U32x4, LANE_COUNT, NEON_ALIGNMENT};

/// Four `i32` lanes with wrapping arithmetic.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x4 {
    pub(crate) elements: int32x4_t,
}

impl I32x4 {
    #[inline(always)]
    pub(crate) fn from_s32x4(elements: int32x4_t) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [i32; LANE_COUNT] {
        let mut lanes = [0i32; LANE_COUNT];
        unsafe { vst1q_s32(lanes.as_mut_ptr(), self.elements) };
        lanes
    }
}

impl Add for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vaddq_s32(self.elements, rhs.elements) })
    }
}

impl Sub for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vsubq_s32(self.elements, rhs.elements) })
    }
}

impl Mul for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vmulq_s32(self.elements, rhs.elements) })
    }
}

impl Neg for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_s32x4(unsafe { vnegq_s32(self.elements) })
    }
}

impl BitAnd for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vandq_s32(self.elements, rhs.elements) })
    }
}

impl BitOr for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vorrq_s32(self.elements, rhs.elements) })
    }
}

impl BitXor for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { veorq_s32(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(I32x4);
impl_assign_ops!(I32x4: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for I32x4 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::from_s32x4(unsafe { vdupq_n_s32(-1) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::from_s32x4(unsafe { vdupq_n_s32(0) })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vbicq_s32(rhs.elements, self.elements) })
    }
}

impl SimdVector for I32x4 {
    type Lane = i32;
    type Mask = B32x4;
    type Register = int32x4_t;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = NEON_ALIGNMENT;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self::from_s32x4(unsafe { vdupq_n_s32(value) })
    }

    #[inline(always)]
    fn from_register(register: int32x4_t) -> Self {
        Self::from_s32x4(register)
    }

    #[inline(always)]
    fn into_register(self) -> int32x4_t {
        self.elements
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_s32x4(vld1q_s32(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        Self::from_s32x4(vld1q_s32(ptr))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const i32, stride: usize) -> Self {
        let lanes = [
            *ptr,
            *ptr.add(stride),
            *ptr.add(2 * stride),
            *ptr.add(3 * stride),
        ];
        Self::from_s32x4(vld1q_s32(lanes.as_ptr()))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        vst1q_s32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        vst1q_s32(ptr, self.elements)
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
        B32x4::from_u32x4(unsafe { vceqq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vmvnq_u32(vceqq_s32(self.elements, rhs.elements)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcltq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcleq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcgtq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcgeq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vminq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_s32x4(unsafe { vmaxq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn select(mask: B32x4, if_true: Self, if_false: Self) -> Self {
        Self::from_s32x4(unsafe { vbslq_s32(mask.elements, if_true.elements, if_false.elements) })
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        let e = self.elements;
        match distance {
            1 => Self::from_s32x4(unsafe { vrev64q_s32(e) }),
            2 => Self::from_s32x4(unsafe { vextq_s32::<2>(e, e) }),
            _ => unreachable!("swap distance {distance} is not valid for 4 lanes"),
        }
    }
}

impl SimdInt for I32x4 {
    type UInt = U32x4;

    #[inline(always)]
    fn abs(self) -> Self {
        Self::from_s32x4(unsafe { vabsq_s32(self.elements) })
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self::from_s32x4(unsafe { vshlq_s32(self.elements, vdupq_n_s32(count as i32)) })
    }

    // vshl with a negative count shifts right, arithmetic for signed lanes
    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self::from_s32x4(unsafe { vshlq_s32(self.elements, vdupq_n_s32(-(count as i32))) })
    }

    #[inline(always)]
    fn to_uint(self) -> U32x4 {
        U32x4::from_u32x4(unsafe { vreinterpretq_u32_s32(self.elements) })
    }

    #[inline(always)]
    fn from_uint(value: U32x4) -> Self {
        Self::from_s32x4(unsafe { vreinterpretq_s32_u32(value.elements) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::SimdMask;

    #[test]
    fn test_wrapping_ops() {
        let v = I32x4::from_slice(&[i32::MAX, i32::MIN, -5, 5]);
        assert_eq!((v + I32x4::splat(1)).to_vec(), vec![i32::MIN, i32::MIN + 1, -4, 6]);
        assert_eq!(v.abs().to_vec(), vec![i32::MAX, i32::MIN, 5, 5]);
        assert_eq!((-v).extract(1), i32::MIN);
    }

    #[test]
    fn test_shifts() {
        let v = I32x4::from_slice(&[-16, 16, 1, -1]);
        assert_eq!(v.shift_right(2).to_vec(), vec![-4, 4, 0, -1]);
        assert_eq!(v.shift_left(3).to_vec(), vec![-128, 128, 8, -8]);
    }

    #[test]
    fn test_compare_masks() {
        let a = I32x4::from_slice(&[-1, 0, 5, 5]);
        let b = I32x4::from_slice(&[1, 0, 4, 6]);
        assert_eq!(a.lt_elements(b).bitmask().bits(), 0b1001);
        assert_eq!(a.ne_elements(b).bitmask().bits(), 0b1101);
    }
}
