//! NEON 4-lane `u32` vector.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdUInt, SimdVector};

use super::{B32x4, LANE_COUNT, NEON_ALIGNMENT};

/// Four `u32` lanes with wrapping arithmetic.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct U32x4 {
    pub(crate) elements: uint32x4_t,
}

impl U32x4 {
    #[inline(always)]
    pub(crate) fn from_u32x4(elements: uint32x4_t) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [u32; LANE_COUNT] {
        let mut lanes = [0u32; LANE_COUNT];
        unsafe { vst1q_u32(lanes.as_mut_ptr(), self.elements) };
        lanes
    }
}

impl Add for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vaddq_u32(self.elements, rhs.elements) })
    }
}

impl Sub for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vsubq_u32(self.elements, rhs.elements) })
    }
}

impl Mul for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vmulq_u32(self.elements, rhs.elements) })
    }
}

impl BitAnd for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vandq_u32(self.elements, rhs.elements) })
    }
}

impl BitOr for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vorrq_u32(self.elements, rhs.elements) })
    }
}

impl BitXor for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { veorq_u32(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(U32x4);
impl_assign_ops!(U32x4: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for U32x4 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::from_u32x4(unsafe { vdupq_n_u32(u32::MAX) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::from_u32x4(unsafe { vdupq_n_u32(0) })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vbicq_u32(rhs.elements, self.elements) })
    }
}

impl SimdVector for U32x4 {
    type Lane = u32;
    type Mask = B32x4;
    type Register = uint32x4_t;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = NEON_ALIGNMENT;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self::from_u32x4(unsafe { vdupq_n_u32(value) })
    }

    #[inline(always)]
    fn from_register(register: uint32x4_t) -> Self {
        Self::from_u32x4(register)
    }

    #[inline(always)]
    fn into_register(self) -> uint32x4_t {
        self.elements
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const u32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_u32x4(vld1q_u32(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u32) -> Self {
        Self::from_u32x4(vld1q_u32(ptr))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const u32, stride: usize) -> Self {
        let lanes = [
            *ptr,
            *ptr.add(stride),
            *ptr.add(2 * stride),
            *ptr.add(3 * stride),
        ];
        Self::from_u32x4(vld1q_u32(lanes.as_ptr()))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        vst1q_u32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u32) {
        vst1q_u32(ptr, self.elements)
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
        B32x4::from_u32x4(unsafe { vceqq_u32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vmvnq_u32(vceqq_u32(self.elements, rhs.elements)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcltq_u32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcleq_u32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcgtq_u32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcgeq_u32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vminq_u32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_u32x4(unsafe { vmaxq_u32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn select(mask: B32x4, if_true: Self, if_false: Self) -> Self {
        Self::from_u32x4(unsafe { vbslq_u32(mask.elements, if_true.elements, if_false.elements) })
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        let e = self.elements;
        match distance {
            1 => Self::from_u32x4(unsafe { vrev64q_u32(e) }),
            2 => Self::from_u32x4(unsafe { vextq_u32::<2>(e, e) }),
            _ => unreachable!("swap distance {distance} is not valid for 4 lanes"),
        }
    }
}

impl SimdUInt for U32x4 {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self::from_u32x4(unsafe { vshlq_u32(self.elements, vdupq_n_s32(count as i32)) })
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self::from_u32x4(unsafe { vshlq_u32(self.elements, vdupq_n_s32(-(count as i32))) })
    }
}
