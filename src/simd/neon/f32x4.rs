//! NEON 4-lane `f32` vector.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdFloat, SimdVector};

use super::{B32x4, I32x4, U32x4, LANE_COUNT, NEON_ALIGNMENT};

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x4 {
    pub(crate) elements: float32x4_t,
}

impl F32x4 {
    #[inline(always)]
    pub(crate) fn from_f32x4(elements: float32x4_t) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn bits(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_f32(self.elements) }
    }

    #[inline(always)]
    fn with_bits(bits: uint32x4_t) -> Self {
        Self::from_f32x4(unsafe { vreinterpretq_f32_u32(bits) })
    }

    #[inline(always)]
    fn lanes(self) -> [f32; LANE_COUNT] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { vst1q_f32(lanes.as_mut_ptr(), self.elements) };
        lanes
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_f32x4(unsafe { vaddq_f32(self.elements, rhs.elements) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_f32x4(unsafe { vsubq_f32(self.elements, rhs.elements) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_f32x4(unsafe { vmulq_f32(self.elements, rhs.elements) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::from_f32x4(unsafe { vdivq_f32(self.elements, rhs.elements) })
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_f32x4(unsafe { vnegq_f32(self.elements) })
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::with_bits(unsafe { vandq_u32(self.bits(), rhs.bits()) })
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::with_bits(unsafe { vorrq_u32(self.bits(), rhs.bits()) })
    }
}

impl BitXor for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::with_bits(unsafe { veorq_u32(self.bits(), rhs.bits()) })
    }
}

impl_inverted_ops!(F32x4);
impl_assign_ops!(F32x4: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for F32x4 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::with_bits(unsafe { vdupq_n_u32(u32::MAX) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::with_bits(unsafe { vdupq_n_u32(0) })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::with_bits(unsafe { vbicq_u32(rhs.bits(), self.bits()) })
    }
}

impl SimdVector for F32x4 {
    type Lane = f32;
    type Mask = B32x4;
    type Register = float32x4_t;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = NEON_ALIGNMENT;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_f32x4(unsafe { vdupq_n_f32(value) })
    }

    #[inline(always)]
    fn from_register(register: float32x4_t) -> Self {
        Self::from_f32x4(register)
    }

    #[inline(always)]
    fn into_register(self) -> float32x4_t {
        self.elements
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_f32x4(vld1q_f32(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self::from_f32x4(vld1q_f32(ptr))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const f32, stride: usize) -> Self {
        let lanes = [
            *ptr,
            *ptr.add(stride),
            *ptr.add(2 * stride),
            *ptr.add(3 * stride),
        ];
        Self::from_f32x4(vld1q_f32(lanes.as_ptr()))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_strided(self, ptr: *mut f32, stride: usize) {
        for (i, lane) in self.lanes().into_iter().enumerate() {
            *ptr.add(i * stride) = lane;
        }
    }

    #[inline(always)]
    fn extract(self, index: usize) -> f32 {
        assert!(index < LANE_COUNT, "lane {index} out of range");
        self.lanes()[index]
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vceqq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vmvnq_u32(vceqq_f32(self.elements, rhs.elements)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcltq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcleq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcgtq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_u32x4(unsafe { vcgeq_f32(self.elements, rhs.elements) })
    }

    // vminq_f32 propagates NaN; compare-and-select keeps the x86 minps rule
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::select(self.lt_elements(rhs), self, rhs)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::select(self.gt_elements(rhs), self, rhs)
    }

    #[inline(always)]
    fn select(mask: B32x4, if_true: Self, if_false: Self) -> Self {
        Self::from_f32x4(unsafe { vbslq_f32(mask.elements, if_true.elements, if_false.elements) })
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        let e = self.elements;
        match distance {
            1 => Self::from_f32x4(unsafe { vrev64q_f32(e) }),
            2 => Self::from_f32x4(unsafe { vextq_f32::<2>(e, e) }),
            _ => unreachable!("swap distance {distance} is not valid for 4 lanes"),
        }
    }
}

impl SimdFloat for F32x4 {
    type Int = I32x4;
    type UInt = U32x4;

    const APPROX_RELATIVE_ERROR: f32 = 1.0e-4;

    #[inline(always)]
    fn abs(self) -> Self {
        Self::from_f32x4(unsafe { vabsq_f32(self.elements) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_f32x4(unsafe { vsqrtq_f32(self.elements) })
    }

    #[inline(always)]
    fn approx_sqrt(self) -> Self {
        let estimate = self * self.approx_rsqrt();
        Self::select(self.eq_elements(Self::zero()), self, estimate)
    }

    #[inline(always)]
    fn approx_rsqrt(self) -> Self {
        unsafe {
            let x = self.elements;
            let estimate = vrsqrteq_f32(x);
            // one Newton-Raphson step: e * (3 - x * e^2) / 2
            Self::from_f32x4(vmulq_f32(estimate, vrsqrtsq_f32(vmulq_f32(x, estimate), estimate)))
        }
    }

    #[inline(always)]
    fn approx_rcp(self) -> Self {
        unsafe {
            let x = self.elements;
            let estimate = vrecpeq_f32(x);
            // one Newton-Raphson step: e * (2 - x * e)
            Self::from_f32x4(vmulq_f32(estimate, vrecpsq_f32(x, estimate)))
        }
    }

    /// Saturates out-of-range lanes; NaN becomes `0`.
    #[inline(always)]
    fn round_to_int(self) -> I32x4 {
        I32x4::from_s32x4(unsafe { vcvtnq_s32_f32(self.elements) })
    }

    #[inline(always)]
    fn from_int(value: I32x4) -> Self {
        Self::from_f32x4(unsafe { vcvtq_f32_s32(value.elements) })
    }

    #[inline(always)]
    fn to_bits(self) -> U32x4 {
        U32x4::from_u32x4(self.bits())
    }

    #[inline(always)]
    fn from_bits(bits: U32x4) -> Self {
        Self::with_bits(bits.elements)
    }
}
