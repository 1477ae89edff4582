//! SSE 4-lane `f32` vector.
//!
//! Wraps one `__m128`. Besides plain SSE this relies on SSE4.1 for
//! `_mm_blendv_ps` (select). The approximate operations use the hardware
//! estimate instructions (`rsqrtps`, `rcpps`) without refinement, so their
//! relative error is bounded by `1.5 * 2^-12`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdFloat, SimdVector};

use super::{B32x4, I32x4, U32x4, LANE_COUNT, SSE_ALIGNMENT, SWAP_HALVES, SWAP_PAIRS};

/// Four packed `f32` lanes.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x4 {
    pub(crate) elements: __m128,
}

impl F32x4 {
    #[inline(always)]
    pub(crate) fn from_m128(elements: __m128) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [f32; LANE_COUNT] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), self.elements) };
        lanes
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_add_ps(self.elements, rhs.elements) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_sub_ps(self.elements, rhs.elements) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_mul_ps(self.elements, rhs.elements) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_div_ps(self.elements, rhs.elements) })
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::sign_bit() ^ self
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_and_ps(self.elements, rhs.elements) })
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_or_ps(self.elements, rhs.elements) })
    }
}

impl BitXor for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_xor_ps(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(F32x4);
impl_assign_ops!(F32x4: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for F32x4 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::from_m128(unsafe { _mm_castsi128_ps(_mm_set1_epi32(-1)) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::from_m128(unsafe { _mm_setzero_ps() })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_andnot_ps(self.elements, rhs.elements) })
    }
}

impl SimdVector for F32x4 {
    type Lane = f32;
    type Mask = B32x4;
    type Register = __m128;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = SSE_ALIGNMENT;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_m128(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    fn from_register(register: __m128) -> Self {
        Self::from_m128(register)
    }

    #[inline(always)]
    fn into_register(self) -> __m128 {
        self.elements
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_m128(_mm_load_ps(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self::from_m128(_mm_loadu_ps(ptr))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const f32, stride: usize) -> Self {
        Self::from_m128(_mm_setr_ps(
            *ptr,
            *ptr.add(stride),
            *ptr.add(2 * stride),
            *ptr.add(3 * stride),
        ))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        _mm_store_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements)
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
        B32x4::from_m128(unsafe { _mm_cmpeq_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128(unsafe { _mm_cmpneq_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128(unsafe { _mm_cmplt_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128(unsafe { _mm_cmple_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128(unsafe { _mm_cmpgt_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x4 {
        B32x4::from_m128(unsafe { _mm_cmpge_ps(self.elements, rhs.elements) })
    }

    // minps returns the second operand on equality and on NaN
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_min_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_m128(unsafe { _mm_max_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn select(mask: B32x4, if_true: Self, if_false: Self) -> Self {
        Self::from_m128(unsafe {
            _mm_blendv_ps(if_false.elements, if_true.elements, mask.as_m128())
        })
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        let e = self.elements;
        match distance {
            1 => Self::from_m128(unsafe { _mm_shuffle_ps::<SWAP_PAIRS>(e, e) }),
            2 => Self::from_m128(unsafe { _mm_shuffle_ps::<SWAP_HALVES>(e, e) }),
            _ => unreachable!("swap distance {distance} is not valid for 4 lanes"),
        }
    }
}

impl SimdFloat for F32x4 {
    type Int = I32x4;
    type UInt = U32x4;

    const APPROX_RELATIVE_ERROR: f32 = 3.7e-4;

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_m128(unsafe { _mm_sqrt_ps(self.elements) })
    }

    #[inline(always)]
    fn approx_sqrt(self) -> Self {
        // x * rsqrt(x) is NaN at zero, keep zero lanes as they are
        let estimate = self * self.approx_rsqrt();
        Self::select(self.eq_elements(Self::zero()), self, estimate)
    }

    #[inline(always)]
    fn approx_rsqrt(self) -> Self {
        Self::from_m128(unsafe { _mm_rsqrt_ps(self.elements) })
    }

    #[inline(always)]
    fn approx_rcp(self) -> Self {
        Self::from_m128(unsafe { _mm_rcp_ps(self.elements) })
    }

    /// Uses the current MXCSR rounding mode (nearest, ties to even, unless
    /// changed). Out-of-range lanes and NaN become `i32::MIN`.
    #[inline(always)]
    fn round_to_int(self) -> I32x4 {
        I32x4::from_m128i(unsafe { _mm_cvtps_epi32(self.elements) })
    }

    #[inline(always)]
    fn from_int(value: I32x4) -> Self {
        Self::from_m128(unsafe { _mm_cvtepi32_ps(value.elements) })
    }

    #[inline(always)]
    fn to_bits(self) -> U32x4 {
        U32x4::from_m128i(unsafe { _mm_castps_si128(self.elements) })
    }

    #[inline(always)]
    fn from_bits(bits: U32x4) -> Self {
        Self::from_m128(unsafe { _mm_castsi128_ps(bits.elements) })
    }
}
