//! AVX2 8-lane `f32` vector.
//!
//! Wraps Intel's `__m256`. The approximate operations use the raw hardware
//! estimates (`vrsqrtps`, `vrcpps`), whose relative error is bounded by
//! `1.5 * 2^-12`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub};

use crate::simd::inverted::impl_inverted_ops;
use crate::simd::ops::impl_assign_ops;
use crate::simd::traits::{SimdBits, SimdFloat, SimdVector};

use super::{B32x8, I32x8, U32x8, AVX_ALIGNMENT, LANE_COUNT, SWAP_128, SWAP_HALVES, SWAP_PAIRS};

/// AVX2 SIMD vector containing 8 packed f32 values.
///
/// For aligned loads and stores, data must sit on a 32-byte boundary; use
/// [`Aligned`](crate::simd::utils::Aligned) or the checked
/// [`try_load_aligned`](SimdVector::try_load_aligned).
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x8 {
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub(crate) elements: __m256,
}

impl F32x8 {
    #[inline(always)]
    pub(crate) fn from_m256(elements: __m256) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn lanes(self) -> [f32; LANE_COUNT] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { _mm256_storeu_ps(lanes.as_mut_ptr(), self.elements) };
        lanes
    }
}

impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_add_ps(self.elements, rhs.elements) })
    }
}

impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_sub_ps(self.elements, rhs.elements) })
    }
}

impl Mul for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_mul_ps(self.elements, rhs.elements) })
    }
}

impl Div for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_div_ps(self.elements, rhs.elements) })
    }
}

impl Neg for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::sign_bit() ^ self
    }
}

impl BitAnd for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_and_ps(self.elements, rhs.elements) })
    }
}

impl BitOr for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_or_ps(self.elements, rhs.elements) })
    }
}

impl BitXor for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_xor_ps(self.elements, rhs.elements) })
    }
}

impl_inverted_ops!(F32x8);
impl_assign_ops!(F32x8: AddAssign::add_assign => +, SubAssign::sub_assign => -, MulAssign::mul_assign => *);

impl SimdBits for F32x8 {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::from_m256(unsafe { _mm256_castsi256_ps(_mm256_set1_epi32(-1)) })
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::from_m256(unsafe { _mm256_setzero_ps() })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_andnot_ps(self.elements, rhs.elements) })
    }
}

impl SimdVector for F32x8 {
    type Lane = f32;
    type Mask = B32x8;
    type Register = __m256;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = AVX_ALIGNMENT;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_m256(unsafe { _mm256_set1_ps(value) })
    }

    #[inline(always)]
    fn from_register(register: __m256) -> Self {
        Self::from_m256(register)
    }

    #[inline(always)]
    fn into_register(self) -> __m256 {
        self.elements
    }

    /// Loads 8 f32 values from 32-byte aligned memory.
    ///
    /// # Safety
    ///
    /// Pointer must be 32-byte aligned and point to at least 8 valid f32 values.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::from_m256(_mm256_load_ps(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self::from_m256(_mm256_loadu_ps(ptr))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const f32, stride: usize) -> Self {
        Self::from_m256(_mm256_setr_ps(
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

    /// Stores 8 f32 values to 32-byte aligned memory.
    ///
    /// # Safety
    ///
    /// Pointer must be 32-byte aligned and point to at least 8 writable f32 slots.
    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        _mm256_store_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        _mm256_storeu_ps(ptr, self.elements)
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
    fn eq_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256(unsafe { _mm256_cmp_ps::<_CMP_EQ_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256(unsafe { _mm256_cmp_ps::<_CMP_NEQ_UQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256(unsafe { _mm256_cmp_ps::<_CMP_LT_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256(unsafe { _mm256_cmp_ps::<_CMP_LE_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256(unsafe { _mm256_cmp_ps::<_CMP_GT_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> B32x8 {
        B32x8::from_m256(unsafe { _mm256_cmp_ps::<_CMP_GE_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_min_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_m256(unsafe { _mm256_max_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn select(mask: B32x8, if_true: Self, if_false: Self) -> Self {
        Self::from_m256(unsafe {
            _mm256_blendv_ps(if_false.elements, if_true.elements, mask.as_m256())
        })
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        let e = self.elements;
        match distance {
            1 => Self::from_m256(unsafe { _mm256_permute_ps::<SWAP_PAIRS>(e) }),
            2 => Self::from_m256(unsafe { _mm256_permute_ps::<SWAP_HALVES>(e) }),
            4 => Self::from_m256(unsafe { _mm256_permute2f128_ps::<SWAP_128>(e, e) }),
            _ => unreachable!("swap distance {distance} is not valid for 8 lanes"),
        }
    }
}

impl SimdFloat for F32x8 {
    type Int = I32x8;
    type UInt = U32x8;

    const APPROX_RELATIVE_ERROR: f32 = 3.7e-4;

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_m256(unsafe { _mm256_sqrt_ps(self.elements) })
    }

    #[inline(always)]
    fn approx_sqrt(self) -> Self {
        let estimate = self * self.approx_rsqrt();
        Self::select(self.eq_elements(Self::zero()), self, estimate)
    }

    #[inline(always)]
    fn approx_rsqrt(self) -> Self {
        Self::from_m256(unsafe { _mm256_rsqrt_ps(self.elements) })
    }

    #[inline(always)]
    fn approx_rcp(self) -> Self {
        Self::from_m256(unsafe { _mm256_rcp_ps(self.elements) })
    }

    /// Rounds with the current MXCSR mode. Out-of-range lanes and NaN become
    /// `i32::MIN`.
    #[inline(always)]
    fn round_to_int(self) -> I32x8 {
        I32x8::from_m256i(unsafe { _mm256_cvtps_epi32(self.elements) })
    }

    #[inline(always)]
    fn from_int(value: I32x8) -> Self {
        Self::from_m256(unsafe { _mm256_cvtepi32_ps(value.elements) })
    }

    #[inline(always)]
    fn to_bits(self) -> U32x8 {
        U32x8::from_m256i(unsafe { _mm256_castps_si256(self.elements) })
    }

    #[inline(always)]
    fn from_bits(bits: U32x8) -> Self {
        Self::from_m256(unsafe { _mm256_castsi256_ps(bits.elements) })
    }
}
