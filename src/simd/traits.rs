//! The vector-type contract shared by every backend.
//!
//! Four kinds of vector exist per backend, all with the same lane count and
//! the same in-memory size:
//!
//! | Kind  | Trait         | Lane  |
//! |-------|---------------|-------|
//! | Bool  | [`SimdMask`]  | predicate (all-ones / all-zeros 32-bit lane) |
//! | Float | [`SimdFloat`] | `f32` |
//! | Int   | [`SimdInt`]   | `i32` |
//! | UInt  | [`SimdUInt`]  | `u32` |
//!
//! Generic code is written against these traits and monomorphizes to direct
//! intrinsic calls; nothing here is dispatched through a vtable. Composite
//! vectors ([`Dual`](crate::simd::Dual)) implement the same traits, so width
//! generic code never has to tell native and composed vectors apart.
//!
//! All operations are pure. The raw-pointer loads and stores are `unsafe`:
//! their alignment and extent preconditions are the caller's to uphold and are
//! only checked by `debug_assert!`. The `try_*` helpers validate them instead.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::error::{alignment_error, length_error, stride_error, Result};
use crate::simd::inverted::Inverted;
use crate::simd::lane::Lane;
use crate::simd::mask::BitMask;
use crate::simd::reduce::LaneOp;

/// Bitwise operations common to all four kinds.
///
/// `!v` does not compute anything: it returns an [`Inverted`] wrapper that the
/// `&`, `|` and `^` operators fuse into AND-NOT instructions.
pub trait SimdBits:
    Copy
    + std::fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Inverted<Self>>
{
    /// Every bit of every lane set.
    fn all_bits() -> Self;

    /// Every bit of every lane cleared.
    fn no_bits() -> Self;

    /// Computes `(!self) & rhs` in a single operation.
    fn andnot(self, rhs: Self) -> Self;
}

/// A vector of per-lane predicates (the Bool kind).
///
/// Lanes are stored as all-ones (true) or all-zeros (false) patterns of the
/// same width as the data lanes, so a mask can drive a bitwise select.
pub trait SimdMask: SimdBits {
    /// Number of lanes.
    const LANES: usize;

    /// Sets every lane to `value`.
    fn splat(value: bool) -> Self;

    /// Builds a mask from a bit pattern: lane `i` is true when bit `i` is set.
    ///
    /// Bits at or above `LANES` are ignored.
    fn from_bitmask(bits: u64) -> Self;

    /// Compresses the lanes into a [`BitMask`] (bit `i` = lane `i`).
    ///
    /// # Panics
    ///
    /// Panics if `LANES > 64`. The lane queries below work at any width.
    fn bitmask(self) -> BitMask;

    /// Returns the predicate of lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANES`.
    #[inline(always)]
    fn extract(self, index: usize) -> bool {
        assert!(index < Self::LANES, "lane {index} out of range");
        self.bitmask().test(index)
    }

    /// True if at least one lane is true.
    #[inline(always)]
    fn any(self) -> bool {
        self.bitmask().any()
    }

    /// True if every lane is true.
    #[inline(always)]
    fn all(self) -> bool {
        self.bitmask().all()
    }

    /// True if no lane is true.
    #[inline(always)]
    fn none(self) -> bool {
        self.bitmask().none()
    }

    /// Index of the lowest true lane.
    #[inline(always)]
    fn first(self) -> Option<usize> {
        self.bitmask().first()
    }
}

/// The operation set shared by the Float, Int and UInt kinds.
pub trait SimdVector:
    SimdBits + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Scalar type of one lane.
    type Lane: Lane;

    /// Predicate vector with the same lane count.
    type Mask: SimdMask;

    /// Underlying hardware register (or pair of registers for composites).
    type Register: Copy;

    /// Number of lanes. Always a power of two.
    const LANES: usize;

    /// Alignment in bytes required by [`load_aligned`](Self::load_aligned)
    /// and [`store_aligned`](Self::store_aligned).
    const ALIGNMENT: usize;

    /// Broadcasts `value` into every lane.
    fn splat(value: Self::Lane) -> Self;

    /// Wraps a raw register.
    fn from_register(register: Self::Register) -> Self;

    /// Unwraps the raw register.
    fn into_register(self) -> Self::Register;

    /// Loads `LANES` values from memory aligned to [`ALIGNMENT`](Self::ALIGNMENT).
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to `ALIGNMENT` bytes and valid for reading
    /// `LANES` values. Misalignment is undefined behavior.
    unsafe fn load_aligned(ptr: *const Self::Lane) -> Self;

    /// Loads `LANES` values from memory with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `LANES` consecutive values.
    unsafe fn load_unaligned(ptr: *const Self::Lane) -> Self;

    /// Loads lane `i` from `ptr.add(i * stride)` (interleaved data).
    ///
    /// # Safety
    ///
    /// Every address `ptr.add(i * stride)` for `i < LANES` must be valid for reads.
    unsafe fn load_strided(ptr: *const Self::Lane, stride: usize) -> Self;

    /// Stores all lanes to memory aligned to [`ALIGNMENT`](Self::ALIGNMENT).
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to `ALIGNMENT` bytes and valid for writing `LANES` values.
    unsafe fn store_aligned(self, ptr: *mut Self::Lane);

    /// Stores all lanes to memory with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `LANES` consecutive values.
    unsafe fn store_unaligned(self, ptr: *mut Self::Lane);

    /// Stores lane `i` to `ptr.add(i * stride)`.
    ///
    /// # Safety
    ///
    /// Every address `ptr.add(i * stride)` for `i < LANES` must be valid for writes.
    unsafe fn store_strided(self, ptr: *mut Self::Lane, stride: usize);

    /// Returns the value of lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANES`.
    fn extract(self, index: usize) -> Self::Lane;

    /// Lane-wise `==`.
    fn eq_elements(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `!=` (true for unordered float lanes).
    fn ne_elements(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<`.
    fn lt_elements(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<=`.
    fn le_elements(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>`.
    fn gt_elements(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>=`.
    fn ge_elements(self, rhs: Self) -> Self::Mask;

    /// Lane-wise minimum: `self` where `self < rhs`, otherwise `rhs`.
    ///
    /// For floats this picks `rhs` on equality and whenever a lane is NaN,
    /// identically on every backend.
    fn min(self, rhs: Self) -> Self;

    /// Lane-wise maximum: `self` where `self > rhs`, otherwise `rhs`.
    fn max(self, rhs: Self) -> Self;

    /// Lane-wise `mask ? if_true : if_false`.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Exchanges lane `i` with lane `i ^ distance`.
    ///
    /// `distance` must be a power of two smaller than `LANES`. This is the
    /// permute step of the reduction tree.
    fn swap_lanes(self, distance: usize) -> Self;

    /// Folds all lanes with `Op` and broadcasts the result to every lane.
    ///
    /// The default is a butterfly tree of `log2(LANES)` permute-then-combine
    /// rounds at distances 1, 2, 4, ... followed by a broadcast of lane 0.
    /// Lane 0 holds `Op(reduce(lo half), reduce(hi half))` at every level, the
    /// same operand order a [`Dual`](crate::simd::Dual) uses. Other lanes see
    /// swapped operands, which differ for float `Min`/`Max` on ties and NaN.
    #[inline(always)]
    fn reduce<Op: LaneOp>(self) -> Self {
        let mut acc = self;
        let mut distance = 1;

        while distance < Self::LANES {
            acc = Op::apply(acc, acc.swap_lanes(distance));
            distance <<= 1;
        }

        Self::splat(acc.extract(0))
    }

    /// All lanes zero.
    #[inline(always)]
    fn zero() -> Self {
        Self::splat(<Self::Lane as num::Zero>::zero())
    }

    /// Only the sign bit of every lane set.
    #[inline(always)]
    fn sign_bit() -> Self {
        Self::splat(<Self::Lane as Lane>::from_bits(0x8000_0000))
    }

    /// Every bit but the sign bit set (the absolute-value mask).
    #[inline(always)]
    fn abs_mask() -> Self {
        Self::splat(<Self::Lane as Lane>::from_bits(0x7fff_ffff))
    }

    /// Checks if a pointer satisfies [`ALIGNMENT`](Self::ALIGNMENT).
    #[inline(always)]
    fn is_aligned(ptr: *const Self::Lane) -> bool {
        (ptr as usize) % Self::ALIGNMENT == 0
    }

    /// Loads the first `LANES` values of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() < LANES`.
    #[inline(always)]
    fn from_slice(slice: &[Self::Lane]) -> Self {
        assert!(
            slice.len() >= Self::LANES,
            "Slice must hold at least {} lanes, got {}",
            Self::LANES,
            slice.len()
        );

        unsafe { Self::load_unaligned(slice.as_ptr()) }
    }

    /// Checked form of [`from_slice`](Self::from_slice).
    #[inline]
    fn try_from_slice(slice: &[Self::Lane]) -> Result<Self> {
        if slice.len() < Self::LANES {
            return Err(length_error(Self::LANES, slice.len(), "unaligned load"));
        }

        Ok(unsafe { Self::load_unaligned(slice.as_ptr()) })
    }

    /// Checked form of [`load_aligned`](Self::load_aligned).
    #[inline]
    fn try_load_aligned(slice: &[Self::Lane]) -> Result<Self> {
        if slice.len() < Self::LANES {
            return Err(length_error(Self::LANES, slice.len(), "aligned load"));
        }

        if !Self::is_aligned(slice.as_ptr()) {
            return Err(alignment_error(
                slice.as_ptr() as usize,
                Self::ALIGNMENT,
                "aligned load",
            ));
        }

        Ok(unsafe { Self::load_aligned(slice.as_ptr()) })
    }

    /// Checked form of [`load_strided`](Self::load_strided).
    #[inline]
    fn try_load_strided(slice: &[Self::Lane], stride: usize) -> Result<Self> {
        let required = strided_span(Self::LANES, stride)?;

        if slice.len() < required {
            return Err(length_error(required, slice.len(), "strided load"));
        }

        Ok(unsafe { Self::load_strided(slice.as_ptr(), stride) })
    }

    /// Stores all lanes into the first `LANES` slots of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() < LANES`.
    #[inline(always)]
    fn write_to_slice(self, slice: &mut [Self::Lane]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice must hold at least {} lanes, got {}",
            Self::LANES,
            slice.len()
        );

        unsafe { self.store_unaligned(slice.as_mut_ptr()) }
    }

    /// Checked form of [`write_to_slice`](Self::write_to_slice).
    #[inline]
    fn try_write_to_slice(self, slice: &mut [Self::Lane]) -> Result<()> {
        if slice.len() < Self::LANES {
            return Err(length_error(Self::LANES, slice.len(), "unaligned store"));
        }

        unsafe { self.store_unaligned(slice.as_mut_ptr()) };
        Ok(())
    }

    /// Checked form of [`store_aligned`](Self::store_aligned).
    #[inline]
    fn try_store_aligned(self, slice: &mut [Self::Lane]) -> Result<()> {
        if slice.len() < Self::LANES {
            return Err(length_error(Self::LANES, slice.len(), "aligned store"));
        }

        if !Self::is_aligned(slice.as_ptr()) {
            return Err(alignment_error(
                slice.as_ptr() as usize,
                Self::ALIGNMENT,
                "aligned store",
            ));
        }

        unsafe { self.store_aligned(slice.as_mut_ptr()) };
        Ok(())
    }

    /// Checked form of [`store_strided`](Self::store_strided).
    #[inline]
    fn try_store_strided(self, slice: &mut [Self::Lane], stride: usize) -> Result<()> {
        let required = strided_span(Self::LANES, stride)?;

        if slice.len() < required {
            return Err(length_error(required, slice.len(), "strided store"));
        }

        unsafe { self.store_strided(slice.as_mut_ptr(), stride) };
        Ok(())
    }

    /// Copies the lanes into a new `Vec`, lane 0 first.
    #[inline]
    fn to_vec(self) -> Vec<Self::Lane> {
        let mut lanes = vec![<Self::Lane as num::Zero>::zero(); Self::LANES];
        self.write_to_slice(&mut lanes);
        lanes
    }
}

/// Float-kind operations (`f32` lanes).
pub trait SimdFloat: SimdVector<Lane = f32> + Div<Output = Self> + Neg<Output = Self> {
    /// Signed-integer vector with the same lane count.
    type Int: SimdInt<Mask = Self::Mask>;

    /// Unsigned-integer vector with the same lane count.
    type UInt: SimdUInt<Mask = Self::Mask>;

    /// Upper bound on the relative error of [`approx_sqrt`](Self::approx_sqrt),
    /// [`approx_rsqrt`](Self::approx_rsqrt) and [`approx_rcp`](Self::approx_rcp)
    /// for positive, normal, finite inputs.
    const APPROX_RELATIVE_ERROR: f32;

    /// Clears the sign bit of every lane.
    #[inline(always)]
    fn abs(self) -> Self {
        Self::abs_mask() & self
    }

    /// Correctly rounded square root.
    fn sqrt(self) -> Self;

    /// Approximate square root. Zero lanes map to zero.
    fn approx_sqrt(self) -> Self;

    /// Approximate `1 / sqrt(x)`.
    fn approx_rsqrt(self) -> Self;

    /// Approximate `1 / x`.
    fn approx_rcp(self) -> Self;

    /// Converts to `i32` lanes, rounding to nearest with ties to even.
    ///
    /// Lanes outside the `i32` range and NaN produce `i32::MIN` on x86 targets.
    /// Elsewhere they saturate and NaN becomes `0`. The scalar fallback follows
    /// the target, so composed and native vectors agree bit for bit.
    fn round_to_int(self) -> Self::Int;

    /// Converts `i32` lanes to the nearest `f32`.
    fn from_int(value: Self::Int) -> Self;

    /// Reinterprets the lanes as their IEEE-754 bit patterns.
    fn to_bits(self) -> Self::UInt;

    /// Reinterprets bit patterns as `f32` lanes.
    fn from_bits(bits: Self::UInt) -> Self;

    /// True for NaN lanes.
    #[inline(always)]
    fn is_nan(self) -> Self::Mask {
        self.ne_elements(self)
    }
}

/// Signed-integer operations (`i32` lanes). Arithmetic wraps.
pub trait SimdInt: SimdVector<Lane = i32> + Neg<Output = Self> {
    /// Unsigned-integer vector with the same lane count.
    type UInt: SimdUInt<Mask = Self::Mask>;

    /// Wrapping absolute value (`i32::MIN` stays `i32::MIN`).
    fn abs(self) -> Self;

    /// Shifts every lane left by `count` bits (`count < 32`).
    fn shift_left(self, count: u32) -> Self;

    /// Arithmetic right shift of every lane by `count` bits (`count < 32`).
    fn shift_right(self, count: u32) -> Self;

    /// Reinterprets the lanes as `u32`, wrapping negative values.
    fn to_uint(self) -> Self::UInt;

    /// Reinterprets `u32` lanes as `i32`, wrapping values above `i32::MAX`.
    fn from_uint(value: Self::UInt) -> Self;
}

/// Unsigned-integer operations (`u32` lanes). Arithmetic wraps.
pub trait SimdUInt: SimdVector<Lane = u32> {
    /// Shifts every lane left by `count` bits (`count < 32`).
    fn shift_left(self, count: u32) -> Self;

    /// Logical right shift of every lane by `count` bits (`count < 32`).
    fn shift_right(self, count: u32) -> Self;
}

/// A predicate that can drive a lane-wise select.
///
/// Implemented by every mask type and by its [`Inverted`] form, which selects
/// with the operands exchanged instead of materializing the complement.
pub trait Condition<M: SimdMask> {
    /// Lane-wise `self ? if_true : if_false`.
    fn choose<V: SimdVector<Mask = M>>(self, if_true: V, if_false: V) -> V;
}

// Number of elements touched by a strided access.
#[inline]
fn strided_span(lanes: usize, stride: usize) -> Result<usize> {
    (lanes - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| stride_error(stride, "strided span overflows usize"))
}
