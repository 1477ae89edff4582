//! Width composition.
//!
//! [`Dual<V>`] pairs two vectors of width N into one of width 2N. Lane `i < N`
//! lives in the low half, lane `i >= N` in the high half. Every trait the
//! child implements is implemented for the pair, so `Dual` nests to any depth
//! (`Dual<Dual<F32x1>>` is a 4-lane float vector on a machine without SIMD)
//! and width generic code cannot tell it apart from a native register.
//!
//! Lane-wise operations run on both halves independently. Memory accesses
//! split the buffer (or the stride) between the halves. Masks pack the high
//! half's bits above the low half's. Mask queries recurse into the halves, so
//! they work past the 64 lanes a [`BitMask`] can hold. Reductions fold each
//! half, combine the two results and broadcast them, which matches lane 0 of
//! the native ascending-distance tree.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, Mul,
    MulAssign, Neg, Not, Sub, SubAssign,
};

use crate::simd::inverted::Inverted;
use crate::simd::mask::BitMask;
use crate::simd::reduce::LaneOp;
use crate::simd::traits::{Condition, SimdBits, SimdFloat, SimdInt, SimdMask, SimdUInt, SimdVector};

/// Two half-width vectors presented as one vector of twice the width.
#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub struct Dual<V> {
    lo: V,
    hi: V,
}

impl<V: Copy> Dual<V> {
    /// Pairs `lo` (lanes `0..N`) with `hi` (lanes `N..2N`).
    #[inline(always)]
    pub const fn new(lo: V, hi: V) -> Self {
        Self { lo, hi }
    }

    /// The low half.
    #[inline(always)]
    pub fn lo(self) -> V {
        self.lo
    }

    /// The high half.
    #[inline(always)]
    pub fn hi(self) -> V {
        self.hi
    }

    /// Both halves, low first.
    #[inline(always)]
    pub fn split(self) -> (V, V) {
        (self.lo, self.hi)
    }

    #[inline(always)]
    fn map(self, f: impl Fn(V) -> V) -> Self {
        Self::new(f(self.lo), f(self.hi))
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(V, V) -> V) -> Self {
        Self::new(f(self.lo, rhs.lo), f(self.hi, rhs.hi))
    }
}

// ================================================================================================
// BITWISE OPERATORS
// ================================================================================================

impl<V: SimdBits> BitAnd for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a & b)
    }
}

impl<V: SimdBits> BitOr for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a | b)
    }
}

impl<V: SimdBits> BitXor for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a ^ b)
    }
}

impl<V: SimdBits> Not for Dual<V> {
    type Output = Inverted<Self>;

    #[inline(always)]
    fn not(self) -> Inverted<Self> {
        Inverted::new(self)
    }
}

impl<V: SimdBits> BitAnd<Inverted<Dual<V>>> for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Inverted<Dual<V>>) -> Self {
        rhs.operand().andnot(self)
    }
}

impl<V: SimdBits> BitOr<Inverted<Dual<V>>> for Dual<V> {
    type Output = Inverted<Self>;

    #[inline(always)]
    fn bitor(self, rhs: Inverted<Dual<V>>) -> Inverted<Self> {
        Inverted::new(self.andnot(rhs.operand()))
    }
}

impl<V: SimdBits> BitXor<Inverted<Dual<V>>> for Dual<V> {
    type Output = Inverted<Self>;

    #[inline(always)]
    fn bitxor(self, rhs: Inverted<Dual<V>>) -> Inverted<Self> {
        Inverted::new(self ^ rhs.operand())
    }
}

impl<V: SimdBits> From<Inverted<Dual<V>>> for Dual<V> {
    #[inline(always)]
    fn from(value: Inverted<Dual<V>>) -> Self {
        value.force()
    }
}

impl<V: SimdBits> BitAndAssign for Dual<V> {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<V: SimdBits> BitAndAssign<Inverted<Dual<V>>> for Dual<V> {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Inverted<Dual<V>>) {
        *self = *self & rhs;
    }
}

impl<V: SimdBits> BitOrAssign for Dual<V> {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<V: SimdBits> BitXorAssign for Dual<V> {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<V: SimdBits> SimdBits for Dual<V> {
    #[inline(always)]
    fn all_bits() -> Self {
        Self::new(V::all_bits(), V::all_bits())
    }

    #[inline(always)]
    fn no_bits() -> Self {
        Self::new(V::no_bits(), V::no_bits())
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        self.zip(rhs, V::andnot)
    }
}

// ================================================================================================
// ARITHMETIC OPERATORS
// ================================================================================================

impl<V: Copy + Add<Output = V>> Add for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl<V: Copy + Sub<Output = V>> Sub for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl<V: Copy + Mul<Output = V>> Mul for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }
}

impl<V: Copy + Div<Output = V>> Div for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b)
    }
}

impl<V: Copy + Neg<Output = V>> Neg for Dual<V> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<V: Copy + Add<Output = V>> AddAssign for Dual<V> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<V: Copy + Sub<Output = V>> SubAssign for Dual<V> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<V: Copy + Mul<Output = V>> MulAssign for Dual<V> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// ================================================================================================
// MASK
// ================================================================================================

impl<M: SimdMask> SimdMask for Dual<M> {
    const LANES: usize = 2 * M::LANES;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Self::new(M::splat(value), M::splat(value))
    }

    #[inline(always)]
    fn from_bitmask(bits: u64) -> Self {
        let hi_bits = bits.checked_shr(M::LANES as u32).unwrap_or(0);
        Self::new(M::from_bitmask(bits), M::from_bitmask(hi_bits))
    }

    #[inline(always)]
    fn bitmask(self) -> BitMask {
        BitMask::concat(self.lo.bitmask(), self.hi.bitmask())
    }

    #[inline(always)]
    fn extract(self, index: usize) -> bool {
        assert!(index < Self::LANES, "lane {index} out of range");

        match index < M::LANES {
            true => self.lo.extract(index),
            false => self.hi.extract(index - M::LANES),
        }
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.lo.any() || self.hi.any()
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.lo.all() && self.hi.all()
    }

    #[inline(always)]
    fn none(self) -> bool {
        self.lo.none() && self.hi.none()
    }

    #[inline(always)]
    fn first(self) -> Option<usize> {
        self.lo
            .first()
            .or_else(|| self.hi.first().map(|index| M::LANES + index))
    }
}

impl<M: SimdMask> Condition<Dual<M>> for Dual<M> {
    #[inline(always)]
    fn choose<V: SimdVector<Mask = Dual<M>>>(self, if_true: V, if_false: V) -> V {
        V::select(self, if_true, if_false)
    }
}

impl<M: SimdMask> Condition<Dual<M>> for Inverted<Dual<M>> {
    #[inline(always)]
    fn choose<V: SimdVector<Mask = Dual<M>>>(self, if_true: V, if_false: V) -> V {
        V::select(self.operand(), if_false, if_true)
    }
}

// ================================================================================================
// VECTOR
// ================================================================================================

impl<V: SimdVector> SimdVector for Dual<V> {
    type Lane = V::Lane;
    type Mask = Dual<V::Mask>;
    type Register = [V::Register; 2];

    const LANES: usize = 2 * V::LANES;
    const ALIGNMENT: usize = V::ALIGNMENT;

    #[inline(always)]
    fn splat(value: Self::Lane) -> Self {
        Self::new(V::splat(value), V::splat(value))
    }

    #[inline(always)]
    fn from_register(register: Self::Register) -> Self {
        Self::new(V::from_register(register[0]), V::from_register(register[1]))
    }

    #[inline(always)]
    fn into_register(self) -> Self::Register {
        [self.lo.into_register(), self.hi.into_register()]
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const Self::Lane) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        Self::new(V::load_aligned(ptr), V::load_aligned(ptr.add(V::LANES)))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const Self::Lane) -> Self {
        Self::new(V::load_unaligned(ptr), V::load_unaligned(ptr.add(V::LANES)))
    }

    #[inline(always)]
    unsafe fn load_strided(ptr: *const Self::Lane, stride: usize) -> Self {
        Self::new(
            V::load_strided(ptr, stride),
            V::load_strided(ptr.add(V::LANES * stride), stride),
        )
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut Self::Lane) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be {}-byte aligned", Self::ALIGNMENT);

        self.lo.store_aligned(ptr);
        self.hi.store_aligned(ptr.add(V::LANES));
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut Self::Lane) {
        self.lo.store_unaligned(ptr);
        self.hi.store_unaligned(ptr.add(V::LANES));
    }

    #[inline(always)]
    unsafe fn store_strided(self, ptr: *mut Self::Lane, stride: usize) {
        self.lo.store_strided(ptr, stride);
        self.hi.store_strided(ptr.add(V::LANES * stride), stride);
    }

    #[inline(always)]
    fn extract(self, index: usize) -> Self::Lane {
        match index < V::LANES {
            true => self.lo.extract(index),
            false => self.hi.extract(index - V::LANES),
        }
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self::Mask {
        Dual::new(self.lo.eq_elements(rhs.lo), self.hi.eq_elements(rhs.hi))
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self::Mask {
        Dual::new(self.lo.ne_elements(rhs.lo), self.hi.ne_elements(rhs.hi))
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self::Mask {
        Dual::new(self.lo.lt_elements(rhs.lo), self.hi.lt_elements(rhs.hi))
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self::Mask {
        Dual::new(self.lo.le_elements(rhs.lo), self.hi.le_elements(rhs.hi))
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self::Mask {
        Dual::new(self.lo.gt_elements(rhs.lo), self.hi.gt_elements(rhs.hi))
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self::Mask {
        Dual::new(self.lo.ge_elements(rhs.lo), self.hi.ge_elements(rhs.hi))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, V::min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, V::max)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
        Self::new(
            V::select(mask.lo, if_true.lo, if_false.lo),
            V::select(mask.hi, if_true.hi, if_false.hi),
        )
    }

    #[inline(always)]
    fn swap_lanes(self, distance: usize) -> Self {
        match distance.cmp(&V::LANES) {
            std::cmp::Ordering::Less => self.map(|half| half.swap_lanes(distance)),
            std::cmp::Ordering::Equal => Self::new(self.hi, self.lo),
            std::cmp::Ordering::Greater => {
                unreachable!("swap distance {distance} exceeds {} lanes", Self::LANES)
            }
        }
    }

    #[inline(always)]
    fn reduce<Op: LaneOp>(self) -> Self {
        let lo = self.lo.reduce::<Op>();
        let hi = self.hi.reduce::<Op>();
        let folded = Op::apply(lo, hi);

        Self::new(folded, folded)
    }
}

impl<V: SimdFloat> SimdFloat for Dual<V> {
    type Int = Dual<V::Int>;
    type UInt = Dual<V::UInt>;

    const APPROX_RELATIVE_ERROR: f32 = V::APPROX_RELATIVE_ERROR;

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(V::abs)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(V::sqrt)
    }

    #[inline(always)]
    fn approx_sqrt(self) -> Self {
        self.map(V::approx_sqrt)
    }

    #[inline(always)]
    fn approx_rsqrt(self) -> Self {
        self.map(V::approx_rsqrt)
    }

    #[inline(always)]
    fn approx_rcp(self) -> Self {
        self.map(V::approx_rcp)
    }

    #[inline(always)]
    fn round_to_int(self) -> Self::Int {
        Dual::new(self.lo.round_to_int(), self.hi.round_to_int())
    }

    #[inline(always)]
    fn from_int(value: Self::Int) -> Self {
        Self::new(V::from_int(value.lo), V::from_int(value.hi))
    }

    #[inline(always)]
    fn to_bits(self) -> Self::UInt {
        Dual::new(self.lo.to_bits(), self.hi.to_bits())
    }

    #[inline(always)]
    fn from_bits(bits: Self::UInt) -> Self {
        Self::new(V::from_bits(bits.lo), V::from_bits(bits.hi))
    }
}

impl<V: SimdInt> SimdInt for Dual<V> {
    type UInt = Dual<V::UInt>;

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(V::abs)
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        self.map(|half| half.shift_left(count))
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        self.map(|half| half.shift_right(count))
    }

    #[inline(always)]
    fn to_uint(self) -> Self::UInt {
        Dual::new(self.lo.to_uint(), self.hi.to_uint())
    }

    #[inline(always)]
    fn from_uint(value: Self::UInt) -> Self {
        Self::new(V::from_uint(value.lo), V::from_uint(value.hi))
    }
}

impl<V: SimdUInt> SimdUInt for Dual<V> {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        self.map(|half| half.shift_left(count))
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        self.map(|half| half.shift_right(count))
    }
}
