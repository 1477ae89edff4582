//! Lane bitmasks and ascending iteration over active lanes.

use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A compressed lane predicate: bit `i` holds lane `i`.
///
/// Derived on demand from a mask vector with
/// [`SimdMask::bitmask`](crate::simd::SimdMask::bitmask); never cached. Only
/// the low `lanes` bits are meaningful and they are kept normalized, so two
/// masks of the same width compare equal exactly when their predicates do.
/// Up to 64 lanes are representable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitMask {
    bits: u64,
    lanes: u32,
}

impl BitMask {
    /// Creates a mask of `lanes` lanes from `bits`, dropping bits at or above `lanes`.
    ///
    /// # Panics
    ///
    /// Panics if `lanes > 64`.
    #[inline(always)]
    pub fn new(bits: u64, lanes: usize) -> Self {
        assert!(lanes <= 64, "BitMask holds at most 64 lanes, got {lanes}");

        Self {
            bits: bits & Self::full_bits(lanes),
            lanes: lanes as u32,
        }
    }

    #[inline(always)]
    fn full_bits(lanes: usize) -> u64 {
        match lanes {
            64 => u64::MAX,
            n => (1u64 << n) - 1,
        }
    }

    /// Packs `hi` above `lo`: lanes of `lo` occupy bits `[0, lo.lanes())`.
    #[inline(always)]
    pub fn concat(lo: BitMask, hi: BitMask) -> Self {
        let shift = lo.lanes();
        let hi_bits = if shift == 64 { 0 } else { hi.bits << shift };
        Self::new(lo.bits | hi_bits, lo.lanes() + hi.lanes())
    }

    /// The raw bit pattern.
    #[inline(always)]
    pub fn bits(self) -> u64 {
        self.bits
    }

    /// The number of lanes this mask describes.
    #[inline(always)]
    pub fn lanes(self) -> usize {
        self.lanes as usize
    }

    /// True if any lane is active.
    #[inline(always)]
    pub fn any(self) -> bool {
        self.bits != 0
    }

    /// True if every lane is active.
    #[inline(always)]
    pub fn all(self) -> bool {
        self.bits == Self::full_bits(self.lanes())
    }

    /// True if no lane is active.
    #[inline(always)]
    pub fn none(self) -> bool {
        self.bits == 0
    }

    /// Number of active lanes.
    #[inline(always)]
    pub fn count(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether lane `index` is active. Lanes past the width read as inactive.
    #[inline(always)]
    pub fn test(self, index: usize) -> bool {
        index < self.lanes() && (self.bits >> index) & 1 == 1
    }

    /// Index of the lowest active lane.
    #[inline(always)]
    pub fn first(self) -> Option<usize> {
        match self.bits {
            0 => None,
            bits => Some(bits.trailing_zeros() as usize),
        }
    }

    /// Iterates the active lane indices in ascending order.
    #[inline(always)]
    pub fn iter(self) -> SetLanes {
        SetLanes { bits: self.bits }
    }
}

impl BitAnd for BitMask {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.lanes, rhs.lanes, "mask widths differ");
        Self::new(self.bits & rhs.bits, self.lanes())
    }
}

impl BitOr for BitMask {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.lanes, rhs.lanes, "mask widths differ");
        Self::new(self.bits | rhs.bits, self.lanes())
    }
}

impl BitXor for BitMask {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.lanes, rhs.lanes, "mask widths differ");
        Self::new(self.bits ^ rhs.bits, self.lanes())
    }
}

impl Not for BitMask {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self::new(!self.bits, self.lanes())
    }
}

impl IntoIterator for BitMask {
    type Item = usize;
    type IntoIter = SetLanes;

    #[inline(always)]
    fn into_iter(self) -> SetLanes {
        self.iter()
    }
}

/// Iterator over the active lanes of a [`BitMask`], lowest index first.
#[derive(Clone, Debug)]
pub struct SetLanes {
    bits: u64,
}

impl Iterator for SetLanes {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }

        let index = self.bits.trailing_zeros() as usize;
        // clear lowest set bit
        self.bits &= self.bits - 1;
        Some(index)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetLanes {}

impl std::iter::FusedIterator for SetLanes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_all_on_partial_mask() {
        let m = BitMask::new(0b1011, 4);
        assert!(m.any());
        assert!(!m.all());
        assert!(!m.none());
        assert_eq!(m.count(), 3);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let m = BitMask::new(0b1011, 4);
        let lanes: Vec<usize> = m.into_iter().collect();
        assert_eq!(lanes, vec![0, 1, 3]);
        assert_eq!(m.iter().len(), 3);
    }

    #[test]
    fn test_bits_above_width_are_dropped() {
        let m = BitMask::new(0xff, 4);
        assert_eq!(m.bits(), 0xf);
        assert!(m.all());
        assert!(!m.test(4));
    }

    #[test]
    fn test_not_stays_within_width() {
        let m = !BitMask::new(0b0101, 4);
        assert_eq!(m.bits(), 0b1010);
        assert!((!BitMask::new(0, 8)).all());
    }

    #[test]
    fn test_concat_places_hi_above_lo() {
        let lo = BitMask::new(0b01, 2);
        let hi = BitMask::new(0b10, 2);
        let m = BitMask::concat(lo, hi);
        assert_eq!(m.lanes(), 4);
        assert_eq!(m.bits(), 0b1001);
    }

    #[test]
    fn test_full_width_mask() {
        let m = BitMask::new(u64::MAX, 64);
        assert!(m.all());
        assert_eq!(m.count(), 64);
        assert_eq!(m.iter().last(), Some(63));
        let lo = BitMask::new(u32::MAX as u64, 32);
        assert!(BitMask::concat(lo, lo).all());
    }

    #[test]
    fn test_first_and_empty() {
        assert_eq!(BitMask::new(0b1000, 4).first(), Some(3));
        assert_eq!(BitMask::new(0, 4).first(), None);
        assert_eq!(BitMask::new(0, 4).iter().next(), None);
    }

    #[test]
    fn test_bitwise_ops() {
        let a = BitMask::new(0b1100, 4);
        let b = BitMask::new(0b1010, 4);
        assert_eq!((a & b).bits(), 0b1000);
        assert_eq!((a | b).bits(), 0b1110);
        assert_eq!((a ^ b).bits(), 0b0110);
    }
}
