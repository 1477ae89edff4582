//! Scalar lane types.
//!
//! Every vector kind stores 32-bit lanes. [`Lane`] gathers what the generic
//! layers need to know about them: the neutral elements used by masked
//! reductions and a bit-level view used to build constant masks.

use std::fmt::Debug;

use num::{One, Zero};

/// A 32-bit scalar that can occupy one vector lane.
pub trait Lane: Copy + Debug + PartialEq + PartialOrd + Zero + One + Send + Sync + 'static {
    /// Neutral element of a lane-wise minimum (`+inf` for floats).
    fn min_identity() -> Self;

    /// Neutral element of a lane-wise maximum (`-inf` for floats).
    fn max_identity() -> Self;

    /// Reinterprets a 32-bit pattern as a lane value.
    fn from_bits(bits: u32) -> Self;

    /// Returns the 32-bit pattern of the lane value.
    fn to_bits(self) -> u32;
}

impl Lane for f32 {
    #[inline(always)]
    fn min_identity() -> Self {
        f32::INFINITY
    }

    #[inline(always)]
    fn max_identity() -> Self {
        f32::NEG_INFINITY
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }
}

impl Lane for i32 {
    #[inline(always)]
    fn min_identity() -> Self {
        i32::MAX
    }

    #[inline(always)]
    fn max_identity() -> Self {
        i32::MIN
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        bits as i32
    }

    #[inline(always)]
    fn to_bits(self) -> u32 {
        self as u32
    }
}

impl Lane for u32 {
    #[inline(always)]
    fn min_identity() -> Self {
        u32::MAX
    }

    #[inline(always)]
    fn max_identity() -> Self {
        u32::MIN
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        bits
    }

    #[inline(always)]
    fn to_bits(self) -> u32 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_identities() {
        assert_eq!(f32::min_identity(), f32::INFINITY);
        assert_eq!(f32::max_identity(), f32::NEG_INFINITY);
        assert_eq!(<f32 as Zero>::zero(), 0.0);
        assert_eq!(<f32 as One>::one(), 1.0);
    }

    #[test]
    fn test_integer_identities() {
        assert_eq!(i32::min_identity(), i32::MAX);
        assert_eq!(i32::max_identity(), i32::MIN);
        assert_eq!(u32::min_identity(), u32::MAX);
        assert_eq!(u32::max_identity(), 0);
    }

    #[test]
    fn test_bit_views() {
        assert_eq!(<f32 as Lane>::from_bits(0x8000_0000).to_bits(), 0x8000_0000);
        assert!(<f32 as Lane>::from_bits(0x8000_0000).is_sign_negative());
        assert_eq!(<i32 as Lane>::from_bits(0xffff_ffff), -1);
        assert_eq!(Lane::to_bits(-1i32), u32::MAX);
        assert_eq!(<u32 as Lane>::from_bits(7), 7);
    }
}
