//! Lazy bitwise complement.
//!
//! Hardware offers `(!a) & b` as one instruction but no cheap standalone NOT.
//! `!v` therefore returns [`Inverted`], a record of "the complement of `v`"
//! that has not been computed. The operators below consume it:
//!
//! | expression            | lowers to                         |
//! |-----------------------|-----------------------------------|
//! | `!a & b`, `b & !a`    | `a.andnot(b)`                     |
//! | `!a & !b`             | `!(a \| b)`, still lazy            |
//! | `!a \| !b`            | `!(a & b)`, still lazy             |
//! | `!a \| b`, `b \| !a`  | `!(b.andnot(a))`, still lazy       |
//! | `!a ^ b`, `b ^ !a`    | `!(a ^ b)`, still lazy             |
//! | `!a ^ !b`             | `a ^ b`                           |
//! | `!!a`                 | `a`                               |
//!
//! Every other consumer goes through [`Inverted::force`] (or `From`), which
//! performs the one real NOT.
//!
//! `Inverted` owns no storage of its own: its operand is private and it has no
//! assignment operators, so it can never be the target of a mutation.
//!
//! ```compile_fail
//! use lanewise::simd::scalar::F32x1;
//! use lanewise::simd::SimdVector;
//!
//! let v = F32x1::splat(1.0);
//! let mut lazy = !v;
//! lazy &= v; // Inverted has no compound assignment
//! ```
//!
//! ```compile_fail
//! use lanewise::simd::scalar::F32x1;
//! use lanewise::simd::SimdVector;
//!
//! let v = F32x1::splat(1.0);
//! let lazy = !v;
//! let _ = lazy.0; // the operand is not reachable
//! ```

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::simd::traits::SimdBits;

/// The complement of `V`, not yet materialized.
#[must_use = "an Inverted value does nothing until it is combined or forced"]
#[derive(Copy, Clone, Debug)]
pub struct Inverted<V>(V);

impl<V: SimdBits> Inverted<V> {
    #[inline(always)]
    pub(crate) fn new(operand: V) -> Self {
        Inverted(operand)
    }

    /// The value whose complement this represents.
    #[inline(always)]
    pub(crate) fn operand(self) -> V {
        self.0
    }

    /// Materializes the complement with one real NOT.
    #[inline(always)]
    pub fn force(self) -> V {
        self.0 ^ V::all_bits()
    }
}

impl<V: SimdBits> Not for Inverted<V> {
    type Output = V;

    #[inline(always)]
    fn not(self) -> V {
        self.0
    }
}

impl<V: SimdBits> BitAnd<V> for Inverted<V> {
    type Output = V;

    #[inline(always)]
    fn bitand(self, rhs: V) -> V {
        self.0.andnot(rhs)
    }
}

impl<V: SimdBits> BitAnd for Inverted<V> {
    type Output = Inverted<V>;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Inverted<V> {
        Inverted(self.0 | rhs.0)
    }
}

impl<V: SimdBits> BitOr<V> for Inverted<V> {
    type Output = Inverted<V>;

    #[inline(always)]
    fn bitor(self, rhs: V) -> Inverted<V> {
        Inverted(rhs.andnot(self.0))
    }
}

impl<V: SimdBits> BitOr for Inverted<V> {
    type Output = Inverted<V>;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Inverted<V> {
        Inverted(self.0 & rhs.0)
    }
}

impl<V: SimdBits> BitXor<V> for Inverted<V> {
    type Output = Inverted<V>;

    #[inline(always)]
    fn bitxor(self, rhs: V) -> Inverted<V> {
        Inverted(self.0 ^ rhs)
    }
}

impl<V: SimdBits> BitXor for Inverted<V> {
    type Output = V;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> V {
        self.0 ^ rhs.0
    }
}

/// Implements the `Vector op Inverted<Vector>` side of the fusion table, the
/// `!` operator, conversion out of `Inverted`, and the compound assignments
/// for a concrete vector type.
macro_rules! impl_inverted_ops {
    ($($ty:ty),* $(,)?) => {$(
        impl ::std::ops::Not for $ty {
            type Output = $crate::simd::inverted::Inverted<$ty>;

            #[inline(always)]
            fn not(self) -> Self::Output {
                $crate::simd::inverted::Inverted::new(self)
            }
        }

        impl ::std::ops::BitAnd<$crate::simd::inverted::Inverted<$ty>> for $ty {
            type Output = $ty;

            #[inline(always)]
            fn bitand(self, rhs: $crate::simd::inverted::Inverted<$ty>) -> $ty {
                $crate::simd::traits::SimdBits::andnot(rhs.operand(), self)
            }
        }

        impl ::std::ops::BitOr<$crate::simd::inverted::Inverted<$ty>> for $ty {
            type Output = $crate::simd::inverted::Inverted<$ty>;

            #[inline(always)]
            fn bitor(self, rhs: $crate::simd::inverted::Inverted<$ty>) -> Self::Output {
                $crate::simd::inverted::Inverted::new(
                    $crate::simd::traits::SimdBits::andnot(self, rhs.operand()),
                )
            }
        }

        impl ::std::ops::BitXor<$crate::simd::inverted::Inverted<$ty>> for $ty {
            type Output = $crate::simd::inverted::Inverted<$ty>;

            #[inline(always)]
            fn bitxor(self, rhs: $crate::simd::inverted::Inverted<$ty>) -> Self::Output {
                $crate::simd::inverted::Inverted::new(self ^ rhs.operand())
            }
        }

        impl ::std::convert::From<$crate::simd::inverted::Inverted<$ty>> for $ty {
            #[inline(always)]
            fn from(value: $crate::simd::inverted::Inverted<$ty>) -> $ty {
                value.force()
            }
        }

        impl ::std::ops::BitAndAssign for $ty {
            #[inline(always)]
            fn bitand_assign(&mut self, rhs: $ty) {
                *self = *self & rhs;
            }
        }

        impl ::std::ops::BitAndAssign<$crate::simd::inverted::Inverted<$ty>> for $ty {
            #[inline(always)]
            fn bitand_assign(&mut self, rhs: $crate::simd::inverted::Inverted<$ty>) {
                *self = *self & rhs;
            }
        }

        impl ::std::ops::BitOrAssign for $ty {
            #[inline(always)]
            fn bitor_assign(&mut self, rhs: $ty) {
                *self = *self | rhs;
            }
        }

        impl ::std::ops::BitXorAssign for $ty {
            #[inline(always)]
            fn bitxor_assign(&mut self, rhs: $ty) {
                *self = *self ^ rhs;
            }
        }
    )*};
}

pub(crate) use impl_inverted_ops;

/// Implements [`Condition`](crate::simd::traits::Condition) for a concrete
/// mask type and for its lazy complement. The complement selects with the
/// operands exchanged, so no NOT is ever emitted.
macro_rules! impl_condition {
    ($($mask:ty),* $(,)?) => {$(
        impl $crate::simd::traits::Condition<$mask> for $mask {
            #[inline(always)]
            fn choose<V>(self, if_true: V, if_false: V) -> V
            where
                V: $crate::simd::traits::SimdVector<Mask = $mask>,
            {
                V::select(self, if_true, if_false)
            }
        }

        impl $crate::simd::traits::Condition<$mask> for $crate::simd::inverted::Inverted<$mask> {
            #[inline(always)]
            fn choose<V>(self, if_true: V, if_false: V) -> V
            where
                V: $crate::simd::traits::SimdVector<Mask = $mask>,
            {
                V::select(self.operand(), if_false, if_true)
            }
        }
    )*};
}

pub(crate) use impl_condition;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::scalar::{B32x1, U32x1};
    use crate::simd::{SimdMask, SimdVector};

    fn bits(v: U32x1) -> u32 {
        v.extract(0)
    }

    #[test]
    fn test_double_not_is_identity() {
        let v = U32x1::splat(0xdead_beef);
        assert_eq!(bits(!!v), 0xdead_beef);
        assert_eq!(bits((!(!v).force()).into()), 0xdead_beef);
        assert_eq!(bits((!(!v).force()).force()), 0xdead_beef);
    }

    #[test]
    fn test_andnot_operand_order() {
        let a = U32x1::splat(0b1100);
        let b = U32x1::splat(0b1010);
        assert_eq!(bits(!a & b), 0b0010);
        assert_eq!(bits(b & !a), 0b0010);
        assert_eq!(bits(a.andnot(b)), 0b0010);
        assert_eq!(bits(b.andnot(a)), 0b0100);
    }

    #[test]
    fn test_lazy_de_morgan() {
        let a = U32x1::splat(0b1100);
        let b = U32x1::splat(0b1010);
        assert_eq!(bits((!a & !b).force()), !(0b1100 | 0b1010));
        assert_eq!(bits((!a | !b).force()), !(0b1100 & 0b1010));
    }

    #[test]
    fn test_mixed_or_and_xor() {
        let a = U32x1::splat(0b1100);
        let b = U32x1::splat(0b1010);
        assert_eq!(bits((!a | b).force()), !0b1100u32 | 0b1010);
        assert_eq!(bits((b | !a).force()), 0b1010 | !0b1100u32);
        assert_eq!(bits((!a ^ b).force()), !0b1100u32 ^ 0b1010);
        assert_eq!(bits((b ^ !a).force()), 0b1010 ^ !0b1100u32);
        assert_eq!(bits(!a ^ !b), 0b1100 ^ 0b1010);
    }

    #[test]
    fn test_compound_assignment_on_plain_vectors() {
        let mut v = U32x1::splat(0b1111);
        v &= !U32x1::splat(0b0011);
        assert_eq!(bits(v), 0b1100);
        v |= U32x1::splat(0b0001);
        v ^= U32x1::splat(0b1000);
        assert_eq!(bits(v), 0b0101);
    }

    #[test]
    fn test_masks_are_lazy_too() {
        let t = B32x1::splat(true);
        let f = B32x1::splat(false);
        assert!((!f & t).all());
        assert!((!t & t).none());
        assert!(B32x1::from(!f).all());
    }
}
