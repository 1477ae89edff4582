//! Operator boilerplate shared by the native backends.

/// Derives compound assignment operators from the matching binary operators.
///
/// ```ignore
/// impl_assign_ops!(F32x4: AddAssign::add_assign => +, SubAssign::sub_assign => -);
/// ```
macro_rules! impl_assign_ops {
    ($ty:ty: $($assign:ident::$method:ident => $op:tt),* $(,)?) => {$(
        impl ::std::ops::$assign for $ty {
            #[inline(always)]
            fn $method(&mut self, rhs: $ty) {
                *self = *self $op rhs;
            }
        }
    )*};
}

pub(crate) use impl_assign_ops;
