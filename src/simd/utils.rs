//! Storage helpers for the aligned load/store paths.

use std::ops::{Deref, DerefMut};

/// Cache-line aligned storage.
///
/// 64 bytes covers the alignment of every backend (16 for SSE and NEON, 32
/// for AVX2), so a buffer wrapped in `Aligned` can be passed to any
/// `load_aligned` / `store_aligned` at offsets that are multiples of the
/// vector width.
///
/// ```rust
/// use lanewise::simd::utils::Aligned;
/// use lanewise::simd::width::Float32x8;
/// use lanewise::simd::SimdVector;
///
/// let data = Aligned([1.0f32; 16]);
/// let v = Float32x8::try_load_aligned(&data[8..]).unwrap();
/// assert_eq!(v.to_vec(), vec![1.0; 8]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(64))]
pub struct Aligned<T>(pub T);

impl<T> Deref for Aligned<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Aligned<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
