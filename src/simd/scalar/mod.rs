//! Portable single-lane backend.
//!
//! Every kind is one 32-bit value held in an ordinary scalar, so this backend
//! compiles on any target. It is the leaf that [`Dual`](crate::simd::Dual)
//! composes into wider vectors when no SIMD instruction set is available, and
//! it defines the reference semantics the native backends are tested against.

pub mod b32x1;
pub mod f32x1;
pub mod i32x1;
pub mod u32x1;

pub use b32x1::B32x1;
pub use f32x1::F32x1;
pub use i32x1::I32x1;
pub use u32x1::U32x1;

/// Natural alignment of a 32-bit lane.
pub(crate) const SCALAR_ALIGNMENT: usize = 4;
