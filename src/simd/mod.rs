//! SIMD vector types and the generic layers built on them.
//!
//! # Layout
//!
//! - [`traits`]: the contract every vector type implements.
//! - [`scalar`], `sse`, `avx2`, `neon`: the register families. `scalar` is
//!   always compiled, the others only when `build.rs` selects them.
//! - [`Dual`]: pairs two vectors into one of twice the width.
//! - [`width`]: `Float32x4`, `Int32x8`, ... resolved to the best available
//!   type for the current build.
//! - [`reduce`]: horizontal reductions.
//! - [`Inverted`]: the lazy result of `!v`.
//!
//! # Conditional Compilation
//!
//! Exactly one of the `avx2`, `sse`, `neon` or `fallback` cfg flags is set per
//! build. The AVX2 build also compiles the SSE types so that 4-lane vectors
//! stay native.

#[cfg(avx2)]
pub mod avx2;

#[cfg(any(sse, avx2))]
pub mod sse;

#[cfg(neon)]
pub mod neon;

pub mod backend;
pub mod dual;
pub mod functions;
pub mod inverted;
pub mod lane;
pub mod mask;
pub(crate) mod ops;
pub mod reduce;
pub mod scalar;
pub mod traits;
pub mod utils;
pub mod width;

pub use backend::{Backend, Float32, Int32, Mask32, UInt32, BACKEND};
pub use dual::Dual;
pub use functions::*;
pub use inverted::Inverted;
pub use lane::Lane;
pub use mask::{BitMask, SetLanes};
pub use reduce::{reduce, reduce_find, LaneOp};
pub use traits::{Condition, SimdBits, SimdFloat, SimdInt, SimdMask, SimdUInt, SimdVector};
