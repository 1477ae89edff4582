//! Portable SIMD vector types.
//!
//! `lanewise` presents one "vector of W lanes" contract over several register
//! families: 256-bit AVX2, 128-bit SSE4.1, 128-bit NEON, and a width-1 scalar
//! fallback. Exactly one family is selected per build by `build.rs`; wider
//! logical widths are reached by pairing vectors with [`simd::Dual`].
//!
//! ```rust
//! use lanewise::simd::reduce::{reduce_find, Max};
//! use lanewise::simd::width::Float32x4;
//! use lanewise::simd::SimdVector;
//!
//! let a = Float32x4::from_slice(&[-0.27787193, 0.70154146, -2.0518163, -0.35385]);
//! assert_eq!(a.reduce::<Max>().extract(0), 0.70154146);
//! assert_eq!(reduce_find::<Max, _>(a), Some(1));
//! ```

pub mod error;
pub mod simd;

pub use error::{LanewiseError, Result};
