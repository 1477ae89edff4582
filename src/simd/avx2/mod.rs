//! 256-bit AVX2 backend (8 lanes).
//!
//! Compiled on x86 and x86_64 when `build.rs` selects the `avx2` family.
//! Every vector wraps one `__m256` / `__m256i` register. Predicates are kept
//! in integer registers as all-ones / all-zeros lanes.
//!
//! Float ordering compares use the ordered, quiet predicates (`_CMP_*_OQ`) so
//! that NaN lanes compare false, except `!=` which uses `_CMP_NEQ_UQ` and
//! compares true. Strided loads are built with `setr`, not a gather.
//!
//! ```rust
//! # #[cfg(target_feature = "avx2")]
//! # {
//! use lanewise::simd::width::Float32x8;
//! use lanewise::simd::SimdVector;
//!
//! let v = Float32x8::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//! assert_eq!(lanewise::simd::reduce::horizontal_sum(v), 36.0);
//! # }
//! ```

pub mod b32x8;
pub mod f32x8;
pub mod i32x8;
pub mod u32x8;

pub use b32x8::B32x8;
pub use f32x8::F32x8;
pub use i32x8::I32x8;
pub use u32x8::U32x8;

/// AVX2 register alignment in bytes (`_mm256_load_ps` / `_mm256_store_ps`).
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// Number of 32-bit lanes in a 256-bit register.
pub(crate) const LANE_COUNT: usize = 8;

/// In-lane permute immediate exchanging neighbouring lanes.
pub(crate) const SWAP_PAIRS: i32 = 0b10_11_00_01;

/// In-lane permute immediate exchanging 64-bit pairs.
pub(crate) const SWAP_HALVES: i32 = 0b01_00_11_10;

/// Cross-lane permute immediate exchanging the two 128-bit halves.
pub(crate) const SWAP_128: i32 = 0x01;
