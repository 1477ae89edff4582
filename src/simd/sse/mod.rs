//! 128-bit SSE4.1 backend (4 lanes).
//!
//! Compiled on x86 and x86_64 whenever `build.rs` selects the `sse` or the
//! `avx2` family; the AVX2 build reuses these types for its 4-lane width.
//!
//! Every vector wraps one `__m128` / `__m128i` register. Predicates are kept
//! in integer registers as all-ones / all-zeros lanes and reinterpreted with
//! the cast intrinsics (which emit no instructions) when a float operation
//! needs them.

pub mod b32x4;
pub mod f32x4;
pub mod i32x4;
pub mod u32x4;

pub use b32x4::B32x4;
pub use f32x4::F32x4;
pub use i32x4::I32x4;
pub use u32x4::U32x4;

/// SSE register alignment in bytes (`_mm_load_ps` / `_mm_store_ps`).
pub(crate) const SSE_ALIGNMENT: usize = 16;

/// Number of 32-bit lanes in a 128-bit register.
pub(crate) const LANE_COUNT: usize = 4;

/// `_mm_shuffle_*` immediate exchanging neighbouring lanes: `[1, 0, 3, 2]`.
pub(crate) const SWAP_PAIRS: i32 = 0b10_11_00_01;

/// `_mm_shuffle_*` immediate exchanging 64-bit halves: `[2, 3, 0, 1]`.
pub(crate) const SWAP_HALVES: i32 = 0b01_00_11_10;
