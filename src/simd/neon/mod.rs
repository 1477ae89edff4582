//! 128-bit NEON backend (4 lanes) for aarch64.
//!
//! Every vector wraps one `float32x4_t` / `int32x4_t` / `uint32x4_t`
//! register; predicates are `uint32x4_t` with all-ones / all-zeros lanes.
//!
//! NEON has no move-mask instruction. [`B32x4::bitmask`] isolates one bit
//! per lane and sums them across the register instead. The estimate
//! instructions (`vrsqrteq`, `vrecpeq`) only give about 8 bits, so the
//! approximate operations add one Newton-Raphson step.

pub mod b32x4;
pub mod f32x4;
pub mod i32x4;
pub mod u32x4;

pub use b32x4::B32x4;
pub use f32x4::F32x4;
pub use i32x4::I32x4;
pub use u32x4::U32x4;

/// Alignment used by the aligned load/store entry points. `vld1q` itself
/// accepts any address.
pub const NEON_ALIGNMENT: usize = 16;

/// Number of 32-bit lanes in a 128-bit register.
pub const LANE_COUNT: usize = 4;
