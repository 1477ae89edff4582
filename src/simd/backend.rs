//! The register family selected for this build.
//!
//! `build.rs` picks one family from the target's capabilities (or from the
//! `LANEWISE_BACKEND` override). This module makes that choice visible at
//! runtime and names the family's native types. There is no runtime
//! capability check: the types below are fixed at compile time.

use std::fmt;

/// A register family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 256-bit AVX2, 8 lanes.
    Avx2,
    /// 128-bit SSE4.1, 4 lanes.
    Sse41,
    /// 128-bit NEON, 4 lanes.
    Neon,
    /// Portable scalar code, 1 lane.
    Scalar,
}

impl Backend {
    /// Short lowercase name, matching the `LANEWISE_BACKEND` values.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Avx2 => "avx2",
            Backend::Sse41 => "sse",
            Backend::Neon => "neon",
            Backend::Scalar => "fallback",
        }
    }

    /// Width of one native register in bits.
    pub const fn register_bits(self) -> usize {
        match self {
            Backend::Avx2 => 256,
            Backend::Sse41 | Backend::Neon => 128,
            Backend::Scalar => 32,
        }
    }

    /// Number of 32-bit lanes in one native register.
    pub const fn lanes(self) -> usize {
        self.register_bits() / 32
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} x 32-bit lanes)", self.name(), self.lanes())
    }
}

/// The family this crate was built for.
#[cfg(avx2)]
pub const BACKEND: Backend = Backend::Avx2;

/// The family this crate was built for.
#[cfg(all(sse, not(avx2)))]
pub const BACKEND: Backend = Backend::Sse41;

/// The family this crate was built for.
#[cfg(neon)]
pub const BACKEND: Backend = Backend::Neon;

/// The family this crate was built for.
#[cfg(not(any(avx2, sse, neon)))]
pub const BACKEND: Backend = Backend::Scalar;

#[cfg(avx2)]
mod native {
    use crate::simd::avx2::{B32x8, F32x8, I32x8, U32x8};

    pub type Mask32 = B32x8;
    pub type Float32 = F32x8;
    pub type Int32 = I32x8;
    pub type UInt32 = U32x8;
}

#[cfg(all(sse, not(avx2)))]
mod native {
    use crate::simd::sse::{B32x4, F32x4, I32x4, U32x4};

    pub type Mask32 = B32x4;
    pub type Float32 = F32x4;
    pub type Int32 = I32x4;
    pub type UInt32 = U32x4;
}

#[cfg(neon)]
mod native {
    use crate::simd::neon::{B32x4, F32x4, I32x4, U32x4};

    pub type Mask32 = B32x4;
    pub type Float32 = F32x4;
    pub type Int32 = I32x4;
    pub type UInt32 = U32x4;
}

#[cfg(not(any(avx2, sse, neon)))]
mod native {
    use crate::simd::scalar::{B32x1, F32x1, I32x1, U32x1};

    pub type Mask32 = B32x1;
    pub type Float32 = F32x1;
    pub type Int32 = I32x1;
    pub type UInt32 = U32x1;
}

/// Vectors of exactly one native register: predicate, `f32`, `i32`, `u32`.
pub use native::{Float32, Int32, Mask32, UInt32};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{SimdMask, SimdVector};

    #[test]
    fn test_native_width_matches_backend() {
        assert_eq!(<Float32 as SimdVector>::LANES, BACKEND.lanes());
        assert_eq!(<Int32 as SimdVector>::LANES, BACKEND.lanes());
        assert_eq!(<UInt32 as SimdVector>::LANES, BACKEND.lanes());
        assert_eq!(<Mask32 as SimdMask>::LANES, BACKEND.lanes());
    }

    #[test]
    fn test_native_size_is_one_register() {
        let bytes = BACKEND.register_bits() / 8;
        assert_eq!(std::mem::size_of::<Float32>(), bytes);
        assert_eq!(std::mem::size_of::<Int32>(), bytes);
        assert_eq!(std::mem::size_of::<UInt32>(), bytes);
        assert_eq!(std::mem::size_of::<Mask32>(), bytes);
    }

    #[test]
    fn test_lanes_are_powers_of_two() {
        for backend in [Backend::Avx2, Backend::Sse41, Backend::Neon, Backend::Scalar] {
            assert!(backend.lanes().is_power_of_two(), "{backend}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Backend::Sse41.to_string(), "sse (4 x 32-bit lanes)");
        assert_eq!(Backend::Scalar.name(), "fallback");
    }
}
