//! Error types for the checked lanewise operations.
//!
//! The vector core itself has no recoverable error path: raw-pointer loads and
//! stores carry their preconditions as `unsafe` contracts. The slice-based
//! `try_*` helpers validate those preconditions instead and report violations
//! through [`LanewiseError`].

use std::fmt;

/// Errors reported by the checked load/store helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanewiseError {
    /// The slice is too short for the requested access.
    LengthError {
        /// Number of elements the access touches.
        required: usize,
        /// Number of elements actually available.
        actual: usize,
        /// Human-readable error message.
        message: String,
    },
    /// The slice does not satisfy the backend's register alignment.
    AlignmentError {
        /// Address of the first element.
        address: usize,
        /// Alignment the access requires, in bytes.
        alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// The stride makes the accessed span overflow `usize`.
    StrideError {
        /// The stride parameter that caused the error.
        stride: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for LanewiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanewiseError::LengthError {
                required,
                actual,
                message,
            } => write!(
                f,
                "Slice too short: {} (requires {} elements, got {})",
                message, required, actual
            ),
            LanewiseError::AlignmentError {
                address,
                alignment,
                message,
            } => write!(
                f,
                "Misaligned access: {} (address: {:#x}, alignment: {})",
                message, address, alignment
            ),
            LanewiseError::StrideError { stride, message } => {
                write!(f, "Invalid stride: {} (stride: {})", message, stride)
            }
        }
    }
}

impl std::error::Error for LanewiseError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, LanewiseError>;

/// Creates a length error.
pub fn length_error(required: usize, actual: usize, message: impl Into<String>) -> LanewiseError {
    LanewiseError::LengthError {
        required,
        actual,
        message: message.into(),
    }
}

/// Creates an alignment error.
pub fn alignment_error(
    address: usize,
    alignment: usize,
    message: impl Into<String>,
) -> LanewiseError {
    LanewiseError::AlignmentError {
        address,
        alignment,
        message: message.into(),
    }
}

/// Creates a stride error.
pub fn stride_error(stride: usize, message: impl Into<String>) -> LanewiseError {
    LanewiseError::StrideError {
        stride,
        message: message.into(),
    }
}
