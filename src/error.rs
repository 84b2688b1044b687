//! Error types for the unclefeistel library.

use thiserror::Error;

/// Errors produced by the unclefeistel library.
///
/// Every check runs before any bit is written, so a failed operation leaves
/// its receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeistelError {
    /// A half or block would have an invalid shape: an empty bit sequence,
    /// a non-binary string, or halves of different lengths.
    #[error("Invalid shape: {reason}")]
    InvalidShape {
        /// What was wrong with the shape.
        reason: String,
    },
    /// A bitwise operand does not have the same length as the receiver.
    #[error("Incompatible operands: expected length {expected}, got {actual}")]
    IncompatibleOperands {
        /// Length of the receiver.
        expected: usize,
        /// Length of the operand.
        actual: usize,
    },
}

impl FeistelError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        FeistelError::InvalidShape {
            reason: reason.into(),
        }
    }
}
