use crate::foundation::core::Size;

/// Convenience result type used across Scanimate.
pub type ScanResult<T> = Result<T, ScanError>;

/// Top-level error taxonomy used by the interleaving APIs.
///
/// Every variant except [`ScanError::Other`] describes a caller input error. They are all raised
/// before any output file is written.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// No frames were supplied.
    #[error("empty frame set: at least one frame is required")]
    EmptyFrameSet,

    /// A frame does not share the dimensions of the first frame.
    #[error("dimension mismatch: frame {index} is {found}, expected {expected}")]
    DimensionMismatch {
        /// Position of the offending frame in the set.
        index: usize,
        /// Size of frame 0.
        expected: Size,
        /// Size of the offending frame.
        found: Size,
    },

    /// Strip width was zero or negative.
    #[error("invalid strip width: {0} (must be a positive integer)")]
    InvalidStripWidth(i64),

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScanError {
    /// Build a [`ScanError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScanError::DimensionMismatch`] value.
    pub fn dimension_mismatch(index: usize, expected: Size, found: Size) -> Self {
        Self::DimensionMismatch {
            index,
            expected,
            found,
        }
    }

    /// Whether the error is a caller input problem rather than an IO/codec failure.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
