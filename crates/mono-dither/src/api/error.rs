//! Unified error type for the mono-dither public API.
//!
//! [`DitherError`] covers every way a dither invocation can fail. All
//! variants are raised before the output matrix exists, so a failed call
//! never yields a partially quantized image.

use thiserror::Error;

/// Unified error type for the mono-dither public API.
///
/// # Example
///
/// ```
/// use mono_dither::{DitherError, Method};
///
/// let err = "atkinson".parse::<Method>().unwrap_err();
/// assert!(matches!(err, DitherError::UnknownMethod(ref name) if name == "atkinson"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// The method identifier is not one of the registered kernels.
    #[error(
        "unknown dithering method \"{0}\" (available: \"simple2D\", \"floyd-steinberg\", \"jarvis-judice-ninke\")"
    )]
    UnknownMethod(String),

    /// The input has zero dynamic range and the policy rejects it.
    #[error("degenerate input: all samples are equal, nothing to normalize")]
    DegenerateInput,

    /// The matrix has no rows or no columns.
    #[error("image matrix is empty")]
    EmptyImage,

    /// Nested rows have differing lengths.
    #[error("ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A buffer length or shape does not match what the operation needs.
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Required size
        expected: usize,
        /// Actual size
        found: usize,
    },

    /// A sample is NaN or infinite.
    #[error("non-finite sample at ({row}, {col})")]
    NonFiniteSample {
        /// Row of the sample
        row: usize,
        /// Column of the sample
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_method_message_lists_methods() {
        let err = DitherError::UnknownMethod("stucki".to_string());
        let msg = err.to_string();
        assert!(msg.contains("\"stucki\""));
        assert!(msg.contains("simple2D"));
        assert!(msg.contains("floyd-steinberg"));
        assert!(msg.contains("jarvis-judice-ninke"));
    }

    #[test]
    fn test_ragged_rows_message() {
        let err = DitherError::RaggedRows {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "ragged rows: row 2 has 3 columns, expected 4"
        );
    }

    #[test]
    fn test_non_finite_message() {
        let err = DitherError::NonFiniteSample { row: 1, col: 0 };
        assert_eq!(err.to_string(), "non-finite sample at (1, 0)");
    }
}
