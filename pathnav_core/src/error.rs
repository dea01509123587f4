//! Error types for path construction and access.

use thiserror::Error;

/// Errors raised by [`PathValue`](crate::PathValue) construction and access.
///
/// Path-shape edge cases (over-slicing, popping past the root, patterns that
/// never match) are not errors; they produce the null path instead.
#[derive(Error, Debug)]
pub enum PathError {
    /// The constructor was handed a value that is neither a string, a
    /// collection of segments, nor null.
    #[error("Unsupported path input: {found}")]
    InvalidArgument {
        /// Short description of the rejected value.
        found: String,
    },

    /// Direct positional access past the last segment.
    #[error("Segment index {index} out of bounds for path with {len} segments")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Segment count of the path.
        len: usize,
    },

    /// Attempted in-place modification of a path.
    #[error("Path segments are immutable")]
    Immutable,

    /// An extraction pattern failed to compile.
    #[error("Invalid extraction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PathError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Segment index 4 out of bounds for path with 2 segments"
        );
        assert_eq!(PathError::Immutable.to_string(), "Path segments are immutable");
    }

    #[test]
    fn test_regex_error_converts() {
        let err: PathError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, PathError::InvalidPattern(_)));
    }
}
