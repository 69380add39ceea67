//! Error types for path parsing and evaluation.

use thiserror::Error;

/// A path expression or one of its segments is malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("path must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("unsupported segment: {0}")]
    UnsupportedSegment(String),
}

/// Failure raised while evaluating a path against a document.
///
/// Missing keys and shape mismatches are not errors; they simply produce no
/// match for the branch they occur in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("index {index} out of bounds for sequence of length {len}")]
    Bounds { index: isize, len: usize },
}

impl PathError {
    /// Whether this error comes from the path text rather than the document.
    pub fn is_format(&self) -> bool {
        matches!(self, PathError::Format(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PathError::from(FormatError::MissingLeadingSlash("a/b".into()));
        assert_eq!(err.to_string(), "path must start with '/': \"a/b\"");
        assert!(err.is_format());

        let err = PathError::Bounds { index: -1, len: 0 };
        assert_eq!(
            err.to_string(),
            "index -1 out of bounds for sequence of length 0"
        );
        assert!(!err.is_format());
    }
}
