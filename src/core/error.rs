//! Split errors
//!
//! Raised before any scanning starts; a failed call produces no ranges.

use std::fmt;

/// Error returned when a split cannot be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Empty subsequence, empty candidate set, or an empty candidate
    InvalidSeparator(&'static str),
    /// A signed argument was out of range (negative split count)
    InvalidArgument { name: &'static str, value: i64 },
}

impl SplitError {
    /// Short machine-readable kind, used for the error atom on the Elixir side
    pub fn kind(&self) -> &'static str {
        match self {
            SplitError::InvalidSeparator(_) => "invalid_separator",
            SplitError::InvalidArgument { .. } => "invalid_argument",
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InvalidSeparator(reason) => write!(f, "invalid separator: {}", reason),
            SplitError::InvalidArgument { name, value } => {
                write!(f, "`{}` is less than 0 (got {})", name, value)
            }
        }
    }
}

impl std::error::Error for SplitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SplitError::InvalidSeparator("separator is empty");
        assert_eq!(err.to_string(), "invalid separator: separator is empty");

        let err = SplitError::InvalidArgument { name: "count", value: -3 };
        assert_eq!(err.to_string(), "`count` is less than 0 (got -3)");
    }

    #[test]
    fn test_kind() {
        assert_eq!(SplitError::InvalidSeparator("x").kind(), "invalid_separator");
        assert_eq!(
            SplitError::InvalidArgument { name: "count", value: -1 }.kind(),
            "invalid_argument"
        );
    }
}
