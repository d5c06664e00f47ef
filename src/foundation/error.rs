//! Error handling for seqweave core.
//!
//! Every failure the engine can report is raised synchronously at the call
//! that violates a contract. Nothing here is retried or suppressed.

use thiserror::Error;

/// The main error type for seqweave core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required construction argument was never supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// A structurally wrong parameter, such as a negative count.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `next`/`peek` was called with no element available.
    #[error("Sequence exhausted")]
    Exhausted,

    /// The combinator synthesizes its output and cannot honor the request.
    #[error("{operation} is not supported by {combinator}")]
    Unsupported {
        /// The rejected operation.
        operation: &'static str,
        /// The combinator that rejected it.
        combinator: &'static str,
    },

    /// The operation is legal in general but not in the current state.
    #[error("Illegal state: {0}")]
    IllegalState(&'static str),

    /// A pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// A specialized Result type for seqweave core operations.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::Unsupported`] `remove` request.
    pub const fn unsupported_remove(combinator: &'static str) -> Self {
        Self::Unsupported {
            operation: "remove",
            combinator,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err.to_string())
    }
}

/// Validates a count that must be zero or greater.
pub(crate) fn non_negative(n: isize, what: &str) -> Result<usize> {
    usize::try_from(n).map_err(|_| Error::InvalidArgument(format!("{what} must be >= 0, got {n}")))
}

/// Validates a count that must be strictly positive.
pub(crate) fn positive(n: isize, what: &str) -> Result<usize> {
    match usize::try_from(n) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(Error::InvalidArgument(format!("{what} must be > 0, got {n}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Exhausted.to_string(), "Sequence exhausted");
        assert_eq!(
            Error::unsupported_remove("Zip").to_string(),
            "remove is not supported by Zip"
        );
        assert_eq!(
            Error::MissingArgument("successor").to_string(),
            "Missing argument: successor"
        );
    }

    #[test]
    fn test_count_validation() {
        assert_eq!(non_negative(0, "take"), Ok(0));
        assert_eq!(non_negative(7, "take"), Ok(7));
        assert!(matches!(non_negative(-1, "take"), Err(Error::InvalidArgument(_))));

        assert_eq!(positive(3, "step"), Ok(3));
        assert!(matches!(positive(0, "step"), Err(Error::InvalidArgument(_))));
        assert!(matches!(positive(-4, "step"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_regex_error_conversion() {
        let err: Error = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
