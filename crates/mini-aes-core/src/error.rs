//! Error types for hex-encoded inputs.

use core::fmt;

use thiserror::Error;

/// Length a hex argument is required to have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    /// Exactly one block: four hex digits.
    OneBlock,
    /// Any whole number of blocks.
    WholeBlocks,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::OneBlock => f.write_str("exactly 4 hex digits"),
            Expected::WholeBlocks => f.write_str("a multiple of 4 hex digits"),
        }
    }
}

/// Rejection of a caller-supplied hex argument. Raised before any transform runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The argument has the wrong number of digits.
    #[error("{argument} must be {expected}, got {actual}")]
    InvalidLength {
        /// Name of the offending argument.
        argument: &'static str,
        /// Required length.
        expected: Expected,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The argument contains a character outside `[0-9A-Fa-f]`.
    #[error("{argument} contains {digit:?} at position {position}, expected hex digits 0-9, A-F or a-f")]
    InvalidDigit {
        /// Name of the offending argument.
        argument: &'static str,
        /// The rejected character.
        digit: char,
        /// Zero-based character position.
        position: usize,
    },
}

/// Result alias for fallible Mini-AES boundary operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_argument_and_format() {
        let err = Error::InvalidLength {
            argument: "key",
            expected: Expected::OneBlock,
            actual: 3,
        };
        assert_eq!(err.to_string(), "key must be exactly 4 hex digits, got 3");

        let err = Error::InvalidDigit {
            argument: "plaintext",
            digit: 'G',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "plaintext contains 'G' at position 3, expected hex digits 0-9, A-F or a-f"
        );
    }
}
