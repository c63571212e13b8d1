//! Error type for hex color parsing

use std::fmt;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after stripping `#` is not 3, 6 or 8
    InvalidLength(usize),
    /// Character that is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 3, 6 or 8 digits)",
                    len
                )
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid hex character {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
