//! Utility module with prettychalk's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `30..=37` and `90..=97` for the SGR foreground codes of
///     [`AnsiColor`](crate::termco::AnsiColor).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{value} does not fit into range {}..={}", .expected.start(), .expected.end())]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Hashed hexadecimal colors must have the form `#RGB` or `#RRGGBB` with
/// case-insensitive hexadecimal digits. The variant carries the rejected
/// input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    /// A string that is not a three or six digit hashed hexadecimal color.
    /// For example, `#00` is missing a digit, `ff0000` is missing the hash,
    /// and `#efg` contains a character that is not a hexadecimal digit.
    #[error("invalid color {0:?}, expected `#RGB` or `#RRGGBB`")]
    InvalidColorFormat(String),
}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, OutOfBoundsError};

    #[test]
    fn test_messages() {
        assert_eq!(
            OutOfBoundsError::new(16_u8, 0..=15).to_string(),
            "16 does not fit into range 0..=15"
        );
        assert_eq!(
            ColorFormatError::InvalidColorFormat("#12".to_string()).to_string(),
            "invalid color \"#12\", expected `#RGB` or `#RRGGBB`"
        );
    }
}
