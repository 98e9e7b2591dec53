//! Errors that can occur while packing ABI elements.

use crate::value::ValueKind;
use thiserror::Error;

/// An error packing a value.
///
/// Packing errors are deterministic input validation failures: packing the
/// same inputs again always fails the same way.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PackError {
    /// A decimal string could not be parsed as a base-10 integer.
    #[error("could not pack number, invalid string: {0:?}")]
    InvalidNumericString(String),

    /// A number was requested from a value that has no numeric
    /// representation.
    #[error("could not pack number, unsupported kind: {0}")]
    UnsupportedNumericType(&'static str),

    /// The value's shape does not match its declared type.
    #[error("could not pack element, expected {expected} but got {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: &'static str,
    },

    /// A textual address failed its checksum round-trip.
    #[error("could not pack element, invalid address: {0}")]
    InvalidAddress(String),

    /// The padded size of a length-prefixed payload overflows or cannot be
    /// allocated.
    #[error("could not pack bytes, length {0} is too large")]
    LengthOverflow(usize),

    /// The declared type is not a single packable element.
    #[error("could not pack element, unsupported type: {0}")]
    UnsupportedElementType(ValueKind),
}
