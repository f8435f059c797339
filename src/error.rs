//! Error type shared by every fallible entry point of this crate.

use alloc::string::String;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that constructing, parsing, packing, or converting an [`ObjectId`] can produce.
///
/// Every variant is reported synchronously at the point of construction; nothing is deferred or
/// silently corrected.
///
/// [`ObjectId`]: crate::ObjectId
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required byte buffer or string was absent.
    #[error("missing input: a byte buffer or string is required")]
    MissingInput,

    /// A byte buffer was not exactly 12 bytes long, or a destination buffer had fewer than 12
    /// bytes available.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes available.
        actual: usize,
    },

    /// A string was not 24 hexadecimal characters.
    #[error("invalid ObjectId string representation: {input:?}")]
    InvalidFormat {
        /// The offending input.
        input: String,
    },

    /// A field value does not fit its slot in the 12-byte layout.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// An ObjectId was asked to become a value type it cannot be converted to.
    #[error("ObjectId cannot be converted to {target}")]
    InvalidConversion {
        /// Name of the requested target type.
        target: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    pub(crate) const fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    pub(crate) const fn out_of_range(field: &'static str, value: i64) -> Self {
        Self::OutOfRange { field, value }
    }
}
