//! Strict decoding of the 24-digit hexadecimal text form.

use core::str;

use crate::{layout, Error, ObjectId, Result};

impl ObjectId {
    /// Parses the 24-digit hexadecimal string representation, returning `None` on malformed
    /// input.
    ///
    /// Digits are accepted in either case; nothing else is, including surrounding whitespace,
    /// separators, or a `0x` prefix. This never fails loudly and is the entry point meant for
    /// untrusted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::ObjectId;
    ///
    /// assert!(ObjectId::try_parse("5F1D7F1E0C2A4B000123ABCD").is_some());
    /// assert!(ObjectId::try_parse("5f1d7f1e-0c2a4b000123abcd").is_none());
    /// ```
    pub fn try_parse(src: &str) -> Option<Self> {
        layout::decode_hex(src).map(Self::from_bytes)
    }

    /// Parses the 24-digit hexadecimal string representation.
    ///
    /// Fails with [`Error::InvalidFormat`] carrying the offending input wherever
    /// [`try_parse`](Self::try_parse) would return `None`.
    pub fn parse(src: &str) -> Result<Self> {
        Self::try_parse(src).ok_or_else(|| Error::invalid_format(src))
    }
}

impl str::FromStr for ObjectId {
    type Err = Error;

    /// Creates an object from the 24-digit hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self> {
        Self::parse(src)
    }
}

impl TryFrom<&str> for ObjectId {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self> {
        Self::parse(src)
    }
}
