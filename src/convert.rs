//! Conversion hook for collaborating document-value systems.
//!
//! Statically typed callers should prefer the `From`/`TryFrom` impls on [`ObjectId`], which only
//! exist for the conversions an ObjectId supports. This module serves callers that dispatch on a
//! runtime type tag, such as a document store mapping a field to a column type, and need an
//! explicit rejection for everything else.

use alloc::string::String;
use core::fmt;

use crate::{Error, ObjectId, Result};

/// Target type requested from an [`ObjectId`] by a dynamically typed caller.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ConversionTarget {
    /// Canonical hexadecimal text.
    String,
    /// The identifier itself, wrapped as a typed document value.
    ObjectId,
    /// Boolean scalar. Unsupported.
    Boolean,
    /// Single character. Unsupported.
    Char,
    /// Signed 32-bit integer. Unsupported.
    Int32,
    /// Signed 64-bit integer. Unsupported.
    Int64,
    /// Unsigned 32-bit integer. Unsupported.
    UInt32,
    /// Unsigned 64-bit integer. Unsupported.
    UInt64,
    /// Double-precision float. Unsupported.
    Double,
    /// Decimal number. Unsupported.
    Decimal,
    /// Point in time. Unsupported; use `ObjectId::creation_time` for the embedded timestamp.
    DateTime,
    /// Raw byte array. Unsupported; use [`ObjectId::to_bytes`] instead.
    Binary,
}

impl ConversionTarget {
    const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::ObjectId => "ObjectId",
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::DateTime => "DateTime",
            Self::Binary => "Binary",
        }
    }
}

impl fmt::Display for ConversionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful result of [`ObjectId::convert`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Converted {
    /// The 24-digit lowercase hexadecimal string.
    String(String),
    /// The identifier unchanged.
    ObjectId(ObjectId),
}

impl ObjectId {
    /// Converts this identifier into the requested target.
    ///
    /// Only [`ConversionTarget::String`] and [`ConversionTarget::ObjectId`] succeed; every scalar
    /// target fails with [`Error::InvalidConversion`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::{ConversionTarget, Converted, ObjectId};
    ///
    /// let x = ObjectId::from_fields(1, 0, 0, 1)?;
    /// assert_eq!(
    ///     x.convert(ConversionTarget::String)?,
    ///     Converted::String("000000010000000000000001".into())
    /// );
    /// assert!(x.convert(ConversionTarget::Int64).is_err());
    /// # Ok::<(), objectid::Error>(())
    /// ```
    pub fn convert(&self, target: ConversionTarget) -> Result<Converted> {
        match target {
            ConversionTarget::String => Ok(Converted::String(self.to_hex_string())),
            ConversionTarget::ObjectId => Ok(Converted::ObjectId(*self)),
            other => Err(Error::InvalidConversion {
                target: other.name(),
            }),
        }
    }
}

impl From<ObjectId> for Converted {
    fn from(src: ObjectId) -> Self {
        Self::ObjectId(src)
    }
}

impl TryFrom<Converted> for ObjectId {
    type Error = Error;

    /// Recovers an identifier from either converted form.
    fn try_from(src: Converted) -> Result<Self> {
        match src {
            Converted::ObjectId(id) => Ok(id),
            Converted::String(text) => Self::parse(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConversionTarget, Converted};
    use crate::{Error, ObjectId};

    /// Converts only to string and wrapped identifier
    #[test]
    fn converts_only_to_string_and_wrapped_identifier() {
        let x: ObjectId = "5f1d7f1e0c2a4b000123abcd".parse().unwrap();

        assert_eq!(
            x.convert(ConversionTarget::String),
            Ok(Converted::String("5f1d7f1e0c2a4b000123abcd".into()))
        );
        assert_eq!(
            x.convert(ConversionTarget::ObjectId),
            Ok(Converted::ObjectId(x))
        );

        let rejected = [
            ConversionTarget::Boolean,
            ConversionTarget::Char,
            ConversionTarget::Int32,
            ConversionTarget::Int64,
            ConversionTarget::UInt32,
            ConversionTarget::UInt64,
            ConversionTarget::Double,
            ConversionTarget::Decimal,
            ConversionTarget::DateTime,
            ConversionTarget::Binary,
        ];
        for target in rejected {
            assert_eq!(
                x.convert(target),
                Err(Error::InvalidConversion {
                    target: target.name()
                })
            );
        }
        assert_eq!(
            x.convert(ConversionTarget::Double).unwrap_err().to_string(),
            "ObjectId cannot be converted to Double"
        );
    }

    /// Recovers identifier from converted forms
    #[test]
    fn recovers_identifier_from_converted_forms() {
        let x = ObjectId::from_fields(1_600_000_000, 0x123456, 0x7890, 0xabcdef).unwrap();
        for target in [ConversionTarget::String, ConversionTarget::ObjectId] {
            assert_eq!(ObjectId::try_from(x.convert(target).unwrap()), Ok(x));
        }
        assert_eq!(ObjectId::try_from(Converted::from(x)), Ok(x));
        assert!(ObjectId::try_from(Converted::String("nope".into())).is_err());
    }
}
