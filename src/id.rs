use alloc::string::String;
use core::fmt;

use fstr::FStr;

use crate::layout::{self, BYTE_LEN, HEX_LEN};
use crate::{Error, Result};

/// Represents a 12-byte, time-ordered ObjectId.
///
/// The value is held as three big-endian 32-bit words so that field accessors and comparisons are
/// plain integer operations. Equality, hashing, and ordering are defined over those words compared
/// lexicographically as unsigned integers, which sorts identifiers by timestamp first, then by
/// machine and pid, then by increment.
///
/// Because the comparison is unsigned, identifiers with a negative (pre-1970) timestamp sort after
/// every identifier with a non-negative one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ObjectId {
    a: u32,
    b: u32,
    c: u32,
}

impl ObjectId {
    /// Empty ObjectId (000000000000000000000000)
    pub const EMPTY: Self = Self { a: 0, b: 0, c: 0 };

    /// Max ObjectId (ffffffffffffffffffffffff)
    pub const MAX: Self = Self {
        a: u32::MAX,
        b: u32::MAX,
        c: u32::MAX,
    };

    /// Creates an object from the four logical field values.
    ///
    /// Fails with [`Error::OutOfRange`] if `machine` or `increment` does not fit in 24 bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::ObjectId;
    ///
    /// let x = ObjectId::from_fields(1, 0, 0, 1)?;
    /// assert_eq!(x.to_string(), "000000010000000000000001");
    /// assert!(ObjectId::from_fields(1, 1 << 24, 0, 1).is_err());
    /// # Ok::<(), objectid::Error>(())
    /// ```
    pub fn from_fields(timestamp: i32, machine: u32, pid: u16, increment: u32) -> Result<Self> {
        let [a, b, c] = layout::pack_words(timestamp, machine, pid, increment)?;
        Ok(Self { a, b, c })
    }

    /// Packs field values the caller has already confined to their slots.
    pub(crate) const fn from_masked_fields(
        timestamp: i32,
        machine: u32,
        pid: u16,
        increment: u32,
    ) -> Self {
        let [a, b, c] = layout::pack_words_masked(timestamp, machine, pid, increment);
        Self { a, b, c }
    }

    /// Creates an object from a 12-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; BYTE_LEN]) -> Self {
        let [a, b, c] = layout::bytes_to_words(&bytes);
        Self { a, b, c }
    }

    /// Creates an object from a byte slice that must be exactly 12 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        <[u8; BYTE_LEN]>::try_from(bytes)
            .map(Self::from_bytes)
            .map_err(|_| Error::invalid_length(BYTE_LEN, bytes.len()))
    }

    /// Creates an object from the 12 bytes starting at `offset` in `buf`.
    ///
    /// Fails with [`Error::InvalidLength`] if fewer than 12 bytes are available from `offset`.
    pub fn from_slice_at(buf: &[u8], offset: usize) -> Result<Self> {
        let available = buf.len().saturating_sub(offset);
        buf.get(offset..)
            .and_then(|rest| rest.get(..BYTE_LEN))
            .ok_or(Error::invalid_length(BYTE_LEN, available))
            .and_then(Self::from_slice)
    }

    /// Creates an object from an optional hexadecimal string, failing with
    /// [`Error::MissingInput`] if the string is absent.
    ///
    /// This is the bridge for callers holding nullable text such as database columns.
    pub fn from_optional_str(src: Option<&str>) -> Result<Self> {
        src.ok_or(Error::MissingInput).and_then(Self::parse)
    }

    /// Returns the seconds since the Unix epoch encoded in the first four bytes.
    pub const fn timestamp(&self) -> i32 {
        self.a as i32
    }

    /// Returns the 24-bit machine discriminator.
    pub const fn machine(&self) -> u32 {
        self.b >> 8
    }

    /// Returns the 16-bit process discriminator.
    pub const fn pid(&self) -> u16 {
        ((self.b & 0xff) << 8 | self.c >> 24) as u16
    }

    /// Returns the 24-bit counter value.
    pub const fn increment(&self) -> u32 {
        self.c & layout::MAX_UINT24
    }

    /// Returns the 12-byte big-endian array.
    pub const fn to_bytes(&self) -> [u8; BYTE_LEN] {
        layout::words_to_bytes([self.a, self.b, self.c])
    }

    /// Writes the 12-byte big-endian representation into `buf` at `offset`.
    ///
    /// Fails with [`Error::InvalidLength`] if fewer than 12 bytes are available from `offset`.
    pub fn write_to(&self, buf: &mut [u8], offset: usize) -> Result<()> {
        let available = buf.len().saturating_sub(offset);
        let dst = buf
            .get_mut(offset..)
            .and_then(|rest| rest.get_mut(..BYTE_LEN))
            .ok_or(Error::invalid_length(BYTE_LEN, available))?;
        dst.copy_from_slice(&self.to_bytes());
        Ok(())
    }

    /// Returns the 24-digit lowercase hexadecimal string representation stored in a
    /// stack-allocated [`FStr`] that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::ObjectId;
    ///
    /// let x = "5f1d7f1e0c2a4b000123abcd".parse::<ObjectId>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "5f1d7f1e0c2a4b000123abcd");
    /// assert_eq!(format!("{}", y), "5f1d7f1e0c2a4b000123abcd");
    /// # Ok::<(), objectid::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<HEX_LEN> {
        let buffer = layout::encode_hex(&self.to_bytes());
        // SAFETY: `encode_hex` writes ASCII hex digits only.
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 24-digit lowercase hexadecimal string representation as a heap-allocated
    /// string.
    pub fn to_hex_string(&self) -> String {
        String::from(&*self.encode())
    }
}

impl fmt::Display for ObjectId {
    /// Returns the 24-digit lowercase hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.encode();
        f.debug_tuple("ObjectId").field(&&*text).finish()
    }
}

impl From<ObjectId> for [u8; BYTE_LEN] {
    fn from(src: ObjectId) -> Self {
        src.to_bytes()
    }
}

impl From<[u8; BYTE_LEN]> for ObjectId {
    fn from(src: [u8; BYTE_LEN]) -> Self {
        Self::from_bytes(src)
    }
}

impl TryFrom<&[u8]> for ObjectId {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self> {
        Self::from_slice(src)
    }
}

impl From<ObjectId> for String {
    fn from(src: ObjectId) -> Self {
        src.to_hex_string()
    }
}

impl TryFrom<String> for ObjectId {
    type Error = Error;

    fn try_from(src: String) -> Result<Self> {
        src.parse()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::ObjectId;
    use crate::{Error, Result};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    impl ObjectId {
        /// Creates an object from a point in time and the remaining field values.
        ///
        /// The time is truncated to whole seconds toward negative infinity. Fails with
        /// [`Error::OutOfRange`] if the result does not fit in a signed 32-bit second count, or
        /// if `machine` or `increment` does not fit in 24 bits.
        pub fn from_system_time(
            time: SystemTime,
            machine: u32,
            pid: u16,
            increment: u32,
        ) -> Result<Self> {
            Self::from_fields(to_timestamp(time)?, machine, pid, increment)
        }

        /// Returns the creation time derived from the timestamp field.
        pub fn creation_time(&self) -> SystemTime {
            let secs = self.timestamp();
            let offset = Duration::from_secs(secs.unsigned_abs() as u64);
            if secs < 0 {
                UNIX_EPOCH - offset
            } else {
                UNIX_EPOCH + offset
            }
        }
    }

    /// Returns whole seconds since the Unix epoch, rounding toward negative infinity.
    pub(crate) fn unix_seconds(time: SystemTime) -> i64 {
        match time.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => {
                let d = e.duration();
                let secs = d.as_secs() as i64;
                if d.subsec_nanos() > 0 {
                    -secs - 1
                } else {
                    -secs
                }
            }
        }
    }

    /// Converts a point in time into the signed 32-bit timestamp field.
    pub(crate) fn to_timestamp(time: SystemTime) -> Result<i32> {
        let secs = unix_seconds(time);
        i32::try_from(secs).map_err(|_| Error::out_of_range("timestamp", secs))
    }
}

#[cfg(feature = "std")]
pub(crate) use std_ext::{to_timestamp, unix_seconds};

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
mod chrono_support {
    use super::ObjectId;
    use crate::{Error, Result};
    use chrono::{DateTime, Utc};

    impl ObjectId {
        /// Creates an object from a UTC date-time and the remaining field values.
        ///
        /// Sub-second precision is discarded. Fails with [`Error::OutOfRange`] if the date-time
        /// does not fit in a signed 32-bit second count.
        pub fn from_datetime(
            time: DateTime<Utc>,
            machine: u32,
            pid: u16,
            increment: u32,
        ) -> Result<Self> {
            let secs = time.timestamp();
            let timestamp =
                i32::try_from(secs).map_err(|_| Error::out_of_range("timestamp", secs))?;
            Self::from_fields(timestamp, machine, pid, increment)
        }

        /// Returns the creation time as a UTC date-time.
        pub fn creation_datetime(&self) -> DateTime<Utc> {
            // every i32 second count is representable
            DateTime::from_timestamp(self.timestamp() as i64, 0).unwrap_or_default()
        }
    }

}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, ObjectId};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for ObjectId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(&self.to_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for ObjectId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = ObjectId;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "an ObjectId representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}
