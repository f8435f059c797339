//! Conversions between the four logical ObjectId fields, the 12-byte big-endian layout, and the
//! 24-digit hexadecimal text.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                      timestamp (signed)                       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                    machine                    |    pid (hi)   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |    pid (lo)   |                   increment                   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Each row above is one of the three 32-bit words (`a`, `b`, `c`) that [`ObjectId`] stores.
//!
//! [`ObjectId`]: crate::ObjectId

use crate::{Error, Result};

/// Number of bytes in the binary form.
pub const BYTE_LEN: usize = 12;

/// Number of characters in the hexadecimal form.
pub const HEX_LEN: usize = 24;

/// Largest value the 24-bit `machine` and `increment` fields can hold.
pub const MAX_UINT24: u32 = (1 << 24) - 1;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Packs the four logical fields into the 12-byte big-endian layout.
///
/// Fails with [`Error::OutOfRange`] if `machine` or `increment` uses more than 24 bits.
///
/// # Examples
///
/// ```rust
/// use objectid::layout;
///
/// let bytes = layout::pack(1, 0, 0, 1)?;
/// assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
/// # Ok::<(), objectid::Error>(())
/// ```
pub fn pack(timestamp: i32, machine: u32, pid: u16, increment: u32) -> Result<[u8; BYTE_LEN]> {
    let [a, b, c] = pack_words(timestamp, machine, pid, increment)?;
    Ok(words_to_bytes([a, b, c]))
}

/// Unpacks the 12-byte layout into `(timestamp, machine, pid, increment)`.
pub fn unpack(bytes: &[u8; BYTE_LEN]) -> (i32, u32, u16, u32) {
    let [a, b, c] = bytes_to_words(bytes);
    (
        a as i32,
        b >> 8,
        ((b & 0xff) << 8 | c >> 24) as u16,
        c & MAX_UINT24,
    )
}

/// Packs the four logical fields into the three internal words.
pub(crate) fn pack_words(
    timestamp: i32,
    machine: u32,
    pid: u16,
    increment: u32,
) -> Result<[u32; 3]> {
    if machine > MAX_UINT24 {
        return Err(Error::out_of_range("machine", machine as i64));
    }
    if increment > MAX_UINT24 {
        return Err(Error::out_of_range("increment", increment as i64));
    }

    Ok(pack_words_masked(timestamp, machine, pid, increment))
}

/// Packs field values already known to fit their slots, discarding any excess bits.
pub(crate) const fn pack_words_masked(
    timestamp: i32,
    machine: u32,
    pid: u16,
    increment: u32,
) -> [u32; 3] {
    let pid = pid as u32;
    [
        timestamp as u32,
        (machine & MAX_UINT24) << 8 | pid >> 8,
        (pid & 0xff) << 24 | (increment & MAX_UINT24),
    ]
}

pub(crate) const fn bytes_to_words(bytes: &[u8; BYTE_LEN]) -> [u32; 3] {
    [
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
    ]
}

pub(crate) const fn words_to_bytes(words: [u32; 3]) -> [u8; BYTE_LEN] {
    let [a, b, c] = [
        words[0].to_be_bytes(),
        words[1].to_be_bytes(),
        words[2].to_be_bytes(),
    ];
    [
        a[0], a[1], a[2], a[3], b[0], b[1], b[2], b[3], c[0], c[1], c[2], c[3],
    ]
}

/// Writes the lowercase hexadecimal digits of `bytes` into a fixed 24-byte buffer.
pub(crate) fn encode_hex(bytes: &[u8; BYTE_LEN]) -> [u8; HEX_LEN] {
    let mut buffer = [0u8; HEX_LEN];
    for (dst, e) in buffer.chunks_exact_mut(2).zip(bytes) {
        dst[0] = DIGITS[(e >> 4) as usize];
        dst[1] = DIGITS[(e & 15) as usize];
    }
    debug_assert!(buffer.is_ascii());
    buffer
}

/// Decodes exactly 24 hexadecimal digits (either case) into 12 bytes.
pub(crate) fn decode_hex(src: &str) -> Option<[u8; BYTE_LEN]> {
    let src = src.as_bytes();
    if src.len() != HEX_LEN {
        return None;
    }

    let mut dst = [0u8; BYTE_LEN];
    for (e, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
        *e = (decode_digit(pair[0])? << 4) | decode_digit(pair[1])?;
    }
    Some(dst)
}

const fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
