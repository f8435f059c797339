//! A Rust implementation of the 12-byte, time-ordered ObjectId
//!
//! ```rust
//! use objectid::object_id;
//!
//! let id = object_id();
//! println!("{}", id); // e.g. "65a0c3f2b81a4e1d2f00a3c7"
//! println!("{:?}", id.to_bytes()); // as 12-byte big-endian array
//! ```
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           timestamp                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                    machine                    |      pid      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      pid      |                   increment                   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The signed 32-bit `timestamp` field holds the Unix timestamp in seconds.
//! - The 24-bit `machine` field holds a hash of the host name and an optional instance
//!   qualifier.
//! - The 16-bit `pid` field holds the low 16 bits of the process ID, or `0` where the process ID
//!   is unavailable.
//! - The 24-bit `increment` field holds a process-wide counter that starts at a random value and
//!   advances by one for every identifier generated, wrapping to zero after `0xffffff`.
//!
//! The text form is the 24-digit lowercase hexadecimal encoding of these 12 bytes. Identifiers
//! compare as three unsigned big-endian 32-bit words, so they sort by creation second first.
//!
//! Identifiers are unlikely, not guaranteed, to be unique across producers. They are not
//! cryptographically random and are trivially predictable.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std`: integrates with `std::time::SystemTime`, implements `std::error::Error`, and detects
//!   host and process discriminators. Without it the crate is `no_std` with `alloc`.
//! - `global_gen` (implies `std`): enables the process-wide generator behind [`object_id()`].
//!
//! Optional features:
//!
//! - `serde`: enables serialization and deserialization of [`ObjectId`] objects.
//! - `chrono`: enables conversion between [`ObjectId`] timestamps and `chrono::DateTime<Utc>`.
//! - `tracing`: emits `tracing` events when generators are seeded and when host or process
//!   lookups fall back.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod error;
pub use error::{Error, Result};

mod id;
pub use id::ObjectId;

pub mod layout;

mod parse;

mod convert;
pub use convert::{ConversionTarget, Converted};

pub mod generator;
#[doc(inline)]
pub use generator::{Discriminators, Generator, RandSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{global_generator, object_id};
