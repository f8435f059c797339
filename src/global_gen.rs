//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync::OnceLock;

use crate::{Discriminators, Generator, ObjectId};

/// Returns the process-wide global generator, creating one if none exists.
///
/// The first call derives the [`Discriminators`] from the host name and process id and seeds the
/// counter from the thread-local random number generator. The resulting state lives for the rest
/// of the process and is shared by every thread.
pub fn global_generator() -> &'static Generator {
    static G: OnceLock<Generator> = OnceLock::new();
    G.get_or_init(|| Generator::new(Discriminators::detect()))
}

/// Generates an ObjectId object.
///
/// This function employs the process-wide global generator, so identifiers generated by any
/// thread within the same second carry distinct counter values until the 24-bit counter wraps.
///
/// # Examples
///
/// ```rust
/// let id = objectid::object_id();
/// println!("{}", id); // e.g., "65a0c3f2b81a4e1d2f00a3c7"
/// println!("{:?}", id.to_bytes()); // as 12-byte big-endian array
///
/// let id_string: String = objectid::object_id().to_string();
/// ```
pub fn object_id() -> ObjectId {
    global_generator().generate()
}
