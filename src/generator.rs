//! ObjectId generator and related types.

use portable_atomic::{AtomicU32, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::layout::MAX_UINT24;
use crate::ObjectId;

mod identity;
pub use identity::Discriminators;

pub mod with_rand08;

#[cfg(test)]
mod tests;

/// A trait that defines the minimum random number generator interface for [`Generator`].
///
/// The generator draws a single value from it, at construction, to seed its counter.
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;
}

/// Represents an ObjectId generator that stamps fixed machine and process discriminators and a
/// shared 24-bit counter into each identifier.
///
/// A generator takes `&self` for every operation and is safe to share across threads. The counter
/// advances through a single atomic fetch-and-add, so concurrent callers never observe the same
/// counter value until it wraps from `0xffffff` back to `0` after 2^24 generations. Identifiers
/// that share a timestamp and discriminators then collide; that limit is accepted rather than
/// guarded against.
///
/// Most applications use the process-wide instance behind [`object_id()`](crate::object_id).
/// An explicit generator is useful to pin the discriminators or the counter seed, for example in
/// tests.
///
/// # Examples
///
/// ```rust
/// use objectid::{Discriminators, Generator};
/// use std::thread;
///
/// let g = Generator::with_counter(Discriminators::new(0xabcdef, 42)?, 0);
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///             }
///         });
///     }
/// });
/// # Ok::<(), objectid::Error>(())
/// ```
#[derive(Debug)]
pub struct Generator {
    discriminators: Discriminators,
    counter: AtomicU32,
}

impl Generator {
    /// Creates a generator whose counter starts right after `seed` (truncated to 24 bits).
    pub const fn with_counter(discriminators: Discriminators, seed: u32) -> Self {
        Self {
            discriminators,
            counter: AtomicU32::new(seed & MAX_UINT24),
        }
    }

    /// Creates a generator whose counter is seeded from `rng`.
    pub fn with_rand_source(discriminators: Discriminators, mut rng: impl RandSource) -> Self {
        let seed = rng.next_u32();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            machine = discriminators.machine(),
            pid = discriminators.pid(),
            "seeded ObjectId generator"
        );
        Self::with_counter(discriminators, seed)
    }

    /// Returns the discriminators stamped into every generated identifier.
    pub const fn discriminators(&self) -> Discriminators {
        self.discriminators
    }

    /// Returns the 24-bit machine discriminator.
    pub const fn machine(&self) -> u32 {
        self.discriminators.machine()
    }

    /// Returns the 16-bit process discriminator.
    pub const fn pid(&self) -> u16 {
        self.discriminators.pid()
    }

    /// Generates a new ObjectId carrying `timestamp` as its creation second.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_at(&self, timestamp: i32) -> ObjectId {
        ObjectId::from_masked_fields(
            timestamp,
            self.discriminators.machine(),
            self.discriminators.pid(),
            self.next_increment(),
        )
    }

    /// Advances the shared counter, wrapping modulo 2^24, and returns the new value.
    fn next_increment(&self) -> u32 {
        // 2^32 is a multiple of 2^24, so masking keeps the sequence intact across the u32 wrap
        self.counter
            .fetch_add(1, Ordering::Relaxed)
            .wrapping_add(1)
            & MAX_UINT24
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Discriminators, Generator};
    use crate::{id, ObjectId, Result};
    use std::{iter::FusedIterator, time::SystemTime};

    impl Generator {
        /// Creates a generator whose counter is seeded from the thread-local random number
        /// generator.
        pub fn new(discriminators: Discriminators) -> Self {
            Self::with_rand08(discriminators, rand::thread_rng())
        }

        /// Generates a new ObjectId from the current wall-clock time.
        ///
        /// The time is truncated to whole seconds toward negative infinity.
        ///
        /// Past 2038-01-19T03:14:07Z the second count no longer fits the signed 32-bit field and
        /// wraps to negative values. Such identifiers still sort after earlier ones until 2106,
        /// but their [`ObjectId::creation_time`] reads as 1901 or later. Use
        /// [`generate_at_time`](Self::generate_at_time) with `SystemTime::now()` to reject those
        /// times with [`Error::OutOfRange`](crate::Error::OutOfRange) instead.
        pub fn generate(&self) -> ObjectId {
            self.generate_at(id::unix_seconds(SystemTime::now()) as i32)
        }

        /// Generates a new ObjectId from the given point in time.
        ///
        /// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) if `time` does not fit in a
        /// signed 32-bit second count. The counter does not advance on failure.
        pub fn generate_at_time(&self, time: SystemTime) -> Result<ObjectId> {
            Ok(self.generate_at(id::to_timestamp(time)?))
        }

        /// Returns an infinite iterator that produces a new ObjectId from the current time for
        /// each call of `next()`.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use objectid::{Discriminators, Generator};
        ///
        /// Generator::new(Discriminators::detect())
        ///     .iter()
        ///     .enumerate()
        ///     .skip(4)
        ///     .take(4)
        ///     .for_each(|(i, e)| println!("[{}] {}", i, e));
        /// ```
        pub fn iter(&self) -> Iter<'_> {
            Iter(self)
        }
    }

    /// Infinite iterator returned by [`Generator::iter()`].
    #[derive(Debug)]
    pub struct Iter<'a>(&'a Generator);

    impl Iterator for Iter<'_> {
        type Item = ObjectId;

        fn next(&mut self) -> Option<Self::Item> {
            Some(self.0.generate())
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX, None)
        }
    }

    impl FusedIterator for Iter<'_> {}
}

#[cfg(feature = "std")]
pub use std_ext::Iter;
