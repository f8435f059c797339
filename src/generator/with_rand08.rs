//! Integration with `rand` (v0.8) crate.

use super::{Discriminators, Generator, RandSource};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

impl Generator {
    /// Creates a generator whose counter is seeded from a random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::{Discriminators, Generator};
    /// use rand::rngs::OsRng;
    ///
    /// let g = Generator::with_rand08(Discriminators::new(0xabcdef, 42)?, OsRng);
    /// println!("{}", g.generate_at(1_700_000_000));
    /// # Ok::<(), objectid::Error>(())
    /// ```
    pub fn with_rand08<T: RngCore>(discriminators: Discriminators, rng: T) -> Self {
        Self::with_rand_source(discriminators, Adapter(rng))
    }
}
