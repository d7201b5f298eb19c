//! The single seeded random source shared by a harness run.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// A random source that remembers the seed it was built from.
///
/// One instance is created per run and handed by `&mut` to every consumer.
/// It is never reseeded, so the complete sequence of draws (and with it every
/// generated case and record) is a function of [`ReplayRng::seed`] alone.
#[derive(Debug, Clone)]
pub struct ReplayRng {
    seed: u64,
    inner: StdRng,
}

impl ReplayRng {
    /// Creates a source that replays the run identified by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source with a fresh seed taken from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for ReplayRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
