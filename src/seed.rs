use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fmt;

/// Seed for one draw. Published before the draw so anyone can replay it.
///
/// The generator is ChaCha20 expanded from the seed with
/// `seed_from_u64`, a stream that is stable across platforms and
/// releases of `rand_chacha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawSeed(i64);

impl DrawSeed {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Fresh seed from the operating system entropy source
    pub fn generate() -> Self {
        Self(OsRng.next_u64() as i64)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn rng(self) -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(self.0 as u64)
    }
}

impl From<i64> for DrawSeed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DrawSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
