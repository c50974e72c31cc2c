use anyhow::{Context, Result};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

/// Characters a random segment is drawn from: A-Z, a-z, then 0-9.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of uniformly distributed indices. Production code uses
/// [`StdRandomSource`]; tests inject a deterministic implementation.
pub trait RandomSource {
    /// Return an index in `0..upper`, or 0 when `upper` is zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// `StdRng` (ChaCha12, a cryptographically strong PRNG) seeded once from the
/// operating system.
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    pub fn from_os_entropy() -> Result<Self> {
        let rng = StdRng::from_rng(OsRng).context("seeding random source from OS entropy")?;
        Ok(Self { rng })
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for StdRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}

/// Always returns the same index (clamped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource {
    index: usize,
}

impl FixedRandomSource {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RandomSource for FixedRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        self.index.min(upper.saturating_sub(1))
    }
}

/// Cycles through a fixed list of indices, each reduced modulo `upper`.
#[derive(Debug, Clone)]
pub struct SequenceRandomSource {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceRandomSource {
    /// An empty list is accepted and yields index 0 on every call.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let i = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        i.checked_rem(upper).unwrap_or(0)
    }
}

/// Build a string of exactly `length` characters, each picked independently
/// from [`ALPHABET`]. A zero length yields the empty string.
pub fn generate_random_string<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(ALPHABET[rng.next_index(ALPHABET.len())]))
        .collect()
}

/// Concatenate `first` then `second`.
pub fn combine(first: &str, second: &str) -> String {
    let mut out = String::with_capacity(first.len() + second.len());
    out.push_str(first);
    out.push_str(second);
    out
}
