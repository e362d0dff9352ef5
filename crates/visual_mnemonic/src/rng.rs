//! Seeded random stream shared by every stage of a run.
//!
//! Later stages depend on the *position* of each draw, not only on the seed, so the
//! helpers here consume the underlying stream in a fixed way: one rejection-sampled
//! `next_u64` per bounded draw (more only on rejection).
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::seed::DerivedSeed;

/// Deterministic RNG keyed by a [`DerivedSeed`].
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    inner: StdRng,
    draws: u64,
}

impl DeterministicRng {
    pub fn from_seed(seed: &DerivedSeed) -> Self {
        Self {
            inner: StdRng::from_seed(seed.rng_key()),
            draws: 0,
        }
    }

    /// Resets the stream; the following draws repeat those made after the previous reset.
    pub fn reseed(&mut self, seed: &DerivedSeed) {
        *self = Self::from_seed(seed);
    }

    /// Number of bounded draws made since seeding.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform integer in `lo..=hi`. Panics in debug builds if `lo > hi`.
    pub fn range_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        debug_assert!(lo <= hi, "empty range {lo}..={hi}");
        self.draws += 1;
        let span = hi.wrapping_sub(lo).wrapping_add(1);
        if span == 0 {
            // Full u64 range.
            return self.inner.next_u64();
        }
        bounded_u64(&mut self.inner, span) + lo
    }

    /// Uniform `usize` in `lo..=hi`.
    pub fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        self.range_inclusive(lo as u64, hi as u64) as usize
    }

    /// Uniform choice from a non-empty slice. Returns `None` without drawing if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.range_usize(0, items.len() - 1);
        items.get(i)
    }
}

/// Unbiased `0..span` via rejection of the top partial bucket.
pub(crate) fn bounded_u64<R: RngCore + ?Sized>(rng: &mut R, span: u64) -> u64 {
    debug_assert!(span > 0);
    // 2^64 = q * span + r; accept values below 2^64 - r.
    let r = (u64::MAX % span).wrapping_add(1) % span;
    let limit = u64::MAX - r;
    loop {
        let v = rng.next_u64();
        if v <= limit {
            return v % span;
        }
    }
}
