//! A single seeded fBm Perlin layer.
use std::fmt;

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Highest octave count a layer accepts.
pub const MAX_OCTAVES: usize = 32;

/// One noise generator of a [`super::NoiseField`].
///
/// The octave count sets both the fBm octave count and the base frequency, so a
/// layer with more octaves has finer detail over the unit square.
pub struct NoiseLayer {
    seed: u32,
    octaves: usize,
    noise: Fbm<Perlin>,
}

impl NoiseLayer {
    /// Creates a layer. `octaves` is clamped to `1..=MAX_OCTAVES`.
    pub fn new(seed: u32, octaves: usize) -> Self {
        let octaves = octaves.clamp(1, MAX_OCTAVES);
        let noise = Fbm::<Perlin>::new(seed)
            .set_octaves(octaves)
            .set_frequency(octaves as f64);
        Self {
            seed,
            octaves,
            noise,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn octaves(&self) -> usize {
        self.octaves
    }

    /// Raw noise at `(u, v)`, roughly in `[-1, 1]`.
    #[inline]
    pub fn sample(&self, u: f64, v: f64) -> f64 {
        self.noise.get([u, v])
    }
}

impl fmt::Debug for NoiseLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseLayer")
            .field("seed", &self.seed)
            .field("octaves", &self.octaves)
            .finish()
    }
}
