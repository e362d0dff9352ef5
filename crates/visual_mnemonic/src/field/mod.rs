//! Layered noise field producing per-pixel intensity.
//!
//! A field owns 1..=K [`NoiseLayer`]s sorted by ascending octave count and a `depth`
//! selecting how many leading layers are summed. Layer `i` contributes with weight
//! `0.5^i`; the sum is clamped to `[-1, 1]`. Layers past `depth` are still built so the
//! number of draws taken from the RNG does not depend on `depth`.
use glam::UVec2;
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::rng::DeterministicRng;
use crate::seed::DerivedSeed;

pub mod intensity;
pub mod layer;

pub use intensity::IntensityBuffer;
pub use layer::{NoiseLayer, MAX_OCTAVES};

/// Weighted stack of noise layers.
#[derive(Debug)]
pub struct NoiseField {
    layers: Vec<NoiseLayer>,
    depth: usize,
}

impl NoiseField {
    /// Draws the field parameters from `rng`.
    ///
    /// Draw order: layer count in `1..=max_layers`, then one octave count in
    /// `1..=max_octave` per layer, then (after sorting by octaves) the depth in
    /// `1..=layer_count`.
    pub fn prepare(
        seed: &DerivedSeed,
        max_layers: usize,
        max_octave: usize,
        rng: &mut DeterministicRng,
    ) -> Result<Self> {
        if max_layers == 0 {
            return Err(Error::InvalidConfig("max_layers must be >= 1".into()));
        }
        if max_octave == 0 || max_octave > MAX_OCTAVES {
            return Err(Error::InvalidConfig(format!(
                "max_octave must be in 1..={MAX_OCTAVES}, got {max_octave}"
            )));
        }

        let base_seed = seed.noise_seed();
        let count = rng.range_usize(1, max_layers);
        let mut layers: Vec<NoiseLayer> = (0..count)
            .map(|i| {
                let octaves = rng.range_usize(1, max_octave);
                NoiseLayer::new(base_seed.wrapping_add(i as u32), octaves)
            })
            .collect();
        layers.sort_by_key(NoiseLayer::octaves);
        let depth = rng.range_usize(1, layers.len());

        debug!(
            "Noise field: {} layers, octaves {:?}, depth {}.",
            layers.len(),
            layers.iter().map(NoiseLayer::octaves).collect::<Vec<_>>(),
            depth
        );

        Ok(Self { layers, depth })
    }

    /// Builds a field from explicit layers. Layers are sorted by octave count.
    pub fn from_layers(mut layers: Vec<NoiseLayer>, depth: usize) -> Result<Self> {
        if layers.is_empty() {
            return Err(Error::InvalidConfig(
                "noise field needs at least one layer".into(),
            ));
        }
        if depth == 0 || depth > layers.len() {
            return Err(Error::InvalidConfig(format!(
                "depth must be in 1..={}, got {depth}",
                layers.len()
            )));
        }
        layers.sort_by_key(NoiseLayer::octaves);
        Ok(Self { layers, depth })
    }

    pub fn layers(&self) -> &[NoiseLayer] {
        &self.layers
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Weighted sum of the first `depth` layers at `(u, v)`, clamped to `[-1, 1]`.
    pub fn evaluate(&self, u: f64, v: f64) -> f64 {
        let mut result = 0.0;
        let mut factor = 1.0;
        for layer in &self.layers[..self.depth] {
            result += layer.sample(u, v) * factor;
            factor *= 0.5;
        }
        result.clamp(-1.0, 1.0)
    }

    /// Intensity of pixel `p`, sampled at `(y / height, x / width)`.
    pub fn intensity(&self, p: UVec2, canvas: Canvas) -> u8 {
        let u = f64::from(p.y) / f64::from(canvas.height());
        let v = f64::from(p.x) / f64::from(canvas.width());
        to_intensity(self.evaluate(u, v))
    }

    /// Intensity of every pixel in raster order.
    pub fn intensity_buffer(&self, canvas: Canvas) -> IntensityBuffer {
        IntensityBuffer::from_fn(canvas, |p| self.intensity(p, canvas))
    }
}

/// Maps `[-1, 1]` onto `0..=255` with round-half-to-even.
#[inline]
pub fn to_intensity(value: f64) -> u8 {
    let scaled = ((value.clamp(-1.0, 1.0) / 2.0) + 0.5) * 255.0;
    scaled.round_ties_even().clamp(0.0, 255.0) as u8
}
