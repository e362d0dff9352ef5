//! Random parameters of a single run.
//!
//! [`GenerationPlan::draw`] performs every RNG draw of a run, in this order:
//! 1. derive the integer seed and key the RNG with it;
//! 2. layer count, one octave count per layer, (sort), depth;
//! 3. walk start `x` then `y`, unless the start is fixed;
//! 4. palette name.
//!
//! Changing this order changes the output of every seed.
use glam::UVec2;
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::field::{NoiseField, NoiseLayer};
use crate::generate::config::{GeneratorConfig, StartPolicy};
use crate::palette::{select_palette, PaletteCatalog};
use crate::rng::DeterministicRng;
use crate::seed::{derive, DerivedSeed, Seed};

/// Everything drawn from the seed before any pixel work.
#[derive(Debug)]
pub struct GenerationPlan {
    /// Normalized seed.
    pub seed: DerivedSeed,
    /// Noise layers and depth.
    pub field: NoiseField,
    /// First pixel of the walk.
    pub start: UVec2,
    /// Name of the selected palette.
    pub palette: String,
    /// Bounded RNG draws consumed.
    pub draws: u64,
}

impl GenerationPlan {
    /// Validates inputs, then draws the plan.
    pub fn draw<C>(
        canvas: Canvas,
        seed: impl Into<Seed>,
        config: &GeneratorConfig,
        catalog: &C,
    ) -> Result<Self>
    where
        C: PaletteCatalog + ?Sized,
    {
        config.validate_for(canvas)?;
        if catalog.is_empty() {
            return Err(Error::InvalidConfig("palette catalog is empty".into()));
        }

        let seed = derive(seed)?;
        let mut rng = DeterministicRng::from_seed(&seed);

        let field = NoiseField::prepare(&seed, config.max_layers, config.max_octave, &mut rng)?;

        let start = match config.start {
            StartPolicy::Random => {
                let x = rng.range_inclusive(0, u64::from(canvas.width() - 1)) as u32;
                let y = rng.range_inclusive(0, u64::from(canvas.height() - 1)) as u32;
                UVec2::new(x, y)
            }
            StartPolicy::Fixed { x, y } => UVec2::new(x, y),
        };

        let palette = select_palette(catalog, &mut rng)?;

        debug!(
            "Plan for seed {:#x}: start ({}, {}), palette '{}', {} draws.",
            seed,
            start.x,
            start.y,
            palette,
            rng.draws()
        );

        Ok(Self {
            seed,
            field,
            start,
            palette,
            draws: rng.draws(),
        })
    }

    /// Octave counts of all layers, ascending.
    pub fn layer_octaves(&self) -> Vec<usize> {
        self.field.layers().iter().map(NoiseLayer::octaves).collect()
    }
}
