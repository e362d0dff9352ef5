//! High-level runner that turns a canvas and a seed into pixels.
use glam::UVec2;
use tracing::info;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::field::IntensityBuffer;
use crate::generate::config::GeneratorConfig;
use crate::generate::events::{EventSink, GenerationEvent, GenerationEventKind};
use crate::generate::plan::GenerationPlan;
use crate::palette::{apply_palette, GradientCatalog, PaletteCatalog};
use crate::pixels::PixelBuffer;
use crate::seed::{DerivedSeed, Seed};
use crate::walk::{walk_with_stats, RankBuffer, WalkStats};

/// Result of one generation run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Generation {
    /// Normalized seed.
    pub seed: DerivedSeed,
    /// Octave counts of all noise layers, ascending.
    pub layer_octaves: Vec<usize>,
    /// Number of summed layers.
    pub depth: usize,
    /// Walk start.
    pub start: UVec2,
    /// Applied palette.
    pub palette: String,
    /// Per-pixel intensity.
    pub intensity: IntensityBuffer,
    /// Per-pixel visit rank.
    pub ranks: RankBuffer,
    /// Walk counters.
    pub walk_stats: WalkStats,
    /// Final colors.
    pub pixels: PixelBuffer,
}

pub struct Generator<'a, C: PaletteCatalog + ?Sized> {
    /// Configuration applied to every run.
    pub config: GeneratorConfig,
    /// Palette tables to select from.
    pub catalog: &'a C,
}

impl<'a, C: PaletteCatalog + ?Sized> Generator<'a, C> {
    pub fn try_new(config: GeneratorConfig, catalog: &'a C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn new(config: GeneratorConfig, catalog: &'a C) -> Self {
        debug_assert!(config.max_layers > 0, "max_layers must be > 0");
        debug_assert!(config.max_octave > 0, "max_octave must be > 0");
        Self { config, catalog }
    }

    /// Runs the full pipeline for `seed` on `canvas`.
    pub fn generate(&self, canvas: Canvas, seed: impl Into<Seed>) -> Result<Generation> {
        generate_with_events(canvas, seed, &self.config, self.catalog, &mut ())
    }

    pub fn generate_with_events(
        &self,
        canvas: Canvas,
        seed: impl Into<Seed>,
        sink: &mut dyn EventSink,
    ) -> Result<Generation> {
        generate_with_events(canvas, seed, &self.config, self.catalog, sink)
    }

    /// Runs the pipeline and keeps only the pixels.
    pub fn generate_pixels(&self, canvas: Canvas, seed: impl Into<Seed>) -> Result<PixelBuffer> {
        self.generate(canvas, seed).map(|g| g.pixels)
    }
}

/// Generates pixels with the default configuration and the builtin palettes.
pub fn generate(canvas: Canvas, seed: impl Into<Seed>) -> Result<PixelBuffer> {
    let catalog = GradientCatalog::builtin();
    Generator::new(GeneratorConfig::default(), &catalog).generate_pixels(canvas, seed)
}

pub fn generate_with_events<C>(
    canvas: Canvas,
    seed: impl Into<Seed>,
    config: &GeneratorConfig,
    catalog: &C,
    sink: &mut dyn EventSink,
) -> Result<Generation>
where
    C: PaletteCatalog + ?Sized,
{
    let plan = GenerationPlan::draw(canvas, seed, config, catalog)?;

    if sink.wants(GenerationEventKind::Started) {
        sink.send(GenerationEvent::Started { canvas });
    }
    if sink.wants(GenerationEventKind::PlanPrepared) {
        sink.send(GenerationEvent::PlanPrepared {
            seed: plan.seed.clone(),
            layer_octaves: plan.layer_octaves(),
            depth: plan.field.depth(),
            start: plan.start,
            palette: plan.palette.clone(),
        });
    }

    let intensity = plan.field.intensity_buffer(canvas);
    if sink.wants(GenerationEventKind::IntensityComputed) {
        let (min, max) = intensity.range();
        sink.send(GenerationEvent::IntensityComputed { min, max });
    }

    let (ranks, walk_stats) = walk_with_stats(&intensity, plan.start)?;
    if sink.wants(GenerationEventKind::WalkFinished) {
        sink.send(GenerationEvent::WalkFinished { stats: walk_stats });
    }

    let pixels = apply_palette(catalog, &ranks, &plan.palette)?;

    info!(
        "Generated {}x{} | palette: {} | steps: {} | expansions: {} | widest ring: {}.",
        canvas.width(),
        canvas.height(),
        plan.palette,
        walk_stats.steps,
        walk_stats.expansions,
        walk_stats.max_window
    );

    if sink.wants(GenerationEventKind::Finished) {
        sink.send(GenerationEvent::Finished {
            canvas,
            palette: plan.palette.clone(),
        });
    }

    let layer_octaves = plan.layer_octaves();
    Ok(Generation {
        seed: plan.seed,
        layer_octaves,
        depth: plan.field.depth(),
        start: plan.start,
        palette: plan.palette,
        intensity,
        ranks,
        walk_stats,
        pixels,
    })
}
