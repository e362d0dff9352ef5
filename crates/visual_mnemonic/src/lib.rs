#![forbid(unsafe_code)]
//! visual_mnemonic: deterministic identicons from string or integer seeds.
//!
//! Pipeline:
//! - seed: normalize text or integers to a wide unsigned integer (SHA3-256 widening for text)
//! - rng: seeded stream supplying every random choice in a fixed order
//! - field: layered fBm noise sampled into a per-pixel intensity buffer
//! - walk: greedy similarity walk ordering every pixel into one path
//! - palette: map visit order through a named color table
//! - generate: configuration, draw plan, runner, events
//!
//! ```no_run
//! use visual_mnemonic::prelude::*;
//!
//! let pixels = generate(Canvas::new(60, 40)?, "Hello")?;
//! assert_eq!(pixels.as_slice().len(), 60 * 40);
//! # Ok::<(), visual_mnemonic::error::Error>(())
//! ```
pub mod canvas;
pub mod error;
pub mod field;
pub mod generate;
pub mod palette;
pub mod pixels;
pub mod rng;
pub mod seed;
pub mod walk;

/// Convenient re-exports for common types. Import with `use visual_mnemonic::prelude::*;`.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use crate::field::{IntensityBuffer, NoiseField, NoiseLayer};
    pub use crate::generate::events::{
        EventSink, FnSink, GenerationEvent, GenerationEventKind, VecSink,
    };
    pub use crate::generate::{
        generate, generate_with_events, GenerationPlan, Generation, Generator, GeneratorConfig,
        StartPolicy,
    };
    pub use crate::palette::{apply_palette, select_palette, GradientCatalog, PaletteCatalog};
    pub use crate::pixels::{PixelBuffer, Rgb};
    pub use crate::rng::DeterministicRng;
    pub use crate::seed::{derive, DerivedSeed, Seed};
    pub use crate::walk::{walk, walk_with_stats, RankBuffer, WalkStats};
}
