//! Per-run generator configuration.
//!
//! One configuration surface covers both historical generator variants: the default
//! (up to 5 layers, octaves up to 7) and [`GeneratorConfig::compact`] (up to 3 layers,
//! octaves up to 5). The walk start is either drawn from the seeded RNG or fixed.
use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::field::MAX_OCTAVES;

/// Where the similarity walk starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPolicy {
    /// Draw `x` then `y` uniformly from the canvas after the noise parameters.
    #[default]
    Random,
    /// Use this pixel; no RNG draws are made for the start.
    Fixed { x: u32, y: u32 },
}

/// Configuration for a [`crate::generate::runner::Generator`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Upper bound of the drawn noise layer count.
    pub max_layers: usize,
    /// Upper bound of each layer's drawn octave count.
    pub max_octave: usize,
    /// Start policy for the walk.
    pub start: StartPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_layers: 5,
            max_octave: 7,
            start: StartPolicy::Random,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fewer, smoother layers: at most 3 layers with octaves up to 5.
    pub fn compact() -> Self {
        Self {
            max_layers: 3,
            max_octave: 5,
            ..Default::default()
        }
    }

    /// Sets the layer count bound.
    pub fn with_max_layers(mut self, max_layers: usize) -> Self {
        self.max_layers = max_layers;
        self
    }

    /// Sets the octave bound.
    pub fn with_max_octave(mut self, max_octave: usize) -> Self {
        self.max_octave = max_octave;
        self
    }

    /// Sets the start policy.
    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    /// Shorthand for `with_start(StartPolicy::Fixed { x, y })`.
    pub fn with_fixed_start(self, x: u32, y: u32) -> Self {
        self.with_start(StartPolicy::Fixed { x, y })
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_layers == 0 {
            return Err(Error::InvalidConfig("max_layers must be >= 1".into()));
        }
        if self.max_octave == 0 || self.max_octave > MAX_OCTAVES {
            return Err(Error::InvalidConfig(format!(
                "max_octave must be in 1..={MAX_OCTAVES}"
            )));
        }
        Ok(())
    }

    /// Validates the configuration against a concrete canvas.
    pub fn validate_for(&self, canvas: Canvas) -> Result<()> {
        self.validate()?;
        if let StartPolicy::Fixed { x, y } = self.start {
            if x >= canvas.width() || y >= canvas.height() {
                return Err(Error::InvalidConfig(format!(
                    "fixed start ({x}, {y}) is outside the {}x{} canvas",
                    canvas.width(),
                    canvas.height()
                )));
            }
        }
        Ok(())
    }
}
