//! Terminal rendering of pixel buffers as 24-bit ANSI colored glyph rows.
//!
//! Rows are downscaled with nearest-neighbour sampling; the row count compensates for
//! terminal cells being taller than they are wide.
use std::fmt::Write as _;

use anyhow::ensure;
use image::imageops::{self, FilterType};
use visual_mnemonic::prelude::PixelBuffer;

use crate::image_sink::to_rgb_image;

/// Renders pixels as rows of a glyph colored with 24-bit ANSI escapes.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    /// Output width in characters.
    pub columns: u32,
    /// Character printed for every cell.
    pub glyph: char,
    /// Height-to-width ratio of a terminal cell.
    pub char_aspect: f32,
}

impl AsciiRenderer {
    pub fn new(columns: u32) -> Self {
        Self {
            columns,
            glyph: '█',
            char_aspect: 2.0,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_char_aspect(mut self, char_aspect: f32) -> Self {
        self.char_aspect = char_aspect;
        self
    }

    /// Rows produced for a `width`x`height` image.
    pub fn rows_for(&self, width: u32, height: u32) -> u32 {
        let rows = self.columns as f32 * height as f32 / width as f32 / self.char_aspect;
        (rows.round() as u32).max(1)
    }

    pub fn render(&self, pixels: &PixelBuffer) -> anyhow::Result<String> {
        ensure!(self.columns > 0, "columns must be > 0");
        ensure!(self.char_aspect > 0.0, "char_aspect must be > 0");

        let rows = self.rows_for(pixels.width(), pixels.height());
        let img = to_rgb_image(pixels)?;
        let small = imageops::resize(&img, self.columns, rows, FilterType::Nearest);

        let mut out = String::with_capacity((self.columns as usize * 20 + 5) * rows as usize);
        for y in 0..rows {
            for x in 0..self.columns {
                let [r, g, b] = small.get_pixel(x, y).0;
                let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{}", self.glyph);
            }
            out.push_str("\x1b[0m\n");
        }
        Ok(out)
    }
}
