//! Per-pixel intensity storage.
use glam::UVec2;

use crate::canvas::Canvas;

/// One intensity byte per pixel, row-major over a [`Canvas`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl IntensityBuffer {
    /// Wraps raw values. Returns `None` if `data.len()` does not match the canvas.
    pub fn from_vec(canvas: Canvas, data: Vec<u8>) -> Option<Self> {
        (data.len() == canvas.len()).then_some(Self { canvas, data })
    }

    /// Fills a buffer in raster order from `f(position)`.
    pub fn from_fn(canvas: Canvas, mut f: impl FnMut(UVec2) -> u8) -> Self {
        let data = canvas.positions().map(&mut f).collect();
        Self { canvas, data }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.data[index]
    }

    #[inline]
    pub fn at(&self, p: UVec2) -> u8 {
        self.data[self.canvas.index(p)]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Smallest and largest value.
    pub fn range(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}
