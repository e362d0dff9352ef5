//! Final RGB output.
use glam::UVec2;

use crate::canvas::Canvas;

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// Row-major RGB pixels over a [`Canvas`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    canvas: Canvas,
    data: Vec<Rgb>,
}

impl PixelBuffer {
    /// Wraps raw pixels. Returns `None` if `data.len()` does not match the canvas.
    pub fn from_vec(canvas: Canvas, data: Vec<Rgb>) -> Option<Self> {
        (data.len() == canvas.len()).then_some(Self { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Rgb {
        self.data[index]
    }

    #[inline]
    pub fn at(&self, p: UVec2) -> Rgb {
        self.data[self.canvas.index(p)]
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.data
    }

    /// Interleaved `r, g, b` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.data.iter().flatten().copied().collect()
    }

    pub fn into_inner(self) -> Vec<Rgb> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattening_is_interleaved() {
        let canvas = Canvas::new(2, 1).unwrap();
        let px = PixelBuffer::from_vec(canvas, vec![[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(px.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(px.at(UVec2::new(1, 0)), [4, 5, 6]);
        assert!(PixelBuffer::from_vec(canvas, vec![[0; 3]]).is_none());
    }
}
