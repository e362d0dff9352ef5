//! Canvas dimensions and row-major index math.
//!
//! [`Canvas`] is validated at construction, so every buffer in the crate can assume
//! `width >= 1`, `height >= 1` and that `width * height` fits in `usize`.
use glam::{I64Vec2, UVec2};

use crate::error::{Error, Result};

/// Width and height of a generated image, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u32, u32)", into = "(u32, u32)"))]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Creates a canvas, rejecting zero dimensions and pixel counts that overflow `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be at least 1x1, got {width}x{height}"
            )));
        }
        if (width as usize).checked_mul(height as usize).is_none() {
            return Err(Error::InvalidConfig(format!(
                "canvas {width}x{height} is too large"
            )));
        }
        Ok(Self { width, height })
    }

    /// Creates a canvas from signed dimensions, as received from loosely typed callers.
    pub fn from_signed(width: i64, height: i64) -> Result<Self> {
        let w = u32::try_from(width).map_err(|_| {
            Error::InvalidConfig(format!("canvas width must be in 1..=u32::MAX, got {width}"))
        })?;
        let h = u32::try_from(height).map_err(|_| {
            Error::InvalidConfig(format!(
                "canvas height must be in 1..=u32::MAX, got {height}"
            ))
        })?;
        Self::new(w, h)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Total pixel count `N`.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always `false`; a validated canvas holds at least one pixel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major index `y * width + x`.
    #[inline]
    pub fn index(&self, p: UVec2) -> usize {
        debug_assert!(p.x < self.width && p.y < self.height);
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Inverse of [`Canvas::index`].
    #[inline]
    pub fn position(&self, index: usize) -> UVec2 {
        debug_assert!(index < self.len());
        let w = self.width as usize;
        UVec2::new((index % w) as u32, (index / w) as u32)
    }

    /// Whether a signed position lies inside the canvas.
    #[inline]
    pub fn contains(&self, p: I64Vec2) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < i64::from(self.width) && p.y < i64::from(self.height)
    }

    /// Index of a signed position, or `None` when it falls outside.
    #[inline]
    pub fn checked_index(&self, p: I64Vec2) -> Option<usize> {
        if self.contains(p) {
            Some(self.index(p.as_uvec2()))
        } else {
            None
        }
    }

    /// Iterates pixel positions in raster order.
    pub fn positions(&self) -> impl Iterator<Item = UVec2> + '_ {
        (0..self.len()).map(move |i| self.position(i))
    }
}

impl TryFrom<(u32, u32)> for Canvas {
    type Error = Error;

    fn try_from((width, height): (u32, u32)) -> Result<Self> {
        Canvas::new(width, height)
    }
}

impl From<Canvas> for (u32, u32) {
    fn from(canvas: Canvas) -> Self {
        (canvas.width, canvas.height)
    }
}

impl TryFrom<(i64, i64)> for Canvas {
    type Error = Error;

    fn try_from((width, height): (i64, i64)) -> Result<Self> {
        Canvas::from_signed(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_negative_dimensions_are_rejected() {
        assert!(matches!(Canvas::new(0, 5), Err(Error::InvalidConfig(_))));
        assert!(matches!(Canvas::new(5, 0), Err(Error::InvalidConfig(_))));
        assert!(matches!(
            Canvas::from_signed(-1, 4),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Canvas::try_from((0i64, 5i64)),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn index_position_roundtrip() {
        let canvas = Canvas::new(5, 3).unwrap();
        assert_eq!(canvas.len(), 15);
        for i in 0..canvas.len() {
            assert_eq!(canvas.index(canvas.position(i)), i);
        }
        assert_eq!(canvas.index(UVec2::new(4, 2)), 14);
        assert_eq!(canvas.position(7), UVec2::new(2, 1));
    }

    #[test]
    fn contains_checks_all_edges() {
        let canvas = Canvas::new(4, 2).unwrap();
        assert!(canvas.contains(I64Vec2::new(0, 0)));
        assert!(canvas.contains(I64Vec2::new(3, 1)));
        assert!(!canvas.contains(I64Vec2::new(-1, 0)));
        assert!(!canvas.contains(I64Vec2::new(0, -1)));
        assert!(!canvas.contains(I64Vec2::new(4, 0)));
        assert!(!canvas.contains(I64Vec2::new(0, 2)));
        assert_eq!(canvas.checked_index(I64Vec2::new(1, 1)), Some(5));
        assert_eq!(canvas.checked_index(I64Vec2::new(9, 9)), None);
    }

    #[test]
    fn positions_follow_raster_order() {
        let canvas = Canvas::new(2, 2).unwrap();
        let ps: Vec<_> = canvas.positions().collect();
        assert_eq!(
            ps,
            vec![
                UVec2::new(0, 0),
                UVec2::new(1, 0),
                UVec2::new(0, 1),
                UVec2::new(1, 1)
            ]
        );
    }
}
