//! Square-ring candidate enumeration.
//!
//! The enumeration order is part of the output contract: ties in the walk are broken
//! by the first candidate produced here.
use glam::I64Vec2;

/// Points on the boundary of the `window`-wide square centered on `center`.
///
/// With `h = window / 2`, for each `i` in `-h..=h` the four points
/// `(x+i, y-h)`, `(x+i, y+h)`, `(x-h, y+i)`, `(x+h, y+i)` are produced in that order.
/// Corners appear twice.
pub fn ring_candidates(center: I64Vec2, window: u64) -> impl Iterator<Item = I64Vec2> {
    let h = (window / 2) as i64;
    (-h..=h).flat_map(move |i| {
        [
            I64Vec2::new(center.x + i, center.y - h),
            I64Vec2::new(center.x + i, center.y + h),
            I64Vec2::new(center.x - h, center.y + i),
            I64Vec2::new(center.x + h, center.y + i),
        ]
    })
}
