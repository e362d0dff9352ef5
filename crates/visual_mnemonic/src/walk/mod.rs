//! Greedy similarity walk over the intensity field.
//!
//! Starting from a given pixel, the walk repeatedly steps to the unvisited pixel on the
//! smallest surrounding square ring whose intensity is closest to the current one. When
//! a ring holds no unvisited in-bounds pixel, the ring widens by one pixel on each side
//! and the scan repeats. The result is a [`RankBuffer`] that orders every pixel exactly once.
//!
//! Each step depends on the visited set left by the previous one, so steps run strictly
//! in sequence. A ring search can grow up to the full canvas near the end of a walk; this
//! is expected and bounded by the canvas size.
use glam::UVec2;
use tracing::trace;

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::field::IntensityBuffer;

pub mod rank;
pub mod ring;

pub use rank::RankBuffer;
pub use ring::ring_candidates;

/// First ring width tried at every step.
pub const INITIAL_WINDOW: u64 = 3;

/// Counters collected during a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Moves made (`N - 1` for a complete walk).
    pub steps: usize,
    /// Total number of ring widenings over all steps.
    pub expansions: usize,
    /// Widest ring that had to be scanned.
    pub max_window: u64,
}

/// Orders every pixel of `intensity` into a single path starting at `start`.
pub fn walk(intensity: &IntensityBuffer, start: UVec2) -> Result<RankBuffer> {
    walk_with_stats(intensity, start).map(|(ranks, _)| ranks)
}

/// Like [`walk`], also returning [`WalkStats`].
pub fn walk_with_stats(
    intensity: &IntensityBuffer,
    start: UVec2,
) -> Result<(RankBuffer, WalkStats)> {
    let canvas = intensity.canvas();
    if start.x >= canvas.width() || start.y >= canvas.height() {
        return Err(Error::InvalidConfig(format!(
            "walk start ({}, {}) is outside the {}x{} canvas",
            start.x,
            start.y,
            canvas.width(),
            canvas.height()
        )));
    }

    let mut ranks = RankBuffer::new(canvas);
    let mut stats = WalkStats {
        max_window: INITIAL_WINDOW,
        ..WalkStats::default()
    };

    let mut current = start;
    ranks.visit(canvas.index(current));

    while !ranks.is_complete() {
        current = find_next(canvas, intensity, &ranks, current, &mut stats)?;
        ranks.visit(canvas.index(current));
        stats.steps += 1;
    }

    Ok((ranks, stats))
}

/// Picks the next pixel from `current`: closest intensity on the smallest non-empty ring,
/// first in enumeration order on ties.
fn find_next(
    canvas: Canvas,
    intensity: &IntensityBuffer,
    ranks: &RankBuffer,
    current: UVec2,
    stats: &mut WalkStats,
) -> Result<UVec2> {
    let here = i16::from(intensity.at(current));
    let center = current.as_i64vec2();
    let limit = u64::from(canvas.width().max(canvas.height()));

    let mut window = INITIAL_WINDOW;
    loop {
        let mut best: Option<(u16, usize)> = None;
        for p in ring_candidates(center, window) {
            let Some(index) = canvas.checked_index(p) else {
                continue;
            };
            if ranks.is_visited(index) {
                continue;
            }
            let dist = (i16::from(intensity.get(index)) - here).unsigned_abs();
            if best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, index));
                if dist == 0 {
                    // Nothing later in the ring can beat an exact match.
                    break;
                }
            }
        }

        if let Some((_, index)) = best {
            if window > INITIAL_WINDOW {
                trace!(
                    "Ring search from ({}, {}) widened to {}.",
                    current.x,
                    current.y,
                    window
                );
            }
            stats.max_window = stats.max_window.max(window);
            return Ok(canvas.position(index));
        }

        // Once the half-width reaches the canvas extent, every ring point lies outside.
        let half = window / 2;
        if half >= limit {
            return Err(Error::ExhaustedSearch {
                window,
                visited: ranks.visited(),
                total: canvas.len(),
            });
        }
        window += 2;
        stats.expansions += 1;
    }
}
