//! Visit-order storage for the similarity walk.
use glam::UVec2;

use crate::canvas::Canvas;

/// Per-pixel visit rank: `0` is unvisited, `1..=N` is the visit order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankBuffer {
    canvas: Canvas,
    ranks: Vec<usize>,
    visited: usize,
}

impl RankBuffer {
    /// An all-unvisited buffer.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ranks: vec![0; canvas.len()],
            visited: 0,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.ranks[index]
    }

    #[inline]
    pub fn at(&self, p: UVec2) -> usize {
        self.ranks[self.canvas.index(p)]
    }

    #[inline]
    pub fn is_visited(&self, index: usize) -> bool {
        self.ranks[index] > 0
    }

    /// Assigns the next rank to `index` and returns it.
    pub(crate) fn visit(&mut self, index: usize) -> usize {
        debug_assert!(!self.is_visited(index), "pixel {index} visited twice");
        self.visited += 1;
        self.ranks[index] = self.visited;
        self.visited
    }

    /// Number of pixels visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn is_complete(&self) -> bool {
        self.visited == self.ranks.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.ranks
    }

    /// `rank / N`, in `[0, 1]`. The last visited pixel maps to exactly `1.0`.
    pub fn normalized(&self, index: usize) -> f64 {
        self.ranks[index] as f64 / self.ranks.len() as f64
    }

    /// Position holding rank 1, if any.
    pub fn start(&self) -> Option<UVec2> {
        self.ranks
            .iter()
            .position(|&r| r == 1)
            .map(|i| self.canvas.position(i))
    }

    /// Visited positions ordered by rank.
    pub fn path(&self) -> Vec<UVec2> {
        let mut order: Vec<Option<UVec2>> = vec![None; self.visited];
        for (i, &r) in self.ranks.iter().enumerate() {
            if r > 0 && r <= self.visited {
                order[r - 1] = Some(self.canvas.position(i));
            }
        }
        order.into_iter().flatten().collect()
    }

    /// Whether the ranks are exactly a permutation of `1..=N`.
    pub fn is_permutation(&self) -> bool {
        let n = self.ranks.len();
        let mut seen = vec![false; n];
        for &r in &self.ranks {
            if r == 0 || r > n || seen[r - 1] {
                return false;
            }
            seen[r - 1] = true;
        }
        true
    }
}
