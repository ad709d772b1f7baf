//! Special-effect resolution: bomb blasts, rocket launches, box rewards.
//!
//! Bombs and rockets bypass matching entirely. A bomb clears immediately; a
//! rocket only computes and publishes its target list - destruction is
//! driven from outside, one reported batch at a time, with the model as a
//! passive responder.

use smallvec::SmallVec;

use crate::core::{BubbleKind, GameRng};
use crate::grid::BubbleGrid;

/// Reward kinds and weights for a dislodged box, drawn in this order.
pub const REWARD_WEIGHTS: [(BubbleKind, f32); 3] = [
    (BubbleKind::Chameleon, 0.5),
    (BubbleKind::Bomb, 0.3),
    (BubbleKind::Rocket, 0.2),
];

/// Detonate a bomb at (row, col): clear its own cell and every occupied
/// cell within Chebyshev radius 1. Returns the cleared neighbor cells.
pub fn explode_bomb(
    grid: &mut BubbleGrid,
    row: usize,
    col: usize,
) -> SmallVec<[(usize, usize); 8]> {
    let mut cleared = SmallVec::new();

    let row_lo = row.saturating_sub(1);
    let col_lo = col.saturating_sub(1);
    for r in row_lo..=(row + 1).min(grid.rows() - 1) {
        for c in col_lo..=(col + 1).min(grid.cols() - 1) {
            if (r, c) == (row, col) {
                continue;
            }
            if grid.remove(r, c).is_some() {
                cleared.push((r, c));
            }
        }
    }

    grid.remove(row, col);
    cleared
}

/// Launch a rocket at (row, col): clear the rocket's own cell and return
/// every occupied cell in its row and column, excluding itself. The targets
/// stay on the grid until the collaborator reports reaching them.
#[must_use]
pub fn launch_rocket(grid: &mut BubbleGrid, row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut targets = Vec::new();

    for r in 0..grid.rows() {
        if r != row && grid.is_occupied(r, col) {
            targets.push((r, col));
        }
    }
    for c in 0..grid.cols() {
        if c != col && grid.is_occupied(row, c) {
            targets.push((row, c));
        }
    }

    grid.remove(row, col);
    targets
}

/// Draw one box-reward kind by weight. Falls back to a bomb if the weighted
/// draw fails, which the constant table never lets happen.
pub fn draw_reward(rng: &mut GameRng) -> BubbleKind {
    let weights: SmallVec<[f32; 3]> = REWARD_WEIGHTS.iter().map(|&(_, w)| w).collect();
    rng.choose_weighted(&weights)
        .map_or(BubbleKind::Bomb, |idx| REWARD_WEIGHTS[idx].0)
}
