//! Bubble generation and box placement rules.
//!
//! Used for periodic new-row injection and for initial field population.
//! Box density is enforced here, at spawn time only: never more than
//! [`MAX_BOXES_ON_FIELD`] boxes, never two boxes within Chebyshev radius
//! [`BOX_SPACING_RADIUS`] of each other.

use crate::core::{BubbleColor, BubbleKind, GameRng};
use crate::grid::BubbleGrid;

/// Chance a generated cell holds a box instead of a colored bubble.
pub const BOX_SPAWN_CHANCE: f64 = 0.10;
/// Maximum simultaneous boxes on the field.
pub const MAX_BOXES_ON_FIELD: usize = 5;
/// Minimum Chebyshev spacing between boxes.
pub const BOX_SPACING_RADIUS: usize = 2;

/// Uniformly random bubble color.
#[must_use]
pub fn random_color(rng: &mut GameRng) -> BubbleColor {
    BubbleColor::ALL[rng.gen_range_usize(0..BubbleColor::ALL.len())]
}

/// Generate a bubble into an empty cell: a box with small probability when
/// the density constraint allows, otherwise a random-colored normal bubble.
pub fn generate_into(grid: &mut BubbleGrid, rng: &mut GameRng, row: usize, col: usize) {
    if rng.gen_bool(BOX_SPAWN_CHANCE) && can_place_box(grid, row, col) {
        grid.place(row, col, BubbleColor::Red, BubbleKind::Box);
    } else {
        let color = random_color(rng);
        grid.place(row, col, color, BubbleKind::Normal);
    }
}

/// Whether the box density constraint admits a box at (row, col).
#[must_use]
pub fn can_place_box(grid: &BubbleGrid, row: usize, col: usize) -> bool {
    if grid.box_count() >= MAX_BOXES_ON_FIELD {
        return false;
    }

    let row_lo = row.saturating_sub(BOX_SPACING_RADIUS);
    let col_lo = col.saturating_sub(BOX_SPACING_RADIUS);
    for r in row_lo..=(row + BOX_SPACING_RADIUS).min(grid.rows() - 1) {
        for c in col_lo..=(col + BOX_SPACING_RADIUS).min(grid.cols() - 1) {
            if grid
                .get(r, c)
                .is_some_and(|bubble| bubble.kind == BubbleKind::Box)
            {
                return false;
            }
        }
    }

    true
}
