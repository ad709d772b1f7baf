//! Floating-island detection.
//!
//! Row 0 is always supported - it models attachment to the field ceiling.
//! A BFS seeded from every occupied row-0 cell marks everything reachable
//! through 4-directional adjacency as supported; occupied cells left
//! unmarked are floating and fall as one batch.

use std::collections::VecDeque;

use crate::core::Bubble;
use crate::grid::BubbleGrid;

/// All floating bubbles on the grid, in row-major order.
///
/// The reserved last row is never reported: nothing legally lands there.
#[must_use]
pub fn find_floating(grid: &BubbleGrid) -> Vec<Bubble> {
    let mut supported = vec![false; grid.rows() * grid.cols()];
    let mut queue = VecDeque::new();

    for col in 0..grid.cols() {
        if grid.is_occupied(0, col) {
            supported[col] = true;
            queue.push_back((0, col));
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        for (nr, nc) in grid.neighbors(row, col) {
            let idx = nr * grid.cols() + nc;
            if !supported[idx] && grid.is_occupied(nr, nc) {
                supported[idx] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    let mut floating = Vec::new();
    for row in 0..grid.rows() - 1 {
        for col in 0..grid.cols() {
            if let Some(bubble) = grid.get(row, col) {
                if !supported[row * grid.cols() + col] {
                    floating.push(bubble);
                }
            }
        }
    }

    floating
}
