//! Connected-group search.
//!
//! BFS over 4-directional neighbors from a landing cell. A normal bubble
//! joins an expansion iff its color matches; a chameleon joins any expansion
//! unconditionally and then pulls in its own neighbors' groups, each under
//! that neighbor's color - so chameleons bridge otherwise-disjoint color
//! groups instead of adopting one fixed color. Boxes never join and block
//! propagation through their cell.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{Bubble, BubbleColor, BubbleKind};
use crate::grid::BubbleGrid;

/// Minimum group size for removal.
pub const MIN_GROUP_SIZE: usize = 3;

/// The full connected group seeded at (row, col).
///
/// Empty when the seed cell is empty or holds a box. Membership dedup
/// terminates the search even when color expansions overlap through
/// chameleon bridges.
#[must_use]
pub fn find_group(grid: &BubbleGrid, row: usize, col: usize) -> Vec<Bubble> {
    let Some(seed) = grid.get(row, col) else {
        return Vec::new();
    };
    if seed.kind == BubbleKind::Box {
        return Vec::new();
    }

    let mut members: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut group = Vec::new();

    if seed.kind == BubbleKind::Chameleon {
        absorb_chameleon(grid, row, col, &mut members, &mut group);
    } else {
        expand_color(grid, row, col, seed.color, &mut members, &mut group);
    }

    group
}

/// BFS expansion under one color. Chameleons encountered mid-expansion are
/// absorbed as bridges, which may recurse into further color expansions.
fn expand_color(
    grid: &BubbleGrid,
    start_row: usize,
    start_col: usize,
    color: BubbleColor,
    members: &mut FxHashSet<(usize, usize)>,
    group: &mut Vec<Bubble>,
) {
    let mut queue = VecDeque::new();
    queue.push_back((start_row, start_col));

    while let Some((row, col)) = queue.pop_front() {
        if members.contains(&(row, col)) {
            continue;
        }
        let Some(bubble) = grid.get(row, col) else {
            continue;
        };
        match bubble.kind {
            BubbleKind::Box => continue,
            BubbleKind::Chameleon => {
                absorb_chameleon(grid, row, col, members, group);
                continue;
            }
            _ if bubble.color != color => continue,
            _ => {}
        }

        members.insert((row, col));
        group.push(bubble);

        for (nr, nc) in grid.neighbors(row, col) {
            if !members.contains(&(nr, nc)) {
                queue.push_back((nr, nc));
            }
        }
    }
}

/// Absorb a chameleon and bridge into each neighbor's own group.
fn absorb_chameleon(
    grid: &BubbleGrid,
    row: usize,
    col: usize,
    members: &mut FxHashSet<(usize, usize)>,
    group: &mut Vec<Bubble>,
) {
    if !members.insert((row, col)) {
        return;
    }
    // Caller verified occupancy; re-read for the group entry.
    let Some(bubble) = grid.get(row, col) else {
        return;
    };
    group.push(bubble);

    for (nr, nc) in grid.neighbors(row, col) {
        if members.contains(&(nr, nc)) {
            continue;
        }
        let Some(neighbor) = grid.get(nr, nc) else {
            continue;
        };
        match neighbor.kind {
            BubbleKind::Box => {}
            BubbleKind::Chameleon => absorb_chameleon(grid, nr, nc, members, group),
            _ => expand_color(grid, nr, nc, neighbor.color, members, group),
        }
    }
}
