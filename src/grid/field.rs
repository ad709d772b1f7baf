//! The bubble grid arena.
//!
//! A fixed rows x cols matrix of optional bubbles stored as one flat
//! `Vec<Option<Bubble>>` indexed `row * cols + col`. The field is 13x16; the
//! start-screen backdrop reuses the same type at 14x16.
//!
//! Invariants:
//! - a non-empty cell's stored (row, col) always equals its arena position;
//! - row shifts are atomic: collaborators never observe a partial shift.
//!
//! Caller-facing operations (`place`, `drop_target`) absorb misuse silently.
//! Raw indexing asserts: an out-of-range row or column reaching the arena is
//! a programming error, not collaborator input.

use smallvec::SmallVec;

use crate::core::{Bubble, BubbleColor, BubbleKind};

/// Playfield height, including the reserved bottom row.
pub const FIELD_ROWS: usize = 13;
/// Playfield width.
pub const FIELD_COLS: usize = 16;
/// Start-screen backdrop height.
pub const BACKDROP_ROWS: usize = 14;

/// Owned arena of optional bubbles.
#[derive(Clone, Debug)]
pub struct BubbleGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Bubble>>,
}

impl BubbleGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether (row, col) addresses a cell of this grid at all.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows, "row {} out of range 0..{}", row, self.rows);
        assert!(col < self.cols, "col {} out of range 0..{}", col, self.cols);
        row * self.cols + col
    }

    /// The bubble at (row, col), by value.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Bubble> {
        self.cells[self.idx(row, col)]
    }

    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Place a bubble. Silent no-op when the cell is occupied or out of
    /// bounds; the stored bubble's (row, col) always match the cell.
    pub fn place(&mut self, row: usize, col: usize, color: BubbleColor, kind: BubbleKind) {
        if !self.contains(row, col) {
            return;
        }
        let idx = self.idx(row, col);
        if self.cells[idx].is_some() {
            return;
        }
        self.cells[idx] = Some(Bubble::with_kind(color, row, col, kind));
    }

    /// Clear a cell, returning what it held.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<Bubble> {
        let idx = self.idx(row, col);
        self.cells[idx].take()
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Shift every row down by one, leaving row 0 empty.
    ///
    /// Each surviving bubble's `row` field follows it down. The caller fills
    /// row 0 before handing control back, so the shift is atomic as far as
    /// collaborators can observe.
    pub fn shift_rows_down(&mut self) {
        for row in (1..self.rows).rev() {
            for col in 0..self.cols {
                let above = self.idx(row - 1, col);
                let here = self.idx(row, col);
                let moved = self.cells[above].take().map(|mut bubble| {
                    bubble.row = row;
                    bubble
                });
                self.cells[here] = moved;
            }
        }
    }

    /// Landing row for a shot into `col`: one past the deepest occupied
    /// cell, or row 0 for an empty column. `None` when the landing row would
    /// be the reserved last row - that row is the game-over trigger and
    /// never a legal target.
    #[must_use]
    pub fn drop_target(&self, col: usize) -> Option<usize> {
        assert!(col < self.cols, "col {} out of range 0..{}", col, self.cols);

        for row in (0..=self.rows - 2).rev() {
            if self.is_occupied(row, col) {
                let target = row + 1;
                return if target >= self.rows - 1 {
                    None
                } else {
                    Some(target)
                };
            }
        }

        Some(0)
    }

    /// In-bounds 4-neighborhood of a cell.
    #[must_use]
    pub fn neighbors(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 4]> {
        let mut out = SmallVec::new();
        if row > 0 {
            out.push((row - 1, col));
        }
        if row + 1 < self.rows {
            out.push((row + 1, col));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        if col + 1 < self.cols {
            out.push((row, col + 1));
        }
        out
    }

    /// Iterate over every bubble on the grid, by value.
    pub fn occupied(&self) -> impl Iterator<Item = Bubble> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Rows (excluding the reserved last row) holding at least one bubble.
    /// Feeds the row-spawn interval formula.
    #[must_use]
    pub fn filled_row_count(&self) -> usize {
        (0..self.rows - 1)
            .filter(|&row| (0..self.cols).any(|col| self.is_occupied(row, col)))
            .count()
    }

    /// Number of box bubbles currently on the grid.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.occupied()
            .filter(|bubble| bubble.kind == BubbleKind::Box)
            .count()
    }

    /// Whether any cell of the reserved last row is occupied.
    #[must_use]
    pub fn last_row_occupied(&self) -> bool {
        (0..self.cols).any(|col| self.is_occupied(self.rows - 1, col))
    }
}
