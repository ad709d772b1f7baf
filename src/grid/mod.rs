//! Bubble grid arena: placement, drop targets, row shifts, neighbor queries.

mod field;

pub use field::{BubbleGrid, BACKDROP_ROWS, FIELD_COLS, FIELD_ROWS};
