//! Bubble value types: colors, kinds, and the placement-offset table.
//!
//! A `Bubble` is a plain value. The grid arena and the player queue own their
//! own copies, and everything handed to collaborators travels as a by-value
//! [`BubbleSnapshot`] - no shared references escape the engine.

use serde::{Deserialize, Serialize};

/// Bubble color. Colors are compared for identity only; there is no ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BubbleColor {
    Blue,
    Cyan,
    Green,
    Purple,
    Red,
    Yellow,
}

impl BubbleColor {
    /// Every color, in declaration order. Used for uniform draws.
    pub const ALL: [BubbleColor; 6] = [
        BubbleColor::Blue,
        BubbleColor::Cyan,
        BubbleColor::Green,
        BubbleColor::Purple,
        BubbleColor::Red,
        BubbleColor::Yellow,
    ];
}

/// Bubble kind.
///
/// Special kinds change what happens when the bubble lands or is dislodged:
/// - `Box`: never matches, blocks match propagation, grants a reward when
///   dropped by gravity.
/// - `Bomb`: clears its 8-neighborhood on landing, bypassing matching.
/// - `Rocket`: clears its row and column on landing, bypassing matching.
/// - `Chameleon`: joins any adjacent group regardless of color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BubbleKind {
    Normal,
    Box,
    Bomb,
    Rocket,
    Chameleon,
}

/// Sprite-facing rocket orientation.
///
/// Collaborators pick one for display; the simulation only cares that a
/// bubble is a `Rocket` and never reads the direction for gameplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RocketDirection {
    Box,
    Up,
    Left,
    Right,
}

/// A grid occupant.
///
/// `row` is updated in place when rows shift down; `col` never changes after
/// creation. A bubble whose cell is cleared is simply dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bubble {
    pub color: BubbleColor,
    pub kind: BubbleKind,
    pub row: usize,
    pub col: usize,
    /// Display orientation for rockets; `None` until a collaborator picks one.
    pub rocket_dir: Option<RocketDirection>,
}

impl Bubble {
    /// Create a normal bubble.
    #[must_use]
    pub fn new(color: BubbleColor, row: usize, col: usize) -> Self {
        Self::with_kind(color, row, col, BubbleKind::Normal)
    }

    /// Create a bubble of a specific kind.
    #[must_use]
    pub fn with_kind(color: BubbleColor, row: usize, col: usize, kind: BubbleKind) -> Self {
        Self {
            color,
            kind,
            row,
            col,
            rocket_dir: None,
        }
    }

    /// Anchor offset for this bubble. See [`placement_offset`].
    #[must_use]
    pub fn offset(&self) -> (i8, i8) {
        placement_offset(self.kind, self.rocket_dir)
    }
}

/// Per-kind anchor offset used when positioning a bubble on a cell.
///
/// Bomb and oriented rocket art hangs over the cell boundary, so their
/// anchors shift. A rocket with no orientation yet sits flush.
#[must_use]
pub fn placement_offset(kind: BubbleKind, rocket_dir: Option<RocketDirection>) -> (i8, i8) {
    match kind {
        BubbleKind::Bomb => (0, -5),
        BubbleKind::Rocket if rocket_dir.is_some() => (-1, -1),
        _ => (0, 0),
    }
}

/// By-value copy of a bubble's observable state, as carried in events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleSnapshot {
    pub row: usize,
    pub col: usize,
    pub color: BubbleColor,
    pub kind: BubbleKind,
}

impl From<Bubble> for BubbleSnapshot {
    fn from(bubble: Bubble) -> Self {
        Self {
            row: bubble.row,
            col: bubble.col,
            color: bubble.color,
            kind: bubble.kind,
        }
    }
}
