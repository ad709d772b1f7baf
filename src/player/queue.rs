//! The player's shot queue: position plus current/next bubble slots.

use serde::{Deserialize, Serialize};

use crate::core::{BubbleColor, BubbleKind, GameRng};
use crate::effects::random_color;

/// Direction of a relative player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Shot queue state. Relative moves wrap around the field edges; absolute
/// positioning is clamped (silently rejected out of range).
#[derive(Clone, Debug)]
pub struct PlayerQueue {
    columns: usize,
    position: usize,
    current_color: BubbleColor,
    current_kind: BubbleKind,
    next_color: BubbleColor,
    next_kind: BubbleKind,
}

impl PlayerQueue {
    /// Create a queue at position 0 with two random normal bubbles.
    #[must_use]
    pub fn new(columns: usize, rng: &mut GameRng) -> Self {
        assert!(columns > 0, "player queue needs at least one column");
        Self {
            columns,
            position: 0,
            current_color: random_color(rng),
            current_kind: BubbleKind::Normal,
            next_color: random_color(rng),
            next_kind: BubbleKind::Normal,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn current(&self) -> (BubbleColor, BubbleKind) {
        (self.current_color, self.current_kind)
    }

    #[must_use]
    pub fn next(&self) -> (BubbleColor, BubbleKind) {
        (self.next_color, self.next_kind)
    }

    /// Move one column left, wrapping at the edge. Returns (old, new).
    pub fn move_left(&mut self) -> (usize, usize) {
        let old = self.position;
        self.position = if self.position == 0 {
            self.columns - 1
        } else {
            self.position - 1
        };
        (old, self.position)
    }

    /// Move one column right, wrapping at the edge. Returns (old, new).
    pub fn move_right(&mut self) -> (usize, usize) {
        let old = self.position;
        self.position = (self.position + 1) % self.columns;
        (old, self.position)
    }

    /// Set the position directly. Out-of-range and same-position requests
    /// are rejected; otherwise returns (old, new).
    pub fn set_position(&mut self, position: usize) -> Option<(usize, usize)> {
        if position >= self.columns || position == self.position {
            return None;
        }
        let old = self.position;
        self.position = position;
        Some((old, position))
    }

    /// Launch the current bubble: it is returned, the next slot promotes to
    /// current, and a fresh random normal bubble fills the next slot.
    pub fn shoot(&mut self, rng: &mut GameRng) -> (BubbleColor, BubbleKind) {
        let launched = (self.current_color, self.current_kind);

        self.current_color = self.next_color;
        self.current_kind = self.next_kind;
        self.next_color = random_color(rng);
        self.next_kind = BubbleKind::Normal;

        launched
    }

    /// Exchange the current and next slots in place.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current_color, &mut self.next_color);
        std::mem::swap(&mut self.current_kind, &mut self.next_kind);
    }

    /// Overwrite the current slot with a special kind, re-rolling its color.
    /// The next slot is untouched.
    pub fn inject_special(&mut self, kind: BubbleKind, rng: &mut GameRng) {
        self.current_color = random_color(rng);
        self.current_kind = kind;
    }

    /// Back to position 0 with two fresh random normal bubbles.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.position = 0;
        self.current_color = random_color(rng);
        self.current_kind = BubbleKind::Normal;
        self.next_color = random_color(rng);
        self.next_kind = BubbleKind::Normal;
    }
}
