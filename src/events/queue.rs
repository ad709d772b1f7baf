//! Outbound event channel.
//!
//! The model pushes typed events into a queue and collaborators drain it
//! after each call. Payloads are by-value snapshots, never references into
//! the grid.

use serde::{Deserialize, Serialize};

use crate::core::{BubbleColor, BubbleKind, BubbleSnapshot, GameStatus};
use crate::player::MoveDirection;

/// Everything the engine tells its collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The status machine moved to a new state.
    StatusChanged(GameStatus),
    /// A shot bubble was placed; the collaborator animates the flight and
    /// calls back `on_bubble_landed`.
    BubbleShot(BubbleSnapshot),
    /// A group matched and was removed.
    BubblesMatched(Vec<BubbleSnapshot>),
    /// Unsupported bubbles were removed by the floating check.
    BubblesFloated(Vec<BubbleSnapshot>),
    /// The field shifted down and grew a fresh top row.
    NewRow,
    /// The game ended; the field falls away.
    GameOverFall,
    /// The start-screen backdrop is dropping into the field.
    StartBackgroundFall,
    /// The start-screen backdrop scrolled one row.
    StartBackgroundChanged,
    /// Mouse-control mode toggled.
    MouseControlChanged(bool),
    /// A bomb detonated at (row, col).
    BombExploded { row: usize, col: usize },
    /// A rocket launched; `targets` are the cells it will destroy as the
    /// collaborator reports reaching them.
    RocketLaunched {
        row: usize,
        col: usize,
        targets: Vec<(usize, usize)>,
    },
    /// The player moved between columns.
    PlayerMoved {
        from: usize,
        to: usize,
        direction: MoveDirection,
    },
    /// The shot queue changed (shoot, swap, reward injection, reset).
    QueueChanged {
        current: (BubbleColor, BubbleKind),
        next: (BubbleColor, BubbleKind),
    },
}

/// FIFO queue of pending events.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
