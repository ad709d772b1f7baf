//! # bubble-field
//!
//! A falling-bubble puzzle simulation engine with deterministic replay.
//!
//! The crate owns the bubble matrix, the player's shot queue, the
//! match/gravity algorithms, special-effect resolution, and the game status
//! state machine. It renders nothing and owns no clock: collaborators feed
//! it time deltas and animation-complete notifications and drain typed
//! events back out.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, audio, input, or asset concerns anywhere.
//!    Collaborators observe the engine exclusively through drained events
//!    and read accessors, always by value.
//!
//! 2. **Deterministic**: One injected, seedable RNG drives every random
//!    decision. A seed fully determines a game's spawn and reward sequence.
//!
//! 3. **One phase at a time**: Deferred consequences (floating checks,
//!    game-over checks, box rewards) are tracked by a single `SimPhase`
//!    value, so illegal pending-state combinations cannot be represented.
//!
//! 4. **Silent misuse, loud invariants**: Collaborator misuse (shooting
//!    while paused, stale animation acks, out-of-range positioning) is a
//!    defined no-op. Out-of-range raw grid indexing is a programming error
//!    and asserts.
//!
//! ## Modules
//!
//! - `core`: bubble values, RNG, status machine, simulation phase
//! - `grid`: the bubble arena - placement, drop targets, row shifts
//! - `matching`: connected-group search and floating-island detection
//! - `effects`: bomb/rocket resolution, box rewards, bubble generation
//! - `player`: the shot queue
//! - `clock`: time-delta adapter for row spawns and backdrop scrolling
//! - `events`: typed outbound event queue
//! - `model`: the composition root

pub mod clock;
pub mod core;
pub mod effects;
pub mod events;
pub mod grid;
pub mod matching;
pub mod model;
pub mod player;

// Re-export commonly used types
pub use crate::core::{
    placement_offset, Bubble, BubbleColor, BubbleKind, BubbleSnapshot, EscapeOutcome, GameRng,
    GameRngState, GameStatus, RocketDirection, SimPhase, StatusMachine,
};

pub use crate::clock::{ClockTrigger, RowSpawner};
pub use crate::events::{EventQueue, GameEvent};
pub use crate::grid::{BubbleGrid, BACKDROP_ROWS, FIELD_COLS, FIELD_ROWS};
pub use crate::matching::{find_floating, find_group, MIN_GROUP_SIZE};
pub use crate::model::GameModel;
pub use crate::player::{MoveDirection, PlayerQueue};
