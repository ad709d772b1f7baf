//! Core engine types: bubbles, RNG, status machine, simulation phase.
//!
//! These are the leaf building blocks everything else composes. None of them
//! know about the grid or the model.

pub mod bubble;
pub mod phase;
pub mod rng;
pub mod status;

pub use bubble::{placement_offset, Bubble, BubbleColor, BubbleKind, BubbleSnapshot, RocketDirection};
pub use phase::SimPhase;
pub use rng::{GameRng, GameRngState};
pub use status::{EscapeOutcome, GameStatus, StatusMachine};
