//! Typed outbound events consumed by rendering/sound collaborators.

mod queue;

pub use queue::{EventQueue, GameEvent};
