//! Clock adapter converting time deltas into spawn triggers.

mod spawner;

pub use spawner::{ClockTrigger, RowSpawner};
