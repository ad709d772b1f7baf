//! Match and gravity engines.
//!
//! `group` finds the connected group a landed bubble belongs to; `gravity`
//! finds bubbles left unsupported after a removal. Both are pure reads over
//! the grid - the model decides what to remove and score.

mod gravity;
mod group;

pub use gravity::find_floating;
pub use group::{find_group, MIN_GROUP_SIZE};
