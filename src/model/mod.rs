//! The game model: composition root, operations, and reentry points.

mod game;

pub use game::GameModel;
