//! Special-effect resolution and bubble generation.
//!
//! `resolver` handles what happens when a bomb or rocket lands and how box
//! rewards are drawn; `spawn` owns bubble generation and the box density
//! rules it enforces.

mod resolver;
mod spawn;

pub use resolver::{draw_reward, explode_bomb, launch_rocket, REWARD_WEIGHTS};
pub use spawn::{
    can_place_box, generate_into, random_color, BOX_SPACING_RADIUS, BOX_SPAWN_CHANCE,
    MAX_BOXES_ON_FIELD,
};
