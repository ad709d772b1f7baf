//! Simulation phase: the one thing the engine is currently waiting on.
//!
//! The engine defers consequences (game-over checks, floating checks, box
//! rewards) until a collaborator confirms the matching animation finished.
//! Exactly one phase is active at a time, so illegal flag combinations are
//! unrepresentable, and a completion signal that does not match the active
//! phase is simply stale and ignored.

use serde::{Deserialize, Serialize};

/// The active simulation phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Nothing pending; shots and row spawns are accepted.
    Idle,
    /// A shot bubble has been placed and its flight animation is running.
    /// Blocks row shifts until the landing is acknowledged.
    ShotInFlight,
    /// A new row was spawned; the game-over check runs when the shift
    /// animation completes.
    AwaitingRowAnimation,
    /// Bubbles were removed by a match or a bomb; the floating check runs
    /// when the removal animation completes.
    AwaitingMatchAnimation,
    /// Floating bubbles fell; box rewards are granted when the fall
    /// animation completes.
    AwaitingFloatAnimation { box_rewards: u32 },
    /// A rocket launched; cells are destroyed as the collaborator reports
    /// reaching them, and the floating check runs once none remain.
    AwaitingRocketSteps { remaining: Vec<(usize, usize)> },
}

impl SimPhase {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, SimPhase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_check() {
        assert!(SimPhase::Idle.is_idle());
        assert!(!SimPhase::ShotInFlight.is_idle());
        assert!(!SimPhase::AwaitingFloatAnimation { box_rewards: 0 }.is_idle());
    }
}
