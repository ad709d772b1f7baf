//! Game status state machine.
//!
//! Five states with previous-status memory. Transitions not listed on a
//! method are no-ops; the machine never panics on misuse. Mouse-control mode
//! enters as an explicit guard parameter rather than being read from shared
//! state, keeping the full transition table in one place.

use serde::{Deserialize, Serialize};

/// The game's top-level status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Start,
    Playing,
    Pause,
    GameOver,
    ExitConfirmation,
}

/// What an escape keypress resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeOutcome {
    /// Mouse-control mode was on; it should be disabled instead of pausing.
    DisableMouseControl,
    /// Playing -> Pause.
    Paused,
    /// Pause -> Playing.
    Resumed,
    /// Escape had no effect in the current state.
    Ignored,
}

/// Status machine with one remembered previous status.
///
/// The previous status is what `cancel_exit` and post-GameOver branching key
/// off: an exit confirmation entered from Start has no cancel-back path.
#[derive(Clone, Debug)]
pub struct StatusMachine {
    current: GameStatus,
    previous: GameStatus,
}

impl Default for StatusMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusMachine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: GameStatus::Start,
            previous: GameStatus::Start,
        }
    }

    #[must_use]
    pub fn current(&self) -> GameStatus {
        self.current
    }

    /// Check the remembered previous status.
    #[must_use]
    pub fn was_previous(&self, status: GameStatus) -> bool {
        self.previous == status
    }

    /// Force a transition, remembering the outgoing status.
    ///
    /// Guarded transitions below are preferred; this is for transitions the
    /// model itself decides (new game, game over, return to start).
    pub fn transition(&mut self, next: GameStatus) {
        self.previous = self.current;
        self.current = next;
    }

    /// Resolve an escape keypress.
    ///
    /// Mouse-control mode wins over everything: escape then only disables
    /// the mode. Otherwise Playing pauses and Pause resumes.
    pub fn handle_escape(&mut self, mouse_control: bool) -> EscapeOutcome {
        if mouse_control {
            return EscapeOutcome::DisableMouseControl;
        }

        match self.current {
            GameStatus::Playing => {
                self.transition(GameStatus::Pause);
                EscapeOutcome::Paused
            }
            GameStatus::Pause => {
                self.transition(GameStatus::Playing);
                EscapeOutcome::Resumed
            }
            _ => EscapeOutcome::Ignored,
        }
    }

    /// Pause -> Playing. Returns whether the transition happened.
    pub fn resume(&mut self) -> bool {
        if self.current == GameStatus::Pause {
            self.transition(GameStatus::Playing);
            true
        } else {
            false
        }
    }

    /// Start/Playing -> ExitConfirmation. Returns whether it happened.
    pub fn show_exit_confirmation(&mut self) -> bool {
        match self.current {
            GameStatus::Start | GameStatus::Playing => {
                self.transition(GameStatus::ExitConfirmation);
                true
            }
            _ => false,
        }
    }

    /// ExitConfirmation -> Playing, only when the confirmation was entered
    /// from Playing. Entered from Start there is no cancel-back path.
    pub fn cancel_exit(&mut self) -> bool {
        if self.current == GameStatus::ExitConfirmation && self.previous == GameStatus::Playing {
            self.transition(GameStatus::Playing);
            true
        } else {
            false
        }
    }
}
