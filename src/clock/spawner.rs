//! Time-delta adapter: periodic row spawns and backdrop scrolling.
//!
//! The engine never reads a clock. Collaborators feed `tick` elapsed-time
//! deltas and the spawner decides when a trigger fires: while Playing, a new
//! row on a score/fill-dependent interval; while on the start screen, a
//! backdrop shift every two seconds. Any other status resets the row timer.

use crate::core::GameStatus;

const BASE_ROW_INTERVAL: f32 = 10.0;
const ROW_FILL_FACTOR: f32 = 0.04;
const SCORE_FACTOR: f32 = 0.000_08;
// The lower clamp exceeds the base interval, so the base is never reached
// at low fill/score.
const MIN_ROW_INTERVAL: f32 = 15.0;
const MAX_ROW_INTERVAL: f32 = 45.0;
const BACKDROP_SHIFT_INTERVAL: f32 = 2.0;
/// Largest delta accepted per tick; a stalled caller cannot deliver a giant
/// catch-up step.
const MAX_TICK_DELTA: f32 = 0.033;

/// What a tick resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockTrigger {
    /// Time to shift the field down and spawn a fresh top row.
    AddRow,
    /// Time to scroll the start-screen backdrop.
    ShiftBackdrop,
}

/// Accumulates tick deltas into spawn triggers.
#[derive(Clone, Debug, Default)]
pub struct RowSpawner {
    since_row: f32,
    since_backdrop: f32,
}

impl RowSpawner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds under the given game state.
    pub fn tick(
        &mut self,
        dt: f32,
        status: GameStatus,
        filled_rows: usize,
        score: u32,
    ) -> Option<ClockTrigger> {
        let dt = dt.clamp(0.0, MAX_TICK_DELTA);

        match status {
            GameStatus::Playing => {
                self.since_row += dt;
                if self.since_row >= Self::row_interval(filled_rows, score) {
                    self.since_row = 0.0;
                    return Some(ClockTrigger::AddRow);
                }
            }
            GameStatus::Start => {
                self.since_backdrop += dt;
                if self.since_backdrop >= BACKDROP_SHIFT_INTERVAL {
                    self.since_backdrop = 0.0;
                    return Some(ClockTrigger::ShiftBackdrop);
                }
            }
            _ => {
                self.since_row = 0.0;
            }
        }

        None
    }

    /// Seconds until the next row at the given fill and score.
    ///
    /// Fuller fields slow the cadence down, higher scores speed it up,
    /// clamped to [15, 45].
    #[must_use]
    pub fn row_interval(filled_rows: usize, score: u32) -> f32 {
        let fill_modifier = 1.0 + filled_rows as f32 * ROW_FILL_FACTOR;
        let score_modifier = 1.0 + score as f32 * SCORE_FACTOR;
        let interval = BASE_ROW_INTERVAL * fill_modifier / score_modifier;
        interval.clamp(MIN_ROW_INTERVAL, MAX_ROW_INTERVAL)
    }

    /// Restart the backdrop scroll cadence (e.g. when re-entering Start).
    pub fn reset_backdrop_timer(&mut self) {
        self.since_backdrop = 0.0;
    }
}
