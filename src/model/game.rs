//! The game model: composition root and public operation surface.
//!
//! Owns the field, the start backdrop, the player queue, the status machine,
//! the simulation phase, the clock adapter, and the one RNG. Collaborators
//! drive it through operations and reentry points and read back typed events;
//! nothing here blocks, spawns threads, or touches a clock.
//!
//! ## Deferred consequences
//!
//! Removals and row spawns have consequences (floating checks, game-over
//! checks, box rewards) that only run once the collaborator confirms the
//! matching animation finished. The active [`SimPhase`] records which
//! confirmation is expected; anything else arriving is stale and ignored.

use crate::clock::{ClockTrigger, RowSpawner};
use crate::core::{
    BubbleColor, BubbleKind, BubbleSnapshot, EscapeOutcome, GameRng, GameStatus, SimPhase,
    StatusMachine,
};
use crate::effects;
use crate::events::{EventQueue, GameEvent};
use crate::grid::{BubbleGrid, BACKDROP_ROWS, FIELD_COLS, FIELD_ROWS};
use crate::matching;
use crate::player::{MoveDirection, PlayerQueue};

/// Points per bubble removed by a match.
const POINTS_PER_MATCHED: u32 = 10;
/// Points per non-box bubble removed by the floating check.
const POINTS_PER_DROPPED: u32 = 20;
/// Rows pre-filled when a game begins.
const INITIAL_FILLED_ROWS: usize = 4;

/// The complete simulation.
#[derive(Clone, Debug)]
pub struct GameModel {
    grid: BubbleGrid,
    backdrop: BubbleGrid,
    player: PlayerQueue,
    status: StatusMachine,
    phase: SimPhase,
    spawner: RowSpawner,
    rng: GameRng,
    score: u32,
    mouse_control: bool,
    events: EventQueue,
}

impl GameModel {
    /// Create a model on the start screen with a fully scrolled-in backdrop.
    ///
    /// The seed fully determines every color, box spawn, and reward draw.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);

        let mut backdrop = BubbleGrid::new(BACKDROP_ROWS, FIELD_COLS);
        for row in 0..BACKDROP_ROWS {
            for col in 0..FIELD_COLS {
                let color = effects::random_color(&mut rng);
                backdrop.place(row, col, color, BubbleKind::Normal);
            }
        }

        let player = PlayerQueue::new(FIELD_COLS, &mut rng);

        Self {
            grid: BubbleGrid::new(FIELD_ROWS, FIELD_COLS),
            backdrop,
            player,
            status: StatusMachine::new(),
            phase: SimPhase::Idle,
            spawner: RowSpawner::new(),
            rng,
            score: 0,
            mouse_control: false,
            events: EventQueue::new(),
        }
    }

    // === Read surface ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status.current()
    }

    /// Check the status the machine was in before the current one.
    #[must_use]
    pub fn was_previous_status(&self, status: GameStatus) -> bool {
        self.status.was_previous(status)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> &SimPhase {
        &self.phase
    }

    #[must_use]
    pub fn grid(&self) -> &BubbleGrid {
        &self.grid
    }

    #[must_use]
    pub fn backdrop(&self) -> &BubbleGrid {
        &self.backdrop
    }

    #[must_use]
    pub fn player(&self) -> &PlayerQueue {
        &self.player
    }

    #[must_use]
    pub fn mouse_control_enabled(&self) -> bool {
        self.mouse_control
    }

    /// Take every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Lifecycle ===

    /// Begin a new game: empty field, zero score, fresh queue, phase idle.
    pub fn start_game(&mut self) {
        self.grid.clear();
        self.set_status(GameStatus::Playing);
        self.score = 0;
        self.player.reset(&mut self.rng);
        self.emit_queue_changed();
        self.mouse_control = false;
        self.phase = SimPhase::Idle;
    }

    /// Fill the first rows of the field, leaving everything else empty.
    pub fn populate_initial_field(&mut self) {
        for row in 0..INITIAL_FILLED_ROWS {
            for col in 0..self.grid.cols() {
                effects::generate_into(&mut self.grid, &mut self.rng, row, col);
            }
        }
    }

    /// Back to the start screen, clearing the field.
    pub fn return_to_start(&mut self) {
        self.grid.clear();
        self.phase = SimPhase::Idle;
        self.spawner.reset_backdrop_timer();
        self.set_status(GameStatus::Start);
    }

    /// Seed the field from the top backdrop rows and hand the drop animation
    /// to the collaborator.
    pub fn begin_start_transition(&mut self) {
        for row in 0..INITIAL_FILLED_ROWS {
            for col in 0..self.grid.cols() {
                if let Some(bubble) = self.backdrop.get(row, col) {
                    self.grid.place(row, col, bubble.color, bubble.kind);
                }
            }
        }
        self.events.push(GameEvent::StartBackgroundFall);
    }

    /// Scroll the start backdrop one row. Only meaningful on the start screen.
    pub fn shift_backdrop(&mut self) {
        if self.status.current() != GameStatus::Start {
            return;
        }
        self.backdrop.shift_rows_down();
        for col in 0..self.backdrop.cols() {
            let color = effects::random_color(&mut self.rng);
            self.backdrop.place(0, col, color, BubbleKind::Normal);
        }
        self.events.push(GameEvent::StartBackgroundChanged);
    }

    // === Ticking ===

    /// Advance time. Drives periodic row spawns while playing and backdrop
    /// scrolling on the start screen.
    pub fn tick(&mut self, dt_seconds: f32) {
        let filled = self.grid.filled_row_count();
        match self
            .spawner
            .tick(dt_seconds, self.status.current(), filled, self.score)
        {
            Some(ClockTrigger::AddRow) => self.add_row(),
            Some(ClockTrigger::ShiftBackdrop) => self.shift_backdrop(),
            None => {}
        }
    }

    /// Shift the field down and spawn a fresh top row.
    ///
    /// No-op unless playing with nothing pending - a row shift never races
    /// a resolving shot. The game-over check waits for the animation ack.
    pub fn add_row(&mut self) {
        if self.status.current() != GameStatus::Playing || !self.phase.is_idle() {
            return;
        }

        self.grid.shift_rows_down();
        for col in 0..self.grid.cols() {
            effects::generate_into(&mut self.grid, &mut self.rng, 0, col);
        }

        self.phase = SimPhase::AwaitingRowAnimation;
        self.events.push(GameEvent::NewRow);
    }

    /// The collaborator finished the row-shift animation.
    pub fn on_new_row_animation_complete(&mut self) {
        if self.phase != SimPhase::AwaitingRowAnimation {
            return;
        }
        self.phase = SimPhase::Idle;
        if self.grid.last_row_occupied() {
            self.trigger_game_over();
        }
    }

    // === Shooting ===

    /// Launch the player's current bubble into its column.
    pub fn player_shoot(&mut self) {
        if self.status.current() != GameStatus::Playing || !self.phase.is_idle() {
            return;
        }

        let (color, kind) = self.player.shoot(&mut self.rng);
        self.emit_queue_changed();
        self.launch_at_column(self.player.position(), color, kind);
    }

    fn launch_at_column(&mut self, col: usize, color: BubbleColor, kind: BubbleKind) {
        let Some(row) = self.grid.drop_target(col) else {
            // The landing row would be the reserved last row.
            self.trigger_game_over();
            return;
        };

        self.grid.place(row, col, color, kind);
        self.phase = SimPhase::ShotInFlight;
        self.events.push(GameEvent::BubbleShot(BubbleSnapshot {
            row,
            col,
            color,
            kind,
        }));
    }

    /// The collaborator finished the flight animation for the bubble at
    /// (row, col). Dispatches to matching or the special-effect resolver.
    pub fn on_bubble_landed(&mut self, row: usize, col: usize) {
        // A landing while idle is accepted: collaborators may stage bubbles
        // directly. During any Awaiting* phase the signal is stale.
        match self.phase {
            SimPhase::ShotInFlight | SimPhase::Idle => {}
            _ => return,
        }
        self.phase = SimPhase::Idle;
        if self.status.current() != GameStatus::Playing {
            return;
        }
        if !self.grid.contains(row, col) {
            return;
        }
        let Some(bubble) = self.grid.get(row, col) else {
            return;
        };

        match bubble.kind {
            BubbleKind::Bomb => self.resolve_bomb(row, col),
            BubbleKind::Rocket => self.resolve_rocket(row, col),
            // Boxes land inert; they never self-match.
            BubbleKind::Box => {}
            BubbleKind::Normal | BubbleKind::Chameleon => self.resolve_match(row, col),
        }
    }

    // === Matching and effects ===

    fn resolve_match(&mut self, row: usize, col: usize) {
        let group = matching::find_group(&self.grid, row, col);
        if group.len() < matching::MIN_GROUP_SIZE {
            return;
        }

        self.score += group.len() as u32 * POINTS_PER_MATCHED;

        let snapshots: Vec<BubbleSnapshot> = group.iter().copied().map(Into::into).collect();
        for bubble in &group {
            self.grid.remove(bubble.row, bubble.col);
        }

        self.events.push(GameEvent::BubblesMatched(snapshots));
        self.phase = SimPhase::AwaitingMatchAnimation;
    }

    fn resolve_bomb(&mut self, row: usize, col: usize) {
        effects::explode_bomb(&mut self.grid, row, col);
        self.events.push(GameEvent::BombExploded { row, col });
        // The same removal-animation ack resolves the floating check.
        self.phase = SimPhase::AwaitingMatchAnimation;
    }

    fn resolve_rocket(&mut self, row: usize, col: usize) {
        let targets = effects::launch_rocket(&mut self.grid, row, col);
        self.events.push(GameEvent::RocketLaunched {
            row,
            col,
            targets: targets.clone(),
        });

        if targets.is_empty() {
            self.run_floating_check();
        } else {
            self.phase = SimPhase::AwaitingRocketSteps { remaining: targets };
        }
    }

    /// The collaborator's rocket animation reached some targets; destroy
    /// exactly those. Once no targets remain, gravity runs directly.
    pub fn on_rocket_animation_step(&mut self, destroyed: &[(usize, usize)]) {
        let SimPhase::AwaitingRocketSteps { remaining } = &mut self.phase else {
            return;
        };

        for &(row, col) in destroyed {
            if let Some(idx) = remaining.iter().position(|&cell| cell == (row, col)) {
                remaining.swap_remove(idx);
                self.grid.remove(row, col);
            }
        }

        if remaining.is_empty() {
            self.run_floating_check();
        }
    }

    /// The collaborator finished the match/clear removal animation.
    pub fn on_match_animation_complete(&mut self) {
        if self.phase != SimPhase::AwaitingMatchAnimation {
            return;
        }
        self.run_floating_check();
    }

    fn run_floating_check(&mut self) {
        let floating = matching::find_floating(&self.grid);
        if floating.is_empty() {
            self.phase = SimPhase::Idle;
            return;
        }

        let box_count = floating
            .iter()
            .filter(|bubble| bubble.kind == BubbleKind::Box)
            .count() as u32;
        self.score += (floating.len() as u32 - box_count) * POINTS_PER_DROPPED;

        let snapshots: Vec<BubbleSnapshot> = floating.iter().copied().map(Into::into).collect();
        for bubble in &floating {
            self.grid.remove(bubble.row, bubble.col);
        }

        self.events.push(GameEvent::BubblesFloated(snapshots));
        self.phase = SimPhase::AwaitingFloatAnimation {
            box_rewards: box_count,
        };
    }

    /// The collaborator finished the fall animation; grant box rewards.
    pub fn on_float_animation_complete(&mut self) {
        let rewards = match &self.phase {
            SimPhase::AwaitingFloatAnimation { box_rewards } => *box_rewards,
            _ => return,
        };
        self.phase = SimPhase::Idle;

        for _ in 0..rewards {
            let kind = effects::draw_reward(&mut self.rng);
            self.player.inject_special(kind, &mut self.rng);
            self.emit_queue_changed();
        }
    }

    // === Player controls ===

    pub fn move_player_left(&mut self) {
        let (from, to) = self.player.move_left();
        self.events.push(GameEvent::PlayerMoved {
            from,
            to,
            direction: MoveDirection::Left,
        });
    }

    pub fn move_player_right(&mut self) {
        let (from, to) = self.player.move_right();
        self.events.push(GameEvent::PlayerMoved {
            from,
            to,
            direction: MoveDirection::Right,
        });
    }

    pub fn swap_player_bubbles(&mut self) {
        self.player.swap();
        self.emit_queue_changed();
    }

    /// Absolute positioning, only honored while playing under mouse control.
    pub fn set_player_position(&mut self, col: usize) {
        if self.status.current() != GameStatus::Playing || !self.mouse_control {
            return;
        }
        if let Some((from, to)) = self.player.set_position(col) {
            let direction = if to > from {
                MoveDirection::Right
            } else {
                MoveDirection::Left
            };
            self.events.push(GameEvent::PlayerMoved {
                from,
                to,
                direction,
            });
        }
    }

    // === Mouse control ===

    pub fn enable_mouse_control(&mut self) {
        if self.status.current() == GameStatus::Playing && !self.mouse_control {
            self.mouse_control = true;
            self.events.push(GameEvent::MouseControlChanged(true));
        }
    }

    fn disable_mouse_control(&mut self) {
        if self.mouse_control {
            self.mouse_control = false;
            self.events.push(GameEvent::MouseControlChanged(false));
        }
    }

    // === Status transitions ===

    /// Escape: disables mouse control if on, else pauses/resumes.
    pub fn handle_escape(&mut self) {
        match self.status.handle_escape(self.mouse_control) {
            EscapeOutcome::DisableMouseControl => self.disable_mouse_control(),
            EscapeOutcome::Paused | EscapeOutcome::Resumed => {
                self.events
                    .push(GameEvent::StatusChanged(self.status.current()));
            }
            EscapeOutcome::Ignored => {}
        }
    }

    pub fn resume(&mut self) {
        if self.status.resume() {
            self.events
                .push(GameEvent::StatusChanged(self.status.current()));
        }
    }

    pub fn show_exit_confirmation(&mut self) {
        if self.status.current() == GameStatus::Playing {
            self.disable_mouse_control();
        }
        if self.status.show_exit_confirmation() {
            self.events
                .push(GameEvent::StatusChanged(self.status.current()));
        }
    }

    pub fn cancel_exit(&mut self) {
        if self.status.cancel_exit() {
            self.events
                .push(GameEvent::StatusChanged(self.status.current()));
        }
    }

    fn set_status(&mut self, next: GameStatus) {
        self.status.transition(next);
        self.events.push(GameEvent::StatusChanged(next));
    }

    fn trigger_game_over(&mut self) {
        self.disable_mouse_control();
        self.phase = SimPhase::Idle;
        self.set_status(GameStatus::GameOver);
        self.events.push(GameEvent::GameOverFall);
    }

    fn emit_queue_changed(&mut self) {
        self.events.push(GameEvent::QueueChanged {
            current: self.player.current(),
            next: self.player.next(),
        });
    }

    // === Seeding ===

    /// Place a bubble directly on the field. Collaborator/test seeding;
    /// same silent semantics as the grid itself.
    pub fn place_bubble(&mut self, row: usize, col: usize, color: BubbleColor, kind: BubbleKind) {
        self.grid.place(row, col, color, kind);
    }
}
