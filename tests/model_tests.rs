//! Game lifecycle and state machine integration tests.

use bubble_field::{
    GameEvent, GameModel, GameStatus, SimPhase, BACKDROP_ROWS, FIELD_COLS, FIELD_ROWS,
};
use bubble_field::{BubbleColor, BubbleKind};

fn playing_model() -> GameModel {
    let mut model = GameModel::new(42);
    model.start_game();
    model.drain_events();
    model
}

#[test]
fn test_start_game_resets_everything() {
    let mut model = GameModel::new(42);
    model.populate_initial_field();
    model.start_game();

    assert_eq!(model.status(), GameStatus::Playing);
    assert_eq!(model.score(), 0);
    assert!(model.phase().is_idle());
    for row in 0..FIELD_ROWS {
        for col in 0..FIELD_COLS {
            assert!(model.grid().get(row, col).is_none());
        }
    }
}

#[test]
fn test_populate_initial_field_fills_first_four_rows() {
    let mut model = playing_model();
    model.populate_initial_field();

    for row in 0..4 {
        for col in 0..FIELD_COLS {
            assert!(model.grid().is_occupied(row, col), "({row}, {col}) empty");
        }
    }
    for row in 4..FIELD_ROWS {
        for col in 0..FIELD_COLS {
            assert!(!model.grid().is_occupied(row, col), "({row}, {col}) filled");
        }
    }
}

#[test]
fn test_escape_pauses_then_resumes() {
    let mut model = playing_model();

    model.handle_escape();
    assert_eq!(model.status(), GameStatus::Pause);
    assert_eq!(
        model.drain_events(),
        vec![GameEvent::StatusChanged(GameStatus::Pause)]
    );

    model.handle_escape();
    assert_eq!(model.status(), GameStatus::Playing);
}

#[test]
fn test_resume_only_from_pause() {
    let mut model = playing_model();
    model.resume();
    assert_eq!(model.status(), GameStatus::Playing);
    assert!(model.drain_events().is_empty());
}

#[test]
fn test_shooting_while_paused_is_noop() {
    let mut model = playing_model();
    model.handle_escape();
    model.drain_events();

    model.player_shoot();
    assert!(model.drain_events().is_empty());
    assert_eq!(model.grid().occupied().count(), 0);
}

#[test]
fn test_exit_confirmation_from_start_has_no_cancel_back() {
    let mut model = GameModel::new(42);
    model.show_exit_confirmation();
    assert_eq!(model.status(), GameStatus::ExitConfirmation);
    assert!(model.was_previous_status(GameStatus::Start));

    model.cancel_exit();
    assert_eq!(model.status(), GameStatus::ExitConfirmation);
}

#[test]
fn test_exit_confirmation_from_playing_cancels_back() {
    let mut model = playing_model();
    model.show_exit_confirmation();
    assert_eq!(model.status(), GameStatus::ExitConfirmation);
    assert!(model.was_previous_status(GameStatus::Playing));

    model.cancel_exit();
    assert_eq!(model.status(), GameStatus::Playing);
}

#[test]
fn test_exit_confirmation_disables_mouse_control_first() {
    let mut model = playing_model();
    model.enable_mouse_control();
    model.drain_events();

    model.show_exit_confirmation();
    let events = model.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::MouseControlChanged(false),
            GameEvent::StatusChanged(GameStatus::ExitConfirmation),
        ]
    );
}

#[test]
fn test_escape_with_mouse_control_only_disables_it() {
    let mut model = playing_model();
    model.enable_mouse_control();
    assert!(model.mouse_control_enabled());
    model.drain_events();

    model.handle_escape();
    assert_eq!(model.status(), GameStatus::Playing);
    assert!(!model.mouse_control_enabled());
    assert_eq!(
        model.drain_events(),
        vec![GameEvent::MouseControlChanged(false)]
    );
}

#[test]
fn test_mouse_control_requires_playing() {
    let mut model = GameModel::new(42);
    model.enable_mouse_control();
    assert!(!model.mouse_control_enabled());
}

#[test]
fn test_set_player_position_requires_mouse_control() {
    let mut model = playing_model();
    model.set_player_position(5);
    assert_eq!(model.player().position(), 0);

    model.enable_mouse_control();
    model.set_player_position(5);
    assert_eq!(model.player().position(), 5);

    // Out of range: silently rejected.
    model.set_player_position(FIELD_COLS);
    assert_eq!(model.player().position(), 5);
}

#[test]
fn test_return_to_start_clears_field() {
    let mut model = playing_model();
    model.populate_initial_field();

    model.return_to_start();
    assert_eq!(model.status(), GameStatus::Start);
    assert_eq!(model.grid().occupied().count(), 0);
}

#[test]
fn test_shot_places_bubble_and_blocks_row_shift() {
    let mut model = playing_model();
    model.player_shoot();

    let events = model.drain_events();
    assert!(matches!(events[0], GameEvent::QueueChanged { .. }));
    let GameEvent::BubbleShot(shot) = &events[1] else {
        panic!("expected BubbleShot, got {:?}", events[1]);
    };
    assert_eq!(shot.row, 0);
    assert_eq!(shot.col, 0);
    assert!(model.grid().is_occupied(0, 0));
    assert_eq!(*model.phase(), SimPhase::ShotInFlight);

    // No row shift while the shot resolves.
    model.add_row();
    assert_eq!(model.grid().occupied().count(), 1);

    model.on_bubble_landed(0, 0);
    assert!(model.phase().is_idle());
}

#[test]
fn test_add_row_game_over_on_last_row() {
    let mut model = playing_model();
    model.place_bubble(FIELD_ROWS - 2, 3, BubbleColor::Red, BubbleKind::Normal);

    model.add_row();
    assert_eq!(*model.phase(), SimPhase::AwaitingRowAnimation);
    assert!(model.grid().last_row_occupied());

    // Nothing happens until the animation is acknowledged.
    assert_eq!(model.status(), GameStatus::Playing);

    model.on_new_row_animation_complete();
    assert_eq!(model.status(), GameStatus::GameOver);
    let events = model.drain_events();
    assert!(events.contains(&GameEvent::GameOverFall));
}

#[test]
fn test_add_row_survives_when_last_row_stays_clear() {
    let mut model = playing_model();
    model.place_bubble(5, 3, BubbleColor::Red, BubbleKind::Normal);

    model.add_row();
    model.on_new_row_animation_complete();
    assert_eq!(model.status(), GameStatus::Playing);
    assert!(model.phase().is_idle());
}

#[test]
fn test_full_column_shot_triggers_game_over() {
    let mut model = playing_model();
    for row in 0..FIELD_ROWS - 1 {
        model.place_bubble(row, 0, BubbleColor::Red, BubbleKind::Normal);
    }
    model.drain_events();

    model.player_shoot();
    assert_eq!(model.status(), GameStatus::GameOver);

    let events = model.drain_events();
    assert!(events.contains(&GameEvent::GameOverFall));
    // The shot was never placed.
    assert!(!events.iter().any(|e| matches!(e, GameEvent::BubbleShot(_))));
}

#[test]
fn test_game_over_recoverable_via_start_game() {
    let mut model = playing_model();
    for row in 0..FIELD_ROWS - 1 {
        model.place_bubble(row, 0, BubbleColor::Red, BubbleKind::Normal);
    }
    model.player_shoot();
    assert_eq!(model.status(), GameStatus::GameOver);

    model.start_game();
    assert_eq!(model.status(), GameStatus::Playing);
    assert_eq!(model.grid().occupied().count(), 0);
    assert_eq!(model.score(), 0);
}

#[test]
fn test_stale_animation_acks_are_noops() {
    let mut model = playing_model();
    model.on_match_animation_complete();
    model.on_float_animation_complete();
    model.on_new_row_animation_complete();
    model.on_rocket_animation_step(&[(0, 0)]);

    assert!(model.phase().is_idle());
    assert!(model.drain_events().is_empty());
    assert_eq!(model.score(), 0);
}

#[test]
fn test_tick_eventually_adds_a_row() {
    let mut model = playing_model();

    // The first row lands on the clamped 15-second minimum interval;
    // deltas above 33ms are clamped, so drive many small ticks.
    let mut added = false;
    for _ in 0..500 {
        model.tick(0.033);
        if model
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::NewRow))
        {
            added = true;
            break;
        }
        model.on_new_row_animation_complete();
    }

    assert!(added);
    assert_eq!(model.grid().occupied().count(), FIELD_COLS);
}

#[test]
fn test_tick_scrolls_backdrop_on_start_screen() {
    let mut model = GameModel::new(42);
    let before: Vec<_> = (0..FIELD_COLS)
        .map(|col| model.backdrop().get(0, col).unwrap().color)
        .collect();

    let mut shifted = false;
    for _ in 0..80 {
        model.tick(0.033);
        if model
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::StartBackgroundChanged))
        {
            shifted = true;
            break;
        }
    }

    assert!(shifted);
    // Row 1 now holds what row 0 held.
    let after: Vec<_> = (0..FIELD_COLS)
        .map(|col| model.backdrop().get(1, col).unwrap().color)
        .collect();
    assert_eq!(before, after);
    assert_eq!(
        model.backdrop().occupied().count(),
        BACKDROP_ROWS * FIELD_COLS
    );
}

#[test]
fn test_start_transition_seeds_field_from_backdrop() {
    let mut model = GameModel::new(42);
    model.begin_start_transition();

    let events = model.drain_events();
    assert!(events.contains(&GameEvent::StartBackgroundFall));
    assert_eq!(model.grid().occupied().count(), 4 * FIELD_COLS);
    for col in 0..FIELD_COLS {
        assert_eq!(
            model.grid().get(0, col).unwrap().color,
            model.backdrop().get(0, col).unwrap().color
        );
    }
}
