//! Integration tests for the engine state machine

use cubetris::core::{collides, GameState, PiecePool, SPAWN_ORIGIN};
use cubetris::types::{Axis, GameAction, GamePhase, PieceKind, FIELD_HEIGHT, QUEUE_LEN};

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), GamePhase::Ready);
    assert!(state.pending_start());
    assert!(state.active().is_none());
    assert_eq!(state.next_pieces().len(), QUEUE_LEN);

    let upcoming = state.next_pieces()[0].kind;
    assert!(state.start());
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(!state.pending_start());
    assert_eq!(state.active().unwrap().kind, upcoming);
    assert_eq!(state.active().unwrap().origin, SPAWN_ORIGIN);
    assert_eq!(state.next_pieces().len(), QUEUE_LEN);

    // Second start is rejected.
    assert!(!state.start());
}

#[test]
fn test_actions_before_start_are_rejected() {
    let mut state = GameState::new(1);
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveBackward,
        GameAction::RotateZ,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::Pause,
    ] {
        assert!(!state.apply_action(action), "{} applied in ready", action.as_str());
    }
    assert_eq!(state.phase(), GamePhase::Ready);
    assert!(state.field().is_empty());
}

#[test]
fn test_horizontal_moves() {
    let mut state = GameState::new(12345);
    state.start();
    let origin = state.active().unwrap().origin;

    assert!(state.apply_action(GameAction::MoveForward));
    assert_eq!(state.active().unwrap().origin.z, origin.z - 1);
    assert!(state.apply_action(GameAction::MoveBackward));
    assert!(state.apply_action(GameAction::MoveBackward));
    assert_eq!(state.active().unwrap().origin.z, origin.z + 1);
    assert!(state.apply_action(GameAction::MoveRight));
    assert_eq!(state.active().unwrap().origin.x, origin.x + 1);
    assert_eq!(state.active().unwrap().origin.y, origin.y);
}

#[test]
fn test_walls_stop_movement() {
    let mut state = GameState::new(99);
    state.start();

    let mut steps = 0;
    while state.try_move(-1, 0, 0) {
        steps += 1;
        assert!(steps <= 10, "piece left the field");
    }
    let piece = state.active().unwrap().clone();
    assert!(piece.cells().any(|c| c.x == 0));
    assert!(!collides(&piece, state.field()));

    // The rejected move left nothing changed.
    assert!(!state.try_move(-1, 0, 0));
    assert_eq!(state.active(), Some(&piece));
}

#[test]
fn test_rotation_keeps_piece_in_field() {
    let mut state = GameState::new(4242);
    state.start();

    for axis in [Axis::X, Axis::Y, Axis::Z, Axis::X, Axis::Z] {
        let before = state.active().unwrap().clone();
        if state.try_rotate(axis) {
            assert_eq!(state.active().unwrap().origin, before.origin);
        } else {
            assert_eq!(state.active(), Some(&before));
        }
        assert!(!collides(state.active().unwrap(), state.field()));
    }
}

#[test]
fn test_soft_drop_reaches_floor() {
    let mut state = GameState::new(12345);
    state.start();

    let mut steps = 0;
    while state.soft_drop() {
        steps += 1;
        assert!(steps < FIELD_HEIGHT as i32 * 2);
    }
    let piece = state.active().unwrap();
    assert_eq!(piece.cells().map(|c| c.y).min(), Some(0));
    assert_eq!(state.ghost_position(), Some(piece.origin));
    assert!(state.field().is_empty());
}

#[test]
fn test_hard_drop_places_and_spawns() {
    let mut state = GameState::new(12345);
    state.start();
    let dropped = state.active().unwrap().clone();
    let ghost = state.ghost_position().unwrap();
    let upcoming = state.next_pieces()[0].kind;

    let outcome = state.hard_drop().unwrap();
    assert!(!outcome.game_over);
    assert_eq!(outcome.layers_cleared, 0);
    assert_eq!(outcome.score_gained, 0);

    // Every block of the dropped piece is now in the field.
    let landed = dropped.moved_to(ghost);
    for cell in landed.cells() {
        assert_eq!(state.field().get_at(cell), Some(Some(dropped.kind)));
    }
    assert_eq!(state.placed_blocks().len(), dropped.shape.len());
    assert_eq!(state.active().unwrap().kind, upcoming);
    assert_eq!(state.active().unwrap().origin, SPAWN_ORIGIN);
    assert!(state.can_hold());
}

#[test]
fn test_hold_once_per_placement() {
    let mut state = GameState::new(777);
    state.start();
    let first = state.active().unwrap().kind;
    let second = state.next_pieces()[0].kind;

    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.held().unwrap().kind, first);
    assert_eq!(state.active().unwrap().kind, second);
    assert!(!state.can_hold());

    // Locked until the next placement.
    assert!(!state.apply_action(GameAction::Hold));
    assert_eq!(state.held().unwrap().kind, first);

    state.hard_drop();
    assert!(state.can_hold());
    let third = state.active().unwrap().kind;

    // Swap brings the held piece back at spawn.
    assert!(state.hold());
    assert_eq!(state.active().unwrap().kind, first);
    assert_eq!(state.active().unwrap().origin, SPAWN_ORIGIN);
    assert_eq!(state.held().unwrap().kind, third);
}

#[test]
fn test_pause_toggle() {
    let mut state = GameState::new(5);
    state.start();
    let piece = state.active().unwrap().clone();

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), GamePhase::Paused);
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.soft_drop());
    assert!(state.tick().is_none());
    assert_eq!(state.active(), Some(&piece));

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(state.soft_drop());
}

#[test]
fn test_restart_resets_session() {
    let mut state = GameState::new(12345);
    state.start();
    state.hard_drop();
    state.hold();
    assert!(!state.field().is_empty());

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), GamePhase::Ready);
    assert!(state.pending_start());
    assert!(state.field().is_empty());
    assert!(state.held().is_none());
    assert!(state.active().is_none());
    assert!(state.can_hold());
    assert_eq!((state.score(), state.level(), state.lines()), (0, 1, 0));
    assert_eq!(state.next_pieces().len(), QUEUE_LEN);
}

#[test]
fn test_stacking_to_game_over() {
    let mut state = GameState::new(2024);
    state.start();

    let mut placements = 0;
    while state.phase() == GamePhase::Playing {
        let outcome = state.hard_drop().unwrap();
        placements += 1;
        assert!(placements < 1000, "game never ended");
        if outcome.game_over {
            assert_eq!(outcome.layers_cleared, 0);
            assert_eq!(outcome.score_gained, 0);
        }
    }

    assert_eq!(state.phase(), GamePhase::GameOver);
    assert!(state.active().is_none());
    assert!(state.ghost_position().is_none());
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.start());

    // Placed blocks always stay inside the field.
    for block in state.placed_blocks() {
        let p = block.position;
        assert!((0..10).contains(&p.x) && (0..20).contains(&p.y) && (0..10).contains(&p.z));
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut state = GameState::new(seed);
        state.start();
        let mut kinds = Vec::new();
        for _ in 0..20 {
            kinds.push(state.active().unwrap().kind);
            state.apply_action(GameAction::MoveLeft);
            state.apply_action(GameAction::RotateY);
            state.hard_drop();
            if state.phase() != GamePhase::Playing {
                break;
            }
        }
        (kinds, state.snapshot())
    };

    assert_eq!(play(31337), play(31337));
}

#[test]
fn test_classic_pool_never_draws_cube() {
    let mut state = GameState::with_seed(8, PiecePool::Classic);
    state.start();
    for _ in 0..30 {
        if state.phase() != GamePhase::Playing {
            break;
        }
        assert_ne!(state.active().unwrap().kind, PieceKind::Cube);
        assert!(state.next_pieces().iter().all(|p| p.kind != PieceKind::Cube));
        state.hard_drop();
    }
}
