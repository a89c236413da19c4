//! Gameplay scenarios through the public facade

use blockfall::core::{shape, try_move, try_rotate, ActivePiece, Board, GameState};
use blockfall::types::{Cell, ColorId, GameAction, GameStatus, ShapeKind};

fn state_with(kind: ShapeKind, board: Board) -> GameState {
    let mut state = GameState::with_board(1, board);
    state.set_active(ActivePiece::spawn(shape(kind)));
    state
}

#[test]
fn hard_drop_lands_i_on_floor() {
    let mut state = state_with(ShapeKind::I, Board::new());
    let event = state.hard_drop().expect("hard drop always locks");

    assert_eq!(event.lines_cleared, 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.board().filled_count(), 4);
    for x in 3..7 {
        assert_eq!(
            state.board().get(x, 19),
            Some(Cell::Filled(ColorId::Rose))
        );
    }
}

#[test]
fn completing_a_row_scores_and_levels() {
    let mut board = Board::new();
    board.fill_row(19, ColorId::Sky);
    for x in 3..7 {
        board.set(x, 19, Cell::Empty);
    }
    let mut state = state_with(ShapeKind::I, board);

    let event = state.hard_drop().unwrap();
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.score_gained, 100);
    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    assert_eq!(state.level(), 1);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn four_rotations_restore_shape() {
    for kind in ShapeKind::ALL {
        let mut state = state_with(kind, Board::new());
        state.soft_drop();
        state.soft_drop();
        let before = *state.active();
        for _ in 0..4 {
            assert!(state.rotate(), "{kind:?} should rotate in open space");
        }
        assert_eq!(state.active().matrix, before.matrix);
        assert_eq!((state.active().x, state.active().y), (before.x, before.y));
    }
}

#[test]
fn moves_stop_at_walls() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(shape(ShapeKind::O));
    assert_eq!(piece.x, 4);

    let mut moved = 0;
    while try_move(&mut piece, &board, -1) {
        moved += 1;
    }
    assert_eq!(moved, 4);
    assert_eq!(piece.x, 0);

    while try_move(&mut piece, &board, 1) {}
    assert_eq!(piece.x, 8);
}

#[test]
fn rotation_against_wall_is_rejected() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(shape(ShapeKind::I));
    assert!(try_rotate(&mut piece, &board));
    // Vertical I at the right wall.
    while try_move(&mut piece, &board, 1) {}
    assert_eq!(piece.x, 9);
    let before = piece;
    assert!(!try_rotate(&mut piece, &board));
    assert_eq!(piece, before);
}

#[test]
fn blocked_spawn_is_game_over() {
    let mut board = Board::new();
    board.fill_row(0, ColorId::Orchid);
    board.fill_row(1, ColorId::Orchid);
    let mut state = GameState::with_board(4, board);

    assert_eq!(state.status(), GameStatus::GameOver);
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::HardDrop));

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn same_seed_same_sequence() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    for _ in 0..20 {
        assert_eq!(a.active().kind, b.active().kind);
        a.hard_drop();
        b.hard_drop();
        if a.is_game_over() {
            break;
        }
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
