//! Collision and movement rules.
//!
//! Moves and rotations are speculative: build the candidate, test it, and
//! commit only when it fits. There are no wall kicks.

use crate::board::Board;
use crate::piece::ActivePiece;

/// True when any set cell of the piece hits a wall, the floor, or a filled
/// cell. Cells above the grid only collide with the side walls.
pub fn collides(piece: &ActivePiece, board: &Board) -> bool {
    piece.cells().any(|(x, y)| board.is_occupied(x, y))
}

/// Shift the piece horizontally by `dx`, keeping the old position on collision.
pub fn try_move(piece: &mut ActivePiece, board: &Board, dx: i8) -> bool {
    let Some(moved) = piece.shifted(dx, 0) else {
        return false;
    };
    if collides(&moved, board) {
        return false;
    }
    *piece = moved;
    true
}

/// Rotate the piece clockwise in place, keeping the old matrix on collision.
pub fn try_rotate(piece: &mut ActivePiece, board: &Board) -> bool {
    let turned = piece.rotated();
    if collides(&turned, board) {
        return false;
    }
    *piece = turned;
    true
}

/// Lowest row the piece can reach by falling straight down from its current
/// position.
pub fn resting_y(piece: &ActivePiece, board: &Board) -> i8 {
    let mut probe = *piece;
    while let Some(next) = probe.shifted(0, 1) {
        if collides(&next, board) {
            break;
        }
        probe = next;
    }
    probe.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape;
    use crate::types::{Cell, ColorId, ShapeKind};

    fn piece(kind: ShapeKind) -> ActivePiece {
        ActivePiece::spawn(shape(kind))
    }

    #[test]
    fn test_spawn_on_empty_board_is_free() {
        let board = Board::new();
        for kind in ShapeKind::ALL {
            assert!(!collides(&piece(kind), &board), "{:?}", kind);
        }
    }

    #[test]
    fn test_collides_with_filled_cell() {
        let mut board = Board::new();
        board.set(4, 0, Cell::Filled(ColorId::Rose));
        assert!(collides(&piece(ShapeKind::I), &board));
    }

    #[test]
    fn test_above_grid_does_not_collide() {
        let mut board = Board::new();
        board.fill_row(0, ColorId::Rose);
        let p = piece(ShapeKind::O).shifted(0, -2).unwrap();
        assert!(!collides(&p, &board));
        assert!(collides(&p.shifted(0, 1).unwrap(), &board));
    }

    #[test]
    fn test_move_blocked_by_wall() {
        let board = Board::new();
        let mut p = piece(ShapeKind::I);
        for _ in 0..3 {
            assert!(try_move(&mut p, &board, -1));
        }
        assert_eq!(p.x, 0);
        assert!(!try_move(&mut p, &board, -1));
        assert_eq!(p.x, 0);
    }

    #[test]
    fn test_move_by_large_dx() {
        let board = Board::new();
        let mut p = piece(ShapeKind::O);
        assert!(try_move(&mut p, &board, 4));
        assert_eq!(p.x, 8);
        assert!(!try_move(&mut p, &board, 1));
        assert!(!try_move(&mut p, &board, -9));
        assert_eq!(p.x, 8);
    }

    #[test]
    fn test_move_by_extreme_dx_is_rejected() {
        let board = Board::new();
        let mut p = piece(ShapeKind::I);
        assert!(!try_move(&mut p, &board, i8::MAX));
        assert_eq!(p.x, 3);
        assert!(!try_move(&mut p, &board, i8::MIN));
        assert_eq!(p.x, 3);
    }

    #[test]
    fn test_rotation_rejected_without_kick() {
        let board = Board::new();
        // Vertical I against the right wall cannot turn flat.
        let mut p = piece(ShapeKind::I).rotated();
        p.x = 9;
        p.y = 5;
        assert!(!collides(&p, &board));
        let before = p;
        assert!(!try_rotate(&mut p, &board));
        assert_eq!(p, before);
    }

    #[test]
    fn test_resting_y_on_floor_and_stack() {
        let mut board = Board::new();
        assert_eq!(resting_y(&piece(ShapeKind::I), &board), 19);
        assert_eq!(resting_y(&piece(ShapeKind::O), &board), 18);

        board.set(4, 10, Cell::Filled(ColorId::Sky));
        assert_eq!(resting_y(&piece(ShapeKind::O), &board), 8);
    }
}
