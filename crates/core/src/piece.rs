//! The currently falling piece.

use crate::shapes::{Matrix, ShapeDef};
use crate::types::{ColorId, ShapeKind, BOARD_WIDTH};

/// Active falling piece.
///
/// `matrix` starts as the catalog orientation and changes with every accepted
/// rotation. `(x, y)` is the grid position of the matrix's top-left corner and
/// may lie outside the grid while a move is being tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: ColorId,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a catalog shape at the top row, centered horizontally.
    ///
    /// No collision test happens here; the caller decides what a blocked
    /// spawn means.
    pub fn spawn(def: &ShapeDef) -> Self {
        let x = (BOARD_WIDTH / 2) as i8 - (def.matrix.width() / 2) as i8;
        Self {
            kind: def.kind,
            matrix: def.matrix,
            color: def.color,
            x,
            y: 0,
        }
    }

    /// Absolute grid coordinates of every set cell.
    ///
    /// Coordinates saturate at the `i8` range, which is far outside the grid.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .filled()
            .into_iter()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// Same piece displaced by `(dx, dy)`, or `None` if the position
    /// overflows.
    pub fn shifted(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }

    /// Same piece turned clockwise in place
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotated_cw(),
            ..*self
        }
    }
}
