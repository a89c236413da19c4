use crate::piece::ActivePiece;
use crate::shapes::Matrix;
use crate::types::{Cell, ColorId, GameStatus, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: ColorId,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute grid coordinates of every set cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .filled()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: GameStatus::Running,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: 0,
            episode_id: 0,
        }
    }
}
