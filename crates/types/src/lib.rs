//! Shared types and constants for the blockfall workspace.
//!
//! Everything here is plain data with no dependencies so that the rules
//! engine, the loop controller and the terminal adapters can agree on one
//! vocabulary.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Interval floor (reached at level 10) |
//! | `LINE_POINTS` | 100 | Points per cleared line, times the level |
//! | `LEVEL_SCORE_STEP` | 1000 | Score needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, ColorId, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::T.as_str(), "t");
//! assert!(Cell::Filled(ColorId::Rose).is_filled());
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Points per cleared line at level 1
pub const LINE_POINTS: u32 = 100;

/// Score required per level (`level * LEVEL_SCORE_STEP` to advance)
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// First level of a fresh session
pub const START_LEVEL: u32 = 1;

/// Default frame pacing for hosts without a display refresh signal (~60 FPS)
pub const FRAME_MS: u64 = 16;

/// Largest width or height of any shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// Opaque color of a piece or a locked cell.
///
/// The rules never inspect a color; only render adapters read [`ColorId::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    Rose,
    Sky,
    Mint,
    Orchid,
    Amber,
    Lemon,
    Cobalt,
}

impl ColorId {
    pub const ALL: [ColorId; 7] = [
        ColorId::Rose,
        ColorId::Sky,
        ColorId::Mint,
        ColorId::Orchid,
        ColorId::Amber,
        ColorId::Lemon,
        ColorId::Cobalt,
    ];

    /// Display color as `(r, g, b)`.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorId::Rose => (0xFF, 0x0D, 0x72),
            ColorId::Sky => (0x0D, 0xC2, 0xFF),
            ColorId::Mint => (0x0D, 0xFF, 0x72),
            ColorId::Orchid => (0xF5, 0x38, 0xFF),
            ColorId::Amber => (0xFF, 0x8E, 0x0D),
            ColorId::Lemon => (0xFF, 0xE1, 0x38),
            ColorId::Cobalt => (0x38, 0x77, 0xFF),
        }
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(ColorId),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<ColorId> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// The seven tetromino shapes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Lowercase name used in the event journal
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Player commands accepted by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (rejected outright if it collides)
    Rotate,
    /// Drop piece one row, locking it if it cannot descend
    SoftDrop,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Start a fresh session
    Restart,
}

/// Session state machine: `GameOver` is terminal until a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

/// Outcome of a single lock event.
///
/// Emitted by the rules engine after every merge and consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Shape of the piece that locked.
    pub kind: ShapeKind,
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// Level after this lock was scored.
    pub level: u32,
    pub leveled_up: bool,
    /// The replacement piece collided at its spawn position.
    pub game_over: bool,
}
