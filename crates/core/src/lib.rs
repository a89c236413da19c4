//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and the session state. It has no
//! dependencies on UI, timing sources or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Infallible**: out-of-range board queries answer "blocked" instead of failing
//! - **Portable**: the loop controller and any render/input shell sit on top
//!
//! # Module Structure
//!
//! - [`shapes`]: shape matrices and the fixed seven-entry catalog
//! - [`board`]: 10x20 occupancy grid, merging and row compaction
//! - [`piece`]: the active falling piece
//! - [`rules`]: collision, movement and rotation tests
//! - [`scoring`]: score, level and gravity progression
//! - [`game_state`]: the session that ties everything together
//! - [`rng`]: seedable LCG used for uniform shape selection
//! - [`snapshot`]: read-only copies of the session for renderers
//!
//! # Game Rules
//!
//! - Shapes are picked uniformly at random from the catalog
//! - Rotation is a plain clockwise 90° turn; a colliding rotation is rejected
//! - A piece that cannot descend is merged, completed rows are cleared, a new
//!   piece spawns, and a spawn collision ends the game
//! - Each clear scores `lines * 100 * level`; the level rises by at most one
//!   per lock once the score reaches `level * 1000`
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! let event = game.take_last_event().unwrap();
//! assert_eq!(event.lines_cleared, 0);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use rules::{collides, resting_y, try_move, try_rotate};
pub use scoring::{drop_interval_ms, level_after_lock, line_clear_score};
pub use shapes::{catalog, random_shape, shape, Matrix, ShapeDef};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
