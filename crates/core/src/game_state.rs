//! Game state module - the rules engine and the session it mutates
//!
//! [`GameState`] owns the board, the active piece, the RNG and the
//! score/level/speed counters. Every mutation goes through it: movement and
//! rotation requests, gravity steps, locking, line clears, spawning and the
//! game-over transition.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::rules::{collides, resting_y, try_move, try_rotate};
use crate::scoring::{drop_interval_ms, level_after_lock, line_clear_score};
use crate::shapes::random_shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    rng: SimpleRng,
    status: GameStatus,
    score: u32,
    level: u32,
    /// Total lines cleared this session (display only).
    lines: u32,
    drop_interval_ms: u32,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    /// Last lock outcome (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a session on an empty board with the first piece spawned
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Start a session on a prepared board.
    ///
    /// The first spawn is checked exactly like a post-lock spawn, so a board
    /// with a blocked spawn area starts in [`GameStatus::GameOver`].
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = ActivePiece::spawn(random_shape(&mut rng));
        let mut state = Self {
            board,
            active,
            rng,
            status: GameStatus::Running,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: drop_interval_ms(START_LEVEL),
            episode_id: 0,
            last_event: None,
        };
        if collides(&state.active, &state.board) {
            state.status = GameStatus::GameOver;
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Replace the active piece (tooling and tests).
    ///
    /// The piece is taken as-is; no collision test is made.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    /// Spawn a random piece at the top; false (and game over) if it collides
    fn spawn_piece(&mut self) -> bool {
        self.active = ActivePiece::spawn(random_shape(&mut self.rng));
        if collides(&self.active, &self.board) {
            self.status = GameStatus::GameOver;
            return false;
        }
        true
    }

    /// Move the active piece horizontally by `dx` columns
    pub fn move_piece(&mut self, dx: i8) -> bool {
        if self.is_game_over() {
            return false;
        }
        try_move(&mut self.active, &self.board, dx)
    }

    /// Rotate the active piece clockwise; a colliding rotation is discarded
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        try_rotate(&mut self.active, &self.board)
    }

    /// Drop the active piece one row, locking it if it cannot descend.
    ///
    /// Returns the lock outcome when the piece settled.
    pub fn soft_drop(&mut self) -> Option<LockEvent> {
        if self.is_game_over() {
            return None;
        }
        if let Some(fallen) = self
            .active
            .shifted(0, 1)
            .filter(|p| !collides(p, &self.board))
        {
            self.active = fallen;
            return None;
        }
        Some(self.lock_piece())
    }

    /// Drop the active piece to its resting row and lock it
    pub fn hard_drop(&mut self) -> Option<LockEvent> {
        if self.is_game_over() {
            return None;
        }
        self.active.y = resting_y(&self.active, &self.board);
        Some(self.lock_piece())
    }

    /// Merge the active piece, clear rows, score, spawn the next piece and
    /// check for game over.
    fn lock_piece(&mut self) -> LockEvent {
        let kind = self.active.kind;
        self.board.merge(&self.active);

        let lines_cleared = self.board.clear_completed_rows().len() as u32;

        let mut score_gained = 0;
        let mut leveled_up = false;
        if lines_cleared > 0 {
            score_gained = line_clear_score(lines_cleared, self.level);
            self.score = self.score.saturating_add(score_gained);
            self.lines = self.lines.saturating_add(lines_cleared);

            let next_level = level_after_lock(self.score, self.level);
            if next_level != self.level {
                self.level = next_level;
                self.drop_interval_ms = drop_interval_ms(next_level);
                leveled_up = true;
            }
        }

        let game_over = !self.spawn_piece();

        let event = LockEvent {
            kind,
            lines_cleared,
            score_gained,
            level: self.level,
            leveled_up,
            game_over,
        };
        self.last_event = Some(event);
        event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Reset to a fresh session on an empty board.
    ///
    /// The RNG keeps running, so the new session gets a new piece sequence.
    pub fn restart(&mut self) {
        self.board.clear();
        self.status = GameStatus::Running;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_ms(START_LEVEL);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        self.spawn_piece();
    }

    /// Apply a player action.
    ///
    /// Everything except [`GameAction::Restart`] is ignored after game over.
    /// Returns whether the action changed the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if self.is_game_over() => false,
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::HardDrop => self.hard_drop().is_some(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
