//! Frame-driven gravity and the input request surface.

use crate::core::{ActivePiece, Board, GameSnapshot, GameState};
use crate::types::{GameAction, GameStatus, LockEvent};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Redraw and schedule the next frame.
    Continue,
    /// Game over: stop scheduling frames until a restart.
    Stop,
}

/// Gravity timer wrapped around a session
#[derive(Debug, Clone)]
pub struct GameLoop {
    game: GameState,
    /// Milliseconds accumulated since the last gravity step.
    drop_counter_ms: u32,
}

impl GameLoop {
    pub fn new(seed: u32) -> Self {
        Self::from_state(GameState::new(seed))
    }

    pub fn from_state(game: GameState) -> Self {
        Self {
            game,
            drop_counter_ms: 0,
        }
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval, the piece takes
    /// one soft-drop step and the counter restarts from zero. A game that is
    /// already over does nothing and asks the host to stop.
    pub fn on_tick(&mut self, elapsed_ms: u32) -> LoopControl {
        if self.game.is_game_over() {
            return LoopControl::Stop;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.game.drop_interval_ms() {
            self.game.soft_drop();
            self.drop_counter_ms = 0;
        }

        // The frame that ends the game still gets drawn.
        LoopControl::Continue
    }

    /// Move one column left (`-1`) or right (`1`)
    pub fn request_move(&mut self, direction: i8) -> bool {
        self.game.move_piece(direction)
    }

    pub fn request_rotate(&mut self) -> bool {
        self.game.rotate()
    }

    /// Player soft drop; restarts the gravity timer
    pub fn request_soft_drop(&mut self) -> Option<LockEvent> {
        if self.game.is_game_over() {
            return None;
        }
        self.drop_counter_ms = 0;
        self.game.soft_drop()
    }

    /// Player hard drop; restarts the gravity timer
    pub fn request_hard_drop(&mut self) -> Option<LockEvent> {
        if self.game.is_game_over() {
            return None;
        }
        self.drop_counter_ms = 0;
        self.game.hard_drop()
    }

    pub fn request_restart(&mut self) {
        self.drop_counter_ms = 0;
        self.game.restart();
    }

    /// Route an input-layer action to the matching request
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.request_move(-1),
            GameAction::MoveRight => self.request_move(1),
            GameAction::Rotate => self.request_rotate(),
            GameAction::SoftDrop => {
                let running = !self.game.is_game_over();
                self.request_soft_drop();
                running
            }
            GameAction::HardDrop => self.request_hard_drop().is_some(),
            GameAction::Restart => {
                self.request_restart();
                true
            }
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn active(&self) -> &ActivePiece {
        self.game.active()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn level(&self) -> u32 {
        self.game.level()
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.game.take_last_event()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }
}
