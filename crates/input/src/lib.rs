//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. There is no
//! repeat handling of its own: terminal auto-repeat arrives as further key
//! events and is treated like fresh presses.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
