//! Terminal rendering for blockfall.
//!
//! Game state is painted into a plain framebuffer of styled characters
//! ([`GameView`]), and [`TerminalRenderer`] flushes only the cells that
//! changed since the previous frame. Nothing here makes game decisions.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
