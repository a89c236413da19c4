//! Game loop controller.
//!
//! Drives a [`GameState`](blockfall_core::GameState) from frame callbacks:
//!
//! - [`GameLoop`]: drop counter, gravity trigger and the request API used by
//!   input layers (move, rotate, soft/hard drop, restart)
//! - [`Clock`]: injected time source ([`SystemClock`] for real play,
//!   [`ManualClock`] for tests)
//! - [`Scheduler`]: turns clock readings into per-frame deltas
//! - [`run`]: cooperative frame loop over a [`FrameHost`]
//!
//! Everything runs on one thread; input and ticks are serialized by the host.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameLoop, LoopControl, ManualClock, Scheduler};
//!
//! let clock = ManualClock::new();
//! let mut scheduler = Scheduler::new(clock.clone());
//! let mut game = GameLoop::new(7);
//!
//! assert_eq!(scheduler.frame(&mut game), LoopControl::Continue);
//! clock.advance(1001);
//! scheduler.frame(&mut game);
//! assert_eq!(game.active().y, 1);
//! ```

pub mod clock;
pub mod controller;
pub mod scheduler;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{GameLoop, LoopControl};
pub use scheduler::{run, FrameHost, HostSignal, Scheduler};
