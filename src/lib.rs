//! Blockfall (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package
//! re-exports them as `blockfall::{core,engine,input,term,types}` and adds
//! the binary's environment config and event journal.

pub mod config;
pub mod journal;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
