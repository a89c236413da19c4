//! Runtime configuration read from environment variables.

use std::env;
use std::path::PathBuf;

use crate::types::FRAME_MS;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const FRAME_MS_VAR: &str = "BLOCKFALL_FRAME_MS";
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

/// Settings for the terminal binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed piece seed; `None` picks a random one at startup.
    pub seed: Option<u32>,
    /// Frame pacing for input polling and gravity, at least 1.
    pub frame_ms: u64,
    /// JSON-lines event journal destination.
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl Config {
    /// Read the process environment. Unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup(FRAME_MS_VAR)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(FRAME_MS)
            .max(1);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            frame_ms,
            log_path,
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random::<u32>)
    }
}
