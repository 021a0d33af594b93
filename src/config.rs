//! Runtime configuration for the terminal runner.
//!
//! Values come from environment variables; anything missing or unparsable
//! falls back to its default.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_BASIC_SEED` | wall clock | Seed for shape selection |
//! | `TETRIS_BASIC_FRAME_MS` | 16 | Frame scheduling period |
//! | `TETRIS_BASIC_LOG_PATH` | unset | Log file; logging is off when unset |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::EngineConfig;
use crate::types::FRAME_MS;

pub const SEED_VAR: &str = "TETRIS_BASIC_SEED";
pub const FRAME_MS_VAR: &str = "TETRIS_BASIC_FRAME_MS";
pub const LOG_PATH_VAR: &str = "TETRIS_BASIC_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub frame_ms: u64,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, a map in tests, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup(FRAME_MS_VAR)
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(FRAME_MS);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            frame_ms,
            log_path,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            seed: self.seed,
            ..EngineConfig::default()
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
