//! Runtime configuration from environment variables
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CUBETRIS_SEED` | RNG seed (u64) | OS entropy |
//! | `CUBETRIS_GRAVITY_MS` | fixed gravity interval | 1000 |
//! | `CUBETRIS_LEVEL_GRAVITY` | `1`/`true` for the per-level curve | off |
//! | `CUBETRIS_PIECES` | `all` or `classic` | `all` |
//! | `CUBETRIS_LOG_PATH` | log file, logging disabled when unset | unset |
//! | `CUBETRIS_LOG_LEVEL` | `error` .. `trace` | `info` |

use std::path::PathBuf;

use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::{GameState, PiecePool};
use crate::driver::{GravityCurve, LoopDriver};
use crate::types::BASE_GRAVITY_MS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}: invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub gravity: GravityCurve,
    pub pool: PiecePool,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            gravity: GravityCurve::Fixed(BASE_GRAVITY_MS),
            pool: PiecePool::All,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let invalid = |key: &'static str, value: String| ConfigError::Invalid { key, value };

        let mut config = Config::default();

        if let Some(v) = get("CUBETRIS_SEED") {
            config.seed = Some(v.parse().map_err(|_| invalid("CUBETRIS_SEED", v.clone()))?);
        }

        if let Some(v) = get("CUBETRIS_GRAVITY_MS") {
            let ms: u32 = v
                .parse()
                .ok()
                .filter(|&ms| ms > 0)
                .ok_or_else(|| invalid("CUBETRIS_GRAVITY_MS", v.clone()))?;
            config.gravity = GravityCurve::Fixed(ms);
        }

        if let Some(v) = get("CUBETRIS_LEVEL_GRAVITY") {
            match v.to_lowercase().as_str() {
                "1" | "true" | "yes" => config.gravity = GravityCurve::LevelScaled,
                "0" | "false" | "no" => {}
                _ => return Err(invalid("CUBETRIS_LEVEL_GRAVITY", v)),
            }
        }

        if let Some(v) = get("CUBETRIS_PIECES") {
            config.pool = PiecePool::from_str(&v).ok_or_else(|| invalid("CUBETRIS_PIECES", v.clone()))?;
        }

        config.log_path = get("CUBETRIS_LOG_PATH").map(PathBuf::from);

        if let Some(v) = get("CUBETRIS_LOG_LEVEL") {
            config.log_level = v.parse().map_err(|_| invalid("CUBETRIS_LOG_LEVEL", v.clone()))?;
        }

        Ok(config)
    }

    /// Fresh game per this config
    pub fn build_game(&self) -> GameState {
        match self.seed {
            Some(seed) => GameState::with_seed(seed, self.pool),
            None => GameState::with_rng(StdRng::from_entropy(), self.pool),
        }
    }

    pub fn build_driver(&self) -> LoopDriver {
        LoopDriver::new(self.gravity)
    }
}
