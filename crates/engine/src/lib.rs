//! Runtime glue around the pure game core.
//!
//! - [`driver`]: fixed-timestep loop that turns elapsed time into ticks,
//!   gravity steps and the deferred auto-start
//! - [`config`]: environment-driven settings for seed, gravity, piece pool
//!   and logging

pub mod config;
pub mod driver;

pub use cubetris_core as core;
pub use cubetris_types as types;

pub use config::{Config, ConfigError};
pub use driver::{DriverReport, GravityCurve, LoopDriver};
