//! Cubetris (workspace facade crate).
//!
//! Exposes `cubetris::{core,engine,input,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use cubetris_core as core;
pub use cubetris_engine as engine;
pub use cubetris_input as input;
pub use cubetris_types as types;
