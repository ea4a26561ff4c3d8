//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management of the 3D
//! falling-block game. It has **zero dependencies** on rendering, audio or
//! terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Any presentation layer can drive it and read snapshots
//!
//! # Module Structure
//!
//! - [`catalog`]: piece shapes, colors, and uniform random draws
//! - [`field`]: 10x20x10 grid of settled blocks
//! - [`geometry`]: collision test, axis rotations, layer clearing
//! - [`piece`]: active/upcoming/held piece representation
//! - [`queue`]: fixed-length upcoming queue
//! - [`scoring`]: layer points and level progression
//! - [`game_state`]: the engine state machine
//! - [`snapshot`]: read-only copies for presentation layers
//!
//! # Game Rules
//!
//! - **Uniform draws**: every piece is drawn independently, no bag
//! - **Rotation**: 90° about x, y or z; rejected outright if it collides
//! - **Layers**: a horizontal layer clears when all 100 cells are filled
//! - **Hold**: once per placement
//! - **Scoring**: 100 points per layer times the current level
//!
//! # Example
//!
//! ```
//! use cubetris_core::GameState;
//! use cubetris_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateY);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.next_pieces().len(), 3);
//! assert!(game.field().occupied_count() > 0);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. A loop driver calls
//! [`GameState::tick`](game_state::GameState::tick) about every 16ms and
//! applies gravity with [`GameState::soft_drop`](game_state::GameState::soft_drop)
//! at its own, slower cadence.

pub mod catalog;
pub mod field;
pub mod game_state;
pub mod geometry;
pub mod piece;
pub mod queue;
pub mod scoring;
pub mod snapshot;

pub use cubetris_types as types;

// Re-export commonly used types for convenience
pub use catalog::PiecePool;
pub use field::{Field, PlacedBlock};
pub use game_state::GameState;
pub use geometry::{clear_complete_layers, collides, rotate_shape};
pub use piece::{Piece, Shape, SPAWN_ORIGIN};
pub use queue::UpcomingQueue;
pub use snapshot::{GameSnapshot, PlaceOutcome};
