//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data, usable in any context (core logic, loop driver,
//! presentation layers reading serialized snapshots).
//!
//! # Field Dimensions
//!
//! The playfield is a cuboid of cells:
//!
//! - **Width** (x): 10 cells (indexed 0-9)
//! - **Height** (y): 20 cells (indexed 0-19, y = 0 is the floor)
//! - **Depth** (z): 10 cells (indexed 0-9)
//! - **Spawn origin**: (W/2, H-2, D/2) = (5, 18, 5)
//!
//! "Down" is decreasing y. A layer is the set of cells sharing one y.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Placement-check cadence of the loop driver |
//! | `BASE_GRAVITY_MS` | 1000 | Fixed gravity interval |
//! | `AUTO_START_DELAY_MS` | 100 | Delay between initialize and start |
//!
//! # Examples
//!
//! ```
//! use cubetris_types::{Axis, GameAction, PieceKind, FIELD_DEPTH, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("cube"), Some(PieceKind::Cube));
//! assert_eq!(Axis::from_str("Y"), Some(Axis::Y));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!((FIELD_WIDTH, FIELD_HEIGHT, FIELD_DEPTH), (10, 20, 10));
//! ```

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field width in cells (x axis)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (y axis, gravity direction is -y)
pub const FIELD_HEIGHT: u8 = 20;

/// Field depth in cells (z axis)
pub const FIELD_DEPTH: u8 = 10;

/// Number of pieces kept in the upcoming queue
pub const QUEUE_LEN: usize = 3;

/// Maximum number of block offsets any catalog piece has
pub const MAX_PIECE_BLOCKS: usize = 4;

/// Loop driver tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fixed gravity interval (one cell per second)
pub const BASE_GRAVITY_MS: u32 = 1000;

/// Delay between `initialize` and the deferred `start`
pub const AUTO_START_DELAY_MS: u32 = 100;

/// Points per cleared layer, multiplied by the current level
pub const LAYER_SCORE: u32 = 100;

/// Cleared layers needed to advance one level
pub const LAYERS_PER_LEVEL: u32 = 10;

/// Gravity intervals by level (milliseconds per cell)
///
/// Index 0 = level 1, the last entry applies from level 9 on.
pub const GRAVITY_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Absolute minimum gravity interval (100ms)
pub const GRAVITY_INTERVAL_MIN_MS: u32 = 100;

/// Integer coordinate triple.
///
/// Used both for absolute cell positions and for block offsets relative to a
/// piece origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum, `None` if any axis overflows
    pub fn checked_add(self, rhs: Vec3) -> Option<Vec3> {
        Some(Vec3::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Principal rotation axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Parse axis from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// The piece kinds: seven tetrominoes plus the single cube
///
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **Cube**: Magenta, one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Cube,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 8] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Cube,
    ];

    /// The seven classic tetrominoes
    pub const CLASSIC: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cubetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("CUBE"), Some(PieceKind::Cube));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "cube" => Some(PieceKind::Cube),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Cube => "cube",
        }
    }
}

/// A cell of the field
///
/// - `None`: empty
/// - `Some(PieceKind)`: settled block; the kind doubles as the cell's color
pub type Cell = Option<PieceKind>;

/// 24-bit RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a `#rrggbb` string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}: expected #rrggbb")]
pub struct ParseColorError(pub String);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Lifecycle of a game session
///
/// `Ready -> Playing <-> Paused`, any playing state `-> GameOver`.
/// Only re-initialization leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    #[default]
    Ready,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Discrete input events understood by the engine
///
/// Each variant maps onto one engine operation; see
/// `GameState::apply_action` in `cubetris-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell towards -x
    MoveLeft,
    /// Move piece one cell towards +x
    MoveRight,
    /// Move piece one cell towards -z
    MoveForward,
    /// Move piece one cell towards +z
    MoveBackward,
    /// Rotate piece 90° about the x axis
    RotateX,
    /// Rotate piece 90° about the y axis
    RotateY,
    /// Rotate piece 90° about the z axis
    RotateZ,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to its resting position and place it
    HardDrop,
    /// Swap the active piece with the held one
    Hold,
    /// Toggle pause state
    Pause,
    /// Reinitialize the game
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cubetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveForward"), Some(GameAction::MoveForward));
    /// assert_eq!(GameAction::from_str("rotatez"), Some(GameAction::RotateZ));
    /// assert_eq!(GameAction::from_str("spin"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveforward" => Some(GameAction::MoveForward),
            "movebackward" => Some(GameAction::MoveBackward),
            "rotatex" => Some(GameAction::RotateX),
            "rotatey" => Some(GameAction::RotateY),
            "rotatez" => Some(GameAction::RotateZ),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
            GameAction::RotateX => "rotateX",
            GameAction::RotateY => "rotateY",
            GameAction::RotateZ => "rotateZ",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// Translation applied by the movement actions
    pub fn delta(&self) -> Option<Vec3> {
        match self {
            GameAction::MoveLeft => Some(Vec3::new(-1, 0, 0)),
            GameAction::MoveRight => Some(Vec3::new(1, 0, 0)),
            GameAction::MoveForward => Some(Vec3::new(0, 0, -1)),
            GameAction::MoveBackward => Some(Vec3::new(0, 0, 1)),
            GameAction::SoftDrop => Some(Vec3::new(0, -1, 0)),
            _ => None,
        }
    }

    /// Axis rotated about by the rotation actions
    pub fn axis(&self) -> Option<Axis> {
        match self {
            GameAction::RotateX => Some(Axis::X),
            GameAction::RotateY => Some(Axis::Y),
            GameAction::RotateZ => Some(Axis::Z),
            _ => None,
        }
    }
}
