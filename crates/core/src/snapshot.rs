use serde::{Deserialize, Serialize};

use crate::field::PlacedBlock;
use crate::piece::Piece;
use crate::types::{GamePhase, Vec3};

/// Point-in-time, read-only copy of everything a presentation layer draws.
///
/// Field names serialize in camelCase so a renderer written in another
/// language can consume the JSON form directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_state: GamePhase,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub placed_blocks: Vec<PlacedBlock>,
    pub current_piece: Option<Piece>,
    pub ghost_position: Option<Vec3>,
    pub next_pieces: Vec<Piece>,
    pub held_piece: Option<Piece>,
    pub can_hold: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.game_state == GamePhase::Playing
    }
}

/// Result of writing the active piece into the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOutcome {
    /// Layers removed by this placement
    pub layers_cleared: u32,
    /// Points added by this placement
    pub score_gained: u32,
    /// The next piece could not spawn; nothing else was committed
    pub game_over: bool,
}
