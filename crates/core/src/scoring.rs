//! Scoring module - layer clear points and level progression
//!
//! Each cleared layer is worth `LAYER_SCORE` points times the level that was
//! current when the piece was placed. The level is derived from the running
//! total of cleared layers, starting at 1.

use crate::types::{LAYERS_PER_LEVEL, LAYER_SCORE};

/// Points for clearing `layers` layers at `level`
pub fn layer_clear_score(layers: u32, level: u32) -> u32 {
    layers.saturating_mul(LAYER_SCORE).saturating_mul(level)
}

/// Level reached after `total_layers` cleared layers
pub fn level_for_layers(total_layers: u32) -> u32 {
    total_layers / LAYERS_PER_LEVEL + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_clear_score() {
        assert_eq!(layer_clear_score(0, 1), 0);
        assert_eq!(layer_clear_score(0, 7), 0);
        assert_eq!(layer_clear_score(1, 1), 100);
        assert_eq!(layer_clear_score(2, 1), 200);
        assert_eq!(layer_clear_score(4, 3), 1200);
        assert_eq!(layer_clear_score(3, 10), 3000);
    }

    #[test]
    fn test_level_for_layers() {
        assert_eq!(level_for_layers(0), 1);
        assert_eq!(level_for_layers(9), 1);
        assert_eq!(level_for_layers(10), 2);
        assert_eq!(level_for_layers(19), 2);
        assert_eq!(level_for_layers(20), 3);
        assert_eq!(level_for_layers(105), 11);
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(layer_clear_score(u32::MAX, 2), u32::MAX);
    }
}
