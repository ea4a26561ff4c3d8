//! Piece catalog - static shape and color data for every piece kind
//!
//! Offsets are relative to the piece origin. All catalog shapes lie in the
//! z = 0 plane; rotations about x and y lift them into 3D.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceKind, Vec3};

const fn v(x: i32, y: i32) -> Vec3 {
    Vec3::new(x, y, 0)
}

const I_SHAPE: [Vec3; 4] = [v(-1, 0), v(0, 0), v(1, 0), v(2, 0)];
const O_SHAPE: [Vec3; 4] = [v(0, 0), v(1, 0), v(0, 1), v(1, 1)];
const T_SHAPE: [Vec3; 4] = [v(-1, 0), v(0, 0), v(1, 0), v(0, 1)];
const S_SHAPE: [Vec3; 4] = [v(-1, 0), v(0, 0), v(0, 1), v(1, 1)];
const Z_SHAPE: [Vec3; 4] = [v(-1, 1), v(0, 1), v(0, 0), v(1, 0)];
const J_SHAPE: [Vec3; 4] = [v(-1, 1), v(-1, 0), v(0, 0), v(1, 0)];
const L_SHAPE: [Vec3; 4] = [v(1, 1), v(-1, 0), v(0, 0), v(1, 0)];
const CUBE_SHAPE: [Vec3; 1] = [v(0, 0)];

/// Block offsets of a piece kind in spawn orientation
pub fn shape(kind: PieceKind) -> &'static [Vec3] {
    match kind {
        PieceKind::I => &I_SHAPE,
        PieceKind::O => &O_SHAPE,
        PieceKind::T => &T_SHAPE,
        PieceKind::S => &S_SHAPE,
        PieceKind::Z => &Z_SHAPE,
        PieceKind::J => &J_SHAPE,
        PieceKind::L => &L_SHAPE,
        PieceKind::Cube => &CUBE_SHAPE,
    }
}

/// Display color of a piece kind
pub fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::rgb(0x00, 0xf0, 0xf0),
        PieceKind::O => Color::rgb(0xf0, 0xf0, 0x00),
        PieceKind::T => Color::rgb(0xa0, 0x00, 0xf0),
        PieceKind::S => Color::rgb(0x00, 0xf0, 0x00),
        PieceKind::Z => Color::rgb(0xf0, 0x00, 0x00),
        PieceKind::J => Color::rgb(0x00, 0x00, 0xf0),
        PieceKind::L => Color::rgb(0xf0, 0xa0, 0x00),
        PieceKind::Cube => Color::rgb(0xff, 0x00, 0xff),
    }
}

/// Set of kinds random draws are taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiecePool {
    /// All eight kinds, cube included
    #[default]
    All,
    /// The seven tetrominoes only
    Classic,
}

impl PiecePool {
    pub fn kinds(&self) -> &'static [PieceKind] {
        match self {
            PiecePool::All => &PieceKind::ALL,
            PiecePool::Classic => &PieceKind::CLASSIC,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(PiecePool::All),
            "classic" => Some(PiecePool::Classic),
            _ => None,
        }
    }
}

/// Draw one kind uniformly from the pool.
///
/// Every draw is independent (no bag).
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R, pool: PiecePool) -> PieceKind {
    let kinds = pool.kinds();
    kinds[rng.gen_range(0..kinds.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_block_counts() {
        for kind in PieceKind::CLASSIC {
            assert_eq!(shape(kind).len(), 4, "{:?}", kind);
        }
        assert_eq!(shape(PieceKind::Cube), &[Vec3::ZERO]);
    }

    #[test]
    fn test_shapes_have_no_duplicate_offsets() {
        for kind in PieceKind::ALL {
            let unique: HashSet<_> = shape(kind).iter().collect();
            assert_eq!(unique.len(), shape(kind).len());
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: HashSet<_> = PieceKind::ALL.iter().map(|&k| color(k)).collect();
        assert_eq!(colors.len(), PieceKind::ALL.len());
        assert_eq!(color(PieceKind::I).to_hex(), "#00f0f0");
        assert_eq!(color(PieceKind::Cube).to_hex(), "#ff00ff");
    }

    #[test]
    fn test_random_kind_covers_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..500)
            .map(|_| random_kind(&mut rng, PiecePool::All))
            .collect();
        assert_eq!(seen.len(), 8);

        let classic: HashSet<_> = (0..500)
            .map(|_| random_kind(&mut rng, PiecePool::Classic))
            .collect();
        assert_eq!(classic.len(), 7);
        assert!(!classic.contains(&PieceKind::Cube));
    }

    #[test]
    fn test_random_kind_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(
                random_kind(&mut a, PiecePool::All),
                random_kind(&mut b, PiecePool::All)
            );
        }
    }
}
