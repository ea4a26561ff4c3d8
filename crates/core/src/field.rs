//! Field module - the 3D grid of settled blocks
//!
//! The field is a 10x20x10 cuboid where each cell is empty or holds the kind
//! of the piece that settled there. Uses a flat array for cache locality.
//! Linear index is `x + W * (y + H * z)`, so one x-run is contiguous and a
//! layer (fixed y) is `D` runs of `W` cells spaced `W * H` apart.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::types::{Cell, Color, PieceKind, Vec3, FIELD_DEPTH, FIELD_HEIGHT, FIELD_WIDTH};

const W: usize = FIELD_WIDTH as usize;
const H: usize = FIELD_HEIGHT as usize;
const D: usize = FIELD_DEPTH as usize;

/// Total number of cells in the field
pub const FIELD_SIZE: usize = W * H * D;

/// Rendering-facing record of one settled block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub position: Vec3,
    pub color: Color,
}

/// The settled blocks, flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create an empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32, z: i32) -> Option<usize> {
        if !Self::in_bounds(x, y, z) {
            return None;
        }
        Some(x as usize + W * (y as usize + H * z as usize))
    }

    /// Whether (x, y, z) lies inside the field on every axis
    #[inline(always)]
    pub fn in_bounds(x: i32, y: i32, z: i32) -> bool {
        (0..W as i32).contains(&x) && (0..H as i32).contains(&y) && (0..D as i32).contains(&z)
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    pub fn depth(&self) -> u8 {
        FIELD_DEPTH
    }

    /// Get cell at (x, y, z)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        Self::index(x, y, z).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y, z)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, z: i32, cell: Cell) -> bool {
        match Self::index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn get_at(&self, p: Vec3) -> Option<Cell> {
        self.get(p.x, p.y, p.z)
    }

    pub fn set_at(&mut self, p: Vec3, cell: Cell) -> bool {
        self.set(p.x, p.y, p.z, cell)
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        matches!(self.get(x, y, z), Some(Some(_)))
    }

    /// Within bounds and empty
    pub fn is_free(&self, x: i32, y: i32, z: i32) -> bool {
        matches!(self.get(x, y, z), Some(None))
    }

    /// Check if every (x, z) cell of layer y is filled
    pub fn is_layer_full(&self, y: usize) -> bool {
        if y >= H {
            return false;
        }
        (0..D).all(|z| self.run(y, z).iter().all(|cell| cell.is_some()))
    }

    /// Number of filled cells in layer y
    pub fn layer_count(&self, y: usize) -> usize {
        if y >= H {
            return 0;
        }
        (0..D)
            .map(|z| self.run(y, z).iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Number of filled cells in the whole field
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    #[inline(always)]
    fn run_start(y: usize, z: usize) -> usize {
        W * (y + H * z)
    }

    fn run(&self, y: usize, z: usize) -> &[Cell] {
        let start = Self::run_start(y, z);
        &self.cells[start..start + W]
    }

    /// Copy layer `src` over layer `dst`
    pub(crate) fn copy_layer(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        for z in 0..D {
            let src_start = Self::run_start(src, z);
            self.cells
                .copy_within(src_start..src_start + W, Self::run_start(dst, z));
        }
    }

    /// Empty every cell of layer y
    pub(crate) fn clear_layer(&mut self, y: usize) {
        for z in 0..D {
            let start = Self::run_start(y, z);
            for cell in &mut self.cells[start..start + W] {
                *cell = None;
            }
        }
    }

    /// Settled blocks with their colors, in z, y, x scan order
    pub fn placed_blocks(&self) -> Vec<PlacedBlock> {
        self.placed_iter().collect()
    }

    pub fn placed_iter(&self) -> impl Iterator<Item = PlacedBlock> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|kind: PieceKind| PlacedBlock {
                position: Vec3::new(
                    (idx % W) as i32,
                    ((idx / W) % H) as i32,
                    (idx / (W * H)) as i32,
                ),
                color: catalog::color(kind),
            })
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..]
    }

    /// Clear the entire field
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    /// Fill layer y except for the listed (x, z) holes. Test and bench fixture.
    #[doc(hidden)]
    pub fn fill_layer_except(&mut self, y: i32, kind: PieceKind, holes: &[(i32, i32)]) {
        for z in 0..D as i32 {
            for x in 0..W as i32 {
                if !holes.contains(&(x, z)) {
                    self.set(x, y, z, Some(kind));
                }
            }
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
