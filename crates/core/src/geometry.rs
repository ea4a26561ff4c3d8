//! Collision and geometry - stateless functions over pieces and fields
//!
//! Nothing here mutates engine state: `collides` and `rotate_shape` are pure,
//! `clear_complete_layers` rewrites only the field it is handed.

use crate::field::Field;
use crate::piece::{Piece, Shape};
use crate::types::{Axis, Vec3, FIELD_HEIGHT};

/// True if any cell of `piece` is out of bounds or already occupied.
///
/// This is the only gate in front of every positional or rotational commit.
pub fn collides(piece: &Piece, field: &Field) -> bool {
    piece
        .cells()
        .any(|cell| !field.is_free(cell.x, cell.y, cell.z))
}

/// Rotate a single offset 90° about `axis`
#[inline]
pub fn rotate_offset(offset: Vec3, axis: Axis) -> Vec3 {
    let Vec3 { x, y, z } = offset;
    match axis {
        Axis::X => Vec3::new(x, -z, y),
        Axis::Y => Vec3::new(z, y, -x),
        Axis::Z => Vec3::new(-y, x, z),
    }
}

/// Rotate every offset of a shape 90° about `axis`.
///
/// No re-centering and no kick search; the result may collide and the caller
/// must check it with [`collides`].
pub fn rotate_shape(shape: &[Vec3], axis: Axis) -> Shape {
    shape.iter().map(|&offset| rotate_offset(offset, axis)).collect()
}

/// Remove every full layer, shifting the layers above down.
///
/// Equivalent to scanning y upward and, for each full layer, dropping
/// everything above it by one and re-checking the same y. Implemented as a
/// single compaction pass: surviving layers are copied down in order and the
/// vacated top layers are emptied. Colors travel with their cells.
///
/// Returns the number of layers removed.
pub fn clear_complete_layers(field: &mut Field) -> usize {
    let height = FIELD_HEIGHT as usize;
    let mut write_y = 0;

    for read_y in 0..height {
        if field.is_layer_full(read_y) {
            continue;
        }
        field.copy_layer(read_y, write_y);
        write_y += 1;
    }

    for y in write_y..height {
        field.clear_layer(y);
    }

    height - write_y
}
