//! Reflection of a solved quadrant into the full symmetric matrix
//!
//! Pure and deterministic: the same solved quadrant always assembles to the
//! same matrix.

use ndarray::{Array2, s};

use crate::algorithm::solver::SolvedQuadrant;
use crate::spatial::grid::TileMatrix;
use crate::spatial::symmetry::SymmetryTables;
use crate::spatial::tiles::{NEUTRAL_TILE, TileId};

/// Flip columns and map every tile through the horizontal mirror
pub fn reflect_horizontal(quadrant: &Array2<TileId>, tables: &SymmetryTables) -> Array2<TileId> {
    let cols = quadrant.ncols();
    Array2::from_shape_fn(quadrant.dim(), |(row, col)| {
        quadrant
            .get([row, cols - 1 - col])
            .map_or(NEUTRAL_TILE, |&tile| tables.mirror_h(tile))
    })
}

/// Flip rows and map every tile through the vertical mirror
pub fn reflect_vertical(quadrant: &Array2<TileId>, tables: &SymmetryTables) -> Array2<TileId> {
    let rows = quadrant.nrows();
    Array2::from_shape_fn(quadrant.dim(), |(row, col)| {
        quadrant
            .get([rows - 1 - row, col])
            .map_or(NEUTRAL_TILE, |&tile| tables.mirror_v(tile))
    })
}

/// Assemble the full matrix from a solved quadrant
///
/// Even sizes place the four reflected quadrants edge to edge. Odd sizes
/// insert the solved axis row and column between them, completing the far
/// half of each axis by mirroring its near half.
pub fn assemble(solved: &SolvedQuadrant, tables: &SymmetryTables) -> TileMatrix {
    let hp = solved.half_period();
    let top_left = solved.core();
    let top_right = reflect_horizontal(&top_left, tables);
    let bottom_left = reflect_vertical(&top_left, tables);
    let bottom_right = reflect_vertical(&top_right, tables);

    if !solved.is_odd() {
        let size = 2 * hp;
        let mut full = Array2::from_elem((size, size), NEUTRAL_TILE);
        full.slice_mut(s![..hp, ..hp]).assign(&top_left);
        full.slice_mut(s![..hp, hp..]).assign(&top_right);
        full.slice_mut(s![hp.., ..hp]).assign(&bottom_left);
        full.slice_mut(s![hp.., hp..]).assign(&bottom_right);
        return TileMatrix::new(full);
    }

    let size = 2 * hp + 1;
    let mut full = Array2::from_elem((size, size), NEUTRAL_TILE);
    full.slice_mut(s![..hp, ..hp]).assign(&top_left);
    full.slice_mut(s![..hp, hp + 1..]).assign(&top_right);
    full.slice_mut(s![hp + 1.., ..hp]).assign(&bottom_left);
    full.slice_mut(s![hp + 1.., hp + 1..]).assign(&bottom_right);

    let axis_row = solved.axis_row();
    let axis_column = solved.axis_column();

    for (offset, &tile) in axis_row.iter().enumerate() {
        if let Some(cell) = full.get_mut([hp, offset]) {
            *cell = tile;
        }
        if let Some(cell) = full.get_mut([hp, size - 1 - offset]) {
            *cell = tables.mirror_h(tile);
        }
    }

    for (offset, &tile) in axis_column.iter().enumerate() {
        if let Some(cell) = full.get_mut([offset, hp]) {
            *cell = tile;
        }
        if let Some(cell) = full.get_mut([size - 1 - offset, hp]) {
            *cell = tables.mirror_v(tile);
        }
    }

    if let Some(cell) = full.get_mut([hp, hp]) {
        *cell = solved.center();
    }

    TileMatrix::new(full)
}
