//! Compatibility and mirror tables for the tile catalog
//!
//! The mate tables and mirror permutations are authored to match the visual
//! geometry of the curve tiles and are reproduced literally. The
//! self-symmetric subsets are derived from the permutations exactly once per
//! process and shared read-only by every generation call.

use crate::algorithm::bitset::TileSet;
use crate::spatial::tiles::{TILE_COUNT, TileId, has_down, has_right};
use std::sync::LazyLock;

/// Tiles that may sit below a neighbour, indexed by that neighbour's down
/// connector state (0 = no connector, 1 = connector)
pub const MATE_BY_DOWN_STATE: [&[TileId]; 2] =
    [&[2, 3, 5, 6, 9, 10, 12], &[4, 7, 8, 11, 13, 14, 15, 16]];

/// Tiles that may sit right of a neighbour, indexed by that neighbour's right
/// connector state (0 = no connector, 1 = connector)
pub const MATE_BY_RIGHT_STATE: [&[TileId]; 2] =
    [&[2, 3, 4, 6, 7, 11, 13], &[5, 8, 9, 10, 12, 14, 15, 16]];

/// Tile obtained by mirroring each tile left-to-right (entry `id - 1`)
pub const MIRROR_H: [TileId; TILE_COUNT] = [1, 2, 5, 4, 3, 9, 8, 7, 6, 10, 11, 12, 15, 14, 13, 16];

/// Tile obtained by mirroring each tile top-to-bottom (entry `id - 1`)
pub const MIRROR_V: [TileId; TILE_COUNT] = [1, 4, 3, 2, 5, 7, 6, 9, 8, 10, 11, 14, 13, 12, 15, 16];

/// Process-wide symmetry tables, built on first use
pub static SYMMETRY: LazyLock<SymmetryTables> = LazyLock::new(SymmetryTables::build);

/// Precomputed compatibility sets, mirror permutations and fixed points
#[derive(Debug, Clone)]
pub struct SymmetryTables {
    mate_by_down_state: [TileSet; 2],
    mate_by_right_state: [TileSet; 2],
    mirror_h: [TileId; TILE_COUNT],
    mirror_v: [TileId; TILE_COUNT],
    self_h: TileSet,
    self_v: TileSet,
    self_both: TileSet,
}

impl SymmetryTables {
    /// Build the tables from the authored constants
    pub fn build() -> Self {
        Self::from_parts(
            &MATE_BY_DOWN_STATE,
            &MATE_BY_RIGHT_STATE,
            MIRROR_H,
            MIRROR_V,
        )
    }

    /// Build tables from explicit mate lists and permutations
    pub fn from_parts(
        mate_by_down_state: &[&[TileId]; 2],
        mate_by_right_state: &[&[TileId]; 2],
        mirror_h: [TileId; TILE_COUNT],
        mirror_v: [TileId; TILE_COUNT],
    ) -> Self {
        let self_h = fixed_points(&mirror_h);
        let self_v = fixed_points(&mirror_v);
        let self_both = self_h.intersection(&self_v);

        Self {
            mate_by_down_state: mate_by_down_state.map(TileSet::from_ids),
            mate_by_right_state: mate_by_right_state.map(TileSet::from_ids),
            mirror_h,
            mirror_v,
            self_h,
            self_v,
            self_both,
        }
    }

    /// Tiles compatible with a neighbour whose down connector is in `state`
    pub const fn mates_by_down_state(&self, state: bool) -> &TileSet {
        if state {
            &self.mate_by_down_state[1]
        } else {
            &self.mate_by_down_state[0]
        }
    }

    /// Tiles compatible with a neighbour whose right connector is in `state`
    pub const fn mates_by_right_state(&self, state: bool) -> &TileSet {
        if state {
            &self.mate_by_right_state[1]
        } else {
            &self.mate_by_right_state[0]
        }
    }

    /// Tiles that may be placed directly below `up`
    pub fn valid_below(&self, up: TileId) -> &TileSet {
        self.mates_by_down_state(has_down(up))
    }

    /// Tiles that may be placed directly right of `left`
    pub fn valid_right_of(&self, left: TileId) -> &TileSet {
        self.mates_by_right_state(has_right(left))
    }

    /// Horizontal mirror image of a tile
    ///
    /// Identifiers outside the catalog map to themselves.
    pub fn mirror_h(&self, tile: TileId) -> TileId {
        permute(&self.mirror_h, tile)
    }

    /// Vertical mirror image of a tile
    ///
    /// Identifiers outside the catalog map to themselves.
    pub fn mirror_v(&self, tile: TileId) -> TileId {
        permute(&self.mirror_v, tile)
    }

    /// Tiles unchanged by horizontal mirroring
    pub const fn self_h(&self) -> &TileSet {
        &self.self_h
    }

    /// Tiles unchanged by vertical mirroring
    pub const fn self_v(&self) -> &TileSet {
        &self.self_v
    }

    /// Tiles unchanged by both mirrors
    pub const fn self_both(&self) -> &TileSet {
        &self.self_both
    }
}

fn permute(table: &[TileId; TILE_COUNT], tile: TileId) -> TileId {
    usize::from(tile)
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or(tile)
}

fn fixed_points(table: &[TileId; TILE_COUNT]) -> TileSet {
    table
        .iter()
        .enumerate()
        .filter(|&(index, &image)| usize::from(image) == index + 1)
        .map(|(_, &image)| image)
        .collect()
}
