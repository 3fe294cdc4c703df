use crate::spatial::tiles::{TILE_COUNT, TileId};
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of tile identifiers used for candidate filtering
///
/// Uses 1-based identifiers to match the tile catalog. Iteration and
/// positional lookup always run in ascending identifier order, which keeps
/// random selection reproducible under an injected choice source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl Default for TileSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl TileSet {
    /// Create a set with no tiles
    pub fn empty() -> Self {
        Self {
            bits: bitvec![0; TILE_COUNT],
        }
    }

    /// Create a set from a list of identifiers, ignoring out-of-range values
    pub fn from_ids(ids: &[TileId]) -> Self {
        ids.iter().copied().collect()
    }

    /// Add a tile to the set
    ///
    /// Identifiers outside `1..=TILE_COUNT` are ignored.
    pub fn insert(&mut self, tile: TileId) {
        if let Some(index) = Self::slot(tile) {
            self.bits.set(index, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        Self::slot(tile).is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Keep only tiles also present in `other`
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set holding the tiles common to both
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of tiles in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`-th smallest identifier in the set
    pub fn nth(&self, n: usize) -> Option<TileId> {
        self.bits.iter_ones().nth(n).map(|index| (index + 1) as TileId)
    }

    /// Iterate over identifiers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(|index| (index + 1) as TileId)
    }

    /// Collect identifiers in ascending order
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }

    fn slot(tile: TileId) -> Option<usize> {
        usize::from(tile)
            .checked_sub(1)
            .filter(|&index| index < TILE_COUNT)
    }
}

impl FromIterator<TileId> for TileSet {
    fn from_iter<I: IntoIterator<Item = TileId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} tiles: {:?})", self.len(), self.to_vec())
    }
}
