//! Quadrant constraint solver
//!
//! Fills one quadrant of the kolam in raster order. Every cell receives a tile
//! drawn uniformly from the tiles compatible with its upper and left
//! neighbours. The working matrix carries an extra border of neutral tiles
//! so the first row and column see "no connector" neighbours, and one extra
//! row and column that hold the mirror axes. Axis cells are further
//! restricted to tiles invariant under the corresponding mirror so the
//! reflected quadrants meet without seams.

use ndarray::{Array2, s};

use crate::algorithm::bitset::TileSet;
use crate::algorithm::selection::{ChoiceSource, pick_tile};
use crate::spatial::symmetry::SymmetryTables;
use crate::spatial::tiles::{NEUTRAL_TILE, TileId};

/// Side length of the solved quadrant for a requested grid size
///
/// Odd sizes reserve a central axis row and column: `(size - 1) / 2`.
/// Even sizes split evenly: `size / 2`.
pub const fn half_period(size: usize) -> usize {
    if size % 2 == 1 { (size - 1) / 2 } else { size / 2 }
}

/// Extra symmetry constraint applied to an axis cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisConstraint {
    /// Interior cell, only neighbour compatibility applies
    Free,
    /// Horizontal mirror axis row, tile must be vertically self-symmetric
    HorizontalAxis,
    /// Vertical mirror axis column, tile must be horizontally self-symmetric
    VerticalAxis,
    /// Both axes meet, tile must be self-symmetric under both mirrors
    Center,
}

impl AxisConstraint {
    const fn restriction(self, tables: &SymmetryTables) -> Option<&TileSet> {
        match self {
            Self::Free => None,
            Self::HorizontalAxis => Some(tables.self_v()),
            Self::VerticalAxis => Some(tables.self_h()),
            Self::Center => Some(tables.self_both()),
        }
    }
}

/// Result of solving one quadrant
///
/// Holds the full `(hp + 2) x (hp + 2)` working matrix. Row and column 0 are
/// the neutral border, `1..=hp` is the quadrant proper and index `hp + 1`
/// holds the axis values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedQuadrant {
    working: Array2<TileId>,
    half_period: usize,
    odd: bool,
    fallbacks: usize,
}

impl SolvedQuadrant {
    /// Side length of the quadrant proper
    pub const fn half_period(&self) -> usize {
        self.half_period
    }

    /// Whether the requested size was odd, so the axes are part of the output
    pub const fn is_odd(&self) -> bool {
        self.odd
    }

    /// Number of cells that had no valid candidate and received the neutral tile
    pub const fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// The whole working matrix including border and axes
    pub const fn working(&self) -> &Array2<TileId> {
        &self.working
    }

    /// The `hp x hp` quadrant proper
    pub fn core(&self) -> Array2<TileId> {
        let hp = self.half_period;
        self.working.slice(s![1..=hp, 1..=hp]).to_owned()
    }

    /// Values on the horizontal mirror axis, left of the centre
    pub fn axis_row(&self) -> Vec<TileId> {
        let hp = self.half_period;
        self.working.slice(s![hp + 1, 1..=hp]).to_vec()
    }

    /// Values on the vertical mirror axis, above the centre
    pub fn axis_column(&self) -> Vec<TileId> {
        let hp = self.half_period;
        self.working.slice(s![1..=hp, hp + 1]).to_vec()
    }

    /// Value where both axes meet
    pub fn center(&self) -> TileId {
        let hp = self.half_period;
        self.working
            .get([hp + 1, hp + 1])
            .copied()
            .unwrap_or(NEUTRAL_TILE)
    }
}

/// Tiles compatible with the placed neighbours above and left of a cell
///
/// Cells on the top row or left column of the working matrix have no such
/// neighbour; missing neighbours count as the neutral tile.
pub fn candidates_at(
    working: &Array2<TileId>,
    row: usize,
    col: usize,
    tables: &SymmetryTables,
) -> TileSet {
    let up = row
        .checked_sub(1)
        .and_then(|r| working.get([r, col]))
        .copied()
        .unwrap_or(NEUTRAL_TILE);
    let left = col
        .checked_sub(1)
        .and_then(|c| working.get([row, c]))
        .copied()
        .unwrap_or(NEUTRAL_TILE);

    tables.valid_below(up).intersection(tables.valid_right_of(left))
}

struct QuadrantBuilder<'a, S: ?Sized> {
    working: Array2<TileId>,
    tables: &'a SymmetryTables,
    source: &'a mut S,
    fallbacks: usize,
}

impl<S: ChoiceSource + ?Sized> QuadrantBuilder<'_, S> {
    fn place(&mut self, row: usize, col: usize, constraint: AxisConstraint) {
        let mut valids = candidates_at(&self.working, row, col, self.tables);
        if let Some(restriction) = constraint.restriction(self.tables) {
            valids.intersect_with(restriction);
        }

        let tile = pick_tile(&valids, self.source).unwrap_or_else(|| {
            self.fallbacks += 1;
            NEUTRAL_TILE
        });

        if let Some(cell) = self.working.get_mut([row, col]) {
            *cell = tile;
        }
    }
}

/// Solve the quadrant for a grid of `size` cells per side
///
/// Never fails: cells with an empty candidate set receive the neutral tile
/// and are counted in [`SolvedQuadrant::fallbacks`]. Odd sizes also solve
/// the axis row, the axis column and the centre; even sizes leave them
/// neutral. Size 1 collapses the quadrant to nothing and only the centre
/// cell is solved; size 0 solves nothing.
pub fn solve_quadrant<S: ChoiceSource + ?Sized>(
    size: usize,
    tables: &SymmetryTables,
    source: &mut S,
) -> SolvedQuadrant {
    let hp = half_period(size);
    let mut builder = QuadrantBuilder {
        working: Array2::from_elem((hp + 2, hp + 2), NEUTRAL_TILE),
        tables,
        source,
        fallbacks: 0,
    };

    for row in 1..=hp {
        for col in 1..=hp {
            builder.place(row, col, AxisConstraint::Free);
        }
    }

    // Even sizes have no axis row or column in the output.
    let odd = size % 2 == 1;
    if odd {
        for col in 1..=hp {
            builder.place(hp + 1, col, AxisConstraint::HorizontalAxis);
        }

        for row in 1..=hp {
            builder.place(row, hp + 1, AxisConstraint::VerticalAxis);
        }

        builder.place(hp + 1, hp + 1, AxisConstraint::Center);
    }

    SolvedQuadrant {
        working: builder.working,
        half_period: hp,
        odd,
        fallbacks: builder.fallbacks,
    }
}
