//! Full tile matrix produced by reflecting a solved quadrant
//!
//! Rows run top to bottom in solver order. The matrix is read-only once
//! assembled; rendering flips it vertically before laying out geometry.

use ndarray::{Array2, Axis};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::symmetry::SymmetryTables;
use crate::spatial::tiles::TileId;

/// Square or rectangular grid of tile identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMatrix {
    cells: Array2<TileId>,
}

impl TileMatrix {
    /// Wrap an existing array
    pub const fn new(cells: Array2<TileId>) -> Self {
        Self { cells }
    }

    /// Build a matrix from nested rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have differing lengths
    pub fn from_rows(rows: &[Vec<TileId>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some(bad) = rows.iter().find(|row| row.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &bad.len(),
                &format!("every row must have {width} cells"),
            ));
        }

        let flat: Vec<TileId> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((height, width), flat)
            .map(Self::new)
            .map_err(|e| invalid_parameter("rows", &height, &e))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Tile at a position, `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<TileId> {
        self.cells.get([row, col]).copied()
    }

    /// Underlying array
    pub const fn cells(&self) -> &Array2<TileId> {
        &self.cells
    }

    /// Copy the matrix into nested rows
    pub fn to_rows(&self) -> Vec<Vec<TileId>> {
        self.cells
            .axis_iter(Axis(0))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Matrix with row order reversed
    #[must_use]
    pub fn flipped_vertically(&self) -> Self {
        let rows = self.rows();
        let cells = Array2::from_shape_fn(self.cells.dim(), |(row, col)| {
            self.cells
                .get([rows - 1 - row, col])
                .copied()
                .unwrap_or_default()
        });
        Self { cells }
    }

    /// Positions where mirror symmetry is broken
    ///
    /// A cell is reported when its horizontal partner does not hold its
    /// horizontal mirror image, or its vertical partner does not hold its
    /// vertical mirror image.
    pub fn symmetry_violations(&self, tables: &SymmetryTables) -> Vec<[usize; 2]> {
        let (rows, cols) = self.cells.dim();
        let mut violations = Vec::new();

        for ((row, col), &tile) in self.cells.indexed_iter() {
            let h_partner = self.get(row, cols - 1 - col);
            let v_partner = self.get(rows - 1 - row, col);

            if h_partner != Some(tables.mirror_h(tile)) || v_partner != Some(tables.mirror_v(tile))
            {
                violations.push([row, col]);
            }
        }

        violations
    }

    /// Whether the matrix is symmetric under both mirrors
    pub fn is_mirror_symmetric(&self, tables: &SymmetryTables) -> bool {
        self.symmetry_violations(tables).is_empty()
    }
}
