//! Conversion of a tile matrix into drawable geometry

use crate::geometry::pattern::{Curve, GeometryStyle, Pattern, PatternOrigin};
use crate::geometry::shapes::ShapeKind;
use crate::spatial::grid::TileMatrix;

/// Lay out dots and curves for every cell of `matrix`
///
/// The matrix is flipped vertically first, so solver row 0 ends up at the
/// bottom of the drawing. Cells holding an identifier outside the catalog
/// keep their dot but receive no curve.
pub fn materialize(matrix: &TileMatrix, style: &GeometryStyle) -> Pattern {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let flipped = matrix.flipped_vertically();
    let offset = style.cell_spacing * style.curve_offset_fraction;

    let curves = flipped
        .cells()
        .indexed_iter()
        .filter_map(|((row, col), &tile)| {
            let shape = ShapeKind::for_tile(tile)?;
            let trace = shape.trace(style.dot_center(row, col), offset);
            Some(Curve {
                id: format!("curve-{}-{row}-{col}", shape.label()),
                cell: Some([row, col]),
                shape: Some(shape),
                start: trace.start,
                end: trace.end,
                path: trace.path.to_string(),
                stroke_color: style.stroke_color.clone(),
                stroke_width: style.stroke_width,
            })
        })
        .collect();

    Pattern {
        id: format!("kolam-{rows}x{cols}"),
        name: format!("Kolam {rows}×{cols}"),
        rows,
        cols,
        dots: style.dot_grid(rows, cols),
        curves,
        dimensions: style.bounds(rows, cols),
        origin: PatternOrigin::Generated,
    }
}
