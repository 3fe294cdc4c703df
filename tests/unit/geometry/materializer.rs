//! Tests for converting tile matrices into pattern geometry

#[cfg(test)]
mod tests {
    use kolamtile::algorithm::assembly::assemble;
    use kolamtile::algorithm::selection::FirstChoice;
    use kolamtile::algorithm::solver::solve_quadrant;
    use kolamtile::geometry::materializer::materialize;
    use kolamtile::geometry::pattern::{Dimensions, GeometryStyle, PatternOrigin};
    use kolamtile::geometry::shapes::ShapeKind;
    use kolamtile::spatial::grid::TileMatrix;
    use kolamtile::spatial::symmetry::SYMMETRY;
    use ndarray::array;

    fn golden() -> TileMatrix {
        assemble(&solve_quadrant(5, &SYMMETRY, &mut FirstChoice), &SYMMETRY)
    }

    // Tests metadata and counts for the golden matrix
    // Verified by sizing the bounds from the curve count
    #[test]
    fn test_pattern_metadata() {
        let pattern = materialize(&golden(), &GeometryStyle::default());
        assert_eq!(pattern.id, "kolam-5x5");
        assert_eq!(pattern.name, "Kolam 5×5");
        assert_eq!((pattern.rows, pattern.cols), (5, 5));
        assert_eq!(pattern.dots.len(), 25);
        assert_eq!(pattern.curves.len(), 25);
        assert_eq!(
            pattern.dimensions,
            Dimensions {
                width: 360.0,
                height: 360.0
            }
        );
        assert_eq!(pattern.origin, PatternOrigin::Generated);
    }

    // Tests solver row 0 is drawn at the bottom of the picture
    // Verified by drawing the matrix without flipping it
    #[test]
    fn test_matrix_is_flipped() {
        let pattern = materialize(&golden(), &GeometryStyle::default());
        let first = pattern.curves.first().unwrap_or_else(|| unreachable!());
        assert_eq!(first.id, "curve-d-trbl-0-0");
        assert_eq!(first.cell, Some([0, 0]));
        assert_eq!(first.shape, Some(ShapeKind::DiagonalAscending));
        assert_eq!(first.path, "M 78 42 L 42 78");

        let bottom = pattern.curves.get(20).unwrap_or_else(|| unreachable!());
        assert_eq!(bottom.shape, Some(ShapeKind::VerticalLine));
    }

    // Tests the centre cell receives the neutral horizontal line
    // Verified by anchoring curves at the top-left dot
    #[test]
    fn test_center_curve() {
        let pattern = materialize(&golden(), &GeometryStyle::default());
        let center = pattern
            .curves
            .iter()
            .find(|curve| curve.cell == Some([2, 2]))
            .unwrap_or_else(|| unreachable!());
        assert_eq!(center.id, "curve-h-2-2");
        assert_eq!(center.path, "M 162 180 L 198 180");
    }

    // Tests identifiers outside the catalog keep their dot but draw nothing
    // Verified by drawing the neutral shape for unknown identifiers
    #[test]
    fn test_unknown_tiles_skipped() {
        let matrix = TileMatrix::new(array![[1u8, 0], [17, 2]]);
        let pattern = materialize(&matrix, &GeometryStyle::default());
        assert_eq!(pattern.dots.len(), 4);
        assert_eq!(pattern.curves.len(), 2);
    }

    // Tests style values flow into dots and curves
    // Verified by hard-coding the default stroke colour
    #[test]
    fn test_style_applied() {
        let style = GeometryStyle {
            cell_spacing: 100.0,
            stroke_color: "#ff0000".to_string(),
            stroke_width: 5.0,
            ..GeometryStyle::default()
        };
        let pattern = materialize(&TileMatrix::new(array![[1u8]]), &style);
        let curve = pattern.curves.first().unwrap_or_else(|| unreachable!());
        assert_eq!(curve.stroke_color, "#ff0000");
        assert!((curve.stroke_width - 5.0).abs() < f64::EPSILON);
        assert!((pattern.dimensions.width - 200.0).abs() < f64::EPSILON);
    }
}
