//! Tests for path data, dot layout and pattern metadata

#[cfg(test)]
mod tests {
    use kolamtile::geometry::pattern::{
        Dimensions, GeometryStyle, PathCommand, PathData, PatternOrigin, Point,
    };
    use kolamtile::geometry::fallback::bordered_square;

    // Tests each command renders in SVG path syntax
    // Verified by swapping the control and end points of a quadratic segment
    #[test]
    fn test_command_display() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.5, 4.0);
        let c = Point::new(5.0, 6.0);
        assert_eq!(PathCommand::MoveTo(a).to_string(), "M 1 2");
        assert_eq!(PathCommand::LineTo(b).to_string(), "L 3.5 4");
        assert_eq!(PathCommand::QuadTo(a, b).to_string(), "Q 1 2 3.5 4");
        assert_eq!(
            PathCommand::CubicTo(a, b, c).to_string(),
            "C 1 2, 3.5 4, 5 6"
        );
    }

    // Tests commands are joined by single spaces in order
    // Verified by appending with a leading space on the first command
    #[test]
    fn test_path_display() {
        let mut path = PathData::starting_at(Point::new(0.0, 0.0))
            .then(PathCommand::LineTo(Point::new(10.0, 0.0)));
        path.push(PathCommand::LineTo(Point::new(10.0, 10.0)));
        assert_eq!(path.to_string(), "M 0 0 L 10 0 L 10 10");
        assert_eq!(PathData::default().to_string(), "");
    }

    // Tests dots are laid out row-major one spacing apart
    // Verified by placing the first dot at the origin
    #[test]
    fn test_dot_grid() {
        let style = GeometryStyle::default();
        let dots = style.dot_grid(2, 3);
        assert_eq!(dots.len(), 6);

        let first = dots.first().unwrap_or_else(|| unreachable!());
        assert_eq!(first.id, "dot-0-0");
        assert_eq!(first.center, Point::new(60.0, 60.0));
        assert!(first.filled);

        let last = dots.last().unwrap_or_else(|| unreachable!());
        assert_eq!((last.row, last.col), (1, 2));
        assert_eq!(last.center, Point::new(180.0, 120.0));
    }

    // Tests the bounding box leaves one spacing of margin on each side
    // Verified by using the dot count without the margin
    #[test]
    fn test_bounds() {
        let style = GeometryStyle {
            cell_spacing: 10.0,
            ..GeometryStyle::default()
        };
        assert_eq!(
            style.bounds(4, 2),
            Dimensions {
                width: 30.0,
                height: 50.0
            }
        );
    }

    // Tests only generated patterns count as non-degraded
    // Verified by treating bordered squares as generated
    #[test]
    fn test_is_degraded() {
        let mut pattern = bordered_square(3, &GeometryStyle::default());
        assert!(pattern.is_degraded());
        pattern.origin = PatternOrigin::Generated;
        assert!(!pattern.is_degraded());
    }
}
