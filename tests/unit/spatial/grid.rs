//! Tests for tile matrix construction, flipping and symmetry checks

#[cfg(test)]
mod tests {
    use kolamtile::KolamError;
    use kolamtile::spatial::grid::TileMatrix;
    use kolamtile::spatial::symmetry::SYMMETRY;

    fn golden() -> TileMatrix {
        TileMatrix::from_rows(&[
            vec![2, 2, 2, 2, 2],
            vec![4, 4, 4, 4, 4],
            vec![3, 5, 1, 3, 5],
            vec![2, 2, 2, 2, 2],
            vec![4, 4, 4, 4, 4],
        ])
        .unwrap_or_else(|e| unreachable!("golden rows are rectangular: {e}"))
    }

    // Tests nested rows round-trip through the array representation
    // Verified by transposing in from_rows
    #[test]
    fn test_from_rows_layout() {
        let matrix = TileMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]])
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.get(0, 2), Some(3));
        assert_eq!(matrix.get(1, 0), Some(4));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    // Tests ragged input is reported as an invalid parameter
    // Verified by truncating rows to the first row's width
    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = TileMatrix::from_rows(&[vec![1, 2], vec![3]]);
        assert!(matches!(
            result,
            Err(KolamError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests vertical flipping reverses row order only
    // Verified by flipping columns instead of rows
    #[test]
    fn test_flipped_vertically() {
        let matrix = TileMatrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]])
            .unwrap_or_else(|e| unreachable!("{e}"));
        let flipped = matrix.flipped_vertically();
        assert_eq!(flipped.to_rows(), vec![vec![5, 6], vec![3, 4], vec![1, 2]]);
        assert_eq!(flipped.flipped_vertically(), matrix);
    }

    // Tests a symmetric matrix reports no violations
    // Verified by comparing partners without applying the mirror tables
    #[test]
    fn test_symmetric_matrix_passes() {
        let matrix = golden();
        assert!(matrix.is_mirror_symmetric(&SYMMETRY));
        assert!(matrix.symmetry_violations(&SYMMETRY).is_empty());
    }

    // Tests a broken cell and its partners are reported
    // Verified by checking only the horizontal partner
    #[test]
    fn test_violations_reported() {
        let mut rows = golden().to_rows();
        rows[0][0] = 3;
        let matrix = TileMatrix::from_rows(&rows).unwrap_or_else(|e| unreachable!("{e}"));

        let violations = matrix.symmetry_violations(&SYMMETRY);
        assert!(!matrix.is_mirror_symmetric(&SYMMETRY));
        assert!(violations.contains(&[0, 0]));
        assert!(violations.contains(&[0, 4]));
        assert!(violations.contains(&[4, 0]));
        assert!(!violations.contains(&[2, 2]));
    }
}
