//! Tests for JSON serialization of patterns

#[cfg(test)]
mod tests {
    use kolamtile::KolamError;
    use kolamtile::algorithm::executor::{GeneratorConfig, KolamGenerator};
    use kolamtile::algorithm::selection::FirstChoice;
    use kolamtile::geometry::fallback::bordered_square;
    use kolamtile::geometry::pattern::GeometryStyle;
    use kolamtile::io::json::{export_json, to_json};
    use serde_json::{Value, json};
    use tempfile::tempdir;

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap_or_else(|e| unreachable!("{e}"))
    }

    // Tests generated patterns serialize with camelCase keys and tagged origin
    // Verified by serializing field names in snake case
    #[test]
    fn test_generated_json() {
        let mut generator = KolamGenerator::with_selector(GeneratorConfig::default(), FirstChoice);
        let pattern = generator.generate(5);
        let value = parse(&to_json(&pattern).unwrap_or_else(|e| unreachable!("{e}")));

        assert_eq!(value["id"], "kolam-5x5");
        assert_eq!(value["rows"], 5);
        assert_eq!(value["origin"], json!({ "kind": "generated" }));
        assert_eq!(value["dimensions"], json!({ "width": 360.0, "height": 360.0 }));
        assert_eq!(value["dots"].as_array().map(Vec::len), Some(25));

        let curve = &value["curves"][0];
        assert_eq!(curve["id"], "curve-d-trbl-0-0");
        assert_eq!(curve["cell"], json!([0, 0]));
        assert_eq!(curve["shape"], "diagonalAscending");
        assert_eq!(curve["strokeColor"], "#ffffff");
        assert_eq!(curve["start"], json!({ "x": 78.0, "y": 42.0 }));
    }

    // Tests fallback curves carry no cell or shape
    // Verified by skipping empty options during serialization
    #[test]
    fn test_bordered_json() {
        let pattern = bordered_square(3, &GeometryStyle::default());
        let value = parse(&to_json(&pattern).unwrap_or_else(|e| unreachable!("{e}")));
        assert_eq!(value["origin"], json!({ "kind": "bordered" }));
        assert_eq!(value["curves"][0]["cell"], Value::Null);
        assert_eq!(value["curves"][0]["shape"], Value::Null);
        assert_eq!(value["dots"][0]["id"], "dot-0-0");
    }

    // Tests the exported file matches the in-memory serialization
    // Verified by writing compact JSON to the file
    #[test]
    fn test_export_json() {
        let dir = tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let path = dir.path().join("kolam.json");
        let pattern = bordered_square(4, &GeometryStyle::default());

        export_json(&pattern, &path).unwrap_or_else(|e| unreachable!("{e}"));
        let written = std::fs::read_to_string(&path).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(
            written,
            to_json(&pattern).unwrap_or_else(|e| unreachable!("{e}"))
        );
    }

    // Tests a missing parent directory surfaces as a file system error
    // Verified by creating parent directories before writing
    #[test]
    fn test_export_json_missing_directory() {
        let dir = tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let path = dir.path().join("absent").join("kolam.json");
        let pattern = bordered_square(3, &GeometryStyle::default());
        assert!(matches!(
            export_json(&pattern, &path),
            Err(KolamError::FileSystem {
                operation: "create json",
                ..
            })
        ));
    }
}
