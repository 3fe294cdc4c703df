//! Checks that the unit test tree mirrors `src` and that every test file tests something

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Harness roots and module declarations carry no tests of their own
    fn is_organizational(relative: &str) -> bool {
        let name = Path::new(relative)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        matches!(name, "main.rs" | "lib.rs" | "mod.rs")
    }

    /// Collect directories and `.rs` files below `dir`, relative to `base`
    fn relative_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .into_owned();

            if path.is_dir() {
                paths.insert(relative);
                relative_paths(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }

        Ok(())
    }

    fn scan(root: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let root = Path::new(root);
        relative_paths(root, root, &mut paths)
            .unwrap_or_else(|e| unreachable!("failed to scan {}: {e}", root.display()));
        paths
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/geometry/shapes.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = scan(UNIT_DIR);
        let missing: Vec<String> = scan(SRC_DIR)
            .into_iter()
            .filter(|path| !is_organizational(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the source file it covers
    // Verified by adding tests/unit/io/unused.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = scan(SRC_DIR);
        let orphaned: Vec<String> = scan(UNIT_DIR)
            .into_iter()
            .filter(|path| !is_organizational(path) && !sources.contains(path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> {SRC_DIR}/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every file under tests/ declares at least one test
    // Verified by removing the test attributes from tests/unit/io/json.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let empty: Vec<String> = scan("tests")
            .into_iter()
            .filter(|path| {
                Path::new(path).extension().is_some_and(|ext| ext == "rs")
                    && !is_organizational(path)
            })
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
