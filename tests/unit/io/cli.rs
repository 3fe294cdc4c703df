//! Tests for argument parsing and batch export

#[cfg(test)]
mod tests {
    use clap::Parser;
    use kolamtile::KolamError;
    use kolamtile::io::cli::{BatchProcessor, Cli};
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("kolamtile").chain(args.iter().copied()))
            .unwrap_or_else(|e| unreachable!("{e}"))
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    fn output_flag(dir: &Path) -> String {
        format!("--output={}", dir.display())
    }

    // Tests defaults when no arguments are given
    // Verified by defaulting to JSON output
    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.size, 5);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.output, PathBuf::from("kolams"));
        assert!(!cli.json);
        assert!(!cli.png);
        assert!(!cli.no_svg);
        assert!(cli.should_show_progress());
    }

    // Tests short flags and the derived generator configuration
    // Verified by ignoring the cell spacing argument
    #[test]
    fn test_short_flags() {
        let cli = parse(&[
            "-n", "7", "-c", "3", "-s", "11", "-j", "-p", "-q", "--cell-spacing", "40",
        ]);
        assert_eq!((cli.size, cli.count, cli.seed), (7, 3, Some(11)));
        assert!(cli.json);
        assert!(cli.png);
        assert!(!cli.should_show_progress());

        let config = cli.generator_config();
        assert!((config.style.cell_spacing - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.max_solver_size, 99);
    }

    // Tests requested sizes are clamped into the supported range
    // Verified by clamping only the upper bound
    #[test]
    fn test_clamped_size() {
        assert_eq!(parse(&["-n", "1"]).clamped_size(), 3);
        assert_eq!(parse(&["-n", "9"]).clamped_size(), 9);
        assert_eq!(parse(&["-n", "40"]).clamped_size(), 15);
    }

    // Tests malformed arguments are rejected by the parser
    // Verified by accepting a negative count
    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["kolamtile", "-c", "-2"]).is_err());
        assert!(Cli::try_parse_from(["kolamtile", "--size", "five"]).is_err());
    }

    // Tests a batch writes every requested export per pattern
    // Verified by numbering the files from zero
    #[test]
    fn test_batch_exports() {
        let dir = tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let out = dir.path().join("batch");
        let cli = parse(&[
            "-n",
            "7",
            "-c",
            "2",
            "-s",
            "3",
            "-j",
            "-p",
            "-q",
            output_flag(&out).as_str(),
        ]);

        let written = BatchProcessor::new(cli)
            .process()
            .unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(
            file_names(&written),
            vec![
                "kolam-7x7-1.svg",
                "kolam-7x7-1.json",
                "kolam-7x7-1_tiles.png",
                "kolam-7x7-2.svg",
                "kolam-7x7-2.json",
                "kolam-7x7-2_tiles.png",
            ]
        );
        assert!(written.iter().all(|path| path.is_file()));
    }

    // Tests the same seed reproduces the same batch
    // Verified by seeding each pattern from entropy
    #[test]
    fn test_seeded_batches_match() {
        let dir = tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let read = |name: &str| {
            let out = dir.path().join(name);
            let cli = parse(&["-n", "9", "-s", "2024", "-q", output_flag(&out).as_str()]);
            let written = BatchProcessor::new(cli)
                .process()
                .unwrap_or_else(|e| unreachable!("{e}"));
            let first = written.first().unwrap_or_else(|| unreachable!());
            std::fs::read_to_string(first).unwrap_or_else(|e| unreachable!("{e}"))
        };
        assert_eq!(read("a"), read("b"));
    }

    // Tests static patterns are exported without a tile map
    // Verified by exporting a tile map for every pattern
    #[test]
    fn test_static_pattern_has_no_tile_map() {
        let dir = tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let cli = parse(&[
            "-n",
            "5",
            "-p",
            "-q",
            "--max-solver-size",
            "2",
            output_flag(dir.path()).as_str(),
        ]);
        let written = BatchProcessor::new(cli)
            .process()
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(file_names(&written), vec!["fallback-kolam-5-1.svg"]);
    }

    // Tests disabling SVG output leaves only the other exports
    // Verified by checking the flag after writing the SVG
    #[test]
    fn test_no_svg() {
        let dir = tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let cli = parse(&[
            "-n",
            "4",
            "-j",
            "--no-svg",
            "-q",
            output_flag(dir.path()).as_str(),
        ]);
        let written = BatchProcessor::new(cli)
            .process()
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(file_names(&written), vec!["kolam-4x4-1.json"]);
    }

    // Tests a non-positive cell spacing is rejected before any file is written
    // Verified by validating the spacing after creating the directory
    #[test]
    fn test_rejects_cell_spacing() {
        let dir = tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let out = dir.path().join("never");
        let cli = parse(&["--cell-spacing=0", "-q", output_flag(&out).as_str()]);
        assert!(matches!(
            BatchProcessor::new(cli).process(),
            Err(KolamError::InvalidParameter {
                parameter: "cell_spacing",
                ..
            })
        ));
        assert!(!out.exists());
    }
}
