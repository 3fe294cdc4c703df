//! Command-line interface for batch kolam generation

use crate::algorithm::executor::{GeneratorConfig, KolamGenerator};
use crate::algorithm::selection::RandomSelector;
use crate::geometry::pattern::{GeometryStyle, Pattern};
use crate::io::configuration::{
    CELL_SPACING, DEFAULT_COUNT, DEFAULT_MAX_SOLVER_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_SIZE,
    JSON_EXTENSION, MAX_CLI_SIZE, MIN_CLI_SIZE, MIN_SOLVER_SIZE, SVG_EXTENSION,
    TILE_MAP_CELL_PIXELS, TILE_MAP_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_tile_map_png;
use crate::io::json::export_json;
use crate::io::progress::ProgressManager;
use crate::io::svg::{SvgOptions, export_svg};
use crate::spatial::grid::TileMatrix;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kolamtile")]
#[command(
    author,
    version,
    about = "Generate symmetric kolam patterns by constrained random tiling"
)]
/// Command-line arguments for the kolam generator
// CLI tools commonly need multiple boolean flags for output selection
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Dots per side, clamped to 3..=15
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Number of patterns to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Random seed for reproducible batches
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory receiving the exported files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also export each pattern as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Also export each tile matrix as a colour-coded PNG
    #[arg(short, long)]
    pub png: bool,

    /// Skip SVG output
    #[arg(long)]
    pub no_svg: bool,

    /// Largest size the solver is run for; larger sizes use static patterns
    #[arg(long, default_value_t = DEFAULT_MAX_SOLVER_SIZE)]
    pub max_solver_size: usize,

    /// Distance between neighbouring dots in pixels
    #[arg(long, default_value_t = CELL_SPACING)]
    pub cell_spacing: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Requested size clamped to the supported command-line range
    pub fn clamped_size(&self) -> usize {
        self.size.clamp(MIN_CLI_SIZE, MAX_CLI_SIZE)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator configuration derived from the arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            min_size: MIN_SOLVER_SIZE,
            max_solver_size: self.max_solver_size,
            style: GeometryStyle {
                cell_spacing: self.cell_spacing,
                ..GeometryStyle::default()
            },
        }
    }
}

/// Generates a batch of patterns and writes the requested exports
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every pattern of the batch
    ///
    /// Returns the paths of all written files.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell spacing is not positive, the output
    /// directory cannot be created, or an export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if !self.cli.cell_spacing.is_finite() || self.cli.cell_spacing <= 0.0 {
            return Err(invalid_parameter(
                "cell_spacing",
                &self.cli.cell_spacing,
                &"must be a positive number of pixels",
            ));
        }

        let size = self.cli.clamped_size();
        if size != self.cli.size {
            self.notify(&format!(
                "Size {} is outside {MIN_CLI_SIZE}..={MAX_CLI_SIZE}, using {size}",
                self.cli.size
            ));
        }

        std::fs::create_dir_all(&self.cli.output)
            .map_err(|e| file_system_error(&self.cli.output, "create directory", e))?;

        let selector = self
            .cli
            .seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::new);
        let mut generator = KolamGenerator::with_selector(self.cli.generator_config(), selector);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::new();
        for index in 0..self.cli.count {
            let (pattern, matrix) = self.produce(&mut generator, size);
            written.extend(self.export(&pattern, matrix.as_ref(), index)?);

            if let Some(ref pm) = self.progress_manager {
                pm.complete(&pattern.name);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn produce(
        &self,
        generator: &mut KolamGenerator<RandomSelector>,
        size: usize,
    ) -> (Pattern, Option<TileMatrix>) {
        generator.try_generate(size).map_or_else(
            |err| {
                self.notify(&format!("{err}; using a static pattern"));
                (generator.generate(size), None)
            },
            |generation| {
                if generation.fallbacks > 0 {
                    self.notify(&format!(
                        "{}: {} cell(s) had no valid tile and were left neutral",
                        generation.pattern.id, generation.fallbacks
                    ));
                }
                (generation.pattern, Some(generation.matrix))
            },
        )
    }

    fn export(
        &self,
        pattern: &Pattern,
        matrix: Option<&TileMatrix>,
        index: usize,
    ) -> Result<Vec<PathBuf>> {
        let stem = format!("{}-{}", pattern.id, index + 1);
        let mut written = Vec::new();

        if !self.cli.no_svg {
            let path = self.cli.output.join(format!("{stem}.{SVG_EXTENSION}"));
            export_svg(pattern, &SvgOptions::default(), &path)?;
            written.push(path);
        }

        if self.cli.json {
            let path = self.cli.output.join(format!("{stem}.{JSON_EXTENSION}"));
            export_json(pattern, &path)?;
            written.push(path);
        }

        if self.cli.png {
            if let Some(matrix) = matrix {
                let path = self.cli.output.join(format!("{stem}{TILE_MAP_SUFFIX}.png"));
                export_tile_map_png(matrix, TILE_MAP_CELL_PIXELS, &path)?;
                written.push(path);
            } else {
                self.notify(&format!("{stem}: static patterns have no tile map"));
            }
        }

        Ok(written)
    }

    // Allow print for user feedback, suppressed by --quiet
    #[allow(clippy::print_stderr)]
    fn notify(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
