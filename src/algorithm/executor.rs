//! Generator entry points
//!
//! [`KolamGenerator`] ties the solver, the reflector and the geometry
//! materializer together. `try_generate` reports sizes outside the solver's
//! range as errors; `generate` never fails and substitutes a static pattern
//! instead.

use crate::algorithm::assembly::assemble;
use crate::algorithm::selection::{ChoiceSource, RandomSelector};
use crate::algorithm::solver::solve_quadrant;
use crate::geometry::fallback::{bordered_square, canned_pattern};
use crate::geometry::materializer::materialize;
use crate::geometry::pattern::{GeometryStyle, Pattern};
use crate::io::configuration::{DEFAULT_MAX_SOLVER_SIZE, MIN_SOLVER_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::TileMatrix;
use crate::spatial::symmetry::{SYMMETRY, SymmetryTables};

/// Generator parameters
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Smallest size the solver is run for
    pub min_size: usize,
    /// Largest size the solver is run for
    pub max_solver_size: usize,
    /// Layout constants for the produced geometry
    pub style: GeometryStyle,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SOLVER_SIZE,
            max_solver_size: DEFAULT_MAX_SOLVER_SIZE,
            style: GeometryStyle::default(),
        }
    }
}

impl GeneratorConfig {
    /// Whether the solver is run for `size`
    pub const fn accepts(&self, size: usize) -> bool {
        size >= self.min_size && size <= self.max_solver_size
    }
}

/// Everything produced by one successful solver run
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    /// Assembled tile matrix in solver row order
    pub matrix: TileMatrix,
    /// Geometry drawn from the matrix
    pub pattern: Pattern,
    /// Cells that had no valid candidate and received the neutral tile
    pub fallbacks: usize,
}

/// Symmetric kolam generator
///
/// Generic over the [`ChoiceSource`] used for tile selection so tests can
/// replay fixed choices. Each generator owns its selector, so independent
/// generators may run on separate threads.
pub struct KolamGenerator<S = RandomSelector> {
    config: GeneratorConfig,
    selector: S,
    tables: &'static SymmetryTables,
}

impl KolamGenerator<RandomSelector> {
    /// Create a reproducible generator with default configuration
    pub fn new(seed: u64) -> Self {
        Self::with_selector(GeneratorConfig::default(), RandomSelector::new(seed))
    }

    /// Create a generator seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::with_selector(GeneratorConfig::default(), RandomSelector::from_entropy())
    }
}

impl<S: ChoiceSource> KolamGenerator<S> {
    /// Create a generator with explicit configuration and choice source
    pub fn with_selector(config: GeneratorConfig, selector: S) -> Self {
        Self {
            config,
            selector,
            tables: &SYMMETRY,
        }
    }

    /// Generator parameters
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Check that the solver is run for `size`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` lies outside
    /// `min_size..=max_solver_size`
    pub fn validate_size(&self, size: usize) -> Result<()> {
        if self.config.accepts(size) {
            Ok(())
        } else {
            Err(invalid_parameter(
                "size",
                &size,
                &format!(
                    "must be between {} and {}",
                    self.config.min_size, self.config.max_solver_size
                ),
            ))
        }
    }

    /// Solve and assemble a `size x size` tile matrix
    ///
    /// Also returns the number of cells that fell back to the neutral tile.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is outside the solver's range
    pub fn propose_matrix(&mut self, size: usize) -> Result<(TileMatrix, usize)> {
        self.validate_size(size)?;
        let solved = solve_quadrant(size, self.tables, &mut self.selector);
        Ok((assemble(&solved, self.tables), solved.fallbacks()))
    }

    /// Lay out geometry for an existing matrix
    pub fn draw(&self, matrix: &TileMatrix) -> Pattern {
        materialize(matrix, &self.config.style)
    }

    /// Generate a pattern with the solver
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is outside the solver's range
    pub fn try_generate(&mut self, size: usize) -> Result<Generation> {
        let (matrix, fallbacks) = self.propose_matrix(size)?;
        let pattern = self.draw(&matrix);
        Ok(Generation {
            matrix,
            pattern,
            fallbacks,
        })
    }

    /// Generate a pattern, substituting a static one when the solver is not run
    ///
    /// Sizes outside the solver's range receive a canned pattern for that
    /// size when one exists and a bordered square otherwise.
    pub fn generate(&mut self, size: usize) -> Pattern {
        self.try_generate(size).map_or_else(
            |_| {
                canned_pattern(size, &self.config.style, &mut self.selector)
                    .unwrap_or_else(|| bordered_square(size, &self.config.style))
            },
            |generation| generation.pattern,
        )
    }
}

/// Generate a pattern of `size x size` dots with an entropy-seeded generator
pub fn generate(size: usize) -> Pattern {
    KolamGenerator::from_entropy().generate(size)
}
