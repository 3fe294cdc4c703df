//! Generation constants and runtime configuration defaults

// Geometry layout
/// Distance between neighbouring dots in pixels
pub const CELL_SPACING: f64 = 60.0;
/// Curve anchor distance from the cell centre, as a fraction of the spacing
pub const CURVE_OFFSET_FRACTION: f64 = 0.3;
/// Dot radius in pixels
pub const DOT_RADIUS: f64 = 3.0;
/// Dot fill colour
pub const DOT_COLOR: &str = "#ffffff";
/// Curve stroke colour
pub const STROKE_COLOR: &str = "#ffffff";
/// Curve stroke width in pixels
pub const STROKE_WIDTH: f64 = 2.0;

// Grid sizes
/// Grid size used when none is requested
pub const DEFAULT_SIZE: usize = 5;
/// Smallest size accepted on the command line
pub const MIN_CLI_SIZE: usize = 3;
/// Largest size accepted on the command line
pub const MAX_CLI_SIZE: usize = 15;
/// Smallest size the solver is run for
pub const MIN_SOLVER_SIZE: usize = 1;
/// Largest size the solver is run for unless configured otherwise
pub const DEFAULT_MAX_SOLVER_SIZE: usize = 99;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension for any fallback pattern
pub const MAX_GRID_DIMENSION: usize = 1000;

// Default values for configurable parameters
/// Number of patterns generated per run
pub const DEFAULT_COUNT: usize = 1;
/// Directory receiving exported files
pub const DEFAULT_OUTPUT_DIR: &str = "kolams";

// Output settings
/// Extension of rendered drawings
pub const SVG_EXTENSION: &str = "svg";
/// Extension of pattern descriptions
pub const JSON_EXTENSION: &str = "json";
/// Suffix added to tile map filenames
pub const TILE_MAP_SUFFIX: &str = "_tiles";
/// Side of one tile in the exported tile map, in pixels
pub const TILE_MAP_CELL_PIXELS: u32 = 16;
/// Background fill of rendered drawings
pub const SVG_BACKGROUND: &str = "#000000";
/// Empty margin around rendered drawings, in pixels
pub const SVG_PADDING: f64 = 0.0;

// Progress bar display settings
/// Batch size above which a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 1;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
