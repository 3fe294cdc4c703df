//! Symmetric kolam generation by constrained random tiling
//!
//! A quadrant of the grid is filled cell by cell with tiles drawn uniformly
//! from the set compatible with their upper and left neighbours, then
//! reflected twice into a pattern with both horizontal and vertical mirror
//! symmetry. The resulting tile matrix is laid out as dots and curves ready
//! for SVG or JSON export.

#![deny(unsafe_code)]

/// Quadrant solving, reflection and the generator entry points
pub mod algorithm;
/// Pattern geometry, per-tile shapes and static fallbacks
pub mod geometry;
/// Configuration, errors, exporters and the command-line interface
pub mod io;
/// Tile catalog, mirror tables and the assembled tile matrix
pub mod spatial;

pub use algorithm::executor::{KolamGenerator, generate};
pub use geometry::pattern::Pattern;
pub use io::error::{KolamError, Result};
