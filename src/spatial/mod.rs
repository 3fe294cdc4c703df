//! Tile catalog, mirror tables and the assembled tile matrix
//!
//! This module contains spatial-related functionality including:
//! - The sixteen-tile catalog and its connector flags
//! - Neighbour compatibility and mirror tables
//! - The full tile matrix and its symmetry checks

/// Full tile matrix storage and symmetry checks
pub mod grid;
/// Compatibility sets and mirror permutations
pub mod symmetry;
/// Tile catalog and connector flags
pub mod tiles;

pub use grid::TileMatrix;
