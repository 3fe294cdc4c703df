//! Drawable geometry for kolam patterns
//!
//! This module contains:
//! - The pattern value consumed by renderers and exporters
//! - The curve shape drawn for each tile
//! - Conversion of a tile matrix into dots and curves
//! - Static patterns used when the generator is not run

/// Canned patterns and the bordered-square fallback
pub mod fallback;
/// Tile matrix to pattern conversion
pub mod materializer;
/// Pattern, dot, curve and path types
pub mod pattern;
/// Per-tile curve shapes
pub mod shapes;

pub use pattern::{GeometryStyle, Pattern, PatternOrigin};
