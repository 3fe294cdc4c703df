/// Command-line interface and batch generation
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// Tile map export as PNG
pub mod image;
/// Pattern export as JSON
pub mod json;
/// Batch progress display
pub mod progress;
/// Pattern rendering as SVG
pub mod svg;
