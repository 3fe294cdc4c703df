//! SVG rendering of patterns

use std::fmt::Write as _;
use std::path::Path;

use crate::geometry::pattern::Pattern;
use crate::io::configuration::{SVG_BACKGROUND, SVG_PADDING};
use crate::io::error::{Result, file_system_error};

/// Presentation options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Empty margin added on every side, in pixels
    pub padding: f64,
    /// Background fill, `none` for transparent
    pub background: String,
    /// Stroke colour overriding each curve's own colour
    pub brush_color: Option<String>,
    /// Stroke width overriding each curve's own width
    pub brush_width: Option<f64>,
    /// Whether dots are drawn
    pub show_dots: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            padding: SVG_PADDING,
            background: SVG_BACKGROUND.to_string(),
            brush_color: None,
            brush_width: None,
            show_dots: true,
        }
    }
}

/// Render a pattern as a standalone SVG document
pub fn render_svg(pattern: &Pattern, options: &SvgOptions) -> String {
    let width = 2.0f64.mul_add(options.padding, pattern.dimensions.width);
    let height = 2.0f64.mul_add(options.padding, pattern.dimensions.height);
    let mut svg = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        options.background
    );
    let _ = writeln!(
        svg,
        r#"  <g transform="translate({padding} {padding})">"#,
        padding = options.padding
    );

    if options.show_dots {
        for dot in &pattern.dots {
            let fill = if dot.filled { dot.color.as_str() } else { "none" };
            let _ = writeln!(
                svg,
                r#"    <circle id="{}" cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
                dot.id, dot.center.x, dot.center.y, dot.radius
            );
        }
    }

    for curve in &pattern.curves {
        let stroke = options.brush_color.as_deref().unwrap_or(&curve.stroke_color);
        let stroke_width = options.brush_width.unwrap_or(curve.stroke_width);
        let _ = writeln!(
            svg,
            r#"    <path id="{}" d="{}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            curve.id, curve.path
        );
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Write a pattern to `path` as SVG
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn export_svg(pattern: &Pattern, options: &SvgOptions, path: &Path) -> Result<()> {
    std::fs::write(path, render_svg(pattern, options))
        .map_err(|e| file_system_error(path, "write svg", e))
}
