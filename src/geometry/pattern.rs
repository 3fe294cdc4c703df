//! Pattern value handed to renderers and exporters

use serde::Serialize;
use std::fmt;

use crate::geometry::shapes::ShapeKind;

/// A point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing command of an SVG path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight segment
    LineTo(Point),
    /// Quadratic Bézier segment (control, end)
    QuadTo(Point, Point),
    /// Cubic Bézier segment (first control, second control, end)
    CubicTo(Point, Point, Point),
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(to) => write!(f, "M {} {}", to.x, to.y),
            Self::LineTo(to) => write!(f, "L {} {}", to.x, to.y),
            Self::QuadTo(control, to) => {
                write!(f, "Q {} {} {} {}", control.x, control.y, to.x, to.y)
            }
            Self::CubicTo(first, second, to) => write!(
                f,
                "C {} {}, {} {}, {} {}",
                first.x, first.y, second.x, second.y, to.x, to.y
            ),
        }
    }
}

/// Ordered list of path commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Start a path at `start`
    pub fn starting_at(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// Append a command
    #[must_use]
    pub fn then(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Append a command in place
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// A grid dot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dot {
    /// Stable identifier, `dot-<row>-<col>`
    pub id: String,
    /// Grid row (top to bottom)
    pub row: usize,
    /// Grid column (left to right)
    pub col: usize,
    /// Pixel centre
    pub center: Point,
    /// Pixel radius
    pub radius: f64,
    /// Fill colour
    pub color: String,
    /// Whether the dot is filled
    pub filled: bool,
}

/// One stroked curve segment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Curve {
    /// Stable identifier
    pub id: String,
    /// Grid cell `[row, col]` the curve belongs to, if any
    pub cell: Option<[usize; 2]>,
    /// Shape drawn in the cell, if the curve came from a tile
    pub shape: Option<ShapeKind>,
    /// First point of the path
    pub start: Point,
    /// Last point of the path
    pub end: Point,
    /// SVG path description
    pub path: String,
    /// Stroke colour
    pub stroke_color: String,
    /// Stroke width in pixels
    pub stroke_width: f64,
}

/// Pixel bounding box of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

/// How a pattern was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PatternOrigin {
    /// Solved and reflected by the constraint generator
    Generated,
    /// Taken from the static catalog of hand-drawn patterns
    Canned {
        /// Catalog name of the pattern
        name: String,
    },
    /// Plain bordered square, the last-resort fallback
    Bordered,
}

/// Complete pattern geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    /// Stable identifier
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Dot rows
    pub rows: usize,
    /// Dot columns
    pub cols: usize,
    /// One dot per grid intersection in row-major order
    pub dots: Vec<Dot>,
    /// Stroked curves
    pub curves: Vec<Curve>,
    /// Pixel bounding box
    pub dimensions: Dimensions,
    /// Generation path that produced the pattern
    pub origin: PatternOrigin,
}

impl Pattern {
    /// Whether the pattern came from a fallback rather than the generator
    pub const fn is_degraded(&self) -> bool {
        !matches!(self.origin, PatternOrigin::Generated)
    }
}

/// Visual constants used when laying out geometry
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryStyle {
    /// Distance between neighbouring dots in pixels
    pub cell_spacing: f64,
    /// Curve anchor distance from the cell centre, as a fraction of the spacing
    pub curve_offset_fraction: f64,
    /// Dot radius in pixels
    pub dot_radius: f64,
    /// Dot fill colour
    pub dot_color: String,
    /// Curve stroke colour
    pub stroke_color: String,
    /// Curve stroke width in pixels
    pub stroke_width: f64,
}

impl Default for GeometryStyle {
    fn default() -> Self {
        use crate::io::configuration::{
            CELL_SPACING, CURVE_OFFSET_FRACTION, DOT_COLOR, DOT_RADIUS, STROKE_COLOR, STROKE_WIDTH,
        };

        Self {
            cell_spacing: CELL_SPACING,
            curve_offset_fraction: CURVE_OFFSET_FRACTION,
            dot_radius: DOT_RADIUS,
            dot_color: DOT_COLOR.to_string(),
            stroke_color: STROKE_COLOR.to_string(),
            stroke_width: STROKE_WIDTH,
        }
    }
}

impl GeometryStyle {
    /// Pixel centre of the dot at a grid position
    pub const fn dot_center(&self, row: usize, col: usize) -> Point {
        Point::new(
            (col + 1) as f64 * self.cell_spacing,
            (row + 1) as f64 * self.cell_spacing,
        )
    }

    /// Pixel bounding box of a grid with the given dot counts
    pub const fn bounds(&self, rows: usize, cols: usize) -> Dimensions {
        Dimensions {
            width: (cols + 1) as f64 * self.cell_spacing,
            height: (rows + 1) as f64 * self.cell_spacing,
        }
    }

    /// Build the dot grid for `rows x cols` intersections
    pub fn dot_grid(&self, rows: usize, cols: usize) -> Vec<Dot> {
        let mut dots = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                dots.push(Dot {
                    id: format!("dot-{row}-{col}"),
                    row,
                    col,
                    center: self.dot_center(row, col),
                    radius: self.dot_radius,
                    color: self.dot_color.clone(),
                    filled: true,
                });
            }
        }
        dots
    }
}
