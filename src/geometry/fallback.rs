//! Static patterns used when the generator is not run for a size
//!
//! Canned patterns are hand-drawn closed strokes described in grid units
//! `[row, col]`, where whole numbers fall on dots. When no canned pattern
//! exists for a size a plain bordered square is drawn instead.

use crate::algorithm::selection::ChoiceSource;
use crate::geometry::pattern::{
    Curve, GeometryStyle, PathCommand, PathData, Pattern, PatternOrigin, Point,
};
use crate::io::configuration::MAX_GRID_DIMENSION;
use Stroke::{Cubic, Move};

/// One instruction of a canned stroke, in grid units `[row, col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Lift the pen and move to a point
    Move([f64; 2]),
    /// Cubic Bézier segment (first control, second control, end)
    Cubic([f64; 2], [f64; 2], [f64; 2]),
}

/// A hand-drawn pattern for one grid size
#[derive(Debug)]
pub struct CannedPattern {
    /// Display name
    pub name: &'static str,
    /// Dots per side
    pub size: usize,
    /// Independent strokes, each starting with a move
    pub lines: &'static [&'static [Stroke]],
}

/// Every canned pattern, grouped by size
pub static CANNED_PATTERNS: [CannedPattern; 8] = [
    CannedPattern {
        name: "3x3 Simple Kolam",
        size: 3,
        lines: &[&[
            Move([0.2, 1.8]),
            Cubic([0.2, 0.8], [0.8, 0.2], [1.8, 0.2]),
            Cubic([2.8, 0.2], [2.8, 1.2], [1.8, 1.8]),
            Cubic([1.2, 2.8], [0.2, 2.8], [0.2, 1.8]),
        ]],
    },
    CannedPattern {
        name: "3x3 Four Petals",
        size: 3,
        lines: &[
            &[Move([1.0, 0.2]), Cubic([0.7, 0.7], [1.3, 0.7], [1.0, 0.2])],
            &[Move([2.8, 1.0]), Cubic([2.3, 0.7], [2.3, 1.3], [2.8, 1.0])],
            &[Move([1.0, 2.8]), Cubic([1.3, 2.3], [0.7, 2.3], [1.0, 2.8])],
            &[Move([0.2, 1.0]), Cubic([0.7, 1.3], [0.7, 0.7], [0.2, 1.0])],
        ],
    },
    CannedPattern {
        name: "4x4 Traditional Loop",
        size: 4,
        lines: &[&[
            Move([0.2, 1.5]),
            Cubic([0.2, 0.5], [1.5, 0.2], [2.5, 0.2]),
            Cubic([3.8, 0.2], [3.8, 1.5], [3.8, 2.5]),
            Cubic([3.8, 3.8], [2.5, 3.8], [1.5, 3.8]),
            Cubic([0.2, 3.8], [0.2, 2.5], [0.2, 1.5]),
        ]],
    },
    CannedPattern {
        name: "4x4 Interlaced",
        size: 4,
        lines: &[
            &[
                Move([0.3, 0.3]),
                Cubic([1.5, 0.1], [2.5, 0.1], [3.7, 0.3]),
                Cubic([3.9, 1.5], [3.9, 2.5], [3.7, 3.7]),
                Cubic([2.5, 3.9], [1.5, 3.9], [0.3, 3.7]),
                Cubic([0.1, 2.5], [0.1, 1.5], [0.3, 0.3]),
            ],
            &[
                Move([1.2, 1.2]),
                Cubic([1.8, 1.2], [2.8, 1.2], [2.8, 1.8]),
                Cubic([2.8, 2.8], [1.8, 2.8], [1.2, 2.8]),
                Cubic([1.2, 1.8], [1.2, 1.2], [1.2, 1.2]),
            ],
        ],
    },
    CannedPattern {
        name: "5x5 Star Kolam",
        size: 5,
        lines: &[&[
            Move([2.0, 0.2]),
            Cubic([1.2, 1.2], [0.2, 1.8], [0.2, 2.0]),
            Cubic([0.2, 2.2], [1.2, 2.8], [2.0, 4.8]),
            Cubic([2.8, 2.8], [3.8, 2.2], [4.8, 2.0]),
            Cubic([3.8, 1.8], [2.8, 1.2], [2.0, 0.2]),
        ]],
    },
    CannedPattern {
        name: "5x5 Flower Kolam",
        size: 5,
        lines: &[
            &[
                Move([1.0, 0.2]),
                Cubic([2.0, 0.1], [3.0, 0.1], [4.0, 0.2]),
                Cubic([4.8, 1.0], [4.8, 3.0], [4.0, 4.8]),
                Cubic([3.0, 4.9], [2.0, 4.9], [1.0, 4.8]),
                Cubic([0.2, 3.0], [0.2, 1.0], [1.0, 0.2]),
            ],
            &[
                Move([2.0, 1.2]),
                Cubic([1.2, 1.8], [1.2, 2.2], [2.0, 2.8]),
                Cubic([2.8, 2.2], [2.8, 1.8], [2.0, 1.2]),
            ],
        ],
    },
    CannedPattern {
        name: "6x6 Traditional Grid",
        size: 6,
        lines: &[
            &[
                Move([1.0, 0.2]),
                Cubic([3.0, 0.1], [5.0, 0.1], [5.8, 1.0]),
                Cubic([5.9, 3.0], [5.9, 5.0], [5.0, 5.8]),
                Cubic([3.0, 5.9], [1.0, 5.9], [0.2, 5.0]),
                Cubic([0.1, 3.0], [0.1, 1.0], [1.0, 0.2]),
            ],
            &[
                Move([2.0, 1.8]),
                Cubic([2.2, 2.0], [2.8, 2.0], [3.0, 1.8]),
                Cubic([3.2, 2.0], [3.8, 2.0], [4.0, 1.8]),
                Cubic([3.8, 2.2], [3.8, 2.8], [4.0, 3.0]),
                Cubic([3.8, 3.2], [3.8, 3.8], [4.0, 4.0]),
                Cubic([3.8, 4.2], [3.2, 4.2], [3.0, 4.0]),
                Cubic([2.8, 4.2], [2.2, 4.2], [2.0, 4.0]),
                Cubic([1.8, 3.8], [1.8, 3.2], [2.0, 3.0]),
                Cubic([1.8, 2.8], [1.8, 2.2], [2.0, 1.8]),
            ],
        ],
    },
    CannedPattern {
        name: "7x7 Complex Kolam",
        size: 7,
        lines: &[
            &[
                Move([3.0, 0.2]),
                Cubic([1.0, 0.1], [0.1, 1.0], [0.1, 3.0]),
                Cubic([0.1, 5.0], [1.0, 6.9], [3.0, 6.9]),
                Cubic([5.0, 6.9], [6.9, 5.0], [6.9, 3.0]),
                Cubic([6.9, 1.0], [5.0, 0.1], [3.0, 0.2]),
            ],
            &[
                Move([2.0, 2.0]),
                Cubic([4.0, 1.8], [5.2, 3.0], [5.0, 5.0]),
                Cubic([4.8, 5.2], [3.0, 5.2], [2.0, 5.0]),
                Cubic([1.8, 4.0], [1.8, 3.0], [2.0, 2.0]),
            ],
        ],
    },
];

/// Canned patterns available for a size
pub fn canned_for_size(size: usize) -> impl Iterator<Item = &'static CannedPattern> {
    CANNED_PATTERNS.iter().filter(move |p| p.size == size)
}

// Grid units share the dot grid's layout: [row, col] -> ((col+1)S, (row+1)S).
const fn grid_point([row, col]: [f64; 2], style: &GeometryStyle) -> Point {
    Point::new(
        (col + 1.0) * style.cell_spacing,
        (row + 1.0) * style.cell_spacing,
    )
}

fn trace_stroke(id: String, strokes: &[Stroke], style: &GeometryStyle) -> Curve {
    let mut path = PathData::default();
    let mut start = None;
    let mut end = Point::new(0.0, 0.0);

    for stroke in strokes {
        match *stroke {
            Move(to) => {
                let to = grid_point(to, style);
                path.push(PathCommand::MoveTo(to));
                start.get_or_insert(to);
                end = to;
            }
            Cubic(first, second, to) => {
                let to = grid_point(to, style);
                path.push(PathCommand::CubicTo(
                    grid_point(first, style),
                    grid_point(second, style),
                    to,
                ));
                end = to;
            }
        }
    }

    Curve {
        id,
        cell: None,
        shape: None,
        start: start.unwrap_or(end),
        end,
        path: path.to_string(),
        stroke_color: style.stroke_color.clone(),
        stroke_width: style.stroke_width,
    }
}

/// Draw a canned pattern for `size`, picking among candidates with `source`
///
/// Returns `None` when no canned pattern exists for the size.
pub fn canned_pattern<S: ChoiceSource + ?Sized>(
    size: usize,
    style: &GeometryStyle,
    source: &mut S,
) -> Option<Pattern> {
    let candidates: Vec<&CannedPattern> = canned_for_size(size).collect();
    if candidates.is_empty() {
        return None;
    }
    let chosen = candidates.get(source.choose_index(candidates.len()))?;

    let curves = chosen
        .lines
        .iter()
        .enumerate()
        .map(|(index, strokes)| trace_stroke(format!("line-{index}"), strokes, style))
        .collect();

    Some(Pattern {
        id: format!("fallback-kolam-{size}"),
        name: chosen.name.to_string(),
        rows: size,
        cols: size,
        dots: style.dot_grid(size, size),
        curves,
        dimensions: style.bounds(size, size),
        origin: PatternOrigin::Canned {
            name: chosen.name.to_string(),
        },
    })
}

/// Draw a single loop around the outer dots of a `size x size` grid
///
/// The side is clamped to `1..=MAX_GRID_DIMENSION`. Each edge is a quadratic
/// segment whose control point is the edge midpoint.
pub fn bordered_square(size: usize, style: &GeometryStyle) -> Pattern {
    let size = size.clamp(1, MAX_GRID_DIMENSION);
    let near = style.cell_spacing;
    let far = size as f64 * style.cell_spacing;
    let corners = [
        Point::new(near, near),
        Point::new(far, near),
        Point::new(far, far),
        Point::new(near, far),
        Point::new(near, near),
    ];

    let mut path = PathData::starting_at(Point::new(near, near));
    for pair in corners.windows(2) {
        if let [from, to] = pair {
            let control = Point::new(f64::midpoint(from.x, to.x), f64::midpoint(from.y, to.y));
            path.push(PathCommand::QuadTo(control, *to));
        }
    }

    let border = Curve {
        id: "curve-border".to_string(),
        cell: None,
        shape: None,
        start: Point::new(near, near),
        end: Point::new(near, near),
        path: path.to_string(),
        stroke_color: style.stroke_color.clone(),
        stroke_width: style.stroke_width,
    };

    Pattern {
        id: format!("simple-kolam-{size}x{size}"),
        name: format!("Simple Kolam {size}×{size}"),
        rows: size,
        cols: size,
        dots: style.dot_grid(size, size),
        curves: vec![border],
        dimensions: style.bounds(size, size),
        origin: PatternOrigin::Bordered,
    }
}
