//! Curve shapes drawn for each tile
//!
//! Every tile identifier maps to exactly one shape. Shapes are anchored at a
//! fixed offset from the centre of their cell.

use serde::Serialize;

use crate::geometry::pattern::{PathCommand, PathData, Point};
use crate::spatial::tiles::TileId;

/// Shape drawn for a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    /// Straight line through the centre, left to right
    HorizontalLine,
    /// Straight line through the centre, top to bottom
    VerticalLine,
    /// Diagonal from top-left to bottom-right
    DiagonalDescending,
    /// Diagonal from top-right to bottom-left
    DiagonalAscending,
    /// Elbow entering from the left and leaving upwards
    ElbowFromLeft,
    /// Elbow entering from the top and leaving to the right
    ElbowFromTop,
    /// Quarter arc from the top anchor to the right anchor
    ArcTopRight,
    /// Quarter arc from the right anchor to the bottom anchor
    ArcRightBottom,
    /// Quarter arc from the bottom anchor to the left anchor
    ArcBottomLeft,
    /// Quarter arc from the left anchor to the top anchor
    ArcLeftTop,
    /// S-curve between the left and right anchors
    SCurveHorizontal,
    /// S-curve between the top and bottom anchors
    SCurveVertical,
    /// Small loop bulging upwards
    LoopTop,
    /// Small loop bulging right
    LoopRight,
    /// Small loop bulging downwards
    LoopBottom,
    /// Small loop bulging left
    LoopLeft,
}

/// Endpoints and path of one traced shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTrace {
    /// First point of the path
    pub start: Point,
    /// Last point of the path
    pub end: Point,
    /// Path commands
    pub path: PathData,
}

impl ShapeKind {
    /// All shapes in tile order; index `i` is drawn for tile `i + 1`
    pub const ALL: [Self; 16] = [
        Self::HorizontalLine,
        Self::VerticalLine,
        Self::DiagonalDescending,
        Self::DiagonalAscending,
        Self::ElbowFromLeft,
        Self::ElbowFromTop,
        Self::ArcTopRight,
        Self::ArcRightBottom,
        Self::ArcBottomLeft,
        Self::ArcLeftTop,
        Self::SCurveHorizontal,
        Self::SCurveVertical,
        Self::LoopTop,
        Self::LoopRight,
        Self::LoopBottom,
        Self::LoopLeft,
    ];

    /// Shape for a tile, `None` for identifiers outside the catalog
    pub fn for_tile(tile: TileId) -> Option<Self> {
        usize::from(tile)
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    /// Short label used in curve identifiers
    pub const fn label(self) -> &'static str {
        match self {
            Self::HorizontalLine => "h",
            Self::VerticalLine => "v",
            Self::DiagonalDescending => "d-tlbr",
            Self::DiagonalAscending => "d-trbl",
            Self::ElbowFromLeft => "l-hr",
            Self::ElbowFromTop => "l-vr",
            Self::ArcTopRight => "arc-tr",
            Self::ArcRightBottom => "arc-rb",
            Self::ArcBottomLeft => "arc-bl",
            Self::ArcLeftTop => "arc-lt",
            Self::SCurveHorizontal => "s-h",
            Self::SCurveVertical => "s-v",
            Self::LoopTop => "loop-top",
            Self::LoopRight => "loop-right",
            Self::LoopBottom => "loop-bottom",
            Self::LoopLeft => "loop-left",
        }
    }

    /// Trace the shape around `center` with anchors `offset` pixels away
    pub fn trace(self, center: Point, offset: f64) -> ShapeTrace {
        let Point { x: cx, y: cy } = center;
        let half = offset / 2.0;
        let at = Point::new;

        match self {
            Self::HorizontalLine => line(at(cx - offset, cy), &[at(cx + offset, cy)]),
            Self::VerticalLine => line(at(cx, cy - offset), &[at(cx, cy + offset)]),
            Self::DiagonalDescending => {
                line(at(cx - offset, cy - offset), &[at(cx + offset, cy + offset)])
            }
            Self::DiagonalAscending => {
                line(at(cx + offset, cy - offset), &[at(cx - offset, cy + offset)])
            }
            Self::ElbowFromLeft => line(at(cx - offset, cy), &[center, at(cx, cy - offset)]),
            Self::ElbowFromTop => line(at(cx, cy - offset), &[center, at(cx + offset, cy)]),
            Self::ArcTopRight => quad(
                at(cx, cy - offset),
                at(cx + half, cy - half),
                at(cx + offset, cy),
            ),
            Self::ArcRightBottom => quad(
                at(cx + offset, cy),
                at(cx + half, cy + half),
                at(cx, cy + offset),
            ),
            Self::ArcBottomLeft => quad(
                at(cx, cy + offset),
                at(cx - half, cy + half),
                at(cx - offset, cy),
            ),
            Self::ArcLeftTop => quad(
                at(cx - offset, cy),
                at(cx - half, cy - half),
                at(cx, cy - offset),
            ),
            Self::SCurveHorizontal => {
                s_curve(center, at(cx - offset, cy), at(cx + offset, cy), half)
            }
            Self::SCurveVertical => s_curve(center, at(cx, cy - offset), at(cx, cy + offset), half),
            Self::LoopTop => quad(at(cx - half, cy), at(cx, cy - offset), at(cx + half, cy)),
            Self::LoopRight => quad(at(cx, cy - half), at(cx + offset, cy), at(cx, cy + half)),
            Self::LoopBottom => quad(at(cx + half, cy), at(cx, cy + offset), at(cx - half, cy)),
            Self::LoopLeft => quad(at(cx, cy + half), at(cx - offset, cy), at(cx, cy - half)),
        }
    }
}

fn line(start: Point, through: &[Point]) -> ShapeTrace {
    let mut path = PathData::starting_at(start);
    for &point in through {
        path.push(PathCommand::LineTo(point));
    }
    ShapeTrace {
        start,
        end: through.last().copied().unwrap_or(start),
        path,
    }
}

fn quad(start: Point, control: Point, end: Point) -> ShapeTrace {
    ShapeTrace {
        start,
        end,
        path: PathData::starting_at(start).then(PathCommand::QuadTo(control, end)),
    }
}

// Both halves bend through the centre with controls on the same diagonal.
fn s_curve(center: Point, start: Point, end: Point, half: f64) -> ShapeTrace {
    let first_control = Point::new(center.x - half, center.y - half);
    let second_control = Point::new(center.x + half, center.y + half);
    ShapeTrace {
        start,
        end,
        path: PathData::starting_at(start)
            .then(PathCommand::QuadTo(first_control, center))
            .then(PathCommand::QuadTo(second_control, end)),
    }
}
