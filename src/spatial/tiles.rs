//! Catalog of the sixteen kolam curve tiles
//!
//! Each tile carries its curve outline in unit-cell coordinates and the two
//! connector flags the quadrant solver consults when matching neighbours.
//! The catalog is authored data: the flags encode which curve shapes join
//! without gaps and are reproduced exactly rather than derived from the
//! outlines.

/// Tile identifier in `1..=TILE_COUNT`
pub type TileId = u8;

/// Number of tiles in the catalog
pub const TILE_COUNT: usize = 16;

/// Tile placed wherever no other tile satisfies the local constraints
///
/// It presents neither a down nor a right connector, so it also serves as the
/// synthetic border around the solved quadrant.
pub const NEUTRAL_TILE: TileId = 1;

/// A point on a tile outline in unit-cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl CurvePoint {
    /// Create a new outline point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Immutable definition of one curve tile
#[derive(Debug, Clone, Copy)]
pub struct TileDefinition {
    /// Tile identifier (1-based)
    pub id: TileId,
    /// Outline of the curve, possibly simplified
    pub points: &'static [CurvePoint],
    /// The curve reaches the bottom edge of its cell
    pub has_down: bool,
    /// The curve reaches the right edge of its cell
    pub has_right: bool,
}

const fn p(x: f64, y: f64) -> CurvePoint {
    CurvePoint::new(x, y)
}

const TILE_1_POINTS: &[CurvePoint] = &[
    p(0.0, 0.0),
    p(0.0429, 0.009),
    p(0.0858, 0.0179),
    p(0.1287, 0.0267),
    p(0.1716, 0.0354),
    p(0.2145, 0.044),
    p(0.2574, 0.0525),
    p(0.3003, 0.0608),
    p(0.3432, 0.069),
    p(0.3861, 0.0771),
    p(0.429, 0.085),
    p(0.4719, 0.0928),
    p(0.5148, 0.1004),
    p(0.5577, 0.1079),
    p(0.6006, 0.1152),
    p(0.6435, 0.1224),
    p(0.6864, 0.1294),
    p(0.7293, 0.1363),
    p(0.7722, 0.143),
    p(0.8151, 0.1496),
    p(0.858, 0.156),
    p(0.9009, 0.1623),
    p(0.9438, 0.1684),
    p(0.9867, 0.1744),
    p(1.0, 0.1765),
];

const TILE_2_POINTS: &[CurvePoint] = &[
    p(0.0, -0.5),
    p(0.0252, -0.4559),
    p(0.0528, -0.4118),
    p(0.0818, -0.3677),
    p(0.1112, -0.3236),
    p(0.1405, -0.2795),
    p(0.169, -0.2354),
    p(0.1965, -0.1913),
    p(0.2227, -0.1472),
    p(0.2474, -0.1031),
    p(0.2704, -0.059),
    p(0.2914, -0.0149),
    p(0.3101, 0.0292),
    p(0.3264, 0.0733),
    p(0.34, 0.1174),
    p(0.3509, 0.1615),
    p(0.3588, 0.2056),
    p(0.3636, 0.2497),
    p(0.3653, 0.2938),
    p(0.3638, 0.3379),
    p(0.3591, 0.382),
    p(0.3514, 0.4261),
    p(0.3406, 0.4702),
    p(0.3267, 0.5143),
    p(0.0, 1.0),
];

const TILE_3_POINTS: &[CurvePoint] = &[
    p(0.5, 0.0),
    p(0.4559, 0.0252),
    p(0.4118, 0.0528),
    p(0.3677, 0.0818),
    p(0.3236, 0.1112),
    p(0.2795, 0.1405),
    p(0.2354, 0.169),
    p(0.1913, 0.1965),
    p(0.1472, 0.2227),
    p(0.1031, 0.2474),
    p(0.059, 0.2704),
    p(0.0149, 0.2914),
    p(-0.0292, 0.3101),
    p(-0.0733, 0.3264),
    p(-0.1174, 0.34),
    p(-0.1615, 0.3509),
    p(-0.2056, 0.3588),
    p(-0.2497, 0.3636),
    p(-0.2938, 0.3653),
    p(-0.3379, 0.3638),
    p(-1.0, 0.0),
];

/// All tiles ordered by identifier
pub static TILE_CATALOG: [TileDefinition; TILE_COUNT] = [
    TileDefinition {
        id: 1,
        points: TILE_1_POINTS,
        has_down: false,
        has_right: false,
    },
    TileDefinition {
        id: 2,
        points: TILE_2_POINTS,
        has_down: true,
        has_right: false,
    },
    TileDefinition {
        id: 3,
        points: TILE_3_POINTS,
        has_down: false,
        has_right: true,
    },
    TileDefinition {
        id: 4,
        points: &[
            p(0.0, 0.0),
            p(0.1, 0.1),
            p(0.2, 0.15),
            p(0.25, 0.2),
            p(0.2, 0.25),
        ],
        has_down: false,
        has_right: false,
    },
    TileDefinition {
        id: 5,
        points: &[
            p(0.0, 0.0),
            p(0.05, 0.1),
            p(0.1, 0.2),
            p(0.05, 0.25),
            p(0.0, 0.3),
        ],
        has_down: false,
        has_right: false,
    },
    TileDefinition {
        id: 6,
        points: &[
            p(0.0, 0.0),
            p(0.1, 0.05),
            p(0.2, 0.1),
            p(0.25, 0.15),
            p(0.3, 0.2),
        ],
        has_down: true,
        has_right: true,
    },
    TileDefinition {
        id: 7,
        points: &[p(0.0, 0.0), p(0.15, 0.1), p(0.25, 0.25)],
        has_down: false,
        has_right: true,
    },
    TileDefinition {
        id: 8,
        points: &[p(0.0, 0.0), p(0.1, 0.15), p(0.0, 0.25)],
        has_down: false,
        has_right: false,
    },
    TileDefinition {
        id: 9,
        points: &[p(0.0, 0.0), p(0.2, 0.1), p(0.3, 0.3)],
        has_down: true,
        has_right: false,
    },
    TileDefinition {
        id: 10,
        points: &[p(0.0, 0.0), p(0.1, 0.1), p(0.25, 0.1), p(0.3, 0.15)],
        has_down: false,
        has_right: true,
    },
    TileDefinition {
        id: 11,
        points: &[p(0.0, 0.0), p(0.1, 0.05), p(0.2, 0.15), p(0.15, 0.25)],
        has_down: true,
        has_right: false,
    },
    TileDefinition {
        id: 12,
        points: &[p(0.0, 0.0), p(0.15, 0.05), p(0.25, 0.15), p(0.3, 0.25)],
        has_down: true,
        has_right: true,
    },
    TileDefinition {
        id: 13,
        points: &[p(0.0, 0.0), p(0.1, 0.2), p(0.25, 0.15)],
        has_down: true,
        has_right: true,
    },
    TileDefinition {
        id: 14,
        points: &[p(0.0, 0.0), p(0.2, 0.1), p(0.15, 0.25)],
        has_down: false,
        has_right: true,
    },
    TileDefinition {
        id: 15,
        points: &[p(0.0, 0.0), p(0.1, 0.1), p(0.2, 0.2), p(0.25, 0.25)],
        has_down: true,
        has_right: false,
    },
    TileDefinition {
        id: 16,
        points: &[
            p(0.0, 0.0),
            p(0.05, 0.05),
            p(0.1, 0.1),
            p(0.15, 0.15),
            p(0.2, 0.2),
        ],
        has_down: true,
        has_right: true,
    },
];

/// Look up a tile definition, `None` for identifiers outside the catalog
pub fn tile(id: TileId) -> Option<&'static TileDefinition> {
    usize::from(id)
        .checked_sub(1)
        .and_then(|index| TILE_CATALOG.get(index))
}

/// Whether the tile's curve reaches the bottom edge
///
/// Unknown identifiers present no connector.
pub fn has_down(id: TileId) -> bool {
    tile(id).is_some_and(|definition| definition.has_down)
}

/// Whether the tile's curve reaches the right edge
///
/// Unknown identifiers present no connector.
pub fn has_right(id: TileId) -> bool {
    tile(id).is_some_and(|definition| definition.has_right)
}

/// Iterate over every valid tile identifier in ascending order
pub fn all_tile_ids() -> impl Iterator<Item = TileId> {
    TILE_CATALOG.iter().map(|definition| definition.id)
}
