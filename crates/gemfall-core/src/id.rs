//! Strongly-typed identifiers and the [`CellCoord`] grid position.

use std::fmt;

/// A cell position on the board.
///
/// `x` runs left to right in `[0, width)`, `y` runs bottom to top in
/// `[0, height)`. "Up" is `y + 1`. A cell's coordinate is fixed for the
/// lifetime of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Column, 0-indexed from the left edge.
    pub x: u32,
    /// Row, 0-indexed from the bottom edge.
    pub y: u32,
}

impl CellCoord {
    /// Construct a coordinate from its column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Signed componentwise difference `self - other`.
    ///
    /// Used by run detection: the offset between two adjacent matching
    /// cells is the orientation of the run they belong to.
    pub fn delta(self, other: CellCoord) -> (i64, i64) {
        (
            i64::from(self.x) - i64::from(other.x),
            i64::from(self.y) - i64::from(other.y),
        )
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: CellCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for CellCoord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Categorical tile type. Two tiles match iff their kinds are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKind(pub u32);

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileKind {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies one tile instance on a board.
///
/// Allocated sequentially by the owning board. A tile keeps its ID when
/// it moves between cells, so swaps can be verified by identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TileId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Stagger index assigned to a claimed cell within one destruction chain.
///
/// The chain starter holds order 0. Presentation layers use the order to
/// delay per-tile effects so a chain detonates as a wave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaveOrder(pub u32);

impl WaveOrder {
    /// The order held by a chain's starter cell.
    pub const START: WaveOrder = WaveOrder(0);

    /// The order immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for WaveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WaveOrder {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
