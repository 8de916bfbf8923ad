//! The [`Tile`] game piece.

use crate::id::{CellCoord, TileId, TileKind};

/// One matchable game piece.
///
/// A tile is exclusively owned by the cell it occupies. It keeps a
/// non-owning back-reference to that cell (by coordinate) so neighbour
/// queries can start from the tile; the owning board updates it whenever
/// the tile moves.
///
/// Only *settled* tiles are visible to matching and swapping. A tile is
/// unsettled while any movement or animation affecting it is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    kind: TileKind,
    swappable: bool,
    settled: bool,
    cell: Option<CellCoord>,
}

impl Tile {
    /// Create a settled, swappable tile not yet placed in any cell.
    pub fn new(id: TileId, kind: TileKind) -> Self {
        Self {
            id,
            kind,
            swappable: true,
            settled: true,
            cell: None,
        }
    }

    /// Instance identifier.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Match type.
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// Whether the player may move this tile.
    pub fn is_swappable(&self) -> bool {
        self.swappable
    }

    /// Set the swappable flag.
    pub fn set_swappable(&mut self, swappable: bool) {
        self.swappable = swappable;
    }

    /// Whether all movement affecting this tile has finished.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Set the settled flag.
    pub fn set_settled(&mut self, settled: bool) {
        self.settled = settled;
    }

    /// The cell this tile currently occupies, if placed.
    pub fn cell(&self) -> Option<CellCoord> {
        self.cell
    }

    /// Update the back-reference after the owning board moved the tile.
    pub fn relocate(&mut self, cell: Option<CellCoord>) {
        self.cell = cell;
    }

    /// Tile equality for matching: same kind.
    ///
    /// Settledness is checked by the caller; this only compares content.
    pub fn is_match(&self, other: &Tile) -> bool {
        self.kind == other.kind
    }
}
