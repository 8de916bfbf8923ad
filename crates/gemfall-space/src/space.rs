//! The [`TileGrid`] trait: read access to a board's cells.

use crate::dims::GridDims;
use crate::neighbours::{all_neighbours, cardinal_neighbours, NeighbourList, NeighbourScope};
use gemfall_core::{CellCoord, Tile};

/// Read-only view of a board, as consumed by the rule engine.
///
/// Implementors own the cells and their tiles; match detection and chain
/// building only ever query through this trait. Every lookup is
/// bounds-checked: off-board positions yield `None`, never a panic.
pub trait TileGrid {
    /// Board extents.
    fn dims(&self) -> GridDims;

    /// The tile occupying `coord`, or `None` if the cell is empty or
    /// `coord` is off the board.
    fn tile(&self, coord: CellCoord) -> Option<&Tile>;

    /// Number of columns.
    fn width(&self) -> u32 {
        self.dims().width()
    }

    /// Number of rows.
    fn height(&self) -> u32 {
        self.dims().height()
    }

    /// Bounds-checked lookup of a signed position.
    fn cell(&self, x: i64, y: i64) -> Option<CellCoord> {
        self.dims().cell_at(x, y)
    }

    /// The cell one row below `coord`, used by gravity collaborators.
    fn cell_below(&self, coord: CellCoord) -> Option<CellCoord> {
        self.dims().below(coord)
    }

    /// The tile at `coord` only if it is settled.
    fn settled_tile(&self, coord: CellCoord) -> Option<&Tile> {
        self.tile(coord).filter(|t| t.is_settled())
    }

    /// Collect the neighbours of `coord` in the given scope.
    fn neighbours(&self, coord: CellCoord, scope: NeighbourScope) -> NeighbourList {
        match scope {
            NeighbourScope::Cardinal => cardinal_neighbours(self.dims(), coord).collect(),
            NeighbourScope::All => all_neighbours(self.dims(), coord).collect(),
        }
    }
}

impl<G: TileGrid + ?Sized> TileGrid for &G {
    fn dims(&self) -> GridDims {
        (**self).dims()
    }

    fn tile(&self, coord: CellCoord) -> Option<&Tile> {
        (**self).tile(coord)
    }
}
