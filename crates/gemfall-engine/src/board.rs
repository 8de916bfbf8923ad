//! The owning board: one slot per cell, each holding zero or one tile.

use gemfall_core::{BoardError, CellCoord, Tile, TileId, TileKind};
use gemfall_space::{GridDims, TileGrid};

/// Rectangular board of cells in row-major storage.
///
/// The board exclusively owns every tile. Cells never move; tiles move
/// between cells only through [`place`](Board::place),
/// [`remove`](Board::remove) and [`swap_occupants`](Board::swap_occupants),
/// each of which keeps the tile's cell back-reference current.
#[derive(Clone, Debug)]
pub struct Board {
    dims: GridDims,
    cells: Vec<Option<Tile>>,
    next_tile_id: u64,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Examples
    ///
    /// ```
    /// use gemfall_core::{CellCoord, TileKind};
    /// use gemfall_engine::Board;
    /// use gemfall_space::TileGrid;
    ///
    /// let mut board = Board::new(3, 3).unwrap();
    /// board.place(CellCoord::new(1, 0), TileKind(7)).unwrap();
    /// assert_eq!(board.tile(CellCoord::new(1, 0)).unwrap().kind(), TileKind(7));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        GridDims::new(width, height).map(Self::with_dims)
    }

    /// Create an empty board with pre-validated extents.
    pub fn with_dims(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
            next_tile_id: 0,
        }
    }

    /// Create a settled, swappable tile of `kind` in the empty cell `coord`.
    ///
    /// Returns a mutable handle so callers can adjust its flags.
    pub fn place(&mut self, coord: CellCoord, kind: TileKind) -> Result<&mut Tile, BoardError> {
        let idx = self.dims.checked_index(coord)?;
        if self.cells[idx].is_some() {
            return Err(BoardError::CellOccupied { coord });
        }
        let id = TileId(self.next_tile_id);
        self.next_tile_id += 1;
        let mut tile = Tile::new(id, kind);
        tile.relocate(Some(coord));
        Ok(self.cells[idx].insert(tile))
    }

    /// Take the tile out of `coord`, leaving the cell empty.
    pub fn remove(&mut self, coord: CellCoord) -> Result<Tile, BoardError> {
        let idx = self.dims.checked_index(coord)?;
        let mut tile = self.cells[idx]
            .take()
            .ok_or(BoardError::CellEmpty { coord })?;
        tile.relocate(None);
        Ok(tile)
    }

    /// Mutable access to the tile at `coord`.
    pub fn tile_mut(&mut self, coord: CellCoord) -> Option<&mut Tile> {
        let idx = self.dims.index_of(coord)?;
        self.cells[idx].as_mut()
    }

    /// Flag the tile at `coord` as settled or in motion.
    pub fn set_settled(&mut self, coord: CellCoord, settled: bool) -> Result<(), BoardError> {
        self.dims.checked_index(coord)?;
        let tile = self
            .tile_mut(coord)
            .ok_or(BoardError::CellEmpty { coord })?;
        tile.set_settled(settled);
        Ok(())
    }

    /// Exchange the occupants of `a` and `b`.
    ///
    /// Either cell may be empty. No tile is created or destroyed, and each
    /// moved tile's back-reference follows it.
    pub fn swap_occupants(&mut self, a: CellCoord, b: CellCoord) -> Result<(), BoardError> {
        let ia = self.dims.checked_index(a)?;
        let ib = self.dims.checked_index(b)?;
        self.cells.swap(ia, ib);
        if let Some(tile) = self.cells[ia].as_mut() {
            tile.relocate(Some(a));
        }
        if let Some(tile) = self.cells[ib].as_mut() {
            tile.relocate(Some(b));
        }
        Ok(())
    }

    /// Occupied cells with their tiles, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (CellCoord, &Tile)> + '_ {
        self.dims
            .cells()
            .zip(self.cells.iter())
            .filter_map(|(coord, slot)| slot.as_ref().map(|t| (coord, t)))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|s| s.is_some()).count()
    }
}

impl TileGrid for Board {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn tile(&self, coord: CellCoord) -> Option<&Tile> {
        self.cells.get(self.dims.index_of(coord)?)?.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemfall_space::NeighbourScope;
    use proptest::prelude::*;

    fn c(x: u32, y: u32) -> CellCoord {
        CellCoord::new(x, y)
    }

    #[test]
    fn place_sets_back_reference_and_fresh_ids() {
        let mut b = Board::new(3, 3).unwrap();
        let first = b.place(c(0, 0), TileKind(1)).unwrap().id();
        let second = b.place(c(2, 2), TileKind(1)).unwrap().id();
        assert_ne!(first, second);
        assert_eq!(b.tile(c(2, 2)).unwrap().cell(), Some(c(2, 2)));
        assert_eq!(b.occupied(), 2);
    }

    #[test]
    fn place_rejects_occupied_and_out_of_bounds() {
        let mut b = Board::new(2, 2).unwrap();
        b.place(c(0, 0), TileKind(1)).unwrap();
        assert_eq!(
            b.place(c(0, 0), TileKind(2)).unwrap_err(),
            BoardError::CellOccupied { coord: c(0, 0) }
        );
        assert!(matches!(
            b.place(c(2, 0), TileKind(2)),
            Err(BoardError::CoordOutOfBounds { .. })
        ));
    }

    #[test]
    fn remove_empties_cell_and_clears_back_reference() {
        let mut b = Board::new(2, 1).unwrap();
        b.place(c(1, 0), TileKind(3)).unwrap();
        let t = b.remove(c(1, 0)).unwrap();
        assert_eq!(t.cell(), None);
        assert!(b.tile(c(1, 0)).is_none());
        assert_eq!(
            b.remove(c(1, 0)).unwrap_err(),
            BoardError::CellEmpty { coord: c(1, 0) }
        );
    }

    #[test]
    fn swap_moves_tiles_and_back_references() {
        let mut b = Board::new(2, 1).unwrap();
        let left = b.place(c(0, 0), TileKind(1)).unwrap().id();
        let right = b.place(c(1, 0), TileKind(2)).unwrap().id();
        b.swap_occupants(c(0, 0), c(1, 0)).unwrap();
        assert_eq!(b.tile(c(0, 0)).unwrap().id(), right);
        assert_eq!(b.tile(c(1, 0)).unwrap().id(), left);
        assert_eq!(b.tile(c(0, 0)).unwrap().cell(), Some(c(0, 0)));
        assert_eq!(b.tile(c(1, 0)).unwrap().cell(), Some(c(1, 0)));
    }

    #[test]
    fn swap_with_empty_cell() {
        let mut b = Board::new(2, 1).unwrap();
        b.place(c(0, 0), TileKind(1)).unwrap();
        b.swap_occupants(c(0, 0), c(1, 0)).unwrap();
        assert!(b.tile(c(0, 0)).is_none());
        assert_eq!(b.tile(c(1, 0)).unwrap().cell(), Some(c(1, 0)));
        assert_eq!(b.occupied(), 1);
    }

    #[test]
    fn set_settled_reports_empty_cell() {
        let mut b = Board::new(2, 1).unwrap();
        b.place(c(0, 0), TileKind(1)).unwrap();
        b.set_settled(c(0, 0), false).unwrap();
        assert!(!b.tile(c(0, 0)).unwrap().is_settled());
        assert!(b.settled_tile(c(0, 0)).is_none());
        assert_eq!(
            b.set_settled(c(1, 0), true).unwrap_err(),
            BoardError::CellEmpty { coord: c(1, 0) }
        );
    }

    #[test]
    fn cell_below_walks_down_to_the_bottom_row() {
        let b = Board::new(2, 3).unwrap();
        assert_eq!(b.cell_below(c(1, 2)), Some(c(1, 1)));
        assert_eq!(b.cell_below(c(1, 1)), Some(c(1, 0)));
        assert_eq!(b.cell_below(c(1, 0)), None);
        assert_eq!(b.cell_below(c(2, 2)), None);
    }

    #[test]
    fn grid_neighbours_follow_scope() {
        let b = Board::new(3, 3).unwrap();
        let cardinal = b.neighbours(c(1, 1), NeighbourScope::Cardinal);
        assert_eq!(cardinal.as_slice(), &[c(1, 2), c(2, 1), c(1, 0), c(0, 1)]);

        let all = b.neighbours(c(1, 1), NeighbourScope::All);
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], c(1, 2));
        assert_eq!(all[1], c(2, 2));

        // The top-right corner keeps only what lies on the board.
        let corner = b.neighbours(c(2, 2), NeighbourScope::All);
        assert_eq!(corner.as_slice(), &[c(2, 1), c(1, 1), c(1, 2)]);
    }

    proptest! {
        #[test]
        fn double_swap_restores_occupants(
            w in 1u32..6, h in 1u32..6,
            ax in 0u32..6, ay in 0u32..6, bx in 0u32..6, by in 0u32..6,
            fill in proptest::collection::vec(proptest::option::of(0u32..4), 36),
        ) {
            let mut b = Board::new(w, h).unwrap();
            for (i, kind) in fill.iter().enumerate().take((w * h) as usize) {
                if let Some(k) = kind {
                    let coord = c(i as u32 % w, i as u32 / w);
                    b.place(coord, TileKind(*k)).unwrap();
                }
            }
            let a = c(ax % w, ay % h);
            let other = c(bx % w, by % h);
            let before: Vec<_> = b.tiles().map(|(coord, t)| (coord, t.clone())).collect();
            b.swap_occupants(a, other).unwrap();
            b.swap_occupants(a, other).unwrap();
            let after: Vec<_> = b.tiles().map(|(coord, t)| (coord, t.clone())).collect();
            prop_assert_eq!(before, after);
        }
    }
}
