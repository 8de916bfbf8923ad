//! Minimal in-crate [`TileGrid`] for unit tests.

use gemfall_core::{CellCoord, Tile, TileId, TileKind};
use gemfall_space::{GridDims, TileGrid};

pub struct TestGrid {
    dims: GridDims,
    tiles: Vec<Option<Tile>>,
}

impl TestGrid {
    /// Rows are listed top first. `.` is empty, uppercase is a settled
    /// tile, lowercase an unsettled tile of the same kind.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let dims = GridDims::new(width, height).unwrap();
        let mut tiles = vec![None; dims.cell_count()];
        for (row, line) in rows.iter().enumerate() {
            let y = height - 1 - row as u32;
            for (x, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let coord = CellCoord::new(x as u32, y);
                let kind = TileKind(ch.to_ascii_uppercase() as u32);
                let id = TileId(dims.index_of(coord).unwrap() as u64);
                let mut tile = Tile::new(id, kind);
                tile.set_settled(ch.is_ascii_uppercase());
                tile.relocate(Some(coord));
                tiles[dims.index_of(coord).unwrap()] = Some(tile);
            }
        }
        Self { dims, tiles }
    }
}

impl TileGrid for TestGrid {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn tile(&self, coord: CellCoord) -> Option<&Tile> {
        self.tiles.get(self.dims.index_of(coord)?)?.as_ref()
    }
}
