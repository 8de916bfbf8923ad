//! Local run detection.
//!
//! A run is three or more orthogonally collinear cells holding settled
//! tiles of one kind. Detection never scans a row or column: given two
//! adjacent matching cells, their offset is the run's orientation, and
//! the only positions a third member can occupy are one step past either
//! end of the pair.

use gemfall_core::CellCoord;
use gemfall_space::{cardinal_neighbours, TileGrid};

/// Whether `a` and `b` hold settled tiles of the same kind.
///
/// Empty cells, unsettled tiles, off-board coordinates and `a == b` are
/// never a match.
pub fn is_valid_match<G: TileGrid + ?Sized>(grid: &G, a: CellCoord, b: CellCoord) -> bool {
    if a == b {
        return false;
    }
    match (grid.settled_tile(a), grid.settled_tile(b)) {
        (Some(ta), Some(tb)) => tb.is_match(ta),
        _ => false,
    }
}

/// Whether `cell` and its cardinal neighbour `other` are two members of a
/// straight run of three.
///
/// With `(dx, dy) = cell - other`, the third member may sit at
/// `cell + (dx, dy)` (extending past `cell`) and must then match `other`,
/// or at `other - (dx, dy)` (extending past `other`) and must then match
/// `cell`. Returns `false` if `other == cell` or the two are not
/// orthogonally adjacent.
///
/// The pair itself is not compared here; callers establish
/// [`is_valid_match`] for `cell`/`other` first.
pub fn match_in_line<G: TileGrid + ?Sized>(grid: &G, cell: CellCoord, other: CellCoord) -> bool {
    if other == cell {
        return false;
    }

    let (dx, dy) = cell.delta(other);
    if dx.abs() + dy.abs() > 1 {
        return false;
    }

    let past_cell = grid.cell(i64::from(cell.x) + dx, i64::from(cell.y) + dy);
    if let Some(candidate) = past_cell {
        if is_valid_match(grid, candidate, other) {
            return true;
        }
    }

    let past_other = grid.cell(i64::from(other.x) - dx, i64::from(other.y) - dy);
    if let Some(candidate) = past_other {
        if is_valid_match(grid, candidate, cell) {
            return true;
        }
    }

    false
}

/// Whether the tile at `cell` belongs to any straight run of three.
///
/// Scans cardinal neighbours only; diagonal adjacency never forms a run.
pub fn in_triplet<G: TileGrid + ?Sized>(grid: &G, cell: CellCoord) -> bool {
    if grid.tile(cell).is_none() {
        return false;
    }
    cardinal_neighbours(grid.dims(), cell)
        .any(|n| is_valid_match(grid, cell, n) && match_in_line(grid, n, cell))
}
