//! Neighbour contract test helpers.
//!
//! These functions verify that the neighbour sequences satisfy the
//! invariants the rule engine depends on, over every cell of a board.

use crate::dims::GridDims;
use crate::neighbours::{all_neighbours, cardinal_neighbours, diagonal_neighbours};
use gemfall_core::CellCoord;
use indexmap::IndexSet;

/// Assert that `b in cardinal(a)` implies `a in cardinal(b)`.
pub fn assert_cardinal_symmetric(dims: GridDims) {
    for coord in dims.cells() {
        for nb in cardinal_neighbours(dims, coord) {
            assert!(
                cardinal_neighbours(dims, nb).any(|n| n == coord),
                "cardinal symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that `b in all(a)` implies `a in all(b)`.
pub fn assert_all_symmetric(dims: GridDims) {
    for coord in dims.cells() {
        for nb in all_neighbours(dims, coord) {
            assert!(
                all_neighbours(dims, nb).any(|n| n == coord),
                "all-neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that every yielded neighbour is on the board, distinct, and
/// never the cell itself.
pub fn assert_neighbours_in_bounds_and_unique(dims: GridDims) {
    for coord in dims.cells() {
        let all: Vec<CellCoord> = all_neighbours(dims, coord).collect();
        let unique: IndexSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len(), "duplicate neighbour of {coord}");
        for nb in &all {
            assert!(dims.contains(*nb), "{nb} off board, neighbour of {coord}");
            assert_ne!(*nb, coord, "{coord} is its own neighbour");
        }
    }
}

/// Assert cardinal neighbours are at L1 distance 1, diagonals at
/// Chebyshev distance 1 with both axes changing.
pub fn assert_neighbour_distances(dims: GridDims) {
    for coord in dims.cells() {
        for nb in cardinal_neighbours(dims, coord) {
            assert_eq!(coord.manhattan(nb), 1, "{nb} not cardinal to {coord}");
        }
        for nb in diagonal_neighbours(dims, coord) {
            assert!(
                coord.x.abs_diff(nb.x) == 1 && coord.y.abs_diff(nb.y) == 1,
                "{nb} not diagonal to {coord}"
            );
        }
    }
}

/// Run all neighbour checks on a board.
pub fn run_full_compliance(dims: GridDims) {
    assert_cardinal_symmetric(dims);
    assert_all_symmetric(dims);
    assert_neighbours_in_bounds_and_unique(dims);
    assert_neighbour_distances(dims);
}
