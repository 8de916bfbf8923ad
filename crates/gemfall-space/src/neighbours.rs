//! Neighbour sequences derived from a coordinate and the board extents.
//!
//! Cardinal neighbours gate each direction on the strict test that the
//! step stays on the board (`y + 1 < height`, `x + 1 < width`, `y > 0`,
//! `x > 0`).
//!
//! Diagonal and all-neighbour sequences gate on a looser test for the
//! up and right sides: `y < height` and `x < width`. For an on-board cell
//! those always hold, so the up, up-right and right directions are always
//! *probed*, and a probe whose target lies past the top or right edge
//! resolves to `None`. [`diagonal_probes`] and [`all_probes`] expose that
//! raw gate; [`diagonal_neighbours`] and [`all_neighbours`] skip the
//! unresolved entries.

use crate::dims::GridDims;
use crate::direction::Direction;
use gemfall_core::CellCoord;
use smallvec::SmallVec;

/// Inline neighbour collection; 8 covers the full square neighbourhood.
pub type NeighbourList = SmallVec<[CellCoord; 8]>;

/// Which neighbourhood an adjacency test uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighbourScope {
    /// Up, right, down, left.
    Cardinal,
    /// Cardinal plus diagonal.
    All,
}

/// One direction that passed its gate, with its bounds-checked target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighbourProbe {
    /// Direction probed.
    pub direction: Direction,
    /// Target cell, or `None` if the gate admitted a step off the board.
    pub target: Option<CellCoord>,
}

/// Per-side gate flags for one cell.
#[derive(Clone, Copy, Debug)]
struct Gates {
    up: bool,
    right: bool,
    down: bool,
    left: bool,
}

impl Gates {
    fn strict(dims: GridDims, coord: CellCoord) -> Self {
        Self {
            up: u64::from(coord.y) + 1 < u64::from(dims.height()),
            right: u64::from(coord.x) + 1 < u64::from(dims.width()),
            down: coord.y > 0,
            left: coord.x > 0,
        }
    }

    fn loose(dims: GridDims, coord: CellCoord) -> Self {
        Self {
            up: coord.y < dims.height(),
            right: coord.x < dims.width(),
            down: coord.y > 0,
            left: coord.x > 0,
        }
    }

    fn allows(self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::UpRight => self.up && self.right,
            Direction::Right => self.right,
            Direction::RightDown => self.right && self.down,
            Direction::Down => self.down,
            Direction::DownLeft => self.down && self.left,
            Direction::Left => self.left,
            Direction::LeftUp => self.left && self.up,
        }
    }
}

fn step(dims: GridDims, coord: CellCoord, direction: Direction) -> Option<CellCoord> {
    let (dx, dy) = direction.offset();
    dims.cell_at(i64::from(coord.x) + dx, i64::from(coord.y) + dy)
}

fn probes<const N: usize>(
    dims: GridDims,
    coord: CellCoord,
    gates: Gates,
    order: [Direction; N],
) -> impl Iterator<Item = NeighbourProbe> {
    order
        .into_iter()
        .filter(move |d| gates.allows(*d))
        .map(move |direction| NeighbourProbe {
            direction,
            target: step(dims, coord, direction),
        })
}

/// Cardinal neighbours of `coord`, in the order up, right, down, left.
///
/// # Examples
///
/// ```
/// use gemfall_core::CellCoord;
/// use gemfall_space::{cardinal_neighbours, GridDims};
///
/// let dims = GridDims::new(3, 3).unwrap();
/// let n: Vec<_> = cardinal_neighbours(dims, CellCoord::new(0, 0)).collect();
/// assert_eq!(n, vec![CellCoord::new(0, 1), CellCoord::new(1, 0)]);
/// ```
pub fn cardinal_neighbours(dims: GridDims, coord: CellCoord) -> impl Iterator<Item = CellCoord> {
    probes(dims, coord, Gates::strict(dims, coord), Direction::CARDINAL)
        .filter_map(|p| p.target)
}

/// Diagonal directions admitted by the loose gate, in the order
/// up-right, right-down, down-left, left-up.
pub fn diagonal_probes(dims: GridDims, coord: CellCoord) -> impl Iterator<Item = NeighbourProbe> {
    probes(dims, coord, Gates::loose(dims, coord), Direction::DIAGONAL)
}

/// Diagonal neighbours of `coord` that exist on the board.
pub fn diagonal_neighbours(dims: GridDims, coord: CellCoord) -> impl Iterator<Item = CellCoord> {
    diagonal_probes(dims, coord).filter_map(|p| p.target)
}

/// All eight directions admitted by the loose gate, clockwise from up.
pub fn all_probes(dims: GridDims, coord: CellCoord) -> impl Iterator<Item = NeighbourProbe> {
    probes(dims, coord, Gates::loose(dims, coord), Direction::ALL)
}

/// Cardinal and diagonal neighbours interleaved, clockwise from up,
/// skipping directions that fall off the board.
pub fn all_neighbours(dims: GridDims, coord: CellCoord) -> impl Iterator<Item = CellCoord> {
    all_probes(dims, coord).filter_map(|p| p.target)
}

/// Whether `other` is a neighbour of `coord` in `scope`.
///
/// A cell is never its own neighbour.
pub fn is_neighbour(
    dims: GridDims,
    coord: CellCoord,
    other: CellCoord,
    scope: NeighbourScope,
) -> bool {
    if other == coord {
        return false;
    }
    match scope {
        NeighbourScope::Cardinal => cardinal_neighbours(dims, coord).any(|n| n == other),
        NeighbourScope::All => all_neighbours(dims, coord).any(|n| n == other),
    }
}
