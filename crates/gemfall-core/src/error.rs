//! Error types for board construction and direct board editing.
//!
//! The rule engine itself (adjacency, matching, chain claiming, swapping)
//! never fails: invalid requests degrade to `false`, `None`, or a no-op.
//! Errors only arise when a caller builds or edits a board directly.

use crate::id::CellCoord;
use std::error::Error;
use std::fmt;

/// Errors arising from board construction or cell editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to construct a board with zero cells.
    EmptyBoard,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A coordinate is outside the board.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Placing a tile into a cell that already holds one.
    CellOccupied {
        /// The occupied cell.
        coord: CellCoord,
    },
    /// Removing or editing a tile in a cell that holds none.
    CellEmpty {
        /// The empty cell.
        coord: CellCoord,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::CellOccupied { coord } => write!(f, "cell {coord} is already occupied"),
            Self::CellEmpty { coord } => write!(f, "cell {coord} is empty"),
        }
    }
}

impl Error for BoardError {}
