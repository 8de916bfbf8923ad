//! Board extents and bounds-checked coordinate lookup.

use gemfall_core::{BoardError, CellCoord};

/// Width and height of a rectangular board.
///
/// Construction rejects empty boards and extents that do not fit in `i32`,
/// so every in-bounds coordinate plus or minus one step fits in `i64`
/// arithmetic without overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Largest accepted extent on either axis.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create board extents.
    ///
    /// Returns `Err(BoardError::EmptyBoard)` if either extent is 0, or
    /// `Err(BoardError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gemfall_space::GridDims;
    ///
    /// let dims = GridDims::new(8, 6).unwrap();
    /// assert_eq!(dims.cell_count(), 48);
    /// assert!(GridDims::new(0, 6).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if width > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `coord` lies on the board.
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Bounds-checked lookup of a signed position.
    ///
    /// Returns `None` for any position off the board, including negative
    /// ones. This is the only way signed offsets become cells.
    pub fn cell_at(&self, x: i64, y: i64) -> Option<CellCoord> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(CellCoord::new(x as u32, y as u32))
    }

    /// The cell one row down from `coord`, if any.
    pub fn below(&self, coord: CellCoord) -> Option<CellCoord> {
        self.cell_at(i64::from(coord.x), i64::from(coord.y) - 1)
    }

    /// Check that `coord` is on the board.
    pub fn check(&self, coord: CellCoord) -> Result<CellCoord, BoardError> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(BoardError::CoordOutOfBounds {
                coord,
                bounds: format!("[0, {}) x [0, {})", self.width, self.height),
            })
        }
    }

    /// Row-major index of an in-bounds coordinate: `y * width + x`.
    pub fn index_of(&self, coord: CellCoord) -> Option<usize> {
        self.contains(coord).then(|| self.linear(coord))
    }

    /// Row-major index of `coord`, or `CoordOutOfBounds`.
    pub fn checked_index(&self, coord: CellCoord) -> Result<usize, BoardError> {
        let coord = self.check(coord)?;
        Ok(self.linear(coord))
    }

    fn linear(&self, coord: CellCoord) -> usize {
        (coord.y as usize) * (self.width as usize) + coord.x as usize
    }

    /// All cells in row-major order, bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| CellCoord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(GridDims::new(0, 3), Err(BoardError::EmptyBoard));
        assert_eq!(GridDims::new(3, 0), Err(BoardError::EmptyBoard));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridDims::new(big, 5),
            Err(BoardError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            GridDims::new(5, big),
            Err(BoardError::DimensionTooLarge { name: "height", .. })
        ));
        assert!(GridDims::new(i32::MAX as u32, 1).is_ok());
    }

    #[test]
    fn cell_at_rejects_off_board() {
        let d = GridDims::new(3, 2).unwrap();
        assert_eq!(d.cell_at(0, 0), Some(CellCoord::new(0, 0)));
        assert_eq!(d.cell_at(2, 1), Some(CellCoord::new(2, 1)));
        assert_eq!(d.cell_at(-1, 0), None);
        assert_eq!(d.cell_at(0, -1), None);
        assert_eq!(d.cell_at(3, 0), None);
        assert_eq!(d.cell_at(0, 2), None);
    }

    #[test]
    fn below_stops_at_bottom_row() {
        let d = GridDims::new(3, 3).unwrap();
        assert_eq!(d.below(CellCoord::new(1, 2)), Some(CellCoord::new(1, 1)));
        assert_eq!(d.below(CellCoord::new(1, 0)), None);
    }

    #[test]
    fn checked_index_agrees_with_index_of() {
        let d = GridDims::new(4, 3).unwrap();
        for cell in d.cells() {
            assert_eq!(d.checked_index(cell).ok(), d.index_of(cell));
        }
        assert!(matches!(
            d.checked_index(CellCoord::new(0, 3)),
            Err(BoardError::CoordOutOfBounds { .. })
        ));
    }

    #[test]
    fn index_is_row_major() {
        let d = GridDims::new(4, 3).unwrap();
        assert_eq!(d.index_of(CellCoord::new(0, 0)), Some(0));
        assert_eq!(d.index_of(CellCoord::new(3, 0)), Some(3));
        assert_eq!(d.index_of(CellCoord::new(0, 1)), Some(4));
        assert_eq!(d.index_of(CellCoord::new(4, 0)), None);
    }

    #[test]
    fn cells_enumerates_every_coordinate_once() {
        let d = GridDims::new(4, 3).unwrap();
        let all: Vec<_> = d.cells().collect();
        assert_eq!(all.len(), d.cell_count());
        for (i, c) in all.iter().enumerate() {
            assert_eq!(d.index_of(*c), Some(i));
        }
    }

    #[test]
    fn check_reports_bounds() {
        let d = GridDims::new(2, 2).unwrap();
        let err = d.check(CellCoord::new(2, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "coordinate (2, 0) out of bounds: [0, 2) x [0, 2)"
        );
    }
}
