//! The eight compass directions of a square board.

/// A step direction on the board. "Up" increases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    Up,
    /// `(+1, +1)`
    UpRight,
    /// `(+1, 0)`
    Right,
    /// `(+1, -1)`
    RightDown,
    /// `(0, -1)`
    Down,
    /// `(-1, -1)`
    DownLeft,
    /// `(-1, 0)`
    Left,
    /// `(-1, +1)`
    LeftUp,
}

impl Direction {
    /// Cardinal directions in iteration order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Diagonal directions in iteration order.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::RightDown,
        Direction::DownLeft,
        Direction::LeftUp,
    ];

    /// All eight directions, clockwise from up.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::RightDown,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::LeftUp,
    ];

    /// `(dx, dy)` for one step in this direction.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::Right => (1, 0),
            Self::RightDown => (1, -1),
            Self::Down => (0, -1),
            Self::DownLeft => (-1, -1),
            Self::Left => (-1, 0),
            Self::LeftUp => (-1, 1),
        }
    }
}
