//! Integer 2D coordinates and their arithmetic.

use crate::direction::{Direction, DirectionSet};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A `(row, column)` coordinate on a grid.
///
/// Components are `i64` so that repeated translation (beams leaving the
/// grid, rocks sliding, scaled deltas) cannot realistically overflow.
/// Arithmetic wraps at the `i64` limits instead of panicking, so
/// `p + q - q == p` holds for every pair of positions.
/// Rows grow downwards and columns grow to the right, matching the
/// row-major order in which grids are read.
///
/// # Examples
///
/// ```
/// use gridfold_core::{Direction, Position};
///
/// let p = Position::new(2, 3);
/// assert_eq!(p + Direction::N, Position::new(1, 3));
/// assert_eq!(p * 2, Position::new(4, 6));
/// assert_eq!(p.manhattan_distance(Position::ZERO), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index.
    pub row: i64,
    /// Column index.
    pub column: i64,
}

impl Position {
    /// The origin `(0, 0)`.
    pub const ZERO: Position = Position { row: 0, column: 0 };

    /// Create a position from its row and column.
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    /// Sum of the absolute component differences, saturating at `i64::MAX`.
    pub fn manhattan_distance(self, other: Position) -> i64 {
        let d = self.row.abs_diff(other.row).saturating_add(self.column.abs_diff(other.column));
        i64::try_from(d).unwrap_or(i64::MAX)
    }

    /// Swap row and column.
    pub const fn transpose(self) -> Position {
        Position::new(self.column, self.row)
    }

    /// Positions on the same row strictly left of `self`, from column 0.
    ///
    /// Empty when `self.column <= 0`.
    pub fn row_before(self) -> impl Iterator<Item = Position> {
        let row = self.row;
        (0..self.column).map(move |column| Position::new(row, column))
    }

    /// Positions on the same column strictly above `self`, from row 0.
    pub fn column_before(self) -> impl Iterator<Item = Position> {
        let column = self.column;
        (0..self.row).map(move |row| Position::new(row, column))
    }

    /// The neighbour reached through each direction in `directions`, in set order.
    pub fn neighbours(self, directions: DirectionSet) -> SmallVec<[Position; 8]> {
        directions.iter().map(|d| self + d).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, column): (i64, i64)) -> Self {
        Self::new(row, column)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(
            self.row.wrapping_add(rhs.row),
            self.column.wrapping_add(rhs.column),
        )
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(
            self.row.wrapping_sub(rhs.row),
            self.column.wrapping_sub(rhs.column),
        )
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        Position::new(self.row.wrapping_neg(), self.column.wrapping_neg())
    }
}

impl Mul<i64> for Position {
    type Output = Position;

    fn mul(self, factor: i64) -> Position {
        Position::new(self.row.wrapping_mul(factor), self.column.wrapping_mul(factor))
    }
}

impl Mul<Position> for i64 {
    type Output = Position;

    fn mul(self, p: Position) -> Position {
        p * self
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, d: Direction) -> Position {
        self + d.delta()
    }
}

impl Sub<Direction> for Position {
    type Output = Position;

    fn sub(self, d: Direction) -> Position {
        self - d.delta()
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        *self = *self + rhs;
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Position) {
        *self = *self - rhs;
    }
}

impl AddAssign<Direction> for Position {
    fn add_assign(&mut self, d: Direction) {
        *self = *self + d;
    }
}
