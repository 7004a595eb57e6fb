//! The admissible coordinate rectangle of a grid.

use crate::error::GridError;
use crate::position::Position;
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive row and column extents of a grid.
///
/// Built either as a fixed zero-based rectangle ([`Bounds::fixed`]) or as
/// the tight bounding box of a set of occupied positions
/// ([`Bounds::detect`]). A fixed rectangle with zero height or width is
/// representable and contains nothing; detected bounds are never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    min_row: i64,
    max_row: i64,
    min_column: i64,
    max_column: i64,
}

impl Bounds {
    /// Explicit inclusive extents.
    pub const fn new(min_row: i64, max_row: i64, min_column: i64, max_column: i64) -> Self {
        Self {
            min_row,
            max_row,
            min_column,
            max_column,
        }
    }

    /// Rows `0..height` and columns `0..width`.
    pub const fn fixed(height: usize, width: usize) -> Self {
        Self::new(0, height as i64 - 1, 0, width as i64 - 1)
    }

    /// Tight bounding box of `positions`.
    ///
    /// Returns `Err(GridError::EmptyCellSet)` when the iterator is empty,
    /// since no rectangle can be derived from nothing.
    pub fn detect<I>(positions: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next().ok_or(GridError::EmptyCellSet)?;
        let mut bounds = Self::new(first.row, first.row, first.column, first.column);
        for p in iter {
            bounds.min_row = bounds.min_row.min(p.row);
            bounds.max_row = bounds.max_row.max(p.row);
            bounds.min_column = bounds.min_column.min(p.column);
            bounds.max_column = bounds.max_column.max(p.column);
        }
        Ok(bounds)
    }

    /// Smallest row index.
    pub const fn min_row(&self) -> i64 {
        self.min_row
    }

    /// Largest row index.
    pub const fn max_row(&self) -> i64 {
        self.max_row
    }

    /// Smallest column index.
    pub const fn min_column(&self) -> i64 {
        self.min_column
    }

    /// Largest column index.
    pub const fn max_column(&self) -> i64 {
        self.max_column
    }

    /// Inclusive range of row indices.
    pub fn row_range(&self) -> RangeInclusive<i64> {
        self.min_row..=self.max_row
    }

    /// Inclusive range of column indices.
    pub fn column_range(&self) -> RangeInclusive<i64> {
        self.min_column..=self.max_column
    }

    /// Number of rows (zero for an empty fixed rectangle).
    pub fn height(&self) -> usize {
        span(self.min_row, self.max_row)
    }

    /// Number of columns (zero for an empty fixed rectangle).
    pub fn width(&self) -> usize {
        span(self.min_column, self.max_column)
    }

    /// Number of positions inside the rectangle.
    pub fn cell_count(&self) -> usize {
        self.height().saturating_mul(self.width())
    }

    /// `true` if `row` lies within the row extent.
    pub const fn has_row(&self, row: i64) -> bool {
        row >= self.min_row && row <= self.max_row
    }

    /// `true` if `column` lies within the column extent.
    pub const fn has_column(&self, column: i64) -> bool {
        column >= self.min_column && column <= self.max_column
    }

    /// `true` if `p` lies inside the rectangle.
    pub const fn contains(&self, p: Position) -> bool {
        self.has_row(p.row) && self.has_column(p.column)
    }

    /// Every position inside the rectangle, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.column_range();
        self.row_range()
            .flat_map(move |row| columns.clone().map(move |column| Position::new(row, column)))
    }

    /// Bounds with the row and column extents swapped.
    pub const fn transpose(&self) -> Bounds {
        Self::new(self.min_column, self.max_column, self.min_row, self.max_row)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..={}] x [{}..={}]",
            self.min_row, self.max_row, self.min_column, self.max_column
        )
    }
}

/// Length of `min..=max`, zero when inverted, saturating at `usize::MAX`.
fn span(min: i64, max: i64) -> usize {
    let len = i128::from(max) - i128::from(min) + 1;
    usize::try_from(len.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_is_zero_based() {
        let b = Bounds::fixed(3, 5);
        assert_eq!(b.row_range(), 0..=2);
        assert_eq!(b.column_range(), 0..=4);
        assert_eq!((b.height(), b.width()), (3, 5));
        assert!(b.contains(Position::new(2, 4)));
        assert!(!b.contains(Position::new(3, 0)));
        assert!(!b.contains(Position::new(0, -1)));
        assert!(b.has_row(0) && !b.has_row(-1));
        assert!(b.has_column(4) && !b.has_column(5));
    }

    #[test]
    fn fixed_zero_contains_nothing() {
        let b = Bounds::fixed(0, 0);
        assert_eq!(b.cell_count(), 0);
        assert!(!b.contains(Position::ZERO));
        assert_eq!(b.positions().count(), 0);
    }

    #[test]
    fn extents_saturate_at_coordinate_limits() {
        let b = Bounds::detect([Position::new(i64::MIN, -2), Position::new(i64::MAX, 2)]).unwrap();
        assert_eq!(b.height(), usize::MAX);
        assert_eq!(b.width(), 5);
        assert_eq!(b.cell_count(), usize::MAX);
        let inverted = Bounds::new(i64::MAX, i64::MIN, 0, 0);
        assert_eq!(inverted.height(), 0);
        assert_eq!(inverted.cell_count(), 0);
    }

    #[test]
    fn detect_empty_is_an_error() {
        assert_eq!(
            Bounds::detect(std::iter::empty()),
            Err(GridError::EmptyCellSet)
        );
    }

    #[test]
    fn detect_handles_negative_coordinates() {
        let b = Bounds::detect([Position::new(-2, 4), Position::new(3, -1)]).unwrap();
        assert_eq!(b, Bounds::new(-2, 3, -1, 4));
        assert_eq!(b.height(), 6);
        assert_eq!(b.width(), 6);
    }

    #[test]
    fn positions_are_row_major() {
        let got: Vec<_> = Bounds::fixed(2, 2).positions().collect();
        assert_eq!(
            got,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }

    #[test]
    fn transpose_swaps_extents() {
        let b = Bounds::new(1, 4, -3, 0);
        assert_eq!(b.transpose(), Bounds::new(-3, 0, 1, 4));
        assert_eq!(b.transpose().transpose(), b);
    }

    proptest! {
        #[test]
        fn detect_is_tight(points in prop::collection::vec((-50i64..50, -50i64..50), 1..40)) {
            let positions: Vec<Position> = points.iter().map(|&p| p.into()).collect();
            let b = Bounds::detect(positions.iter().copied()).unwrap();
            prop_assert_eq!(b.min_row(), positions.iter().map(|p| p.row).min().unwrap());
            prop_assert_eq!(b.max_row(), positions.iter().map(|p| p.row).max().unwrap());
            prop_assert_eq!(b.min_column(), positions.iter().map(|p| p.column).min().unwrap());
            prop_assert_eq!(b.max_column(), positions.iter().map(|p| p.column).max().unwrap());
            prop_assert!(positions.iter().all(|&p| b.contains(p)));
        }
    }
}
