//! The `Grid` trait shared by both storage strategies.

use crate::line::Line;
use gridfold_core::{Bounds, Position};
use indexmap::{IndexMap, IndexSet};

/// Read-only contract for a two-dimensional grid of cells.
///
/// Every lookup is total: positions outside [`bounds`](Self::bounds) read
/// as the grid's [`empty`](Self::empty) value and out-of-range lines are
/// always-empty views, so callers can probe one step past an edge without
/// branching.
///
/// Implemented by [`DenseGrid`](crate::DenseGrid) and
/// [`SparseGrid`](crate::SparseGrid). Given the same logical content both
/// must return identical results from every method here.
///
/// # Mutation
///
/// Grids are immutable. Callers model a change (rocks sliding, a cell
/// being replaced) by building a new grid from a transformed cell
/// collection.
pub trait Grid {
    /// Cell value type.
    type Cell: Clone + PartialEq;

    /// The admissible coordinate rectangle.
    fn bounds(&self) -> Bounds;

    /// The designated "no content here" value.
    fn empty(&self) -> &Self::Cell;

    /// The cell at `p`, or the empty value if `p` is absent or out of bounds.
    fn cell(&self, p: Position) -> &Self::Cell;

    /// View of row `index`; always-empty if the row is out of bounds.
    fn row(&self, index: i64) -> Line<'_, Self::Cell>;

    /// View of column `index`; always-empty if the column is out of bounds.
    fn column(&self, index: i64) -> Line<'_, Self::Cell>;

    /// Every in-bounds cell satisfying `predicate`.
    ///
    /// The empty value takes part like any other value: if the predicate
    /// accepts it, empty positions inside the bounds are reported too.
    fn find_all_by<P>(&self, predicate: P) -> IndexMap<Position, &Self::Cell>
    where
        P: FnMut(&Self::Cell) -> bool;

    /// Call `action` for every non-empty cell.
    fn for_each_non_empty<F>(&self, action: F)
    where
        F: FnMut(Position, &Self::Cell);

    /// Count non-empty cells whose position satisfies `predicate`.
    fn count_non_empty<P>(&self, predicate: P) -> usize
    where
        P: FnMut(Position) -> bool;

    /// A new grid with rows and columns swapped.
    ///
    /// Keeps the storage strategy and the empty value.
    fn transpose(&self) -> Self
    where
        Self: Sized;

    /// Positions of every in-bounds cell equal to `value`.
    fn find_all(&self, value: &Self::Cell) -> IndexSet<Position> {
        self.find_all_by(|c| c == value).into_keys().collect()
    }

    /// `true` if `p` lies inside the bounds.
    fn contains(&self, p: Position) -> bool {
        self.bounds().contains(p)
    }

    /// `true` if the cell at `p` is the empty value.
    fn is_empty_at(&self, p: Position) -> bool {
        self.cell(p) == self.empty()
    }

    /// Every row view, top to bottom.
    fn rows(&self) -> impl Iterator<Item = Line<'_, Self::Cell>> {
        self.bounds().row_range().map(move |r| self.row(r))
    }

    /// Every column view, left to right.
    fn columns(&self) -> impl Iterator<Item = Line<'_, Self::Cell>> {
        self.bounds().column_range().map(move |c| self.column(c))
    }

    /// Call `action` for every in-bounds position, empty or not, row-major.
    fn for_each_with_empty<F>(&self, mut action: F)
    where
        F: FnMut(Position, &Self::Cell),
    {
        for p in self.bounds().positions() {
            action(p, self.cell(p));
        }
    }

    /// Count in-bounds positions, empty or not, satisfying `predicate`.
    fn count_with_empty<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(Position) -> bool,
    {
        self.bounds().positions().filter(|&p| predicate(p)).count()
    }
}
