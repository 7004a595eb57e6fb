//! Sparse storage: a map of occupied positions.

use crate::cell::GridCell;
use crate::dense::DenseGrid;
use crate::grid::Grid;
use crate::line::Line;
use crate::render::{render, DefaultPainter, RenderOptions};
use gridfold_core::{Bounds, GridError, Position};
use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A grid backed by a map from occupied positions to values.
///
/// Absent positions read as the empty value, and the empty value is never
/// stored: constructors drop entries equal to it. Memory is proportional to
/// the number of non-empty cells, which makes this the cheaper choice when
/// most of the grid is blank.
///
/// Bounds are either supplied ([`with_bounds`](Self::with_bounds),
/// [`from_rows`](Self::from_rows)) or detected as the bounding box of the
/// occupied positions ([`detect`](Self::detect)).
///
/// Iteration follows insertion order, so repeated queries on the same grid
/// return results in the same order.
///
/// # Examples
///
/// ```
/// use gridfold_grid::{Grid, Position, SparseGrid};
///
/// let g = SparseGrid::detect([(Position::new(-1, 4), 'x'), (Position::new(2, 0), 'y')], '.')
///     .unwrap();
/// assert_eq!(g.bounds().row_range(), -1..=2);
/// assert_eq!(g.cell(Position::new(0, 0)), &'.');
/// assert_eq!(g.row(-1).cell(4), &'x');
/// ```
#[derive(Clone, Debug)]
pub struct SparseGrid<C> {
    cells: IndexMap<Position, C>,
    empty: C,
    bounds: Bounds,
}

impl<C: Clone + PartialEq> SparseGrid<C> {
    /// Build from occupied cells, with bounds detected from their positions.
    ///
    /// Returns `Err(GridError::EmptyCellSet)` if no non-empty cell is
    /// given, since no bounding box exists.
    pub fn detect<I>(cells: I, empty: C) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Position, C)>,
    {
        let cells = Self::occupied(cells, &empty);
        let bounds = Bounds::detect(cells.keys().copied())?;
        log::debug!(
            "sparse grid with {} cells, detected bounds {bounds}",
            cells.len()
        );
        Ok(Self::from_parts(cells, empty, bounds))
    }

    /// Build from occupied cells inside explicit bounds.
    ///
    /// Returns `Err(GridError::CellOutOfBounds)` for the first cell lying
    /// outside `bounds`.
    pub fn with_bounds<I>(cells: I, empty: C, bounds: Bounds) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Position, C)>,
    {
        let cells = Self::occupied(cells, &empty);
        if let Some(&position) = cells.keys().find(|p| !bounds.contains(**p)) {
            return Err(GridError::CellOutOfBounds { position, bounds });
        }
        log::debug!("sparse grid with {} cells, bounds {bounds}", cells.len());
        Ok(Self::from_parts(cells, empty, bounds))
    }

    /// Build from a table of rows, keeping only non-empty values.
    ///
    /// Bounds are zero-based with the table's height and its widest row.
    /// Unlike [`DenseGrid::new`], ragged rows are accepted; shorter rows
    /// simply read as empty past their end. Returns
    /// `Err(GridError::EmptyTable)` for a table without rows or columns.
    pub fn from_rows(table: Vec<Vec<C>>, empty: C) -> Result<Self, GridError> {
        let height = table.len();
        let width = table
            .iter()
            .map(Vec::len)
            .max()
            .filter(|&w| w > 0)
            .ok_or(GridError::EmptyTable)?;
        if table.iter().any(|r| r.len() != width) {
            log::warn!("sparse grid built from ragged rows, padding to width {width}");
        }
        let cells = table.into_iter().enumerate().flat_map(|(r, row)| {
            row.into_iter()
                .enumerate()
                .map(move |(c, v)| (Position::new(r as i64, c as i64), v))
        });
        Self::with_bounds(cells, empty, Bounds::fixed(height, width))
    }

    /// Assemble without validation; callers guarantee the invariants.
    pub(crate) fn from_parts(cells: IndexMap<Position, C>, empty: C, bounds: Bounds) -> Self {
        Self {
            cells,
            empty,
            bounds,
        }
    }

    fn occupied<I>(cells: I, empty: &C) -> IndexMap<Position, C>
    where
        I: IntoIterator<Item = (Position, C)>,
    {
        let mut cells: IndexMap<Position, C> = cells.into_iter().collect();
        cells.retain(|_, c| *c != *empty);
        cells
    }

    /// The stored (non-empty) cells.
    pub fn cells(&self) -> &IndexMap<Position, C> {
        &self.cells
    }

    /// Consume the grid, returning its stored cells.
    ///
    /// Together with [`with_bounds`](Self::with_bounds) this is how a caller
    /// derives a modified grid from an existing one.
    pub fn into_cells(self) -> IndexMap<Position, C> {
        self.cells
    }

    /// Non-empty cells with their positions, in insertion order.
    pub fn non_empty_cells(&self) -> impl Iterator<Item = (Position, &C)> + '_ {
        self.cells.iter().map(|(p, c)| (*p, c))
    }

    /// The same logical content in dense storage.
    ///
    /// A dense table is zero-based, so the bounds must start at `(0, 0)`
    /// and the result spans exactly the same rectangle. Otherwise returns
    /// `Err(GridError::CellOutOfBounds)` naming the top-left corner and
    /// the zero-based rectangle of the same shape.
    pub fn to_dense(&self) -> Result<DenseGrid<C>, GridError> {
        let b = self.bounds;
        let (height, width) = (b.height(), b.width());
        if b.min_row() != 0 || b.min_column() != 0 {
            return Err(GridError::CellOutOfBounds {
                position: Position::new(b.min_row(), b.min_column()),
                bounds: Bounds::fixed(height, width),
            });
        }
        DenseGrid::from_fn(height, width, self.empty.clone(), |p| self.cell(p).clone())
    }

    /// Stored cells selected by `key`, re-keyed by the value it returns.
    fn line<K>(&self, key: K) -> IndexMap<i64, &C>
    where
        K: Fn(Position) -> Option<i64>,
    {
        self.cells
            .iter()
            .filter_map(|(p, c)| key(*p).map(|k| (k, c)))
            .collect()
    }
}

impl<C: Clone + PartialEq> Grid for SparseGrid<C> {
    type Cell = C;

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn empty(&self) -> &C {
        &self.empty
    }

    fn cell(&self, p: Position) -> &C {
        self.cells.get(&p).unwrap_or(&self.empty)
    }

    fn row(&self, index: i64) -> Line<'_, C> {
        let span = self.bounds.column_range();
        if !self.bounds.has_row(index) {
            return Line::blank(index, span, &self.empty);
        }
        let cells = self.line(|p| (p.row == index).then_some(p.column));
        Line::mapped(index, span, &self.empty, cells)
    }

    fn column(&self, index: i64) -> Line<'_, C> {
        let span = self.bounds.row_range();
        if !self.bounds.has_column(index) {
            return Line::blank(index, span, &self.empty);
        }
        let cells = self.line(|p| (p.column == index).then_some(p.row));
        Line::mapped(index, span, &self.empty, cells)
    }

    fn find_all_by<P>(&self, mut predicate: P) -> IndexMap<Position, &C>
    where
        P: FnMut(&C) -> bool,
    {
        if predicate(&self.empty) {
            // Empty cells match too, so every in-bounds position is a candidate.
            return self
                .bounds
                .positions()
                .map(|p| (p, self.cell(p)))
                .filter(|(_, c)| predicate(*c))
                .collect();
        }
        self.cells
            .iter()
            .filter(|(_, c)| predicate(*c))
            .map(|(p, c)| (*p, c))
            .collect()
    }

    fn for_each_non_empty<F>(&self, mut action: F)
    where
        F: FnMut(Position, &C),
    {
        for (p, c) in &self.cells {
            action(*p, c);
        }
    }

    fn count_non_empty<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(Position) -> bool,
    {
        self.cells.keys().filter(|p| predicate(**p)).count()
    }

    fn transpose(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|(p, c)| (p.transpose(), c.clone()))
            .collect();
        Self::from_parts(cells, self.empty.clone(), self.bounds.transpose())
    }
}

/// Logical equality: same bounds, same empty value, same stored cells in
/// any order.
impl<C: PartialEq> PartialEq for SparseGrid<C> {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds && self.empty == other.empty && self.cells == other.cells
    }
}

impl<C: Eq> Eq for SparseGrid<C> {}

/// Order-independent, consistent with [`PartialEq`].
impl<C: Hash> Hash for SparseGrid<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bounds.hash(state);
        self.empty.hash(state);
        let mut entries: Vec<(&Position, &C)> = self.cells.iter().collect();
        entries.sort_unstable_by_key(|(p, _)| **p);
        entries.len().hash(state);
        for (p, c) in entries {
            p.hash(state);
            c.hash(state);
        }
    }
}

impl<C> fmt::Display for SparseGrid<C>
where
    C: Clone + PartialEq + GridCell + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions::default();
        f.write_str(&render(self, &DefaultPainter::new(options.glyphs), &options))
    }
}
