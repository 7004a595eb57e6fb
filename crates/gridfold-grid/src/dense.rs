//! Dense storage: a complete row-major table.

use crate::cell::GridCell;
use crate::grid::Grid;
use crate::line::Line;
use crate::render::{render, DefaultPainter, RenderOptions};
use crate::sparse::SparseGrid;
use gridfold_core::{Bounds, GridError, Position};
use indexmap::IndexMap;
use std::fmt;

/// A grid backed by a complete rectangular table.
///
/// Every in-bounds position holds an explicit value, possibly the empty
/// one. Bounds are always zero-based: rows `0..height`, columns
/// `0..width`. Lookup is O(1); memory is O(height x width).
///
/// Cells are stored row-major in one flat buffer, so a row view is a
/// contiguous slice and a column view is a strided walk over the same
/// buffer.
///
/// # Examples
///
/// ```
/// use gridfold_grid::{DenseGrid, Grid, Position};
///
/// let g = DenseGrid::new(vec![vec!['#', '.'], vec!['.', '#']], '.').unwrap();
/// assert_eq!(g.cell(Position::new(1, 1)), &'#');
/// assert_eq!(g.cell(Position::new(5, 5)), &'.');
/// assert_eq!(g.find_all(&'#').len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DenseGrid<C> {
    cells: Vec<C>,
    height: usize,
    width: usize,
    empty: C,
}

impl<C: Clone + PartialEq> DenseGrid<C> {
    /// Build from a rectangular table of rows.
    ///
    /// Returns `Err(GridError::EmptyTable)` if the table has no rows or
    /// no columns, and `Err(GridError::RaggedRows)` if any row's length
    /// differs from the first row's.
    pub fn new(table: Vec<Vec<C>>, empty: C) -> Result<Self, GridError> {
        let height = table.len();
        let width = table.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::EmptyTable);
        }
        if let Some((row, r)) = table.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RaggedRows {
                row,
                expected: width,
                found: r.len(),
            });
        }
        let cells: Vec<C> = table.into_iter().flatten().collect();
        log::debug!("dense grid {height}x{width} built");
        Ok(Self {
            cells,
            height,
            width,
            empty,
        })
    }

    /// Build a `height x width` grid by evaluating `f` at every position.
    pub fn from_fn<F>(height: usize, width: usize, empty: C, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(Position) -> C,
    {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyTable);
        }
        let cells = Bounds::fixed(height, width).positions().map(&mut f).collect();
        log::debug!("dense grid {height}x{width} built from fn");
        Ok(Self {
            cells,
            height,
            width,
            empty,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Non-empty cells with their positions, row-major.
    pub fn non_empty_cells(&self) -> impl Iterator<Item = (Position, &C)> + '_ {
        self.indexed()
            .filter(move |(_, c)| *c != &self.empty)
    }

    /// A grid of the same shape with `f` applied to every cell and to the
    /// empty value.
    pub fn map<D, F>(&self, mut f: F) -> DenseGrid<D>
    where
        D: Clone + PartialEq,
        F: FnMut(&C) -> D,
    {
        DenseGrid {
            cells: self.cells.iter().map(&mut f).collect(),
            height: self.height,
            width: self.width,
            empty: f(&self.empty),
        }
    }

    /// The same logical content in sparse storage with fixed bounds.
    pub fn to_sparse(&self) -> SparseGrid<C> {
        let cells = self
            .non_empty_cells()
            .map(|(p, c)| (p, c.clone()))
            .collect();
        SparseGrid::from_parts(cells, self.empty.clone(), self.bounds())
    }

    fn indexed(&self) -> impl Iterator<Item = (Position, &C)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, c)| {
            (Position::new((i / width) as i64, (i % width) as i64), c)
        })
    }

    fn index_of(&self, p: Position) -> Option<usize> {
        if p.row < 0 || p.column < 0 {
            return None;
        }
        let (r, c) = (p.row as usize, p.column as usize);
        (r < self.height && c < self.width).then(|| r * self.width + c)
    }
}

impl<C: Clone + PartialEq> Grid for DenseGrid<C> {
    type Cell = C;

    fn bounds(&self) -> Bounds {
        Bounds::fixed(self.height, self.width)
    }

    fn empty(&self) -> &C {
        &self.empty
    }

    fn cell(&self, p: Position) -> &C {
        self.index_of(p).map_or(&self.empty, |i| &self.cells[i])
    }

    fn row(&self, index: i64) -> Line<'_, C> {
        let span = self.bounds().column_range();
        if !self.bounds().has_row(index) {
            return Line::blank(index, span, &self.empty);
        }
        let offset = index as usize * self.width;
        Line::strided(index, span, &self.empty, &self.cells, 0, offset, 1, self.width)
    }

    fn column(&self, index: i64) -> Line<'_, C> {
        let span = self.bounds().row_range();
        if !self.bounds().has_column(index) {
            return Line::blank(index, span, &self.empty);
        }
        Line::strided(
            index,
            span,
            &self.empty,
            &self.cells,
            0,
            index as usize,
            self.width,
            self.height,
        )
    }

    fn find_all_by<P>(&self, mut predicate: P) -> IndexMap<Position, &C>
    where
        P: FnMut(&C) -> bool,
    {
        self.indexed().filter(|(_, c)| predicate(*c)).collect()
    }

    fn for_each_non_empty<F>(&self, mut action: F)
    where
        F: FnMut(Position, &C),
    {
        for (p, c) in self.non_empty_cells() {
            action(p, c);
        }
    }

    fn count_non_empty<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(Position) -> bool,
    {
        self.non_empty_cells().filter(|&(p, _)| predicate(p)).count()
    }

    fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.width {
            for r in 0..self.height {
                cells.push(self.cells[r * self.width + c].clone());
            }
        }
        Self {
            cells,
            height: self.width,
            width: self.height,
            empty: self.empty.clone(),
        }
    }
}

impl<C> fmt::Display for DenseGrid<C>
where
    C: Clone + PartialEq + GridCell + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions::default();
        f.write_str(&render(self, &DefaultPainter::new(options.glyphs), &options))
    }
}
