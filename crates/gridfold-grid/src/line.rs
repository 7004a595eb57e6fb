//! Read-only row and column views.

use indexmap::IndexMap;
use std::cell::OnceCell;
use std::fmt;
use std::ops::RangeInclusive;

/// A single row or column of a grid.
///
/// Lines are derived on demand from their grid and borrow from it; they
/// are not cached across calls. Lookups are indexed by the coordinate
/// perpendicular to the line (the column for a row, the row for a column)
/// and fall back to the grid's empty value outside the stored range.
pub struct Line<'g, C> {
    index: i64,
    span: RangeInclusive<i64>,
    empty: &'g C,
    view: View<'g, C>,
    all_empty: OnceCell<bool>,
}

enum View<'g, C> {
    /// Evenly spaced elements of a dense table.
    Strided {
        data: &'g [C],
        origin: i64,
        offset: usize,
        stride: usize,
        len: usize,
    },
    /// Occupied cells keyed by perpendicular coordinate.
    Mapped(IndexMap<i64, &'g C>),
    /// Outside the grid: every cell is empty.
    Blank,
}

impl<'g, C: PartialEq> Line<'g, C> {
    /// `len` cells of `data` starting at `offset`, `stride` apart.
    ///
    /// Perpendicular coordinate `origin` maps to `data[offset]`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn strided(
        index: i64,
        span: RangeInclusive<i64>,
        empty: &'g C,
        data: &'g [C],
        origin: i64,
        offset: usize,
        stride: usize,
        len: usize,
    ) -> Self {
        Self::with_view(
            index,
            span,
            empty,
            View::Strided {
                data,
                origin,
                offset,
                stride,
                len,
            },
        )
    }

    pub(crate) fn mapped(
        index: i64,
        span: RangeInclusive<i64>,
        empty: &'g C,
        cells: IndexMap<i64, &'g C>,
    ) -> Self {
        Self::with_view(index, span, empty, View::Mapped(cells))
    }

    pub(crate) fn blank(index: i64, span: RangeInclusive<i64>, empty: &'g C) -> Self {
        let line = Self::with_view(index, span, empty, View::Blank);
        let _ = line.all_empty.set(true);
        line
    }

    fn with_view(index: i64, span: RangeInclusive<i64>, empty: &'g C, view: View<'g, C>) -> Self {
        Self {
            index,
            span,
            empty,
            view,
            all_empty: OnceCell::new(),
        }
    }

    /// Row or column number of this line.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Perpendicular coordinates covered by the owning grid's bounds.
    pub fn span(&self) -> RangeInclusive<i64> {
        self.span.clone()
    }

    /// `true` if every cell on the line is the empty value.
    ///
    /// Computed once per view.
    pub fn is_empty(&self) -> bool {
        *self.all_empty.get_or_init(|| match &self.view {
            View::Strided {
                data,
                offset,
                stride,
                len,
                ..
            } => (0..*len).all(|i| data[offset + i * stride] == *self.empty),
            View::Mapped(cells) => cells.values().all(|c| *c == self.empty),
            View::Blank => true,
        })
    }

    /// Cell at perpendicular coordinate `idx`, or the empty value.
    pub fn cell(&self, idx: i64) -> &'g C {
        match self.view {
            View::Strided {
                data,
                origin,
                offset,
                stride,
                len,
            } => {
                let rel = idx - origin;
                if rel >= 0 && (rel as usize) < len {
                    &data[offset + rel as usize * stride]
                } else {
                    self.empty
                }
            }
            View::Mapped(ref cells) => cells.get(&idx).copied().unwrap_or(self.empty),
            View::Blank => self.empty,
        }
    }

    /// Cells across the grid's bounds, in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &'g C> + '_ {
        self.span.clone().map(move |i| self.cell(i))
    }

    /// Cells at coordinates `0..size`, cloned.
    pub fn to_vec(&self, size: i64) -> Vec<C>
    where
        C: Clone,
    {
        (0..size).map(|i| self.cell(i).clone()).collect()
    }
}

impl<C: PartialEq + fmt::Display> fmt::Display for Line<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<C: fmt::Debug> fmt::Debug for Line<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.view {
            View::Strided { .. } => "strided",
            View::Mapped(_) => "mapped",
            View::Blank => "blank",
        };
        f.debug_struct("Line")
            .field("index", &self.index)
            .field("span", &self.span)
            .field("kind", &kind)
            .finish()
    }
}
