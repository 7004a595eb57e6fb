//! Cell connectivity: what a cell links to, and per-grid overrides.

use crate::grid::Grid;
use gridfold_core::{Direction, DirectionSet, Position};

/// Capability of a cell type to declare its connection directions.
///
/// The default is "connects nowhere", so plain value cells (characters,
/// digits) only need an empty impl. Cell kinds that carry connectivity,
/// such as pipe segments, return their fixed set as data.
///
/// # Examples
///
/// ```
/// use gridfold_grid::{DirectionSet, GridCell};
///
/// #[derive(Clone, PartialEq)]
/// enum Pipe {
///     Segment(DirectionSet),
///     Ground,
/// }
///
/// impl GridCell for Pipe {
///     fn directions(&self) -> DirectionSet {
///         match self {
///             Pipe::Segment(d) => *d,
///             Pipe::Ground => DirectionSet::EMPTY,
///         }
///     }
/// }
///
/// let bend = Pipe::Segment(DirectionSet::parse("NE").unwrap());
/// assert_eq!(bend.directions().len(), 2);
/// assert!(Pipe::Ground.directions().is_empty());
/// ```
pub trait GridCell {
    /// Directions through which this cell connects to a neighbour.
    fn directions(&self) -> DirectionSet {
        DirectionSet::EMPTY
    }
}

macro_rules! unconnected_cells {
    ($($t:ty),* $(,)?) => {
        $(impl GridCell for $t {})*
    };
}

unconnected_cells!(char, bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl GridCell for DirectionSet {
    fn directions(&self) -> DirectionSet {
        *self
    }
}

/// Source of connection directions for a position of a grid.
///
/// Traversals ask this rather than the cell directly, so a caller can
/// substitute context-sensitive connectivity (a start cell whose real
/// links depend on its neighbours) without changing the cell type.
pub trait Connections<C> {
    /// Connection directions of `cell`, which sits at `pos` in `grid`.
    fn connections<G>(&self, grid: &G, pos: Position, cell: &C) -> DirectionSet
    where
        G: Grid<Cell = C>;
}

/// Connectivity declared by the cells themselves via [`GridCell`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CellConnections;

impl<C: GridCell> Connections<C> for CellConnections {
    fn connections<G>(&self, _grid: &G, _pos: Position, cell: &C) -> DirectionSet
    where
        G: Grid<Cell = C>,
    {
        cell.directions()
    }
}

/// Connectivity computed by a closure of `(position, cell)`.
///
/// Built with [`connections_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnConnections<F>(F);

/// Wrap a `(Position, &C) -> DirectionSet` closure as a [`Connections`].
pub fn connections_fn<C, F>(f: F) -> FnConnections<F>
where
    F: Fn(Position, &C) -> DirectionSet,
{
    FnConnections(f)
}

impl<C, F> Connections<C> for FnConnections<F>
where
    F: Fn(Position, &C) -> DirectionSet,
{
    fn connections<G>(&self, _grid: &G, pos: Position, cell: &C) -> DirectionSet
    where
        G: Grid<Cell = C>,
    {
        (self.0)(pos, cell)
    }
}

/// Infers connectivity for selected cells from their neighbours.
///
/// For a cell matching `is_open`, the connections are every direction `d`
/// whose neighbour (under `inner`) connects back through `d.inverse()`.
/// All other cells defer to `inner`. This is the usual treatment of a
/// maze's start marker, which hides the pipe underneath it.
#[derive(Clone, Copy, Debug)]
pub struct BackConnected<K, P> {
    inner: K,
    is_open: P,
}

impl<K, P> BackConnected<K, P> {
    /// Infer connections for cells matching `is_open`, deferring to `inner`.
    pub fn new(inner: K, is_open: P) -> Self {
        Self { inner, is_open }
    }
}

impl<C, K, P> Connections<C> for BackConnected<K, P>
where
    K: Connections<C>,
    P: Fn(&C) -> bool,
{
    fn connections<G>(&self, grid: &G, pos: Position, cell: &C) -> DirectionSet
    where
        G: Grid<Cell = C>,
    {
        if !(self.is_open)(cell) {
            return self.inner.connections(grid, pos, cell);
        }
        Direction::ALL
            .into_iter()
            .filter(|&d| {
                let next = pos + d;
                self.inner
                    .connections(grid, next, grid.cell(next))
                    .contains(d.inverse())
            })
            .collect()
    }
}
