//! Connectivity traversal driven by a caller-supplied step function.
//!
//! The step function owns all policy: it records per-position state and
//! decides whether expansion continues. The traversal itself keeps no
//! visited set, so a step that never returns `None` on a cyclic graph
//! does not terminate.
//!
//! Expansion uses an explicit LIFO work list. Children are pushed in
//! reverse so they are popped in the order they were produced, which
//! reproduces the visiting order of a depth-first recursive walk without
//! consuming call stack.

use crate::cell::{CellConnections, Connections, GridCell};
use crate::grid::Grid;
use gridfold_core::Position;
use smallvec::SmallVec;

/// Work done by one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoldStats {
    /// Calls made to the step function.
    pub visited: usize,
    /// Calls that returned an update and were expanded.
    pub expanded: usize,
}

/// General work-list traversal.
///
/// Starting from `(start, init)`, each popped `(position, accumulator)`
/// pair is passed to `step`. Returning `None` prunes that branch.
/// Returning `Some(children)` schedules every child pair, each with its
/// own accumulator, depth-first in iteration order.
///
/// # Examples
///
/// ```
/// use gridfold_grid::{propagate, Direction, Position};
///
/// // Walk east while fuel lasts.
/// let mut reached = Vec::new();
/// let stats = propagate(Position::ZERO, 3u32, |pos, fuel| {
///     reached.push(pos);
///     (fuel > 0).then(|| [(pos + Direction::E, fuel - 1)])
/// });
/// assert_eq!(reached.len(), 4);
/// assert_eq!(stats.expanded, 3);
/// ```
pub fn propagate<A, I, F>(start: Position, init: A, mut step: F) -> FoldStats
where
    F: FnMut(Position, A) -> Option<I>,
    I: IntoIterator<Item = (Position, A)>,
{
    let mut stats = FoldStats::default();
    let mut work = vec![(start, init)];
    while let Some((pos, acc)) = work.pop() {
        stats.visited += 1;
        let Some(children) = step(pos, acc) else {
            continue;
        };
        stats.expanded += 1;
        let mark = work.len();
        work.extend(children);
        work[mark..].reverse();
    }
    stats
}

/// Fold over the cells reachable through the connections declared by
/// each cell's [`GridCell::directions`].
///
/// `step(position, accumulator)` is called once per position reached.
/// `Some(next)` continues into every connected neighbour with a clone of
/// `next`; `None` stops expansion there. Neighbours are not filtered by
/// bounds, so positions outside the grid reach the step function with
/// the grid's empty cell; prune them there if needed.
///
/// # Examples
///
/// ```
/// use gridfold_grid::{fold_connected, DenseGrid, DirectionSet, Grid, Position};
/// use std::collections::HashMap;
///
/// let east = DirectionSet::parse("E").unwrap();
/// let g = DenseGrid::new(vec![vec![east, east, DirectionSet::EMPTY]], DirectionSet::EMPTY).unwrap();
/// let mut hops = HashMap::new();
/// fold_connected(&g, Position::ZERO, 0, |pos, n| {
///     if !g.contains(pos) || hops.get(&pos).is_some_and(|&seen| seen <= n) {
///         return None;
///     }
///     hops.insert(pos, n);
///     Some(n + 1)
/// });
/// assert_eq!(hops[&Position::new(0, 2)], 2);
/// ```
pub fn fold_connected<G, A, F>(grid: &G, start: Position, init: A, step: F) -> FoldStats
where
    G: Grid,
    G::Cell: GridCell,
    A: Clone,
    F: FnMut(Position, A) -> Option<A>,
{
    fold_connected_by(grid, &CellConnections, start, init, step)
}

/// [`fold_connected`] with connectivity supplied by `connections`.
pub fn fold_connected_by<G, K, A, F>(
    grid: &G,
    connections: &K,
    start: Position,
    init: A,
    mut step: F,
) -> FoldStats
where
    G: Grid,
    K: Connections<G::Cell>,
    A: Clone,
    F: FnMut(Position, A) -> Option<A>,
{
    let stats = propagate(start, init, |pos, acc| {
        let next = step(pos, acc)?;
        let directions = connections.connections(grid, pos, grid.cell(pos));
        Some(
            directions
                .iter()
                .map(|d| (pos + d, next.clone()))
                .collect::<SmallVec<[(Position, A); 8]>>(),
        )
    });
    log::debug!(
        "connectivity fold from {start}: {} visited, {} expanded",
        stats.visited,
        stats.expanded
    );
    stats
}
