//! Gridfold: a two-dimensional grid engine for graph and simulation puzzles.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Gridfold sub-crates. For most users, adding `gridfold` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridfold::prelude::*;
//! use std::collections::HashMap;
//!
//! // Pipes: every cell connects east and south, the corner connects nowhere.
//! let es = DirectionSet::parse("ES").unwrap();
//! let grid = DenseGrid::from_fn(3, 3, DirectionSet::EMPTY, |p| {
//!     if p == Position::new(2, 2) { DirectionSet::EMPTY } else { es }
//! })
//! .unwrap();
//!
//! // Label each cell with its hop count from the top-left corner.
//! let mut hops = HashMap::new();
//! let stats = fold_connected(&grid, Position::ZERO, 0, |pos, n| {
//!     if !grid.contains(pos) || hops.get(&pos).is_some_and(|&seen| seen <= n) {
//!         return None;
//!     }
//!     hops.insert(pos, n);
//!     Some(n + 1)
//! });
//! assert_eq!(hops[&Position::new(2, 2)], 4);
//! assert_eq!(stats.expanded, 9);
//!
//! // The same content in sparse storage answers identically.
//! let sparse = grid.to_sparse();
//! assert_eq!(sparse.cell(Position::new(1, 1)), grid.cell(Position::new(1, 1)));
//! assert!(sparse.row(7).is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridfold-core` | Positions, directions, bounds, errors |
//! | [`grid`] | `gridfold-grid` | Grid trait, storage, lines, traversal, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate value types (`gridfold-core`).
///
/// [`types::Position`], [`types::Direction`], [`types::DirectionSet`],
/// [`types::Bounds`] and the [`types::GridError`] taxonomy.
pub use gridfold_core as types;

/// Grid storage and traversal (`gridfold-grid`).
///
/// The [`grid::Grid`] trait with [`grid::DenseGrid`] and
/// [`grid::SparseGrid`], connectivity folds, the cycle memo, and
/// debug rendering.
pub use gridfold_grid as grid;

/// Common imports for typical Gridfold usage.
///
/// ```rust
/// use gridfold::prelude::*;
/// ```
pub mod prelude {
    // Coordinates
    pub use gridfold_core::{Bounds, Direction, DirectionSet, GridError, Position};

    // Storage
    pub use gridfold_grid::{DenseGrid, Grid, GridCell, Line, SparseGrid};

    // Traversal
    pub use gridfold_grid::{
        fold_connected, fold_connected_by, propagate, BackConnected, CellConnections, Connections,
        CycleMemo, FoldStats,
    };

    // Rendering
    pub use gridfold_grid::{AnsiColor, Painter, RenderOptions};
}
