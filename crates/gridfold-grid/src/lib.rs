//! Grid storage and traversal for Gridfold.
//!
//! This crate defines the [`Grid`] trait, the common read-only contract
//! through which puzzle logic queries cells, scans lines, and walks
//! connectivity, along with its two storage strategies.
//!
//! # Storage
//!
//! - [`DenseGrid`]: complete row-major table, O(1) lookup, zero-based bounds
//! - [`SparseGrid`]: map of non-empty cells, explicit or detected bounds
//!
//! Both strategies return identical results for identical logical content;
//! the choice is a memory/iteration trade-off only.
//!
//! # Traversal
//!
//! [`fold_connected`] walks the connection directions declared by each cell
//! ([`GridCell`]) or by a [`Connections`] override, letting a step function
//! update and prune per-position state. [`propagate`] is the underlying
//! work-list primitive.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod cycle;
pub mod dense;
pub mod grid;
pub mod line;
pub mod render;
pub mod sparse;
pub mod traverse;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::{connections_fn, BackConnected, CellConnections, Connections, FnConnections, GridCell};
pub use cycle::{Cycle, CycleMemo};
pub use dense::DenseGrid;
pub use grid::Grid;
pub use line::Line;
pub use render::{box_glyph, render, AnsiColor, DefaultPainter, GlyphStyle, Painter, RenderOptions};
pub use sparse::SparseGrid;
pub use traverse::{fold_connected, fold_connected_by, propagate, FoldStats};

pub use gridfold_core::{Bounds, Direction, DirectionSet, GridError, Position};
