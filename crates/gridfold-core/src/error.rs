//! Error types for grid construction.
//!
//! Only construction can fail. Lookups (`cell`, `row`, `column`) are total
//! and return the grid's empty value instead of an error.

use crate::bounds::Bounds;
use crate::position::Position;
use std::fmt;

/// Precondition violations raised while building bounds or grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dense table has rows of differing lengths.
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Width established by row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A dense table has no rows or no columns.
    EmptyTable,
    /// Bounds were requested for an empty coordinate set.
    EmptyCellSet,
    /// A cell lies outside explicitly supplied bounds.
    CellOutOfBounds {
        /// The offending cell position.
        position: Position,
        /// The bounds it was checked against.
        bounds: Bounds,
    },
    /// A direction symbol could not be parsed.
    UnknownDirection {
        /// The unrecognised input.
        symbol: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has length {found}, expected {expected}"),
            Self::EmptyTable => write!(f, "table must have at least one row and one column"),
            Self::EmptyCellSet => {
                write!(f, "cannot detect bounds of an empty coordinate set")
            }
            Self::CellOutOfBounds { position, bounds } => {
                write!(f, "cell {position} lies outside bounds {bounds}")
            }
            Self::UnknownDirection { symbol } => write!(f, "unknown direction '{symbol}'"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ragged_rows() {
        let err = GridError::RaggedRows {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has length 3, expected 4");
    }

    #[test]
    fn display_out_of_bounds_mentions_both_sides() {
        let err = GridError::CellOutOfBounds {
            position: Position::new(5, -1),
            bounds: Bounds::fixed(3, 3),
        };
        let msg = err.to_string();
        assert!(msg.contains("(5,-1)"), "{msg}");
        assert!(msg.contains("[0..=2] x [0..=2]"), "{msg}");
    }
}
