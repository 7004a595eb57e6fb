//! Benchmark profiles for the Gridfold grid engine.
//!
//! - [`serpentine`]: one connected path snaking through every cell, the
//!   worst case for traversal depth
//! - [`scattered_cells`]: deterministic sparse content for comparing
//!   dense and sparse storage
//! - [`row_entries`]: beams entering every row from both side edges

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridfold_core::{Bounds, Direction, DirectionSet, GridError, Position};
use gridfold_grid::DenseGrid;

/// A `height x width` grid whose cells form a single boustrophedon path
/// from `(0, 0)` to the last cell of the last row.
///
/// Even rows run east, odd rows run west, and each row end drops south.
pub fn serpentine(height: usize, width: usize) -> Result<DenseGrid<DirectionSet>, GridError> {
    let last_row = height as i64 - 1;
    let last_column = width as i64 - 1;
    DenseGrid::from_fn(height, width, DirectionSet::EMPTY, |p| {
        let eastward = p.row % 2 == 0;
        let at_turn = if eastward {
            p.column == last_column
        } else {
            p.column == 0
        };
        match (at_turn, p.row == last_row) {
            (true, true) => DirectionSet::EMPTY,
            (true, false) => DirectionSet::only(Direction::S),
            (false, _) if eastward => DirectionSet::only(Direction::E),
            (false, _) => DirectionSet::only(Direction::W),
        }
    })
}

/// Deterministic non-empty cells covering roughly `permille / 1000` of a
/// `height x width` rectangle. Values are in `1..=3`.
pub fn scattered_cells(height: usize, width: usize, permille: u64, seed: u64) -> Vec<(Position, u8)> {
    let mut state = seed;
    let mut cells = Vec::new();
    for row in 0..height as i64 {
        for column in 0..width as i64 {
            // Knuth MMIX LCG constants.
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let roll = state >> 33;
            if roll % 1000 < permille {
                cells.push((Position::new(row, column), (roll % 3) as u8 + 1));
            }
        }
    }
    cells
}

/// Start positions and headings for beams entering each row of `bounds`
/// from outside: eastward at the west edge, westward at the east edge.
pub fn row_entries(bounds: Bounds) -> Vec<(Position, Direction)> {
    bounds
        .row_range()
        .flat_map(|r| {
            [
                (Position::new(r, bounds.min_column()), Direction::E),
                (Position::new(r, bounds.max_column()), Direction::W),
            ]
        })
        .collect()
}
