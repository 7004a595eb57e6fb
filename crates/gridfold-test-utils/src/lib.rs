//! Test fixtures and cell types for Gridfold development.
//!
//! Provides small cell types modelled on the puzzles the grid engine is
//! used for ([`Pipe`] segments, beam [`Mirror`]s) and builders that turn
//! character rows into dense or sparse grids.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;

use gridfold_core::{Direction, DirectionSet};
use gridfold_grid::{DenseGrid, GridCell, SparseGrid};

/// Closed loop with a start marker and some stray pipes.
///
/// The loop is 16 cells long, so its farthest point is 8 steps away.
pub const PIPE_LOOP: &[&str] = &[
    "7-F7-", //
    ".FJ|7", //
    "SJLL7", //
    "|F--J", //
    "LJ.LJ",
];

/// Mirror contraption; an east-bound beam from the top-left energises 46 cells.
pub const MIRRORS: &[&str] = &[
    ".|...\\....",
    "|.-.\\.....",
    ".....|-...",
    "........|.",
    "..........",
    ".........\\",
    "..../.\\\\..",
    ".-.-/..|..",
    ".|....-|.\\",
    "..//.|....",
];

/// Round (`O`) and cube (`#`) rocks on an open platform.
pub const ROCKS: &[&str] = &[
    "O....#....",
    "O.OO#....#",
    ".....##...",
    "OO.#O....O",
    ".O.....O#.",
    "O.#..O.#.#",
    "..O..#O..O",
    ".......O..",
    "#....###..",
    "#OO..#....",
];

/// One cell of a pipe maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// A segment joining two neighbours.
    Segment(DirectionSet),
    /// No pipe.
    Ground,
    /// The start marker, hiding the segment underneath it.
    Start,
}

impl Pipe {
    /// Parse a maze character (`| - L J 7 F . S`).
    pub fn from_char(c: char) -> Option<Pipe> {
        let letters = match c {
            '.' => return Some(Pipe::Ground),
            'S' => return Some(Pipe::Start),
            '|' => "NS",
            '-' => "EW",
            'L' => "NE",
            'J' => "NW",
            '7' => "SW",
            'F' => "ES",
            _ => return None,
        };
        DirectionSet::parse(letters).ok().map(Pipe::Segment)
    }
}

impl GridCell for Pipe {
    fn directions(&self) -> DirectionSet {
        match self {
            Pipe::Segment(d) => *d,
            Pipe::Ground | Pipe::Start => DirectionSet::EMPTY,
        }
    }
}

impl fmt::Display for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pipe::Ground => f.write_str("."),
            Pipe::Start => f.write_str("S"),
            Pipe::Segment(d) => {
                let c = match d.iter().map(Direction::symbol).collect::<String>().as_str() {
                    "NS" => '|',
                    "EW" => '-',
                    "NE" => 'L',
                    "NW" => 'J',
                    "SW" => '7',
                    "ES" => 'F',
                    _ => '?',
                };
                write!(f, "{c}")
            }
        }
    }
}

/// One cell of a beam contraption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mirror {
    /// `.`: beams pass straight through.
    Open,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `|`: splits east/west beams north and south.
    SplitVertical,
    /// `-`: splits north/south beams east and west.
    SplitHorizontal,
}

impl Mirror {
    /// Parse a contraption character.
    pub fn from_char(c: char) -> Option<Mirror> {
        Some(match c {
            '.' => Mirror::Open,
            '/' => Mirror::Slash,
            '\\' => Mirror::Backslash,
            '|' => Mirror::SplitVertical,
            '-' => Mirror::SplitHorizontal,
            _ => return None,
        })
    }

    /// Directions a beam leaves this cell in, given the direction it is
    /// travelling when it enters.
    pub fn outgoing(self, heading: Direction) -> DirectionSet {
        use Direction::{E, N, S, W};
        match (self, heading) {
            (Mirror::Slash, E) | (Mirror::Backslash, W) => DirectionSet::only(N),
            (Mirror::Slash, N) | (Mirror::Backslash, S) => DirectionSet::only(E),
            (Mirror::Slash, W) | (Mirror::Backslash, E) => DirectionSet::only(S),
            (Mirror::Slash, S) | (Mirror::Backslash, N) => DirectionSet::only(W),
            (Mirror::SplitVertical, E | W) => DirectionSet::only(N).with(S),
            (Mirror::SplitHorizontal, N | S) => DirectionSet::only(E).with(W),
            _ => DirectionSet::only(heading),
        }
    }
}

impl GridCell for Mirror {}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Mirror::Open => '.',
            Mirror::Slash => '/',
            Mirror::Backslash => '\\',
            Mirror::SplitVertical => '|',
            Mirror::SplitHorizontal => '-',
        };
        write!(f, "{c}")
    }
}

/// Split string rows into character rows.
pub fn char_rows(rows: &[&str]) -> Vec<Vec<char>> {
    rows.iter().map(|r| r.chars().collect()).collect()
}

/// Dense character grid; panics on ragged input.
pub fn dense_chars(rows: &[&str], empty: char) -> DenseGrid<char> {
    DenseGrid::new(char_rows(rows), empty).expect("fixture rows must be rectangular")
}

/// Sparse character grid with bounds fixed to the rows.
pub fn sparse_chars(rows: &[&str], empty: char) -> SparseGrid<char> {
    SparseGrid::from_rows(char_rows(rows), empty).expect("fixture must have rows")
}

/// Pipe maze with [`Pipe::Ground`] as the empty value.
pub fn pipe_grid(rows: &[&str]) -> DenseGrid<Pipe> {
    let table = rows
        .iter()
        .map(|r| {
            r.chars()
                .map(|c| Pipe::from_char(c).unwrap_or(Pipe::Ground))
                .collect()
        })
        .collect();
    DenseGrid::new(table, Pipe::Ground).expect("fixture rows must be rectangular")
}

/// Beam contraption with [`Mirror::Open`] as the empty value.
pub fn mirror_grid(rows: &[&str]) -> DenseGrid<Mirror> {
    let table = rows
        .iter()
        .map(|r| {
            r.chars()
                .map(|c| Mirror::from_char(c).unwrap_or(Mirror::Open))
                .collect()
        })
        .collect();
    DenseGrid::new(table, Mirror::Open).expect("fixture rows must be rectangular")
}
