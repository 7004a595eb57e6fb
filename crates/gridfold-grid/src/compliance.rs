//! Grid trait compliance test helpers.
//!
//! These functions verify that a Grid implementation satisfies the
//! invariants required by the trait contract. Reused by both storage
//! test modules.

use crate::grid::Grid;
use gridfold_core::Position;
use proptest::prelude::*;
use std::fmt::Debug;

/// Rectangular, non-empty `u8` tables with plenty of zeros.
pub fn arb_table() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(h, w)| {
        prop::collection::vec(prop::collection::vec(prop_oneof![2 => Just(0u8), 1 => 1u8..4], w), h)
    })
}

/// Assert that every position outside the bounds (one ring out) reads empty.
pub fn assert_outside_reads_empty<G: Grid>(grid: &G)
where
    G::Cell: Debug,
{
    let b = grid.bounds();
    let ring = (b.min_row() - 1..=b.max_row() + 1).flat_map(|r| {
        [b.min_column() - 1, b.max_column() + 1]
            .into_iter()
            .map(move |c| Position::new(r, c))
    });
    let caps = (b.min_column()..=b.max_column()).flat_map(|c| {
        [b.min_row() - 1, b.max_row() + 1]
            .into_iter()
            .map(move |r| Position::new(r, c))
    });
    for p in ring.chain(caps) {
        assert_eq!(grid.cell(p), grid.empty(), "cell({p}) outside bounds is not empty");
    }
}

/// Assert that lines just past the bounds are always-empty.
pub fn assert_outside_lines_empty<G: Grid>(grid: &G) {
    let b = grid.bounds();
    for r in [b.min_row() - 1, b.max_row() + 1] {
        assert!(grid.row(r).is_empty(), "row {r} outside bounds is not empty");
    }
    for c in [b.min_column() - 1, b.max_column() + 1] {
        assert!(grid.column(c).is_empty(), "column {c} outside bounds is not empty");
    }
}

/// Assert that line views agree with point lookups.
pub fn assert_lines_match_cells<G: Grid>(grid: &G)
where
    G::Cell: Debug,
{
    for line in grid.rows() {
        for c in grid.bounds().column_range() {
            let p = Position::new(line.index(), c);
            assert_eq!(line.cell(c), grid.cell(p), "row view disagrees at {p}");
        }
        let all_empty = grid
            .bounds()
            .column_range()
            .all(|c| grid.is_empty_at(Position::new(line.index(), c)));
        assert_eq!(line.is_empty(), all_empty, "row {} emptiness", line.index());
    }
    for line in grid.columns() {
        for r in grid.bounds().row_range() {
            let p = Position::new(r, line.index());
            assert_eq!(line.cell(r), grid.cell(p), "column view disagrees at {p}");
        }
    }
}

/// Assert that `find_all` returns the same positions on repeated calls and
/// that every returned position holds the value.
pub fn assert_find_all_idempotent<G: Grid>(grid: &G) {
    let mut values: Vec<G::Cell> = vec![grid.empty().clone()];
    grid.for_each_non_empty(|_, c| {
        if !values.contains(c) {
            values.push(c.clone());
        }
    });
    for v in &values {
        let a = grid.find_all(v);
        let b = grid.find_all(v);
        assert_eq!(a, b, "find_all is non-deterministic");
        for p in &a {
            assert!(grid.contains(*p), "find_all returned {p} outside bounds");
            assert!(grid.cell(*p) == v, "find_all returned {p} with another value");
        }
    }
}

/// Assert that non-empty iteration, counting and `find_all_by` agree.
pub fn assert_counts_consistent<G: Grid>(grid: &G) {
    let mut visited = Vec::new();
    grid.for_each_non_empty(|p, c| {
        assert!(c != grid.empty(), "for_each_non_empty yielded empty at {p}");
        visited.push(p);
    });
    assert_eq!(grid.count_non_empty(|_| true), visited.len());
    let empty = grid.empty().clone();
    assert_eq!(grid.find_all_by(|c| *c != empty).len(), visited.len());
    assert_eq!(
        grid.count_with_empty(|_| true),
        grid.bounds().cell_count(),
        "count_with_empty must cover the bounds"
    );
}

/// Assert that transposing twice restores every cell and the bounds.
pub fn assert_transpose_involution<G: Grid>(grid: &G)
where
    G::Cell: Debug,
{
    let t = grid.transpose();
    assert_eq!(t.bounds(), grid.bounds().transpose());
    let back = t.transpose();
    assert_eq!(back.bounds(), grid.bounds());
    for p in grid.bounds().positions() {
        assert_eq!(t.cell(p.transpose()), grid.cell(p), "transpose moved {p}");
        assert_eq!(back.cell(p), grid.cell(p));
    }
}

/// Run all compliance checks against a grid.
pub fn run_full_compliance<G: Grid>(grid: &G)
where
    G::Cell: Debug,
{
    assert_outside_reads_empty(grid);
    assert_outside_lines_empty(grid);
    assert_lines_match_cells(grid);
    assert_find_all_idempotent(grid);
    assert_counts_consistent(grid);
    assert_transpose_involution(grid);
}
