//! Realistic callers of the grid engine: a pipe loop, a light beam, and
//! sliding rocks.

use gridfold_core::{Direction, DirectionSet, Position};
use gridfold_grid::{
    fold_connected_by, propagate, render, AnsiColor, BackConnected, CellConnections, Connections,
    CycleMemo, DefaultPainter, GlyphStyle, Grid, Painter, RenderOptions, SparseGrid,
};
use gridfold_test_utils::{
    dense_chars, mirror_grid, pipe_grid, sparse_chars, Pipe, MIRRORS, PIPE_LOOP, ROCKS,
};
use indexmap::{IndexMap, IndexSet};

// ── Pipe loop ───────────────────────────────────────────────────

fn loop_distances() -> IndexMap<Position, u32> {
    let grid = pipe_grid(PIPE_LOOP);
    let start = *grid
        .find_all(&Pipe::Start)
        .first()
        .expect("fixture has a start");
    let connections = BackConnected::new(CellConnections, |c: &Pipe| *c == Pipe::Start);
    let mut best = IndexMap::new();
    fold_connected_by(&grid, &connections, start, 0u32, |pos, hops| {
        if !grid.contains(pos) || best.get(&pos).is_some_and(|&b| b <= hops) {
            return None;
        }
        best.insert(pos, hops);
        Some(hops + 1)
    });
    best
}

#[test]
fn start_cell_connects_to_neighbours_that_point_back() {
    let grid = pipe_grid(PIPE_LOOP);
    let start = Position::new(2, 0);
    let connections = BackConnected::new(CellConnections, |c: &Pipe| *c == Pipe::Start);
    assert_eq!(
        connections.connections(&grid, start, grid.cell(start)),
        DirectionSet::parse("ES").unwrap()
    );
}

#[test]
fn farthest_point_of_loop() {
    let best = loop_distances();
    assert_eq!(best.len(), 16);
    assert_eq!(best.values().max(), Some(&8));
    assert_eq!(best[&Position::new(2, 0)], 0);
}

#[test]
fn loop_renders_with_box_glyphs() {
    let grid = pipe_grid(PIPE_LOOP);
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "┐─┌┐─");
    assert_eq!(lines[2], "S┘└└┐");
    assert_eq!(lines[4], "└┘.└┘");

    let plain = render(
        &grid,
        &DefaultPainter::new(GlyphStyle::Plain),
        &RenderOptions::default(),
    );
    assert_eq!(plain.lines().next(), Some("7-F7-"));
}

struct LoopPainter {
    on_loop: IndexSet<Position>,
}

impl Painter<Pipe> for LoopPainter {
    fn glyph(&self, pos: Position, cell: &Pipe) -> String {
        DefaultPainter::new(GlyphStyle::BoxDrawing).glyph(pos, cell)
    }

    fn fg(&self, pos: Position) -> AnsiColor {
        if self.on_loop.contains(&pos) {
            AnsiColor::Green
        } else {
            AnsiColor::Default
        }
    }
}

#[test]
fn painter_highlights_loop() {
    let grid = pipe_grid(PIPE_LOOP);
    let painter = LoopPainter {
        on_loop: loop_distances().into_keys().collect(),
    };
    let out = render(&grid, &painter, &RenderOptions::colored());
    let first = out.lines().next().unwrap();
    assert_eq!(
        first,
        "┐─\u{1b}[32m┌\u{1b}[39m\u{1b}[32m┐\u{1b}[39m─"
    );
}

// ── Light beam ──────────────────────────────────────────────────

fn energised(start: Position, heading: Direction) -> usize {
    let grid = mirror_grid(MIRRORS);
    let mut seen: IndexMap<Position, DirectionSet> = IndexMap::new();
    propagate(start, heading, |pos, heading| {
        if !grid.contains(pos) {
            return None;
        }
        let headings = seen.entry(pos).or_default();
        if headings.contains(heading) {
            return None;
        }
        headings.insert(heading);
        let out = grid.cell(pos).outgoing(heading);
        Some(out.iter().map(move |d| (pos + d, d)))
    });
    seen.len()
}

#[test]
fn beam_energises_cells() {
    assert_eq!(energised(Position::ZERO, Direction::E), 46);
}

#[test]
fn beam_entering_from_outside_edge() {
    // Best entry of the contraption: down column 3.
    assert_eq!(energised(Position::new(0, 3), Direction::S), 51);
}

// ── Sliding rocks ───────────────────────────────────────────────

fn tilt(grid: &SparseGrid<char>, towards: Direction) -> SparseGrid<char> {
    let bounds = grid.bounds();
    let along_rows = matches!(towards, Direction::E | Direction::W);
    let backwards = matches!(towards, Direction::E | Direction::S);
    let step = if backwards { -1 } else { 1 };
    let at = |index: i64, i: i64| {
        if along_rows {
            Position::new(index, i)
        } else {
            Position::new(i, index)
        }
    };
    let lines = if along_rows {
        bounds.row_range()
    } else {
        bounds.column_range()
    };

    let mut cells = Vec::new();
    for index in lines {
        let line = if along_rows {
            grid.row(index)
        } else {
            grid.column(index)
        };
        let mut span: Vec<i64> = line.span().collect();
        if backwards {
            span.reverse();
        }
        let mut free = span[0];
        for i in span {
            match *line.cell(i) {
                '#' => {
                    cells.push((at(index, i), '#'));
                    free = i + step;
                }
                'O' => {
                    cells.push((at(index, free), 'O'));
                    free += step;
                }
                _ => {}
            }
        }
    }
    SparseGrid::with_bounds(cells, '.', bounds).unwrap()
}

fn spin(grid: &SparseGrid<char>) -> SparseGrid<char> {
    [Direction::N, Direction::W, Direction::S, Direction::E]
        .into_iter()
        .fold(grid.clone(), |g, d| tilt(&g, d))
}

fn north_load(grid: &SparseGrid<char>) -> i64 {
    let height = grid.bounds().height() as i64;
    grid.find_all(&'O').iter().map(|p| height - p.row).sum()
}

#[test]
fn tilting_north() {
    let grid = sparse_chars(ROCKS, '.');
    let tilted = tilt(&grid, Direction::N);
    assert_eq!(north_load(&tilted), 136);
    assert_eq!(tilted.find_all(&'O').len(), grid.find_all(&'O').len());
}

#[test]
fn one_spin_cycle() {
    let after = spin(&sparse_chars(ROCKS, '.'));
    let expected = [
        ".....#....",
        "....#...O#",
        "...OO##...",
        ".OO#......",
        ".....OOO#.",
        ".O#...O#.#",
        "....O#....",
        "......OOOO",
        "#...O###..",
        "#..OO#....",
    ];
    assert_eq!(after, sparse_chars(&expected, '.'));
    assert_eq!(after.to_dense().unwrap(), dense_chars(&expected, '.'));
}

#[test]
fn billion_spins_via_cycle_memo() {
    let mut memo = CycleMemo::new();
    let end = memo.advance(sparse_chars(ROCKS, '.'), 1_000_000_000, spin);
    assert_eq!(north_load(&end), 64);
    let cycle = memo.cycle().expect("rocks settle into a cycle");
    assert_eq!((cycle.start, cycle.period), (3, 7));
}
