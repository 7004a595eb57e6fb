//! Human-readable rendering of grids for debugging.
//!
//! Rendering carries no semantic contract. The default output is one glyph
//! per in-bounds cell, row-major, each row terminated by `'\n'`. A
//! [`Painter`] can replace the glyph of any cell and wrap it in ANSI
//! foreground/background colours.

use crate::cell::GridCell;
use crate::grid::Grid;
use gridfold_core::{Direction, DirectionSet, Position};
use std::fmt;

/// Terminal colours used by [`Painter::fg`] and [`Painter::bg`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
    /// Terminal default; no escape is emitted for it.
    #[default]
    Default,
    /// Reset all attributes.
    Reset,
}

impl AnsiColor {
    fn codes(self) -> (u8, u8) {
        match self {
            Self::Black => (30, 40),
            Self::Red => (31, 41),
            Self::Green => (32, 42),
            Self::Yellow => (33, 43),
            Self::Blue => (34, 44),
            Self::Magenta => (35, 45),
            Self::Cyan => (36, 46),
            Self::White => (37, 47),
            Self::Default => (39, 49),
            Self::Reset => (0, 0),
        }
    }

    /// Escape sequence selecting this colour as foreground.
    pub fn fg_code(self) -> String {
        format!("\u{1b}[{}m", self.codes().0)
    }

    /// Escape sequence selecting this colour as background.
    pub fn bg_code(self) -> String {
        format!("\u{1b}[{}m", self.codes().1)
    }
}

/// How [`DefaultPainter`] draws cells that declare connections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphStyle {
    /// Connected cells become box-drawing characters (`┌`, `─`, `┼`, ...).
    #[default]
    BoxDrawing,
    /// Every cell uses its `Display` output.
    Plain,
}

/// Rendering configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Glyph style for the default painter.
    pub glyphs: GlyphStyle,
    /// Emit ANSI colour escapes from the painter's `fg`/`bg` hooks.
    ///
    /// Default: `false`, so `Display` output is plain text.
    pub colors: bool,
}

impl RenderOptions {
    /// Default colour setting.
    pub const DEFAULT_COLORS: bool = false;

    /// Options with colours switched on.
    pub fn colored() -> Self {
        Self {
            colors: true,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::default(),
            colors: Self::DEFAULT_COLORS,
        }
    }
}

/// Per-cell presentation hooks.
pub trait Painter<C> {
    /// Text drawn for `cell` at `pos`.
    fn glyph(&self, pos: Position, cell: &C) -> String;

    /// Foreground colour at `pos`.
    fn fg(&self, _pos: Position) -> AnsiColor {
        AnsiColor::Default
    }

    /// Background colour at `pos`.
    fn bg(&self, _pos: Position) -> AnsiColor {
        AnsiColor::Default
    }
}

/// Draws a cell's connections as a box-drawing glyph, else its `Display`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPainter {
    style: GlyphStyle,
}

impl DefaultPainter {
    /// Painter using the given glyph style.
    pub fn new(style: GlyphStyle) -> Self {
        Self { style }
    }
}

impl<C: GridCell + fmt::Display> Painter<C> for DefaultPainter {
    fn glyph(&self, _pos: Position, cell: &C) -> String {
        let directions = cell.directions();
        if self.style == GlyphStyle::Plain || directions.is_empty() {
            return cell.to_string();
        }
        box_glyph(directions).map_or_else(|| cell.to_string(), String::from)
    }
}

/// Box-drawing character for a set of cardinal connections.
///
/// Returns `None` for sets containing a diagonal direction. The empty set
/// maps to a space.
pub fn box_glyph(directions: DirectionSet) -> Option<char> {
    use Direction::{E, N, S, W};
    let has = |d| directions.contains(d);
    if directions.iter().any(|d| !d.is_cardinal()) {
        return None;
    }
    let glyph = match (has(N), has(E), has(S), has(W)) {
        (false, false, false, false) => ' ',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╶',
        (false, false, true, false) => '╷',
        (false, false, false, true) => '╴',
        (true, true, false, false) => '└',
        (true, false, true, false) => '│',
        (true, false, false, true) => '┘',
        (false, true, true, false) => '┌',
        (false, true, false, true) => '─',
        (false, false, true, true) => '┐',
        (true, true, true, false) => '├',
        (true, true, false, true) => '┴',
        (true, false, true, true) => '┤',
        (false, true, true, true) => '┬',
        (true, true, true, true) => '┼',
    };
    Some(glyph)
}

/// Render every in-bounds cell of `grid` through `painter`.
pub fn render<G, P>(grid: &G, painter: &P, options: &RenderOptions) -> String
where
    G: Grid,
    P: Painter<G::Cell>,
{
    let bounds = grid.bounds();
    let mut out = String::with_capacity((bounds.width() + 1) * bounds.height());
    for row in bounds.row_range() {
        for column in bounds.column_range() {
            let pos = Position::new(row, column);
            let glyph = painter.glyph(pos, grid.cell(pos));
            if !options.colors {
                out.push_str(&glyph);
                continue;
            }
            let (fg, bg) = (painter.fg(pos), painter.bg(pos));
            if fg != AnsiColor::Default {
                out.push_str(&fg.fg_code());
            }
            if bg != AnsiColor::Default {
                out.push_str(&bg.bg_code());
            }
            out.push_str(&glyph);
            if fg != AnsiColor::Default {
                out.push_str(&AnsiColor::Default.fg_code());
            }
            if bg != AnsiColor::Default {
                out.push_str(&AnsiColor::Default.bg_code());
            }
        }
        out.push('\n');
    }
    out
}
