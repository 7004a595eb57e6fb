//! The eight compass directions and compact sets of them.

use crate::error::GridError;
use crate::position::Position;
use std::fmt;

/// One of the eight compass directions.
///
/// Rows grow southwards, so [`Direction::N`] has delta `(-1, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North, `(-1, 0)`.
    N,
    /// East, `(0, +1)`.
    E,
    /// South, `(+1, 0)`.
    S,
    /// West, `(0, -1)`.
    W,
    /// North-east, `(-1, +1)`.
    NE,
    /// South-east, `(+1, +1)`.
    SE,
    /// North-west, `(-1, -1)`.
    NW,
    /// South-west, `(+1, -1)`.
    SW,
}

impl Direction {
    /// All eight directions, cardinal first.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::E,
        Direction::S,
        Direction::W,
        Direction::NE,
        Direction::SE,
        Direction::NW,
        Direction::SW,
    ];

    /// The four axis-aligned directions in clockwise order.
    pub const CARDINAL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Unit step for this direction.
    pub const fn delta(self) -> Position {
        match self {
            Self::N => Position::new(-1, 0),
            Self::E => Position::new(0, 1),
            Self::S => Position::new(1, 0),
            Self::W => Position::new(0, -1),
            Self::NE => Position::new(-1, 1),
            Self::SE => Position::new(1, 1),
            Self::NW => Position::new(-1, -1),
            Self::SW => Position::new(1, -1),
        }
    }

    /// The direction pointing the opposite way.
    pub const fn inverse(self) -> Direction {
        match self {
            Self::N => Self::S,
            Self::E => Self::W,
            Self::S => Self::N,
            Self::W => Self::E,
            Self::NE => Self::SW,
            Self::SE => Self::NW,
            Self::NW => Self::SE,
            Self::SW => Self::NE,
        }
    }

    /// Quarter turn clockwise.
    pub const fn rotate_cw(self) -> Direction {
        match self {
            Self::N => Self::E,
            Self::E => Self::S,
            Self::S => Self::W,
            Self::W => Self::N,
            Self::NE => Self::SE,
            Self::SE => Self::SW,
            Self::SW => Self::NW,
            Self::NW => Self::NE,
        }
    }

    /// Quarter turn counter-clockwise.
    pub const fn rotate_ccw(self) -> Direction {
        // Three clockwise quarter turns.
        self.rotate_cw().rotate_cw().rotate_cw()
    }

    /// `true` for N, E, S and W.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::N | Self::E | Self::S | Self::W)
    }

    /// Compass symbol, e.g. `"NE"`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::E => "E",
            Self::S => "S",
            Self::W => "W",
            Self::NE => "NE",
            Self::SE => "SE",
            Self::NW => "NW",
            Self::SW => "SW",
        }
    }

    /// Parse a compass symbol (`"N"`, `"SE"`, ...).
    pub fn from_symbol(symbol: &str) -> Result<Direction, GridError> {
        Self::ALL
            .into_iter()
            .find(|d| d.symbol() == symbol)
            .ok_or_else(|| GridError::UnknownDirection {
                symbol: symbol.to_string(),
            })
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A set of [`Direction`]s packed into one byte.
///
/// Iteration order is fixed: N, E, S, W, NE, SE, NW, SW. Traversals
/// expand neighbours in this order, which keeps them deterministic.
///
/// # Examples
///
/// ```
/// use gridfold_core::{Direction, DirectionSet};
///
/// let bend = DirectionSet::parse("SE").unwrap();
/// assert!(bend.contains(Direction::S));
/// assert!(bend.contains(Direction::E));
/// assert_eq!(bend.iter().collect::<Vec<_>>(), vec![Direction::E, Direction::S]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// No directions.
    pub const EMPTY: DirectionSet = DirectionSet(0);

    /// All eight directions.
    pub const ALL: DirectionSet = DirectionSet(u8::MAX);

    /// N, E, S and W.
    pub const CARDINAL: DirectionSet = DirectionSet(0b1111);

    /// A set holding exactly `d`.
    pub const fn only(d: Direction) -> Self {
        Self(d.bit())
    }

    /// Parse a string of cardinal letters such as `"NS"` or `"EW"`.
    ///
    /// Each character is one of `N`, `E`, `S`, `W`. Order and repetition
    /// do not matter; the empty string yields the empty set.
    pub fn parse(letters: &str) -> Result<Self, GridError> {
        let mut set = Self::EMPTY;
        for ch in letters.chars() {
            let d = match ch {
                'N' => Direction::N,
                'E' => Direction::E,
                'S' => Direction::S,
                'W' => Direction::W,
                other => {
                    return Err(GridError::UnknownDirection {
                        symbol: other.to_string(),
                    })
                }
            };
            set.insert(d);
        }
        Ok(set)
    }

    /// `true` if `d` is in the set.
    pub const fn contains(self, d: Direction) -> bool {
        self.0 & d.bit() != 0
    }

    /// Add `d` to the set.
    pub fn insert(&mut self, d: Direction) {
        self.0 |= d.bit();
    }

    /// Remove `d` from the set.
    pub fn remove(&mut self, d: Direction) {
        self.0 &= !d.bit();
    }

    /// A copy of the set with `d` added.
    pub const fn with(self, d: Direction) -> Self {
        Self(self.0 | d.bit())
    }

    /// Directions in either set.
    pub const fn union(self, other: DirectionSet) -> Self {
        Self(self.0 | other.0)
    }

    /// Directions in both sets.
    pub const fn intersection(self, other: DirectionSet) -> Self {
        Self(self.0 & other.0)
    }

    /// Number of directions in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// `true` if the set holds no direction.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in N, E, S, W, NE, SE, NW, SW order.
    pub fn iter(self) -> DirectionIter {
        DirectionIter { set: self, next: 0 }
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<Direction> for DirectionSet {
    fn from(d: Direction) -> Self {
        Self::only(d)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl Extend<Direction> for DirectionSet {
    fn extend<I: IntoIterator<Item = Direction>>(&mut self, iter: I) {
        for d in iter {
            self.insert(d);
        }
    }
}

impl IntoIterator for DirectionSet {
    type Item = Direction;
    type IntoIter = DirectionIter;

    fn into_iter(self) -> DirectionIter {
        self.iter()
    }
}

/// Iterator over the members of a [`DirectionSet`].
#[derive(Clone, Debug)]
pub struct DirectionIter {
    set: DirectionSet,
    next: usize,
}

impl Iterator for DirectionIter {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        while self.next < Direction::ALL.len() {
            let d = Direction::ALL[self.next];
            self.next += 1;
            if self.set.contains(d) {
                return Some(d);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_involution_and_opposite() {
        for d in Direction::ALL {
            assert_eq!(d.inverse().inverse(), d);
            assert_eq!(d.delta() + d.inverse().delta(), Position::ZERO);
        }
    }

    #[test]
    fn deltas_are_unit_steps() {
        for d in Direction::ALL {
            let delta = d.delta();
            assert!(delta.row.abs() <= 1 && delta.column.abs() <= 1);
            assert_ne!(delta, Position::ZERO);
            assert_eq!(d.is_cardinal(), delta.manhattan_distance(Position::ZERO) == 1);
        }
    }

    #[test]
    fn rotation_cycles_in_four_steps() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), d);
            assert_eq!(d.rotate_cw().rotate_ccw(), d);
            assert_eq!(d.rotate_cw().rotate_cw(), d.inverse());
            assert_eq!(d.rotate_cw().is_cardinal(), d.is_cardinal());
        }
        assert_eq!(Direction::N.rotate_cw(), Direction::E);
        assert_eq!(Direction::N.rotate_ccw(), Direction::W);
    }

    #[test]
    fn symbols_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_symbol(d.symbol()), Ok(d));
        }
        assert!(matches!(
            Direction::from_symbol("X"),
            Err(GridError::UnknownDirection { .. })
        ));
    }

    #[test]
    fn set_operations() {
        let mut set = DirectionSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Direction::W);
        set.insert(Direction::N);
        set.insert(Direction::W);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::N, Direction::W]);
        set.remove(Direction::N);
        assert_eq!(set, DirectionSet::only(Direction::W));
        assert_eq!(DirectionSet::ALL.len(), 8);
        assert_eq!(DirectionSet::CARDINAL.iter().collect::<Vec<_>>(), Direction::CARDINAL);
        assert_eq!(
            DirectionSet::only(Direction::N).union(Direction::S.into()),
            DirectionSet::parse("NS").unwrap()
        );
    }

    #[test]
    fn parse_rejects_non_cardinal_letters() {
        assert_eq!(DirectionSet::parse(""), Ok(DirectionSet::EMPTY));
        assert_eq!(
            DirectionSet::parse("NX"),
            Err(GridError::UnknownDirection {
                symbol: "X".to_string()
            })
        );
    }

    #[test]
    fn debug_lists_members() {
        assert_eq!(format!("{:?}", DirectionSet::parse("WE").unwrap()), "{E, W}");
    }
}
