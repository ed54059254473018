//! Compass directions and the offsets a word path may step along.

use std::{collections::HashSet, fmt::Display, str::FromStr};

/// One of the eight compass directions a path can step in.
///
/// North points towards row 0, east towards higher column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up one row.
    N,

    /// Up one row and right one column.
    NE,

    /// Right one column.
    E,

    /// Down one row and right one column.
    SE,

    /// Down one row.
    S,

    /// Down one row and left one column.
    SW,

    /// Left one column.
    W,

    /// Up one row and left one column.
    NW,
}

impl Direction {
    /// Every direction, in clockwise order starting from [Direction::N].
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// The coordinate delta of one step in this direction.
    pub fn offset(self) -> Offset {
        use Direction::*;

        let (dx, dy) = match self {
            N => (0, -1),
            NE => (1, -1),
            E => (1, 0),
            SE => (1, 1),
            S => (0, 1),
            SW => (-1, 1),
            W => (-1, 0),
            NW => (-1, -1),
        };

        Offset { dx, dy }
    }

    /// The compass label of this direction, e.g. `"NE"`.
    pub fn label(self) -> &'static str {
        use Direction::*;

        match self {
            N => "N",
            NE => "NE",
            E => "E",
            SE => "SE",
            S => "S",
            SW => "SW",
            W => "W",
            NW => "NW",
        }
    }

    /// Looks up a direction by its compass label. Labels are matched exactly (`"N"`, `"NE"`, ...).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.label() == label)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the eight compass labels.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction label \"{0}\"")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// A single step on the grid: `dx` moves across columns, `dy` across rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Column delta, one of -1, 0 or 1.
    pub dx: isize,

    /// Row delta, one of -1, 0 or 1.
    pub dy: isize,
}

impl Offset {
    /// The offset pointing the opposite way.
    pub fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Whether this offset moves diagonally.
    pub fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// Turns the allowed directions into the set of offsets a path may step along.
///
/// Every direction also admits its opposite, so asking for only [Direction::E] lets a path step west as well.
/// Duplicates are dropped while keeping first-seen order. If nothing is left, all eight directions are used.
pub fn resolve_offsets(directions: &[Direction]) -> Vec<Offset> {
    let mut seen = HashSet::new();
    let mut offsets = Vec::with_capacity(8);

    for offset in directions.iter().map(|direction| direction.offset()) {
        for candidate in [offset, offset.reversed()] {
            if candidate.dx == 0 && candidate.dy == 0 {
                continue;
            }

            if seen.insert(candidate) {
                offsets.push(candidate);
            }
        }
    }

    if offsets.is_empty() {
        return Direction::ALL.iter().map(|direction| direction.offset()).collect();
    }

    offsets
}

/// Parses compass labels, silently skipping any that aren't recognized.
pub fn resolve_labels<S: AsRef<str>>(labels: &[S]) -> Vec<Direction> {
    labels
        .iter()
        .filter_map(|label| {
            let direction = Direction::from_label(label.as_ref().trim());

            if direction.is_none() {
                log::debug!("ignoring unknown direction label {:?}", label.as_ref());
            }

            direction
        })
        .collect()
}
