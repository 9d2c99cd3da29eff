//! # Rover heading

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Serialize;
use util::maths::{wrap_dec, wrap_inc};

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// One of the four compass headings the rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Direction {
    /// All headings, in clockwise order. A heading's position in this table is its index.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotation index of the heading, N=0 and increasing clockwise.
    pub fn index(&self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Single letter code of the heading.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        }
    }

    /// Look up a heading by its code. The match is case sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.code() == code)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn turn_right(&self) -> Self {
        self.rotate(wrap_inc(self.index(), 1, Self::ALL.len() as u8))
    }

    pub fn turn_left(&self) -> Self {
        self.rotate(wrap_dec(self.index(), 1, Self::ALL.len() as u8))
    }

    fn rotate(&self, index: u8) -> Self {
        // `index` has been wrapped into the table's range
        Self::ALL[index as usize]
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dir(code: &str) -> Direction {
        Direction::from_code(code).unwrap()
    }

    #[test]
    fn test_turn_right() {
        for (start, end) in [("N", "E"), ("E", "S"), ("S", "W"), ("W", "N")].iter() {
            assert_eq!(dir(start).turn_right(), dir(end));
        }
    }

    #[test]
    fn test_turn_left() {
        for (start, end) in [("N", "W"), ("E", "N"), ("S", "E"), ("W", "S")].iter() {
            assert_eq!(dir(start).turn_left(), dir(end));
        }
    }

    #[test]
    fn test_turn_closure() {
        for d in Direction::ALL.iter().copied() {
            let mut r = d;
            let mut l = d;
            for _ in 0..4 {
                r = r.turn_right();
                l = l.turn_left();
            }
            assert_eq!(r, d);
            assert_eq!(l, d);
            assert_eq!(d.turn_right().turn_left(), d);
            assert_eq!(d.turn_left().turn_right(), d);
        }
    }

    #[test]
    fn test_codes_and_indices() {
        for (i, d) in Direction::ALL.iter().copied().enumerate() {
            assert_eq!(d.index() as usize, i);
            assert_eq!(Direction::from_index(i as u8), Some(d));
            assert_eq!(Direction::from_code(d.code()), Some(d));
            assert_eq!(d.to_string(), d.code());
        }

        assert_eq!(Direction::from_index(4), None);
        assert_eq!(Direction::from_code("n"), None);
        assert_eq!(Direction::from_code("North"), None);
        assert_eq!(Direction::from_code(""), None);
    }
}
