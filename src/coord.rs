use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Rank, counted from White's side: row 0 is rank '1'.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        ('1'..='8').contains(&ch).then(|| Self::from_zero_based(ch as u8 - b'1'))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}


// File: col 0 is file 'a'.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        ('a'..='h').contains(&ch).then(|| Self::from_zero_based(ch as u8 - b'a'))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}


// A square in notation form. This is what the rules engine and the wire speak.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (file, rank) = s.chars().collect_tuple()?;
        Some(Coord {
            row: Row::from_algebraic(rank)?,
            col: Col::from_algebraic(file)?,
        })
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}{})", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_algebraic())
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Coord::from_algebraic(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid square: \"{s}\"")))
    }
}


impl Row {
    #![allow(dead_code)]
    pub const _1: Row = Row::from_zero_based(0);
    pub const _2: Row = Row::from_zero_based(1);
    pub const _3: Row = Row::from_zero_based(2);
    pub const _4: Row = Row::from_zero_based(3);
    pub const _5: Row = Row::from_zero_based(4);
    pub const _6: Row = Row::from_zero_based(5);
    pub const _7: Row = Row::from_zero_based(6);
    pub const _8: Row = Row::from_zero_based(7);
}

impl Col {
    #![allow(dead_code)]
    pub const A: Col = Col::from_zero_based(0);
    pub const B: Col = Col::from_zero_based(1);
    pub const C: Col = Col::from_zero_based(2);
    pub const D: Col = Col::from_zero_based(3);
    pub const E: Col = Col::from_zero_based(4);
    pub const F: Col = Col::from_zero_based(5);
    pub const G: Col = Col::from_zero_based(6);
    pub const H: Col = Col::from_zero_based(7);
}

macro_rules! file_coords {
    ($col:ident: $($name:ident),*) => {
        impl Coord {
            #![allow(dead_code)]
            file_coords!(@rows $col; [_1, _2, _3, _4, _5, _6, _7, _8]; $($name),*);
        }
    };
    (@rows $col:ident; [$($row:ident),*]; $($name:ident),*) => {
        $(pub const $name: Coord = Coord::new(Row::$row, Col::$col);)*
    };
}

file_coords!(A: A1, A2, A3, A4, A5, A6, A7, A8);
file_coords!(B: B1, B2, B3, B4, B5, B6, B7, B8);
file_coords!(C: C1, C2, C3, C4, C5, C6, C7, C8);
file_coords!(D: D1, D2, D3, D4, D5, D6, D7, D8);
file_coords!(E: E1, E2, E3, E4, E5, E6, E7, E8);
file_coords!(F: F1, F2, F3, F4, F5, F6, F7, F8);
file_coords!(G: G1, G2, G3, G4, G5, G6, G7, G8);
file_coords!(H: H1, H2, H3, H4, H5, H6, H7, H8);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic() {
        assert_eq!(Coord::from_algebraic("e4"), Some(Coord::E4));
        assert_eq!(Coord::from_algebraic("a1"), Some(Coord::A1));
        assert_eq!(Coord::from_algebraic("h8"), Some(Coord::H8));
        assert_eq!(Coord::E4.to_algebraic(), "e4");
        assert_eq!(Coord::from_algebraic("e9"), None);
        assert_eq!(Coord::from_algebraic("i1"), None);
        assert_eq!(Coord::from_algebraic("e"), None);
        assert_eq!(Coord::from_algebraic("e44"), None);
        assert_eq!(Coord::from_algebraic("E4"), None);
    }

    #[test]
    fn all_coords_are_distinct() {
        let all: std::collections::HashSet<_> = Coord::all().collect();
        assert_eq!(all.len(), 64);
    }

    #[test]
    fn serde_as_string() {
        assert_eq!(serde_json::to_string(&Coord::G1).unwrap(), r#""g1""#);
        assert_eq!(serde_json::from_str::<Coord>(r#""c7""#).unwrap(), Coord::C7);
        assert!(serde_json::from_str::<Coord>(r#""z0""#).is_err());
    }
}
