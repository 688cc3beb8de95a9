use itertools::Itertools;

use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};


// These coords describe board squares, like `Coord`, but in the order they are rendered:
// row 0 is the top-most row on screen, which is rank '8' (the board is always shown from
// White's side), and col 0 is the left-most column, which is file 'a'.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DisplayCoord {
    row: u8,
    col: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SquareShade {
    Light,
    Dark,
}

impl DisplayCoord {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < NUM_ROWS && col < NUM_COLS).then_some(DisplayCoord { row, col })
    }

    pub fn row(self) -> u8 { self.row }
    pub fn col(self) -> u8 { self.col }

    // Rendering order: top row first, left to right.
    pub fn all() -> impl Iterator<Item = DisplayCoord> {
        (0..NUM_ROWS).cartesian_product(0..NUM_COLS).map(|(row, col)| DisplayCoord { row, col })
    }

    pub fn shade(self) -> SquareShade {
        if (self.row + self.col) % 2 == 0 { SquareShade::Light } else { SquareShade::Dark }
    }
}

pub fn to_display_coord(coord: Coord) -> DisplayCoord {
    DisplayCoord {
        row: NUM_ROWS - coord.row.to_zero_based() - 1,
        col: coord.col.to_zero_based(),
    }
}

pub fn from_display_coord(q: DisplayCoord) -> Coord {
    Coord::new(Row::from_zero_based(NUM_ROWS - q.row - 1), Col::from_zero_based(q.col))
}

// Square name for the cell at the given grid position: file by column, rank `8 - row`.
pub fn display_notation(q: DisplayCoord) -> String { from_display_coord(q).to_algebraic() }
