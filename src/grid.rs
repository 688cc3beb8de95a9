use std::{fmt, ops};

use itertools::Itertools;
use ndarray::{Array, Array2};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::piece::Piece;


// Snapshot of piece placement. The rules engine owns the position; this is just what it shows.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| self[coord].map(|piece| (coord, piece)))
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[coord_to_index(pos)]
    }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [
        pos.row.to_zero_based() as usize,
        pos.col.to_zero_based() as usize,
    ]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pieces = self
            .pieces()
            .map(|(coord, piece)| format!("{}:{:?}-{:?}", coord, piece.force, piece.kind))
            .join(", ");
        write!(f, "Grid {{{pieces}}}")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::Force;
    use crate::piece::PieceKind;

    #[test]
    fn set_and_get() {
        let mut g = Grid::new();
        g[Coord::A1] = Some(Piece::new(PieceKind::Rook, Force::White));
        g[Coord::H8] = Some(Piece::new(PieceKind::King, Force::Black));
        assert_eq!(g[Coord::A1], Some(Piece::new(PieceKind::Rook, Force::White)));
        assert_eq!(g[Coord::A8], None);
        assert_eq!(g.pieces().count(), 2);
        assert_eq!(format!("{g:?}"), "Grid {a1:White-Rook, h8:Black-King}");
    }
}
