use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "p")]
    Pawn,
    #[serde(rename = "n")]
    Knight,
    #[serde(rename = "b")]
    Bishop,
    #[serde(rename = "r")]
    Rook,
    #[serde(rename = "q")]
    Queen,
    #[serde(rename = "k")]
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub force: Force,
}

impl PieceKind {
    // Lower-case letter used by the wire format and by FEN for black pieces.
    pub fn to_wire(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

pub fn piece_to_pictogram(piece: Piece) -> char {
    use self::Force::*;
    use self::PieceKind::*;
    match (piece.force, piece.kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_piece_has_distinct_pictogram() {
        let pictograms: HashSet<char> = Force::iter()
            .cartesian_product(PieceKind::iter())
            .map(|(force, kind)| piece_to_pictogram(Piece::new(kind, force)))
            .collect();
        assert_eq!(pictograms.len(), 12);
    }

    #[test]
    fn wire_letters() {
        for kind in PieceKind::iter() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.to_wire()));
        }
        assert_eq!(serde_json::from_str::<PieceKind>(r#""q""#).unwrap(), PieceKind::Queen);
        assert!(serde_json::from_str::<PieceKind>(r#""Q""#).is_err());
    }
}
