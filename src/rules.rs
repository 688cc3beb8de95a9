// The chess rules are not ours: the controller only talks to them through `RulesEngine`.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::PieceKind;


// Pawns reaching the last rank always become queens: there is no promotion picker.
pub const AUTO_PROMOTION: PieceKind = PieceKind::Queen;

#[derive(Clone, Copy, PartialEq, Eq, Debug, new, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: Coord,
    pub to: Coord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

// The engine's account of a move it has applied. This is sent to the server verbatim, so
// field names follow the move objects other clients expect.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: Force,
    pub piece: PieceKind,
    pub from: Coord,
    pub to: Coord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<PieceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
    // Any combination of: n (normal), b (pawn double push), e (en passant), c (capture),
    // p (promotion), k (king-side castling), q (queen-side castling).
    pub flags: String,
    pub san: String,
    pub lan: String,
    pub before: String,
    pub after: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IllegalMove {
    NoPieceAtOrigin,
    WrongTurn,
    Illegal,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FenError(pub String);

pub trait RulesEngine {
    fn current_board(&self) -> Grid;

    fn turn(&self) -> Force;

    // Validates and applies a move requested by the local user.
    fn apply_move(&mut self, request: &MoveRequest) -> Result<MoveRecord, IllegalMove>;

    // Applies a move that came from the server. A move that does not fit the current position
    // is reported as an error and leaves the position unchanged.
    fn replay_move(&mut self, request: &MoveRequest) -> Result<MoveRecord, IllegalMove>;

    // Replaces the whole position.
    fn load_position(&mut self, fen: &str) -> Result<(), FenError>;

    fn fen(&self) -> String;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_format() {
        let request = MoveRequest::new(Coord::E7, Coord::E8, Some(AUTO_PROMOTION));
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"from":"e7","to":"e8","promotion":"q"}"#
        );
        let request: MoveRequest = serde_json::from_str(r#"{"from":"g1","to":"f3"}"#).unwrap();
        assert_eq!(request, MoveRequest::new(Coord::G1, Coord::F3, None));
    }

    #[test]
    fn request_from_full_move_object() {
        let json = r#"{
            "color": "w", "piece": "p", "from": "e2", "to": "e4", "flags": "b", "san": "e4",
            "lan": "e2e4", "before": "x", "after": "y"
        }"#;
        let request: MoveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, MoveRequest::new(Coord::E2, Coord::E4, None));
        let record: MoveRecord = serde_json::from_str(json).unwrap();
        assert_eq!((record.from, record.to), (request.from, request.to));
        assert_eq!(record.captured, None);
    }
}
