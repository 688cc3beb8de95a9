use log::debug;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role, Square};

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind};
use crate::rules::{AUTO_PROMOTION, FenError, IllegalMove, MoveRecord, MoveRequest, RulesEngine};


// `RulesEngine` backed by the `shakmaty` move generator. Standard chess, standard castling.
#[derive(Clone, Debug, Default)]
pub struct ShakmatyEngine {
    position: Chess,
}

impl ShakmatyEngine {
    pub fn new() -> Self { Self::default() }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(ShakmatyEngine { position: parse_fen(fen)? })
    }

    fn find_move(&self, request: &MoveRequest) -> Result<Move, IllegalMove> {
        let from = to_square(request.from);
        let to = to_square(request.to);
        let turn = self.position.turn();
        let piece = self.position.board().piece_at(from).ok_or(IllegalMove::NoPieceAtOrigin)?;
        if piece.color != turn {
            return Err(IllegalMove::WrongTurn);
        }
        let promotion = to_role(request.promotion.unwrap_or(AUTO_PROMOTION));
        self.position
            .legal_moves()
            .into_iter()
            .find(|m| {
                m.from() == Some(from)
                    && destination(m, turn) == to
                    && m.promotion().is_none_or(|role| role == promotion)
            })
            .ok_or(IllegalMove::Illegal)
    }

    fn play(&mut self, request: &MoveRequest) -> Result<MoveRecord, IllegalMove> {
        let m = self.find_move(request)?;
        let color = from_color(self.position.turn());
        let before = self.fen();
        let mut next = self.position.clone();
        let san = SanPlus::from_move_and_play_unchecked(&mut next, &m).to_string();
        self.position = next;
        let promotion = m.promotion().map(from_role);
        let mut lan = format!("{}{}", request.from, request.to);
        if let Some(kind) = promotion {
            lan.push(kind.to_wire());
        }
        Ok(MoveRecord {
            color,
            piece: from_role(m.role()),
            from: request.from,
            to: request.to,
            captured: m.capture().map(from_role),
            promotion,
            flags: move_flags(&m),
            san,
            lan,
            before,
            after: self.fen(),
        })
    }
}

impl RulesEngine for ShakmatyEngine {
    fn current_board(&self) -> Grid {
        let board = self.position.board();
        let mut grid = Grid::new();
        for coord in Coord::all() {
            grid[coord] = board.piece_at(to_square(coord)).map(|piece| {
                Piece::new(from_role(piece.role), from_color(piece.color))
            });
        }
        grid
    }

    fn turn(&self) -> Force { from_color(self.position.turn()) }

    fn apply_move(&mut self, request: &MoveRequest) -> Result<MoveRecord, IllegalMove> {
        self.play(request)
    }

    fn replay_move(&mut self, request: &MoveRequest) -> Result<MoveRecord, IllegalMove> {
        let record = self.play(request)?;
        debug!("Replayed {} ({})", record.san, record.lan);
        Ok(record)
    }

    fn load_position(&mut self, fen: &str) -> Result<(), FenError> {
        self.position = parse_fen(fen)?;
        Ok(())
    }

    fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }
}

fn parse_fen(fen: &str) -> Result<Chess, FenError> {
    let fen: Fen = fen.trim().parse().map_err(|err| FenError(format!("{err}: \"{fen}\"")))?;
    fen.into_position(CastlingMode::Standard).map_err(|err| FenError(err.to_string()))
}

// Where the king lands for castling (shakmaty encodes castling as "king takes rook");
// the target square for everything else.
fn destination(m: &Move, turn: Color) -> Square {
    match m.castling_side() {
        Some(side) => side.king_to(turn),
        None => m.to(),
    }
}

fn move_flags(m: &Move) -> String {
    let mut flags = String::new();
    if m.is_capture() && !m.is_en_passant() {
        flags.push('c');
    }
    if let Some(from) = m.from() {
        let rank_delta = (from as i32 / 8 - m.to() as i32 / 8).abs();
        if m.role() == Role::Pawn && rank_delta == 2 {
            flags.push('b');
        }
    }
    if m.is_en_passant() {
        flags.push('e');
    }
    if m.is_promotion() {
        flags.push('p');
    }
    match m.castling_side() {
        Some(side) if side.is_king_side() => flags.push('k'),
        Some(_) => flags.push('q'),
        None => {}
    }
    if flags.is_empty() {
        flags.push('n');
    }
    flags
}

fn to_square(coord: Coord) -> Square {
    Square::new(u32::from(coord.row.to_zero_based()) * 8 + u32::from(coord.col.to_zero_based()))
}

fn from_color(color: Color) -> Force {
    match color {
        Color::White => Force::White,
        Color::Black => Force::Black,
    }
}

fn to_role(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn request(from: Coord, to: Coord) -> MoveRequest {
        MoveRequest::new(from, to, Some(AUTO_PROMOTION))
    }

    #[test]
    fn squares_match() {
        assert_eq!(to_square(Coord::A1), Square::A1);
        assert_eq!(to_square(Coord::E4), Square::E4);
        assert_eq!(to_square(Coord::H8), Square::H8);
    }

    #[test]
    fn initial_position() {
        let engine = ShakmatyEngine::new();
        assert_eq!(engine.fen(), INITIAL_FEN);
        assert_eq!(engine.turn(), Force::White);
        let grid = engine.current_board();
        assert_eq!(grid.pieces().count(), 32);
        assert_eq!(grid[Coord::E1], Some(Piece::new(PieceKind::King, Force::White)));
        assert_eq!(grid[Coord::D8], Some(Piece::new(PieceKind::Queen, Force::Black)));
        assert_eq!(grid[Coord::E4], None);
    }

    #[test]
    fn pawn_double_push() {
        let mut engine = ShakmatyEngine::new();
        let record = engine.apply_move(&request(Coord::E2, Coord::E4)).unwrap();
        assert_eq!(record.color, Force::White);
        assert_eq!(record.piece, PieceKind::Pawn);
        assert_eq!(record.from, Coord::E2);
        assert_eq!(record.to, Coord::E4);
        assert_eq!(record.captured, None);
        assert_eq!(record.promotion, None);
        assert_eq!(record.flags, "b");
        assert_eq!(record.san, "e4");
        assert_eq!(record.lan, "e2e4");
        assert_eq!(record.before, INITIAL_FEN);
        assert_eq!(record.after, engine.fen());
        assert_eq!(engine.turn(), Force::Black);
    }

    #[test]
    fn rejections() {
        let mut engine = ShakmatyEngine::new();
        assert_eq!(
            engine.apply_move(&request(Coord::E2, Coord::E5)),
            Err(IllegalMove::Illegal)
        );
        assert_eq!(
            engine.apply_move(&request(Coord::E4, Coord::E5)),
            Err(IllegalMove::NoPieceAtOrigin)
        );
        assert_eq!(
            engine.apply_move(&request(Coord::E7, Coord::E5)),
            Err(IllegalMove::WrongTurn)
        );
        assert_eq!(engine.fen(), INITIAL_FEN);
    }

    #[test]
    fn cannot_expose_king() {
        // The e2 knight is pinned by the rook on e8.
        let mut engine = ShakmatyEngine::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let before = engine.fen();
        assert_eq!(
            engine.apply_move(&request(Coord::E2, Coord::C3)),
            Err(IllegalMove::Illegal)
        );
        assert_eq!(engine.fen(), before);
    }

    #[test]
    fn castling_by_king_squares() {
        let mut engine =
            ShakmatyEngine::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let record = engine.apply_move(&request(Coord::E1, Coord::G1)).unwrap();
        assert_eq!(record.flags, "k");
        assert_eq!(record.san, "O-O");
        assert_eq!(record.to, Coord::G1);
        let record = engine.apply_move(&request(Coord::E8, Coord::C8)).unwrap();
        assert_eq!(record.flags, "q");
        let grid = engine.current_board();
        assert_eq!(grid[Coord::F1], Some(Piece::new(PieceKind::Rook, Force::White)));
        assert_eq!(grid[Coord::D8], Some(Piece::new(PieceKind::Rook, Force::Black)));
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut engine = ShakmatyEngine::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let record = engine.apply_move(&MoveRequest::new(Coord::A7, Coord::B8, None)).unwrap();
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(record.captured, Some(PieceKind::Rook));
        assert_eq!(record.flags, "cp");
        assert_eq!(record.lan, "a7b8q");
        assert_eq!(
            engine.current_board()[Coord::B8],
            Some(Piece::new(PieceKind::Queen, Force::White))
        );
    }

    #[test]
    fn en_passant() {
        let mut engine =
            ShakmatyEngine::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        let record = engine.apply_move(&request(Coord::E5, Coord::D6)).unwrap();
        assert_eq!(record.flags, "e");
        assert_eq!(record.captured, Some(PieceKind::Pawn));
        assert_eq!(engine.current_board()[Coord::D5], None);
    }

    #[test]
    fn load_position() {
        let mut engine = ShakmatyEngine::new();
        let fen = "4k3/8/8/8/8/8/8/4K2R b K - 3 20";
        engine.load_position(fen).unwrap();
        assert_eq!(engine.fen(), fen);
        assert_eq!(engine.turn(), Force::Black);
        assert!(engine.load_position("not a fen").is_err());
        assert_eq!(engine.fen(), fen);
    }
}
