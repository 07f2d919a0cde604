// ============================================================
// Layer 6 — Rules Engine Adapter
// ============================================================
// A read-only view over a shakmaty position that answers the
// questions the category strategies ask:
//
//   - is the side to move in check / mated / stalemated?
//   - does a side keep castling rights, can it castle now?
//   - is "e2e4" a legal move here?
//   - which pieces of a side attack a square?
//   - which squares does the piece on a square attack?
//   - where are the pieces of a given kind and side?
//   - how much material does a side have?
//   - what is the FEN of the position?
//
// Everything the rest of the crate knows about chess rules
// goes through this type, so the domain layer only deals in
// Side / PieceKind / square ids.
//
// Reference: shakmaty crate documentation

use std::collections::HashSet;

use anyhow::{anyhow, Result};
use shakmaty::fen::Fen;
use shakmaty::{
    Bitboard, CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Role, Square,
};

use crate::domain::piece::{PieceKind, Side};

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Side::Black,
            Color::White => Side::White,
        }
    }
}

impl From<PieceKind> for Role {
    fn from(piece: PieceKind) -> Self {
        match piece {
            PieceKind::Pawn   => Role::Pawn,
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook   => Role::Rook,
            PieceKind::Queen  => Role::Queen,
            PieceKind::King   => Role::King,
        }
    }
}

impl From<Role> for PieceKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Pawn   => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook   => PieceKind::Rook,
            Role::Queen  => PieceKind::Queen,
            Role::King   => PieceKind::King,
        }
    }
}

fn to_square(id: u8) -> Square {
    Square::new(u32::from(id))
}

fn square_ids(bb: Bitboard) -> Vec<u8> {
    bb.into_iter().map(|sq| sq as u8).collect()
}

/// Read-only board state
#[derive(Debug, Clone)]
pub struct BoardView {
    pos: Chess,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(Chess::default())
    }
}

impl BoardView {
    pub fn new(pos: Chess) -> Self {
        Self { pos }
    }

    /// Parse a full FEN string into a board.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| anyhow!("invalid FEN '{fen}': {e}"))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| anyhow!("illegal position: {e}"))?;
        Ok(Self::new(pos))
    }

    /// Play a move on the underlying position.
    /// Only the walker advances boards; strategies never do.
    pub(crate) fn play(&mut self, m: &Move) {
        self.pos.play_unchecked(m);
    }

    pub fn turn(&self) -> Side {
        self.pos.turn().into()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    // ── Game status ──────────────────────────────────────────────────────────

    pub fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    // ── Castling ─────────────────────────────────────────────────────────────

    /// True while the side keeps any castling right, whether or
    /// not castling is possible right now.
    pub fn has_castling_rights(&self, side: Side) -> bool {
        self.pos.castles().has_color(side.into())
    }

    /// True if the side can castle on this very move. Only the
    /// side to move can ever castle.
    pub fn can_castle(&self, side: Side) -> bool {
        self.turn() == side && self.pos.legal_moves().iter().any(|m| m.is_castle())
    }

    // ── Moves ────────────────────────────────────────────────────────────────

    /// Every legal (from, to) pair of the side to move, without
    /// promotions. Castling is written as the king's two-square
    /// step, e.g. e1g1.
    pub fn legal_pairs(&self) -> HashSet<(u8, u8)> {
        self.pos
            .legal_moves()
            .iter()
            .filter_map(uci_squares)
            .map(|(from, to)| (from as u8, to as u8))
            .collect()
    }

    // ── Pieces and attacks ───────────────────────────────────────────────────

    /// Squares holding the given piece kind of the given side
    pub fn pieces_of(&self, piece: PieceKind, side: Side) -> Vec<u8> {
        let board = self.pos.board();
        square_ids(board.by_role(piece.into()) & board.by_color(side.into()))
    }

    pub fn count_of(&self, piece: PieceKind, side: Side) -> usize {
        let board = self.pos.board();
        (board.by_role(piece.into()) & board.by_color(side.into())).count()
    }

    /// Total number of pieces of a side, kings included
    pub fn count_side(&self, side: Side) -> usize {
        self.pos.board().by_color(side.into()).count()
    }

    pub fn count_all(&self) -> usize {
        self.pos.board().occupied().count()
    }

    /// Squares holding any piece, ascending
    pub fn occupied(&self) -> Vec<u8> {
        square_ids(self.pos.board().occupied())
    }

    pub fn piece_at(&self, square: u8) -> Option<(Side, PieceKind)> {
        self.pos
            .board()
            .piece_at(to_square(square))
            .map(|p| (p.color.into(), p.role.into()))
    }

    /// Squares of `side`'s pieces that attack `square`
    pub fn attackers_of(&self, side: Side, square: u8) -> Vec<u8> {
        let board = self.pos.board();
        square_ids(board.attacks_to(to_square(square), side.into(), board.occupied()))
    }

    /// Squares attacked by the piece standing on `square`
    pub fn attacks_of(&self, square: u8) -> Vec<u8> {
        square_ids(self.pos.board().attacks_from(to_square(square)))
    }

    /// Material of a side: pawn 1, knight 3, bishop 3, rook 5,
    /// queen 9, king excluded
    pub fn material(&self, side: Side) -> u32 {
        PieceKind::ALL
            .iter()
            .map(|p| p.material_value() * self.count_of(*p, side) as u32)
            .sum()
    }
}

/// (from, to) of a move the way UCI writes it in standard chess.
/// Promotions never match a plain from/to pair.
fn uci_squares(m: &Move) -> Option<(Square, Square)> {
    match *m {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Some((king, Square::from_coords(file, king.rank())))
        }
        _ if m.promotion().is_some() => None,
        _ => Some((m.from()?, m.to())),
    }
}
