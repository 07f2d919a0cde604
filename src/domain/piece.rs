// ============================================================
// Layer 3 — Sides, Piece Kinds and Yes/No Answers
// ============================================================
// The words that appear in question text and answers.
//
// Enumeration order matters: strata are enumerated in this
// order, and the sampler's nested scan passes (per side, per
// piece) visit them in this order too. Sides go black before
// white, pieces go pawn → king.
//
// Squares are plain ids 0..63 with a1 = 0, b1 = 1, ..., h8 = 63.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A side (colour) in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "black",
            Side::White => "white",
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn   => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook   => "rook",
            PieceKind::Queen  => "queen",
            PieceKind::King   => "king",
        }
    }

    /// Relative material value. The king carries no material.
    pub fn material_value(self) -> u32 {
        match self {
            PieceKind::Pawn   => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook   => 5,
            PieceKind::Queen  => 9,
            PieceKind::King   => 0,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A yes/no answer class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Polarity {
    Yes,
    No,
}

impl Polarity {
    pub const ALL: [Polarity; 2] = [Polarity::Yes, Polarity::No];

    pub fn name(self) -> &'static str {
        match self {
            Polarity::Yes => "yes",
            Polarity::No  => "no",
        }
    }

    pub fn is_yes(self) -> bool {
        self == Polarity::Yes
    }
}

impl From<bool> for Polarity {
    fn from(b: bool) -> Self {
        if b { Polarity::Yes } else { Polarity::No }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Algebraic name of a square id, e.g. 12 → "e2".
pub fn square_name(square: u8) -> String {
    let file = (b'a' + square % 8) as char;
    let rank = (b'1' + square / 8) as char;
    format!("{file}{rank}")
}

/// Square id of an algebraic name, e.g. "e2" → 12.
#[cfg(test)]
pub fn square_id(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a').filter(|f| *f < 8)?;
    let rank = bytes[1].checked_sub(b'1').filter(|r| *r < 8)?;
    Some(rank * 8 + file)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_names() {
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(12), "e2");
        assert_eq!(square_name(63), "h8");
        for id in 0..64u8 {
            assert_eq!(square_id(&square_name(id)), Some(id));
        }
    }

    #[test]
    fn test_square_id_rejects_bad_names() {
        assert_eq!(square_id("i1"), None);
        assert_eq!(square_id("a9"), None);
        assert_eq!(square_id("e"), None);
    }

    #[test]
    fn test_material_values() {
        let army: u32 = [
            (PieceKind::Pawn, 8),
            (PieceKind::Knight, 2),
            (PieceKind::Bishop, 2),
            (PieceKind::Rook, 2),
            (PieceKind::Queen, 1),
            (PieceKind::King, 1),
        ]
        .iter()
        .map(|(p, n)| p.material_value() * n)
        .sum();
        assert_eq!(army, 39);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
    }
}
