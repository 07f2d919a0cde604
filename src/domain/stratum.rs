// ============================================================
// Layer 3 — Stratum Keys
// ============================================================
// A stratum is one answer class of one category, optionally
// refined by the side / piece / square the question is about.
// The sampler keeps one counter per stratum and stops
// accepting a stratum once its quota is reached, which is what
// makes the answers of a category come out roughly uniform.
//
// Each category uses exactly one variant shape:
//
//   Checkmate, Stalemate        → Answer
//   Castle, CastlingRights      → SideAnswer
//   Check                       → SideAnswer
//   MaterialAdvantage           → Winner
//   MaterialCount               → Difference
//   Attack                      → Attack
//   Position                    → Placement
//   CountSide                   → SideCount
//   CountBoard                  → BoardCount
//   ExistenceSide, Existence    → Presence
//   LegalMove                   → Move
//   IsAttacked                  → Attacker
//
// Keys are ordered so reports list strata deterministically.

use std::fmt;

use crate::domain::piece::{square_name, PieceKind, Polarity, Side};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StratumKey {
    Answer(Polarity),
    SideAnswer(Side, Polarity),
    Winner(Side),
    Difference { difference: u8, side: Side },
    Attack { answer: Polarity, side: Side, piece: PieceKind, square: u8 },
    Placement { side: Side, piece: PieceKind, square: u8 },
    SideCount { side: Side, count: u8 },
    BoardCount(u8),
    Presence { answer: Polarity, piece: PieceKind, side: Option<Side> },
    Move { answer: Polarity, from: u8, to: u8 },
    Attacker {
        attacker_side:  Side,
        attacker_piece: PieceKind,
        side:           Side,
        piece:          PieceKind,
    },
}

impl fmt::Display for StratumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StratumKey::Answer(a) => write!(f, "{a}"),
            StratumKey::SideAnswer(s, a) => write!(f, "{s}/{a}"),
            StratumKey::Winner(s) => write!(f, "{s}"),
            StratumKey::Difference { difference, side } => write!(f, "{side}/{difference}"),
            StratumKey::Attack { answer, side, piece, square } => {
                write!(f, "{answer}/{side}/{piece}/{}", square_name(*square))
            }
            StratumKey::Placement { side, piece, square } => {
                write!(f, "{side}/{piece}/{}", square_name(*square))
            }
            StratumKey::SideCount { side, count } => write!(f, "{side}/{count}"),
            StratumKey::BoardCount(c) => write!(f, "{c}"),
            StratumKey::Presence { answer, piece, side: Some(s) } => {
                write!(f, "{answer}/{s}/{piece}")
            }
            StratumKey::Presence { answer, piece, side: None } => write!(f, "{answer}/{piece}"),
            StratumKey::Move { answer, from, to } => {
                write!(f, "{answer}/{}{}", square_name(*from), square_name(*to))
            }
            StratumKey::Attacker { attacker_side, attacker_piece, side, piece } => {
                write!(f, "{attacker_side}{attacker_piece}/{side}/{piece}")
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_readable() {
        let key = StratumKey::Attack {
            answer: Polarity::Yes,
            side:   Side::White,
            piece:  PieceKind::Knight,
            square: 28,
        };
        assert_eq!(key.to_string(), "yes/white/knight/e4");

        let key = StratumKey::Move { answer: Polarity::No, from: 12, to: 36 };
        assert_eq!(key.to_string(), "no/e2e5");
    }
}
