// ============================================================
// Categories 11 and 12 — Existence (per side / any side)
// ============================================================
// "yes" when at least one piece of the kind is on the board,
// either for one side (11) or for any side (12).
//
// Category 12 samples early in the game: its window lands on
// plies 5..10 before the scan starts, and it runs with a
// smaller quota slack than the other categories.

use anyhow::Result;

use crate::domain::category::Category;
use crate::domain::piece::{PieceKind, Polarity, Side};
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;
use crate::sampling::context::SamplingContext;
use crate::sampling::strategies::{scan_plies, CategoryStrategy, ScanPass, END, MIN_MOVES, START};
use crate::sampling::templates;

/// Is there a `piece` of `side` (or of either side) on the board?
pub fn presence(board: &BoardView, piece: PieceKind, side: Option<Side>) -> Polarity {
    let count = match side {
        Some(side) => board.count_of(piece, side),
        None => Side::ALL.iter().map(|s| board.count_of(piece, *s)).sum(),
    };
    Polarity::from(count > 0)
}

// ─── ExistenceSide ────────────────────────────────────────────────────────────
pub struct ExistenceSide;

impl CategoryStrategy for ExistenceSide {
    fn category(&self) -> Category {
        Category::ExistenceSide
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        let mut space = Vec::with_capacity(24);
        for side in Side::ALL {
            for piece in PieceKind::ALL {
                for answer in Polarity::ALL {
                    space.push(StratumKey::Presence { answer, piece, side: Some(side) });
                }
            }
        }
        space
    }

    fn passes(&self) -> Vec<ScanPass> {
        PieceKind::ALL
            .iter()
            .flat_map(|p| Side::ALL.iter().map(move |s| ScanPass::SidePiece(*s, *p)))
            .collect()
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::SidePiece(side, piece) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, END);
        scan_plies(ctx, window, |ctx, w| {
            let answer = presence(w.board(), piece, Some(side));
            ctx.offer(
                StratumKey::Presence { answer, piece, side: Some(side) },
                answer.name(),
                w,
                MIN_MOVES,
                |rng| templates::existence_side(rng, side, piece),
            )
        })
    }
}

// ─── Existence ────────────────────────────────────────────────────────────────
pub struct Existence;

impl CategoryStrategy for Existence {
    fn category(&self) -> Category {
        Category::Existence
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        let mut space = Vec::with_capacity(12);
        for piece in PieceKind::ALL {
            for answer in Polarity::ALL {
                space.push(StratumKey::Presence { answer, piece, side: None });
            }
        }
        space
    }

    fn slack(&self) -> usize {
        10
    }

    fn passes(&self) -> Vec<ScanPass> {
        PieceKind::ALL.iter().map(|p| ScanPass::Piece(*p)).collect()
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::Piece(piece) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, START + 5);
        scan_plies(ctx, window, |ctx, w| {
            let answer = presence(w.board(), piece, None);
            ctx.offer(
                StratumKey::Presence { answer, piece, side: None },
                answer.name(),
                w,
                MIN_MOVES,
                |rng| templates::existence(rng, piece),
            )
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::opera;
    use crate::sampling::strategies::testing::sample_rounds;

    #[test]
    fn test_queen_presence_flips() {
        let none = BoardView::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(presence(&none, PieceKind::Queen, None), Polarity::No);

        let one = BoardView::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert_eq!(presence(&one, PieceKind::Queen, None), Polarity::Yes);
        assert_eq!(presence(&one, PieceKind::Queen, Some(Side::White)), Polarity::Yes);
        assert_eq!(presence(&one, PieceKind::Queen, Some(Side::Black)), Polarity::No);
    }

    #[test]
    fn test_existence_records_follow_the_board() {
        let records = sample_rounds(&ExistenceSide, &opera(), 48, 5, 12);
        assert!(!records.is_empty());
        for r in &records {
            // "is there a white queen on the board" / "does white have a queen"
            let words: Vec<&str> = r.question.split(' ').collect();
            let (side, piece) = if words[0] == "is" { (words[3], words[4]) } else { (words[1], words[4]) };
            let side  = Side::ALL.into_iter().find(|s| s.name() == side).unwrap();
            let piece = PieceKind::ALL.into_iter().find(|p| p.name() == piece).unwrap();
            let b     = BoardView::from_fen(&r.fen).unwrap();

            assert_eq!(r.answer, presence(&b, piece, Some(side)).name());
        }
    }

    #[test]
    fn test_existence_window_is_early() {
        let records = sample_rounds(&Existence, &opera(), 24, 5, 13);
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.moves.len() > START));
    }
}
