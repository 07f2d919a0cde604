// ============================================================
// Category 8 — Position
// ============================================================
// "what piece is on e4" → "whiteknight"
//
// Only asked while the side has at least two pieces of the
// kind, so the square alone does not give the answer away
// (there is one king per side, so kings are never asked).
// One corpus pass per (side, piece); the stratum includes the
// square so answers spread over the whole board.

use anyhow::Result;
use rand::seq::SliceRandom;

use crate::domain::category::Category;
use crate::domain::piece::{PieceKind, Side};
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::sampling::context::SamplingContext;
use crate::sampling::strategies::{scan_plies, CategoryStrategy, ScanPass, END, MIN_MOVES, START};
use crate::sampling::templates;

pub struct Position;

impl CategoryStrategy for Position {
    fn category(&self) -> Category {
        Category::Position
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        let mut space = Vec::with_capacity(2 * 6 * 64);
        for side in Side::ALL {
            for piece in PieceKind::ALL {
                for square in 0..64u8 {
                    space.push(StratumKey::Placement { side, piece, square });
                }
            }
        }
        space
    }

    fn passes(&self) -> Vec<ScanPass> {
        Side::ALL
            .iter()
            .flat_map(|s| PieceKind::ALL.iter().map(move |p| ScanPass::SidePiece(*s, *p)))
            .collect()
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::SidePiece(side, piece) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, END);
        scan_plies(ctx, window, |ctx, w| {
            let squares = w.board().pieces_of(piece, side);
            if squares.len() < 2 {
                return Ok(false);
            }
            let Some(&square) = squares.choose(ctx.rng()) else {
                return Ok(false);
            };

            ctx.offer(
                StratumKey::Placement { side, piece, square },
                format!("{side}{piece}"),
                w,
                MIN_MOVES,
                |rng| templates::position(rng, square),
            )
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::qgd;
    use crate::domain::piece::square_id;
    use crate::infra::rules::BoardView;
    use crate::sampling::strategies::testing::sample_rounds;

    #[test]
    fn test_answer_is_the_piece_on_the_square() {
        let records = sample_rounds(&Position, &qgd(), 100, 3, 9);
        assert!(!records.is_empty());

        for r in &records {
            let sq    = r.question.rsplit(' ').next().unwrap();
            let b     = BoardView::from_fen(&r.fen).unwrap();
            let (s, p) = b.piece_at(square_id(sq).unwrap()).unwrap();

            assert_eq!(r.answer, format!("{s}{p}"));
            assert!(b.count_of(p, s) >= 2);
            assert_ne!(p, PieceKind::King);
        }
    }
}
