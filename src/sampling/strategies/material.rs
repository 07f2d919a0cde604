// ============================================================
// Categories 4 and 5 — Material Advantage / Material Count
// ============================================================
// Material uses the usual relative weights:
//
//   pawn 1   knight 3   bishop 3   rook 5   queen 9   king —
//
//   advantage → which side is strictly ahead (ties are never
//               asked); window position only
//   count     → the exact material lead of one side, 1..=31;
//               one corpus pass per (lead, side), ply scan
//
// A side that is behind or level has no stratum, so such
// positions are never asked about.

use anyhow::Result;

use crate::domain::category::Category;
use crate::domain::piece::Side;
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;
use crate::sampling::context::SamplingContext;
use crate::sampling::quota::QuotaTable;
use crate::sampling::strategies::{
    scan_plies, CategoryStrategy, ScanPass, END, MIDDLE, MIN_MOVES, START,
};
use crate::sampling::templates;

/// Largest material lead a side can be asked about
pub const MAX_LEAD: u8 = 31;

/// Material of `side` minus material of its opponent
pub fn material_lead(board: &BoardView, side: Side) -> i64 {
    i64::from(board.material(side)) - i64::from(board.material(side.opponent()))
}

/// The side strictly ahead on material, if any
pub fn material_winner(board: &BoardView) -> Option<Side> {
    match material_lead(board, Side::White) {
        0 => None,
        d if d > 0 => Some(Side::White),
        _ => Some(Side::Black),
    }
}

// ─── MaterialAdvantage ────────────────────────────────────────────────────────
pub struct MaterialAdvantage;

impl CategoryStrategy for MaterialAdvantage {
    fn category(&self) -> Category {
        Category::MaterialAdvantage
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        Side::ALL.iter().map(|s| StratumKey::Winner(*s)).collect()
    }

    fn slack(&self) -> usize {
        1
    }

    fn passes(&self) -> Vec<ScanPass> {
        Side::ALL.iter().map(|s| ScanPass::Side(*s)).collect()
    }

    fn pass_saturated(&self, pass: ScanPass, quotas: &QuotaTable) -> bool {
        match pass {
            ScanPass::Side(side) => quotas.is_full(&StratumKey::Winner(side)),
            _ => false,
        }
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::Side(side) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, MIDDLE);
        if window.is_empty() || material_winner(window.board()) != Some(side) {
            return Ok(());
        }

        ctx.offer(StratumKey::Winner(side), side.name(), &window, MIN_MOVES, |rng| {
            templates::material_advantage(rng)
        })?;
        Ok(())
    }
}

// ─── MaterialCount ────────────────────────────────────────────────────────────
pub struct MaterialCount;

impl CategoryStrategy for MaterialCount {
    fn category(&self) -> Category {
        Category::MaterialCount
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        (1..=MAX_LEAD)
            .flat_map(|d| {
                Side::ALL
                    .iter()
                    .map(move |s| StratumKey::Difference { difference: d, side: *s })
            })
            .collect()
    }

    fn passes(&self) -> Vec<ScanPass> {
        (1..=MAX_LEAD)
            .flat_map(|d| Side::ALL.iter().map(move |s| ScanPass::Difference(d, *s)))
            .collect()
    }

    fn pass_saturated(&self, pass: ScanPass, quotas: &QuotaTable) -> bool {
        match pass {
            ScanPass::Difference(difference, side) => {
                quotas.is_full(&StratumKey::Difference { difference, side })
            }
            _ => false,
        }
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::Difference(difference, side) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, END);
        scan_plies(ctx, window, |ctx, w| {
            if material_lead(w.board(), side) != i64::from(difference) {
                return Ok(false);
            }
            ctx.offer(
                StratumKey::Difference { difference, side },
                difference.to_string(),
                w,
                MIN_MOVES,
                |rng| templates::material_count(rng, side),
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
    use shakmaty::fen::Fen;
    use shakmaty::{CastlingMode, Chess};

    const WHITE_UP_SIX: &str = "rnbqkbn1/ppppppp1/8/8/8/8/PPPPPPPP/RNBQKBNR w KQq - 0 1";

    /// Knights shuffling back and forth from `fen`, so every
    /// position on the line keeps the same material.
    fn shuffle_from(fen: &str) -> Trajectory {
        let root: Chess = fen
            .parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap();
        let line = "Nc3 Nc6 Nb1 Nb8 ".repeat(28);
        Trajectory::from_san_line("shuffle", root, &line).unwrap()
    }

    #[test]
    fn test_lead_of_six() {
        // Black is missing the h-rook and the h-pawn
        let b = BoardView::from_fen(WHITE_UP_SIX).unwrap();
        assert_eq!(b.material(Side::White), 39);
        assert_eq!(b.material(Side::Black), 33);
        assert_eq!(material_lead(&b, Side::White), 6);
        assert_ne!(material_lead(&b, Side::White), 7);
        assert_eq!(material_lead(&b, Side::Black), -6);
        assert_eq!(material_winner(&b), Some(Side::White));
    }

    #[test]
    fn test_count_accepts_exact_lead_only() {
        let t        = shuffle_from(WHITE_UP_SIX);
        let mut sink = Vec::new();
        {
            let quotas  = QuotaTable::new(MaterialCount.stratum_space(), 10, MaterialCount.slack());
            let mut ctx = SamplingContext::new(Category::MaterialCount, quotas, 10, 0, &mut sink);

            MaterialCount.sample(&t, ScanPass::Difference(7, Side::White), &mut ctx).unwrap();
            assert_eq!(ctx.accepted(), 0);

            MaterialCount.sample(&t, ScanPass::Difference(6, Side::Black), &mut ctx).unwrap();
            assert_eq!(ctx.accepted(), 0);

            MaterialCount.sample(&t, ScanPass::Difference(6, Side::White), &mut ctx).unwrap();
            assert_eq!(ctx.accepted(), 1);
        }
        assert_eq!(sink[0].answer, "6");
    }

    #[test]
    fn test_level_material_has_no_winner() {
        assert_eq!(material_winner(&BoardView::default()), None);
    }

    #[test]
    fn test_count_answers_are_positive_leads() {
        let records = sample_rounds(&MaterialCount, &opera(), 100, 3, 4);
        assert!(!records.is_empty());
        for r in &records {
            let lead: i64 = r.answer.parse().unwrap();
            assert!((1..=31).contains(&lead));
            let b = BoardView::from_fen(&r.fen).unwrap();
            assert!(material_lead(&b, Side::White) == lead || material_lead(&b, Side::Black) == lead);
        }
    }

    #[test]
    fn test_advantage_never_on_a_tie() {
        let records = sample_rounds(&MaterialAdvantage, &opera(), 20, 100, 5);
        assert!(!records.is_empty());
        for r in &records {
            let b = BoardView::from_fen(&r.fen).unwrap();
            assert_eq!(material_winner(&b).map(Side::name), Some(r.answer.as_str()));
        }
    }
}
