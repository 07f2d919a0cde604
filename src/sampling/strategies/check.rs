// ============================================================
// Category 6 — Check
// ============================================================
// "is white in check" is only asked while white is to move;
// asking it of the side that just moved would always be "no".
// One corpus pass per side, ply scan from a late window.

use anyhow::Result;

use crate::domain::category::Category;
use crate::domain::piece::{Polarity, Side};
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;
use crate::sampling::context::SamplingContext;
use crate::sampling::strategies::{scan_plies, CategoryStrategy, ScanPass, END, MIDDLE, MIN_MOVES};
use crate::sampling::templates;

/// Answer to "is `side` in check", when it can be asked at all
pub fn check_answer(board: &BoardView, side: Side) -> Option<Polarity> {
    (board.turn() == side).then(|| Polarity::from(board.is_check()))
}

pub struct Check;

impl CategoryStrategy for Check {
    fn category(&self) -> Category {
        Category::Check
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        Polarity::ALL
            .iter()
            .flat_map(|a| Side::ALL.iter().map(move |s| StratumKey::SideAnswer(*s, *a)))
            .collect()
    }

    fn slack(&self) -> usize {
        1
    }

    fn passes(&self) -> Vec<ScanPass> {
        Side::ALL.iter().map(|s| ScanPass::Side(*s)).collect()
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::Side(side) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, MIDDLE, END);
        scan_plies(ctx, window, |ctx, w| {
            let Some(answer) = check_answer(w.board(), side) else {
                return Ok(false);
            };
            ctx.offer(
                StratumKey::SideAnswer(side, answer),
                answer.name(),
                w,
                MIN_MOVES,
                |rng| templates::check(rng, side),
            )
        })
    }
}
