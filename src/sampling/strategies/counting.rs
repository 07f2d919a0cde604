// ============================================================
// Categories 9 and 10 — Count Side / Count Board
// ============================================================
// The answer is a literal piece count, kings included:
//
//   count side  → pieces of one side, strata 1..=15
//   count board → pieces on the board, strata 2..=31
//
// Full armies (16 for a side, 32 on the board) have no stratum,
// so opening positions before the first capture are never
// asked. Both scan ply by ply from a window anywhere in the game.

use anyhow::Result;

use crate::domain::category::Category;
use crate::domain::piece::Side;
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::sampling::context::SamplingContext;
use crate::sampling::strategies::{scan_plies, CategoryStrategy, ScanPass, END, MIN_MOVES, START};
use crate::sampling::templates;

// ─── CountSide ────────────────────────────────────────────────────────────────
pub struct CountSide;

impl CategoryStrategy for CountSide {
    fn category(&self) -> Category {
        Category::CountSide
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        Side::ALL
            .iter()
            .flat_map(|s| (1..=15u8).map(move |count| StratumKey::SideCount { side: *s, count }))
            .collect()
    }

    fn passes(&self) -> Vec<ScanPass> {
        Side::ALL.iter().map(|s| ScanPass::Side(*s)).collect()
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::Side(side) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, END);
        scan_plies(ctx, window, |ctx, w| {
            let count = w.board().count_side(side);
            let key   = StratumKey::SideCount { side, count: count as u8 };
            ctx.offer(key, count.to_string(), w, MIN_MOVES, |rng| templates::count_side(rng, side))
        })
    }
}

// ─── CountBoard ───────────────────────────────────────────────────────────────
pub struct CountBoard;

impl CategoryStrategy for CountBoard {
    fn category(&self) -> Category {
        Category::CountBoard
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        (2..=31u8).map(StratumKey::BoardCount).collect()
    }

    fn sample(&self, trajectory: &Trajectory, _pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let window = ctx.advance(trajectory, START, END);
        scan_plies(ctx, window, |ctx, w| {
            let count = w.board().count_all();
            ctx.offer(
                StratumKey::BoardCount(count as u8),
                count.to_string(),
                w,
                MIN_MOVES,
                |rng| templates::count_board(rng),
            )
        })
    }
}
