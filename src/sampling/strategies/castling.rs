// ============================================================
// Categories 2 and 3 — Castling Rights / Castle
// ============================================================
// Two related but distinct questions about one side:
//
//   castling rights → has the side kept any right to castle
//                     later in the game?
//   castle          → can the side castle on this very move?
//
// A side that has not moved king or rooks but stands in check
// keeps its rights while being unable to castle; the two
// categories answer such a position differently.
//
// Both classify the window position once per visit and run one
// corpus pass per (side, answer).

use anyhow::Result;

use crate::domain::category::Category;
use crate::domain::piece::{Polarity, Side};
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;
use crate::sampling::context::SamplingContext;
use crate::sampling::quota::QuotaTable;
use crate::sampling::strategies::{
    side_answer_passes, CategoryStrategy, ScanPass, MIDDLE, MIN_MOVES, START,
};
use crate::sampling::templates;

fn side_answer_space() -> Vec<StratumKey> {
    Side::ALL
        .iter()
        .flat_map(|s| Polarity::ALL.iter().map(move |a| StratumKey::SideAnswer(*s, *a)))
        .collect()
}

fn side_answer_saturated(pass: ScanPass, quotas: &QuotaTable) -> bool {
    match pass {
        ScanPass::SideAnswer(side, answer) => quotas.is_full(&StratumKey::SideAnswer(side, answer)),
        _ => false,
    }
}

/// Does the position answer `answer` to "does `side` have castling rights"?
pub fn rights_match(board: &BoardView, side: Side, answer: Polarity) -> bool {
    board.has_castling_rights(side) == answer.is_yes()
}

/// Does the position answer `answer` to "can `side` castle"?
///
/// "yes" needs retained rights and a legal castling move now;
/// every other position answers "no", including one where the
/// side keeps its rights but is in check, blocked, or not to move.
pub fn castle_match(board: &BoardView, side: Side, answer: Polarity) -> bool {
    (board.has_castling_rights(side) && board.can_castle(side)) == answer.is_yes()
}

// ─── CastlingRights ───────────────────────────────────────────────────────────
pub struct CastlingRights;

impl CategoryStrategy for CastlingRights {
    fn category(&self) -> Category {
        Category::CastlingRights
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        side_answer_space()
    }

    fn slack(&self) -> usize {
        2
    }

    fn passes(&self) -> Vec<ScanPass> {
        side_answer_passes()
    }

    fn pass_saturated(&self, pass: ScanPass, quotas: &QuotaTable) -> bool {
        side_answer_saturated(pass, quotas)
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::SideAnswer(side, answer) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, MIDDLE);
        if window.is_empty() || !rights_match(window.board(), side, answer) {
            return Ok(());
        }

        ctx.offer(
            StratumKey::SideAnswer(side, answer),
            answer.name(),
            &window,
            MIN_MOVES,
            |rng| templates::castling_rights(rng, side),
        )?;
        Ok(())
    }
}

// ─── Castle ───────────────────────────────────────────────────────────────────
pub struct Castle;

impl CategoryStrategy for Castle {
    fn category(&self) -> Category {
        Category::Castle
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        side_answer_space()
    }

    fn slack(&self) -> usize {
        1
    }

    fn passes(&self) -> Vec<ScanPass> {
        side_answer_passes()
    }

    fn pass_saturated(&self, pass: ScanPass, quotas: &QuotaTable) -> bool {
        side_answer_saturated(pass, quotas)
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::SideAnswer(side, answer) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, MIDDLE);
        if window.is_empty() || !castle_match(window.board(), side, answer) {
            return Ok(());
        }

        ctx.offer(
            StratumKey::SideAnswer(side, answer),
            answer.name(),
            &window,
            MIN_MOVES,
            |rng| templates::castle(rng, side),
        )?;
        Ok(())
    }
}
