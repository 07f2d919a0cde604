// ============================================================
// Category 13 — Legal Move
// ============================================================
// "is e2e4 a legal move"
//
// Candidates are every (from, to) pair where `from` holds a
// piece and `to` is any other square, in random order. One
// visit of a trajectory can give one sample of each answer:
//
//   "yes" → window late in the game (plies 30..100),
//           first legal candidate that lands
//   "no"  → the same game walked again from its root to an
//           earlier ply (5..30), first illegal candidate
//           that lands
//
// The two answers always come from different parts of the
// same game.
//
// Castling is written as the king's two-square step ("e1g1");
// promotions never match a bare from/to pair.

use std::collections::HashSet;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::walker::Window;
use crate::domain::category::Category;
use crate::domain::piece::Polarity;
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;
use crate::sampling::context::SamplingContext;
use crate::sampling::strategies::{CategoryStrategy, ScanPass, END, MIDDLE, START};
use crate::sampling::templates;

/// Minimum move-history length (exclusive) for "yes" samples
const MIN_MOVES_LEGAL: usize = 0;

/// Minimum move-history length (exclusive) for "no" samples
const MIN_MOVES_ILLEGAL: usize = 2;

/// Answer to "is `from``to` a legal move" given the position's
/// legal (from, to) pairs.
pub fn legality(legal: &HashSet<(u8, u8)>, from: u8, to: u8) -> Polarity {
    Polarity::from(legal.contains(&(from, to)))
}

/// Every (occupied square, other square) pair in random order
pub fn candidate_moves<R: Rng + ?Sized>(board: &BoardView, rng: &mut R) -> Vec<(u8, u8)> {
    let mut candidates: Vec<(u8, u8)> = board
        .occupied()
        .into_iter()
        .flat_map(|from| (0..64u8).filter(move |to| *to != from).map(move |to| (from, to)))
        .collect();
    candidates.shuffle(rng);
    candidates
}

/// Offer the first candidate of the wanted answer that lands.
fn offer_first(
    ctx:       &mut SamplingContext<'_>,
    window:    &Window<'_>,
    answer:    Polarity,
    min_moves: usize,
) -> Result<()> {
    if !ctx.is_fresh(window) {
        return Ok(());
    }

    let legal      = window.board().legal_pairs();
    let candidates = candidate_moves(window.board(), ctx.rng());

    for (from, to) in candidates {
        if legality(&legal, from, to) != answer {
            continue;
        }
        let key = StratumKey::Move { answer, from, to };
        if ctx.offer(key, answer.name(), window, min_moves, |rng| templates::legal_move(rng, from, to))? {
            break;
        }
        if ctx.is_done() {
            break;
        }
    }
    Ok(())
}

pub struct LegalMove;

impl CategoryStrategy for LegalMove {
    fn category(&self) -> Category {
        Category::LegalMove
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        let mut space = Vec::with_capacity(2 * 64 * 63);
        for answer in Polarity::ALL {
            for from in 0..64u8 {
                for to in (0..64u8).filter(|to| *to != from) {
                    space.push(StratumKey::Move { answer, from, to });
                }
            }
        }
        space
    }

    fn sample(&self, trajectory: &Trajectory, _pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let window = ctx.advance(trajectory, MIDDLE, END);
        if window.is_empty() {
            return Ok(());
        }
        offer_first(ctx, &window, Polarity::Yes, MIN_MOVES_LEGAL)?;

        let early = ctx.rewalk(&window, START, MIDDLE);
        offer_first(ctx, &early, Polarity::No, MIN_MOVES_ILLEGAL)
    }
}
