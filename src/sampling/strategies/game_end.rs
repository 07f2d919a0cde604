// ============================================================
// Categories 0 and 1 — Checkmate / Stalemate
// ============================================================
// Both categories peek at two positions of a trajectory:
//
//   window position  → offered as "no" if the game is not over
//   final position   → offered as "yes" if the game ended there
//
// The final position is reached by fast-forwarding to the end
// of the main line. If the window already sits at the end, no
// "yes" candidate exists for this visit.

use anyhow::Result;
use rand::rngs::StdRng;

use crate::domain::category::Category;
use crate::domain::piece::Polarity;
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;
use crate::sampling::context::SamplingContext;
use crate::sampling::strategies::{CategoryStrategy, ScanPass, END, MIDDLE, MIN_MOVES};
use crate::sampling::templates;

fn answer_space() -> Vec<StratumKey> {
    Polarity::ALL.iter().map(|a| StratumKey::Answer(*a)).collect()
}

fn peek(
    trajectory: &Trajectory,
    ctx:        &mut SamplingContext<'_>,
    is_over:    fn(&BoardView) -> bool,
    question:   fn(&mut StdRng) -> String,
) -> Result<()> {
    let mut window = ctx.advance(trajectory, MIDDLE, END);
    if window.is_empty() {
        return Ok(());
    }

    if !is_over(window.board()) {
        ctx.offer(StratumKey::Answer(Polarity::No), "no", &window, MIN_MOVES, question)?;
    }

    if window.fast_forward_to_end() == 0 {
        return Ok(());
    }

    if is_over(window.board()) {
        ctx.offer(StratumKey::Answer(Polarity::Yes), "yes", &window, MIN_MOVES, question)?;
    }
    Ok(())
}

// ─── Checkmate ────────────────────────────────────────────────────────────────
pub struct Checkmate;

impl CategoryStrategy for Checkmate {
    fn category(&self) -> Category {
        Category::Checkmate
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        answer_space()
    }

    fn slack(&self) -> usize {
        1
    }

    fn sample(&self, trajectory: &Trajectory, _pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        peek(trajectory, ctx, BoardView::is_checkmate, templates::checkmate)
    }
}

// ─── Stalemate ────────────────────────────────────────────────────────────────
pub struct Stalemate;

impl CategoryStrategy for Stalemate {
    fn category(&self) -> Category {
        Category::Stalemate
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        answer_space()
    }

    fn slack(&self) -> usize {
        1
    }

    fn sample(&self, trajectory: &Trajectory, _pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        peek(trajectory, ctx, BoardView::is_stalemate, templates::stalemate)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{opera, qgd};
    use crate::sampling::strategies::testing::sample_rounds;

    #[test]
    fn test_checkmate_yes_is_the_final_position() {
        let records = sample_rounds(&Checkmate, &opera(), 2, 500, 0);

        assert_eq!(records.len(), 2);
        let yes: Vec<_> = records.iter().filter(|r| r.answer == "yes").collect();
        let no: Vec<_>  = records.iter().filter(|r| r.answer == "no").collect();
        assert_eq!(yes.len(), 1);
        assert_eq!(no.len(), 1);

        assert_eq!(yes[0].moves.len(), 33);
        assert_eq!(yes[0].moves_field().split(' ').last(), Some("Rd8"));
        assert!((30..33).contains(&no[0].moves.len()));
    }

    #[test]
    fn test_no_mate_means_no_yes() {
        let records = sample_rounds(&Checkmate, &qgd(), 4, 500, 1);
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.answer == "no"));
    }

    #[test]
    fn test_stalemate_never_yes_on_a_mating_game() {
        let records = sample_rounds(&Stalemate, &opera(), 4, 500, 2);
        assert!(records.iter().all(|r| r.answer == "no"));
        assert!(records
            .iter()
            .all(|r| ["is this a stalemate", "is the game stalemate", "is the game over with a stalemate"]
                .contains(&r.question.as_str())));
    }
}
