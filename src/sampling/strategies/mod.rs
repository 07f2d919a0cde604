// ============================================================
// Layer 5 — Category Strategies
// ============================================================
// One strategy per question category. A strategy knows:
//
//   - the full stratum space of its category
//   - the quota slack of its category
//   - the scan passes it wants per outer corpus pass
//     (e.g. one full corpus pass per side, or per piece)
//   - how to turn one trajectory into zero or more offers
//
// Acceptance itself is never decided here: every candidate goes
// through `SamplingContext::offer`, which applies the shared
// quota, length, uniqueness and target checks.
//
// Two scan shapes exist:
//
//   once      → classify the window position only
//               (castling, material advantage, and the peek
//               of checkmate / stalemate)
//   ply scan  → step past the window one ply at a time and
//               classify every new position, stopping at the
//               first accepted sample (`scan_plies`)
//
// Reference: Rust Book §17.2 (Trait Objects)

use anyhow::Result;

use crate::data::walker::Window;
use crate::domain::category::Category;
use crate::domain::piece::{PieceKind, Polarity, Side};
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::sampling::context::SamplingContext;
use crate::sampling::quota::QuotaTable;

pub mod attack;
pub mod castling;
pub mod check;
pub mod counting;
pub mod existence;
pub mod game_end;
pub mod legal_move;
pub mod material;
pub mod position;

// ─── Ply windows ──────────────────────────────────────────────────────────────
pub const START:  usize = 5;
pub const MIDDLE: usize = 30;
pub const END:    usize = 100;

/// Quota slack used by most categories
pub const FIXED_SLACK: usize = 50;

/// Minimum move-history length (exclusive) for most categories
pub const MIN_MOVES: usize = 1;

// ─── Scan passes ──────────────────────────────────────────────────────────────
/// What one full corpus pass is dedicated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPass {
    All,
    Side(Side),
    Piece(PieceKind),
    SidePiece(Side, PieceKind),
    SideAnswer(Side, Polarity),
    Difference(u8, Side),
}

// ─── Strategy trait ───────────────────────────────────────────────────────────
pub trait CategoryStrategy {
    fn category(&self) -> Category;

    /// Every stratum the category can fill
    fn stratum_space(&self) -> Vec<StratumKey>;

    fn slack(&self) -> usize {
        FIXED_SLACK
    }

    fn passes(&self) -> Vec<ScanPass> {
        vec![ScanPass::All]
    }

    /// True when nothing more can be accepted in this pass, so the
    /// sampler may skip the rest of the corpus for it.
    fn pass_saturated(&self, _pass: ScanPass, _quotas: &QuotaTable) -> bool {
        false
    }

    /// Walk one trajectory and offer what it yields.
    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()>;
}

/// Strategy for a category
pub fn strategy_for(category: Category) -> Box<dyn CategoryStrategy> {
    match category {
        Category::Checkmate         => Box::new(game_end::Checkmate),
        Category::Stalemate         => Box::new(game_end::Stalemate),
        Category::CastlingRights    => Box::new(castling::CastlingRights),
        Category::Castle            => Box::new(castling::Castle),
        Category::MaterialAdvantage => Box::new(material::MaterialAdvantage),
        Category::MaterialCount     => Box::new(material::MaterialCount),
        Category::Check             => Box::new(check::Check),
        Category::Attack            => Box::new(attack::Attack),
        Category::Position          => Box::new(position::Position),
        Category::CountSide         => Box::new(counting::CountSide),
        Category::CountBoard        => Box::new(counting::CountBoard),
        Category::ExistenceSide     => Box::new(existence::ExistenceSide),
        Category::Existence         => Box::new(existence::Existence),
        Category::LegalMove         => Box::new(legal_move::LegalMove),
        Category::IsAttacked        => Box::new(attack::IsAttacked),
    }
}

/// Step past the window one ply at a time and hand every new
/// position to `visit` until it accepts a sample, the trajectory
/// ends, or the run reaches its target.
pub(crate) fn scan_plies<'s, 't, F>(
    ctx:       &mut SamplingContext<'s>,
    mut window: Window<'t>,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(&mut SamplingContext<'s>, &Window<'t>) -> Result<bool>,
{
    if window.is_empty() {
        return Ok(());
    }

    while !ctx.is_done() && window.step() {
        if visit(ctx, &window)? {
            break;
        }
    }
    Ok(())
}

/// Side × answer passes in enumeration order
pub(crate) fn side_answer_passes() -> Vec<ScanPass> {
    Side::ALL
        .iter()
        .flat_map(|s| Polarity::ALL.iter().map(move |a| ScanPass::SideAnswer(*s, *a)))
        .collect()
}


// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_its_strategy() {
        for c in Category::ALL {
            assert_eq!(strategy_for(c).category(), c);
        }
    }

    #[test]
    fn test_stratum_space_sizes() {
        let expected = [
            (Category::Checkmate, 2),
            (Category::Stalemate, 2),
            (Category::CastlingRights, 4),
            (Category::Castle, 4),
            (Category::MaterialAdvantage, 2),
            (Category::MaterialCount, 62),
            (Category::Check, 4),
            (Category::Attack, 1536),
            (Category::Position, 768),
            (Category::CountSide, 30),
            (Category::CountBoard, 30),
            (Category::ExistenceSide, 24),
            (Category::Existence, 12),
            (Category::LegalMove, 8064),
            (Category::IsAttacked, 144),
        ];
        for (c, size) in expected {
            let space = strategy_for(c).stratum_space();
            assert_eq!(space.len(), size, "{c}");

            // No duplicates
            let unique: std::collections::BTreeSet<_> = space.iter().collect();
            assert_eq!(unique.len(), size, "{c}");
        }
    }

    #[test]
    fn test_slacks() {
        let expected = [
            (Category::Checkmate, 1),
            (Category::Stalemate, 1),
            (Category::CastlingRights, 2),
            (Category::Castle, 1),
            (Category::MaterialAdvantage, 1),
            (Category::MaterialCount, 50),
            (Category::Check, 1),
            (Category::Attack, 50),
            (Category::Existence, 10),
            (Category::LegalMove, 50),
        ];
        for (c, slack) in expected {
            assert_eq!(strategy_for(c).slack(), slack, "{c}");
        }
    }

    #[test]
    fn test_side_answer_passes_order() {
        assert_eq!(
            side_answer_passes(),
            vec![
                ScanPass::SideAnswer(Side::Black, Polarity::Yes),
                ScanPass::SideAnswer(Side::Black, Polarity::No),
                ScanPass::SideAnswer(Side::White, Polarity::Yes),
                ScanPass::SideAnswer(Side::White, Polarity::No),
            ]
        );
    }
}
