// ============================================================
// Categories 7 and 14 — Attack / Is Attacked
// ============================================================
// Attack (7) asks whether one given piece attacks a square:
//
//   1. pick a random instance of the pass's (side, piece)
//   2. pick a random square it attacks       → "yes"
//   3. otherwise pick any square it does not  → "no"
//
// Pawns get no pass, so the pawn strata of the attack space
// stay empty.
//
// Is Attacked (14) asks which piece attacks a given piece:
//
//   1. list every piece on the board with its square
//   2. shuffle, keep the first one attacked by exactly one
//      enemy piece
//   3. the answer is that attacker, e.g. "blackbishop"
//
// Targets with several attackers are skipped so the answer is
// never ambiguous.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::category::Category;
use crate::domain::piece::{PieceKind, Polarity, Side};
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;
use crate::sampling::context::SamplingContext;
use crate::sampling::strategies::{scan_plies, CategoryStrategy, ScanPass, END, MIN_MOVES, START};
use crate::sampling::templates;

/// A piece attacked by exactly one enemy piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoleAttack {
    pub side:           Side,
    pub piece:          PieceKind,
    pub square:         u8,
    pub attacker_side:  Side,
    pub attacker_piece: PieceKind,
}

/// Every piece on the board as (side, piece, square)
fn all_targets(board: &BoardView) -> Vec<(Side, PieceKind, u8)> {
    let mut targets = Vec::new();
    for piece in PieceKind::ALL {
        for side in Side::ALL {
            for square in board.pieces_of(piece, side) {
                targets.push((side, piece, square));
            }
        }
    }
    targets
}

/// The attacker of `square` when `side`'s piece there has exactly one
pub fn sole_attacker(board: &BoardView, side: Side, square: u8) -> Option<(Side, PieceKind)> {
    match board.attackers_of(side.opponent(), square).as_slice() {
        [from] => board.piece_at(*from),
        _ => None,
    }
}

/// First target in random order that has exactly one attacker
pub fn find_sole_attack<R: Rng + ?Sized>(board: &BoardView, rng: &mut R) -> Option<SoleAttack> {
    let mut targets = all_targets(board);
    targets.shuffle(rng);

    targets.into_iter().find_map(|(side, piece, square)| {
        let (attacker_side, attacker_piece) = sole_attacker(board, side, square)?;
        Some(SoleAttack { side, piece, square, attacker_side, attacker_piece })
    })
}

// ─── Attack ───────────────────────────────────────────────────────────────────
pub struct Attack;

impl CategoryStrategy for Attack {
    fn category(&self) -> Category {
        Category::Attack
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        let mut space = Vec::with_capacity(2 * 2 * 6 * 64);
        for answer in Polarity::ALL {
            for side in Side::ALL {
                for piece in PieceKind::ALL {
                    for square in 0..64u8 {
                        space.push(StratumKey::Attack { answer, side, piece, square });
                    }
                }
            }
        }
        space
    }

    fn passes(&self) -> Vec<ScanPass> {
        Side::ALL
            .iter()
            .flat_map(|s| {
                PieceKind::ALL[1..]
                    .iter()
                    .map(move |p| ScanPass::SidePiece(*s, *p))
            })
            .collect()
    }

    fn sample(&self, trajectory: &Trajectory, pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let ScanPass::SidePiece(side, piece) = pass else {
            return Ok(());
        };

        let window = ctx.advance(trajectory, START, END);
        scan_plies(ctx, window, |ctx, w| {
            let board  = w.board();
            let pieces = board.pieces_of(piece, side);
            let Some(&from) = pieces.choose(ctx.rng()) else {
                return Ok(false);
            };

            let attacked = board.attacks_of(from);
            let Some(&square) = attacked.choose(ctx.rng()) else {
                return Ok(false);
            };

            let yes = StratumKey::Attack { answer: Polarity::Yes, side, piece, square };
            if ctx.offer(yes, "yes", w, MIN_MOVES, |rng| templates::attack(rng, side, piece, square))? {
                return Ok(true);
            }

            let square: u8 = ctx.rng().gen_range(0..64);
            if attacked.contains(&square) {
                return Ok(false);
            }

            let no = StratumKey::Attack { answer: Polarity::No, side, piece, square };
            ctx.offer(no, "no", w, MIN_MOVES, |rng| templates::attack(rng, side, piece, square))
        })
    }
}

// ─── IsAttacked ───────────────────────────────────────────────────────────────
pub struct IsAttacked;

impl CategoryStrategy for IsAttacked {
    fn category(&self) -> Category {
        Category::IsAttacked
    }

    fn stratum_space(&self) -> Vec<StratumKey> {
        let mut space = Vec::with_capacity(12 * 12);
        for attacker_side in Side::ALL {
            for attacker_piece in PieceKind::ALL {
                for side in Side::ALL {
                    for piece in PieceKind::ALL {
                        space.push(StratumKey::Attacker { attacker_side, attacker_piece, side, piece });
                    }
                }
            }
        }
        space
    }

    fn sample(&self, trajectory: &Trajectory, _pass: ScanPass, ctx: &mut SamplingContext<'_>) -> Result<()> {
        let window = ctx.advance(trajectory, START, END);
        scan_plies(ctx, window, |ctx, w| {
            let Some(found) = find_sole_attack(w.board(), ctx.rng()) else {
                return Ok(false);
            };

            let SoleAttack { side, piece, square, attacker_side, attacker_piece } = found;
            let key = StratumKey::Attacker { attacker_side, attacker_piece, side, piece };
            ctx.offer(
                key,
                format!("{attacker_side}{attacker_piece}"),
                w,
                MIN_MOVES,
                |rng| templates::is_attacked(rng, side, piece, square),
            )
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{opera, qgd};
    use crate::domain::piece::square_id;
    use crate::sampling::strategies::testing::sample_rounds;
    use rand::{rngs::StdRng, SeedableRng};

    fn side_named(name: &str) -> Side {
        Side::ALL.into_iter().find(|s| s.name() == name).unwrap()
    }

    fn piece_named(name: &str) -> PieceKind {
        PieceKind::ALL.into_iter().find(|p| p.name() == name).unwrap()
    }

    #[test]
    fn test_pawns_have_no_attack_pass() {
        let passes = Attack.passes();
        assert_eq!(passes.len(), 10);
        assert!(passes
            .iter()
            .all(|p| !matches!(p, ScanPass::SidePiece(_, PieceKind::Pawn))));
    }

    #[test]
    fn test_sole_attacker_found() {
        // Only the white knight on e4 attacks the black pawn on f6
        let b       = BoardView::from_fen("4k3/8/5p2/8/4N3/8/8/4K3 w - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let found   = find_sole_attack(&b, &mut rng).unwrap();

        assert_eq!(found.side, Side::Black);
        assert_eq!(found.piece, PieceKind::Pawn);
        assert_eq!(found.square, square_id("f6").unwrap());
        assert_eq!(found.attacker_side, Side::White);
        assert_eq!(found.attacker_piece, PieceKind::Knight);
    }

    #[test]
    fn test_two_attackers_are_ambiguous() {
        // Knight e4 and rook f1 both hit f6
        let b = BoardView::from_fen("4k3/8/5p2/8/4N3/8/8/4KR2 w - - 0 1").unwrap();
        assert_eq!(sole_attacker(&b, Side::Black, square_id("f6").unwrap()), None);
    }

    #[test]
    fn test_nothing_attacked_from_start() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(find_sole_attack(&BoardView::default(), &mut rng), None);
    }

    #[test]
    fn test_attack_yes_records_are_true() {
        let records = sample_rounds(&Attack, &qgd(), 60, 5, 7);
        assert!(!records.is_empty());

        for r in records.iter().filter(|r| r.answer == "yes") {
            let words: Vec<&str> = r.question.split(' ').collect();
            let (side, piece, sq) = if words[0] == "does" {
                (words[1], words[2], words[4])
            } else {
                (words[5], words[6], words[1])
            };
            let b      = BoardView::from_fen(&r.fen).unwrap();
            let square = square_id(sq).unwrap();
            let hit    = b
                .pieces_of(piece_named(piece), side_named(side))
                .into_iter()
                .any(|from| b.attacks_of(from).contains(&square));
            assert!(hit, "{}", r.question);
            assert_ne!(piece, "pawn");
        }
    }

    #[test]
    fn test_is_attacked_answers_name_the_only_attacker() {
        let records = sample_rounds(&IsAttacked, &opera(), 30, 10, 8);
        assert!(!records.is_empty());

        for r in &records {
            let words: Vec<&str> = r.question.split(' ').collect();
            let n      = words.len();
            let side   = side_named(words[n - 4]);
            let square = square_id(words[n - 1]).unwrap();
            let b      = BoardView::from_fen(&r.fen).unwrap();

            let (attacker_side, attacker_piece) = sole_attacker(&b, side, square).unwrap();
            assert_eq!(r.answer, format!("{attacker_side}{attacker_piece}"));
        }
    }
}
