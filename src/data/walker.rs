// ============================================================
// Layer 4 — Trajectory Walker
// ============================================================
// Fast-forwards through a trajectory to a random ply, then
// lets the caller keep stepping one ply at a time.
//
//   advance(trajectory, 5, 100, rng)
//       │   draws target ∈ [5, 100], e.g. 23
//       ▼
//   Window { moves: [e4, e5, ... 23 SANs], board @ ply 23 }
//       │
//       ▼   window.step() — ply 24, one more SAN appended
//       ▼   window.step() — ply 25, ...
//
// If the trajectory is shorter than the target, the window
// stops at its last position. A trajectory with no moves gives
// an empty window (ply 0); callers must skip it.
//
// The only randomness is the target ply, drawn from the rng the
// caller passes in, so a fixed seed replays the same walks.
//
// Reference: Rust Book §13 (Iterators), rand crate documentation

use rand::Rng;

use crate::domain::trajectory::Trajectory;
use crate::infra::rules::BoardView;

// ─── Cursor ───────────────────────────────────────────────────────────────────
/// A position along a trajectory that can step forward.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    trajectory: &'t Trajectory,

    /// Plies played so far
    ply: usize,

    board: BoardView,
}

impl<'t> Cursor<'t> {
    /// Cursor at the root of the trajectory
    pub fn new(trajectory: &'t Trajectory) -> Self {
        Self {
            trajectory,
            ply:   0,
            board: BoardView::new(trajectory.root().clone()),
        }
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    /// Play the next main-line move and return its SAN.
    pub fn step(&mut self) -> Option<&'t str> {
        let m   = self.trajectory.move_at(self.ply)?;
        let san = self.trajectory.san_at(self.ply)?;
        self.board.play(m);
        self.ply += 1;
        Some(san)
    }
}

// ─── Window ───────────────────────────────────────────────────────────────────
/// The state reached by a walk: move history plus a cursor.
#[derive(Debug, Clone)]
pub struct Window<'t> {
    moves:  Vec<String>,
    cursor: Cursor<'t>,
}

impl<'t> Window<'t> {
    /// True when the walk could not take a single step
    pub fn is_empty(&self) -> bool {
        self.cursor.ply() == 0
    }

    pub fn ply(&self) -> usize {
        self.cursor.ply()
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn board(&self) -> &BoardView {
        self.cursor.board()
    }

    /// Advance one ply, extending the move history.
    /// Returns false at the end of the trajectory.
    pub fn step(&mut self) -> bool {
        match self.cursor.step() {
            Some(san) => {
                self.moves.push(san.to_string());
                true
            }
            None => false,
        }
    }

    /// Step until the trajectory ends; returns the number of
    /// plies taken.
    pub fn fast_forward_to_end(&mut self) -> usize {
        let mut steps = 0;
        while self.step() {
            steps += 1;
        }
        steps
    }
}

/// Walk from the root of `trajectory` to a uniformly drawn ply
/// in `[min_ply, max_ply]`, or to its end if it is shorter.
pub fn advance<'t, R: Rng + ?Sized>(
    trajectory: &'t Trajectory,
    min_ply:    usize,
    max_ply:    usize,
    rng:        &mut R,
) -> Window<'t> {
    let target = rng.gen_range(min_ply..=max_ply.max(min_ply));

    let mut window = Window {
        moves:  Vec::with_capacity(target.min(trajectory.len())),
        cursor: Cursor::new(trajectory),
    };

    while window.ply() < target && window.step() {}

    window
}

/// Walk the trajectory behind `window` again from its root, with
/// a fresh target drawn from a new range.
pub fn rewalk<'t, R: Rng + ?Sized>(
    window:  &Window<'t>,
    min_ply: usize,
    max_ply: usize,
    rng:     &mut R,
) -> Window<'t> {
    advance(window.cursor.trajectory, min_ply, max_ply, rng)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::opera;
    use rand::{rngs::StdRng, SeedableRng};
    use shakmaty::Chess;

    #[test]
    fn test_fixed_target_reaches_exact_ply() {
        let t       = opera();
        let mut rng = StdRng::seed_from_u64(1);
        let w       = advance(&t, 5, 5, &mut rng);

        assert_eq!(w.ply(), 5);
        assert_eq!(w.moves(), &["e4", "e5", "Nf3", "d6", "d4"]);
        assert!(!w.is_empty());
    }

    #[test]
    fn test_target_past_end_stops_at_last_position() {
        let t       = opera();
        let mut rng = StdRng::seed_from_u64(1);
        let w       = advance(&t, 100, 100, &mut rng);

        assert_eq!(w.ply(), 33);
        assert_eq!(w.ply(), t.len());
        assert!(w.board().is_checkmate());
        assert_eq!(w.moves().last().map(String::as_str), Some("Rd8#"));
    }

    #[test]
    fn test_target_is_within_range() {
        let t       = opera();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let w = advance(&t, 5, 20, &mut rng);
            assert!((5..=20).contains(&w.ply()));
            assert_eq!(w.moves().len(), w.ply());
        }
    }

    #[test]
    fn test_empty_trajectory_gives_empty_window() {
        let t       = Trajectory::from_san_line("empty", Chess::default(), "").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let w       = advance(&t, 5, 100, &mut rng);
        assert!(w.is_empty());
        assert!(w.moves().is_empty());
    }

    #[test]
    fn test_step_extends_history() {
        let t       = opera();
        let mut rng = StdRng::seed_from_u64(3);
        let mut w   = advance(&t, 30, 30, &mut rng);

        assert!(w.step());
        assert_eq!(w.ply(), 31);
        assert_eq!(w.moves().len(), 31);
        assert_eq!(w.fast_forward_to_end(), 2);
        assert!(!w.step());
        assert!(w.board().is_checkmate());
    }

    #[test]
    fn test_rewalk_restarts_from_root() {
        let t       = opera();
        let mut rng = StdRng::seed_from_u64(9);
        let late    = advance(&t, 30, 30, &mut rng);
        let early   = rewalk(&late, 5, 5, &mut rng);

        assert_eq!(early.ply(), 5);
        assert_eq!(early.moves(), &late.moves()[..5]);
    }

    #[test]
    fn test_same_seed_same_walk() {
        let t = opera();
        let a = advance(&t, 5, 30, &mut StdRng::seed_from_u64(42)).ply();
        let b = advance(&t, 5, 30, &mut StdRng::seed_from_u64(42)).ply();
        assert_eq!(a, b);
    }
}
