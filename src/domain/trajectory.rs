// ============================================================
// Layer 3 — Trajectory Domain Type
// ============================================================
// The main line of one recorded game: a root position plus the
// moves played from it. Side variations in the source record
// are never part of a trajectory.
//
// The SAN text of every move is computed once when the
// trajectory is built, so walking it later only needs to
// replay moves, not re-render notation.
//
// Trajectories are immutable once loaded and shared read-only
// across every category run.

use shakmaty::san::SanPlus;
use shakmaty::{Chess, Move};

#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Where the game came from (e.g. "game 17"), for log messages
    source: String,

    /// Position before the first move
    root: Chess,

    /// Main-line moves in play order
    moves: Vec<Move>,

    /// SAN of each move, parallel to `moves`
    sans: Vec<String>,
}

impl Trajectory {
    /// Build a trajectory from a root position and the legal
    /// moves played from it.
    pub fn new(source: impl Into<String>, root: Chess, moves: Vec<Move>) -> Self {
        let mut pos  = root.clone();
        let sans     = moves
            .iter()
            .map(|m| SanPlus::from_move_and_play_unchecked(&mut pos, m).to_string())
            .collect();

        Self {
            source: source.into(),
            root,
            moves,
            sans,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Chess {
        &self.root
    }

    /// Number of plies on the main line
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn move_at(&self, ply: usize) -> Option<&Move> {
        self.moves.get(ply)
    }

    pub fn san_at(&self, ply: usize) -> Option<&str> {
        self.sans.get(ply).map(String::as_str)
    }
}

#[cfg(test)]
impl Trajectory {
    /// Build a trajectory from a space-separated SAN line,
    /// e.g. "e4 e5 Nf3". Move numbers are not accepted.
    pub fn from_san_line(source: impl Into<String>, root: Chess, line: &str) -> anyhow::Result<Self> {
        use anyhow::anyhow;
        use shakmaty::Position;

        let mut pos   = root.clone();
        let mut moves = Vec::new();

        for token in line.split_whitespace() {
            let san: SanPlus = token
                .parse()
                .map_err(|e| anyhow!("bad SAN '{token}': {e}"))?;
            let m = san
                .san
                .to_move(&pos)
                .map_err(|e| anyhow!("illegal move '{token}': {e}"))?;
            pos.play_unchecked(&m);
            moves.push(m);
        }

        Ok(Self::new(source, root, moves))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_san_is_precomputed_with_suffixes() {
        let t = Trajectory::from_san_line(
            "scholar",
            Chess::default(),
            "e4 e5 Bc4 Nc6 Qh5 Nf6 Qxf7",
        )
        .unwrap();

        assert_eq!(t.len(), 7);
        assert_eq!(t.san_at(0), Some("e4"));
        // Mate is detected while the SAN is rendered
        assert_eq!(t.san_at(6), Some("Qxf7#"));
        assert_eq!(t.san_at(7), None);
    }

    #[test]
    fn test_illegal_line_is_rejected() {
        let t = Trajectory::from_san_line("bad", Chess::default(), "e4 e4");
        assert!(t.is_err());
    }

    #[test]
    fn test_empty_line() {
        let t = Trajectory::from_san_line("empty", Chess::default(), "").unwrap();
        assert!(t.is_empty());
    }
}
