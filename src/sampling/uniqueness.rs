// ============================================================
// Layer 5 — Uniqueness Filter
// ============================================================
// Remembers the move sequences already used in one category
// run. Two samples with the same moves would show the same
// position, so the second one is rejected.
//
// The signature is the plain concatenation of the SAN moves
// ("e4e5Nf3"), exactly what the dataset has always used as its
// de-duplication key.

use std::collections::HashSet;

/// Signature of a move history
pub fn signature(moves: &[String]) -> String {
    moves.concat()
}

#[derive(Debug, Default, Clone)]
pub struct UniquenessFilter {
    seen: HashSet<String>,
}

impl UniquenessFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_new(&self, moves: &[String]) -> bool {
        !self.seen.contains(&signature(moves))
    }

    /// Remember a signature. Returns false if it was already known.
    pub fn insert(&mut self, moves: &[String]) -> bool {
        self.seen.insert(signature(moves))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn moves(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_rejects_repeat() {
        let mut f = UniquenessFilter::new();
        let m     = moves("e4 e5 Nf3");

        assert!(f.is_new(&m));
        assert!(f.insert(&m));
        assert!(!f.is_new(&m));
        assert!(!f.insert(&m));
    }

    #[test]
    fn test_different_lines_are_distinct() {
        let mut f = UniquenessFilter::new();
        f.insert(&moves("e4 e5"));
        assert!(f.is_new(&moves("e4 e6")));
        assert!(f.is_new(&moves("e4")));
    }

    #[test]
    fn test_signature_is_concatenation() {
        assert_eq!(signature(&moves("e4 e5 Nf3")), "e4e5Nf3");
    }
}
