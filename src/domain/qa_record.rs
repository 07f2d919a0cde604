// ============================================================
// Layer 3 — QaRecord Domain Type
// ============================================================
// One accepted question/answer sample. A record is created
// once, handed to a RecordSink, and never changed afterwards.
//
// On disk a record becomes one tab-separated line:
//
//   question \t moves (space-joined SAN) \t FEN \t answer
//
// Example:
//   is white in check	e4 e5 Qh5 Nc6 Bc4 Nf6 Qxf7	r1bqkb1r/pppp1Qpp/...	no
//
// The move list keeps check marks ('+') but a trailing mate
// marker ('#') is stripped, matching how the dataset has always
// been written.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    /// Sequential index within the category partition (0..N-1)
    pub id: usize,

    /// The natural language question
    pub question: String,

    /// SAN moves from the start of the game to the sampled position
    pub moves: Vec<String>,

    /// FEN of the sampled (ending) position
    pub fen: String,

    /// The answer label, e.g. "yes", "12", "whiteknight"
    pub answer: String,
}

impl QaRecord {
    pub fn new(
        id:       usize,
        question: impl Into<String>,
        moves:    Vec<String>,
        fen:      impl Into<String>,
        answer:   impl Into<String>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            moves,
            fen:      fen.into(),
            answer:   answer.into(),
        }
    }

    /// Space-joined move history with a trailing '#' removed.
    pub fn moves_field(&self) -> String {
        let joined = self.moves.join(" ");
        match joined.strip_suffix('#') {
            Some(trimmed) => trimmed.to_string(),
            None          => joined,
        }
    }

    /// The tab-separated text line written for this record
    /// (without the trailing newline).
    pub fn to_tsv_line(&self) -> String {
        [
            self.question.as_str(),
            self.moves_field().as_str(),
            self.fen.as_str(),
            self.answer.as_str(),
        ]
        .join("\t")
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
    fn test_mate_marker_is_stripped() {
        let r = QaRecord::new(0, "is this a checkmate", moves("e4 e5 Qh5 Nc6 Bc4 Nf6 Qxf7#"), "fen", "yes");
        assert_eq!(r.moves_field(), "e4 e5 Qh5 Nc6 Bc4 Nf6 Qxf7");
    }

    #[test]
    fn test_check_marker_is_kept() {
        let r = QaRecord::new(0, "q", moves("e4 f5 Qh5+"), "fen", "yes");
        assert_eq!(r.moves_field(), "e4 f5 Qh5+");
    }

    #[test]
    fn test_tsv_line_has_four_fields() {
        let r    = QaRecord::new(3, "how many pieces are there", moves("e4 d5 exd5"), "some fen", "31");
        let line = r.to_tsv_line();
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields, vec!["how many pieces are there", "e4 d5 exd5", "some fen", "31"]);
    }
}
