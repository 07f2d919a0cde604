// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two boundaries of the sampling engine:
//
//   CorpusSource → where trajectories come from
//                  (PgnLoader reads a PGN file)
//   RecordSink   → where accepted samples go
//                  (RecordWriter writes image + text per sample,
//                   tests collect records in memory)
//
// The sampler only sees these traits, so it can be tested
// without touching the filesystem.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::qa_record::QaRecord;
use crate::domain::trajectory::Trajectory;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can load a corpus of game trajectories.
pub trait CorpusSource {
    /// Load the corpus in source order.
    fn load_all(&self) -> Result<Vec<Trajectory>>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Receives each accepted record exactly once, in acceptance order.
pub trait RecordSink {
    fn emit(&mut self, record: &QaRecord) -> Result<()>;
}

/// Collecting sink, used by tests and by dry runs.
impl RecordSink for Vec<QaRecord> {
    fn emit(&mut self, record: &QaRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
