// ============================================================
// Layer 5 — Sampling Context
// ============================================================
// All mutable state of ONE category run, in one place:
//
//   rng       → the only random source; seeded per run
//   quotas    → per-stratum counters
//   seen      → signatures already used
//   accepted  → records emitted so far
//   sink      → where accepted records go
//
// A fresh context is built for every category, so nothing
// leaks from one category's run into the next.
//
// Strategies never touch the counters directly. They propose a
// candidate through `offer`, and the context applies the one
// acceptance rule shared by every category:
//
//   1. the stratum is below its quota
//   2. the move history is longer than `min_moves`
//   3. the move sequence has not been used in this category
//   4. the run has not reached its target yet
//
// Reference: rand crate documentation (StdRng, SeedableRng)

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::walker::{self, Window};
use crate::domain::category::Category;
use crate::domain::qa_record::QaRecord;
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::domain::traits::RecordSink;
use crate::sampling::quota::QuotaTable;
use crate::sampling::uniqueness::UniquenessFilter;

pub struct SamplingContext<'s> {
    category: Category,
    rng:      StdRng,
    quotas:   QuotaTable,
    seen:     UniquenessFilter,
    accepted: usize,
    target:   usize,
    sink:     &'s mut dyn RecordSink,
}

impl<'s> SamplingContext<'s> {
    pub fn new(
        category: Category,
        quotas:   QuotaTable,
        target:   usize,
        seed:     u64,
        sink:     &'s mut dyn RecordSink,
    ) -> Self {
        Self {
            category,
            rng: StdRng::seed_from_u64(seed),
            quotas,
            seen: UniquenessFilter::new(),
            accepted: 0,
            target,
            sink,
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn quotas(&self) -> &QuotaTable {
        &self.quotas
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn is_done(&self) -> bool {
        self.accepted >= self.target
    }

    /// Has the move history of `window` not been used yet?
    pub fn is_fresh(&self, window: &Window<'_>) -> bool {
        self.seen.is_new(window.moves())
    }

    /// Walk a trajectory to a random ply in `[min_ply, max_ply]`
    /// using this run's random source.
    pub fn advance<'t>(&mut self, trajectory: &'t Trajectory, min_ply: usize, max_ply: usize) -> Window<'t> {
        walker::advance(trajectory, min_ply, max_ply, &mut self.rng)
    }

    /// Walk the trajectory behind `window` again from its root.
    pub fn rewalk<'t>(&mut self, window: &Window<'t>, min_ply: usize, max_ply: usize) -> Window<'t> {
        walker::rewalk(window, min_ply, max_ply, &mut self.rng)
    }

    /// Propose the current state of `window` as a sample.
    ///
    /// `question` is only rendered when the sample is accepted.
    /// Returns whether the sample was accepted.
    pub fn offer<Q>(
        &mut self,
        key:       StratumKey,
        answer:    impl Into<String>,
        window:    &Window<'_>,
        min_moves: usize,
        question:  Q,
    ) -> Result<bool>
    where
        Q: FnOnce(&mut StdRng) -> String,
    {
        let moves = window.moves();

        if !self.quotas.has_room(&key)
            || moves.len() <= min_moves
            || !self.seen.is_new(moves)
            || self.is_done()
        {
            return Ok(false);
        }

        let record = QaRecord::new(
            self.accepted,
            question(&mut self.rng),
            moves.to_vec(),
            window.board().fen(),
            answer,
        );
        self.sink.emit(&record)?;

        self.quotas.record(&key);
        self.seen.insert(moves);
        self.accepted += 1;

        tracing::debug!(
            "{}/{} generated for category {}. answer types per question {}",
            self.accepted,
            self.target,
            self.category.id(),
            self.quotas.unique_answers()
        );

        Ok(true)
    }
}
