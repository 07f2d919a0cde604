// ============================================================
// Layer 5 — Stratum Quotas
// ============================================================
// Keeps one counter per stratum of a category and decides
// whether a stratum can still take samples.
//
// The quota is the same for every stratum of a category:
//
//   quota = target / unique_answers + slack
//
// Example: 100 samples over the 30 board-count strata with
// slack 50 gives 100 / 30 + 50 = 53 per stratum.
//
// The slack lets common strata overshoot their fair share so
// that the run still finishes when rare strata (e.g. a count
// of 2 pieces) hardly ever occur in the corpus.
//
// Keys outside the enumerated space never have room. This is
// how impossible-to-ask answers (e.g. 16 pieces for one side)
// are kept out of the dataset.

use std::collections::BTreeMap;

use crate::domain::stratum::StratumKey;

#[derive(Debug, Clone)]
pub struct QuotaTable {
    quota:  usize,
    counts: BTreeMap<StratumKey, usize>,
}

impl QuotaTable {
    /// Build the table for a fully enumerated stratum space.
    pub fn new(space: Vec<StratumKey>, target: usize, slack: usize) -> Self {
        let counts: BTreeMap<StratumKey, usize> = space.into_iter().map(|k| (k, 0)).collect();
        let quota = target / counts.len().max(1) + slack;

        Self { quota, counts }
    }

    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Size of the stratum space (the "unique answers" count)
    pub fn unique_answers(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, key: &StratumKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Can this stratum take one more sample?
    pub fn has_room(&self, key: &StratumKey) -> bool {
        self.counts.contains_key(key) && self.count(key) < self.quota
    }

    pub fn is_full(&self, key: &StratumKey) -> bool {
        !self.has_room(key)
    }

    /// Count one accepted sample. Unknown keys are ignored.
    pub fn record(&mut self, key: &StratumKey) {
        if let Some(c) = self.counts.get_mut(key) {
            *c += 1;
        }
    }

    /// Strata that never received a sample
    pub fn empty_strata(&self) -> usize {
        self.counts.values().filter(|c| **c == 0).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StratumKey, usize)> {
        self.counts.iter().map(|(k, c)| (k, *c))
    }
}
