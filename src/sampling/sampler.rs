// ============================================================
// Layer 5 — Stratified Quota Sampler
// ============================================================
// The control loop shared by all 15 categories:
//
//   build quotas from the strategy's stratum space
//   while accepted < target:
//       shuffle the corpus order           (one outer pass)
//       for each scan pass of the strategy (per side / piece / …)
//           for each trajectory in shuffled order
//               stop this scan pass if its stratum is full
//               let the strategy sample the trajectory
//
// Only the order of indices is shuffled; the corpus itself is
// never reordered or modified, so it can be shared read-only
// across categories.
//
// Some strata may never fill (a piece/square combination that
// the corpus never shows). A run that has not reached its
// target after `max_passes` outer passes fails with
// `SamplingError::QuotaUnreachable`; `max_passes = 0` keeps
// looping until the target is reached.
//
// Reference: rand crate documentation (SliceRandom::shuffle)

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::stratum::StratumKey;
use crate::domain::trajectory::Trajectory;
use crate::domain::traits::RecordSink;
use crate::sampling::context::SamplingContext;
use crate::sampling::quota::QuotaTable;
use crate::sampling::strategies::strategy_for;

/// Default bound on outer corpus passes
pub const DEFAULT_MAX_PASSES: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error(
        "category {category}: only {accepted}/{target} samples after {passes} corpus passes \
         ({empty_strata} strata never filled)"
    )]
    QuotaUnreachable {
        category:     Category,
        accepted:     usize,
        target:       usize,
        passes:       usize,
        empty_strata: usize,
    },

    #[error("category {0}: the corpus has no games to sample from")]
    EmptyCorpus(Category),
}

/// What one category run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub category: Category,
    pub accepted: usize,
    pub target:   usize,
    pub passes:   usize,
    pub quota:    usize,
    pub strata:   BTreeMap<StratumKey, usize>,
}

impl RunSummary {
    fn from_quotas(category: Category, accepted: usize, target: usize, passes: usize, quotas: &QuotaTable) -> Self {
        Self {
            category,
            accepted,
            target,
            passes,
            quota: quotas.quota(),
            strata: quotas.iter().map(|(k, c)| (k.clone(), c)).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sampler {
    target:     usize,
    max_passes: usize,
    seed:       u64,
}

impl Sampler {
    pub fn new(target: usize, max_passes: usize, seed: u64) -> Self {
        Self { target, max_passes, seed }
    }

    /// Random seed used for one category. Each category gets its
    /// own stream, so a category's output does not depend on
    /// which other categories ran before it.
    pub fn category_seed(&self, category: Category) -> u64 {
        self.seed.wrapping_add(u64::from(category.id()))
    }

    /// Generate `target` records of `category` into `sink`.
    pub fn run(
        &self,
        category: Category,
        corpus:   &[Trajectory],
        sink:     &mut dyn RecordSink,
    ) -> Result<RunSummary> {
        let strategy = strategy_for(category);
        let quotas   = QuotaTable::new(strategy.stratum_space(), self.target, strategy.slack());

        tracing::info!(
            "Category {}: {} strata, quota {} per stratum",
            category,
            quotas.unique_answers(),
            quotas.quota()
        );

        if self.target == 0 {
            return Ok(RunSummary::from_quotas(category, 0, 0, 0, &quotas));
        }
        if corpus.is_empty() {
            return Err(SamplingError::EmptyCorpus(category).into());
        }

        let mut order: Vec<usize> = (0..corpus.len()).collect();
        let mut ctx    = SamplingContext::new(category, quotas, self.target, self.category_seed(category), sink);
        let mut passes = 0;

        while !ctx.is_done() {
            if self.max_passes > 0 && passes >= self.max_passes {
                return Err(SamplingError::QuotaUnreachable {
                    category,
                    accepted:     ctx.accepted(),
                    target:       self.target,
                    passes,
                    empty_strata: ctx.quotas().empty_strata(),
                }
                .into());
            }

            order.shuffle(ctx.rng());
            passes += 1;

            'passes: for pass in strategy.passes() {
                for &index in &order {
                    if strategy.pass_saturated(pass, ctx.quotas()) {
                        break;
                    }
                    let trajectory = &corpus[index];
                    strategy
                        .sample(trajectory, pass, &mut ctx)
                        .with_context(|| format!("Cannot sample {}", trajectory.source()))?;
                    if ctx.is_done() {
                        break 'passes;
                    }
                }
            }

            tracing::debug!("Category {}: pass {} done, {} accepted", category.id(), passes, ctx.accepted());
        }

        tracing::info!("Category {}: {} samples in {} corpus passes", category, ctx.accepted(), passes);

        Ok(RunSummary::from_quotas(category, ctx.accepted(), self.target, passes, ctx.quotas()))
    }
}
