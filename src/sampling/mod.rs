// ============================================================
// Layer 5 — Balanced Stratified Sampling
// ============================================================
// Turns a corpus of trajectories into exactly N records per
// category with answers spread evenly over the category's
// strata.
//
//   Sampler::run(category, corpus, sink)
//       │
//       ├── QuotaTable        counters per stratum, capped by quota
//       ├── UniquenessFilter  no move history used twice
//       ├── SamplingContext   rng + both of the above, per run
//       └── CategoryStrategy  walks, classifies, offers candidates
//               │
//               └── templates  question wording
//
// Reference: Rust Book §17 (Object-Oriented Patterns)

/// Per-run state and the shared acceptance rule
pub mod context;

/// Stratum counters and the quota formula
pub mod quota;

/// The outer control loop
pub mod sampler;

/// One strategy per category
pub mod strategies;

/// Question wording
pub mod templates;

/// Move-history signatures
pub mod uniqueness;
