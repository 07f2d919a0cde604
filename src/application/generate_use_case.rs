// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Produces a dataset for every selected category:
//
//   Step 1: Parse the category selection ("2-14")  (Layer 3 - domain)
//   Step 2: Load the PGN corpus once               (Layer 4 - data)
//   Step 3: Save the effective config              (Layer 6 - infra)
//   Step 4: Per category, in id order:
//             recreate its partition directory     (Layer 6 - infra)
//             run the quota sampler                (Layer 5 - sampling)
//             write the strata report              (Layer 6 - infra)
//
// The corpus is shared read-only by all categories; every
// category run builds its own quotas, uniqueness set and rng.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::PgnLoader;
use crate::domain::category::parse_selection;
use crate::domain::traits::CorpusSource;
use crate::infra::{record_writer::RecordWriter, report::ReportWriter};
use crate::sampling::sampler::{RunSummary, Sampler, DEFAULT_MAX_PASSES};

// ─── Generation Configuration ────────────────────────────────────────────────
// Everything that determines the output of a run. Saved next to
// the dataset so the same dataset can be generated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub seed:        u64,
    pub q_type:      String,
    pub pgn_file:    String,
    /// Games to read; zero or negative reads the whole file
    pub matches:     i64,
    pub total_count: usize,
    pub path:        String,
    /// Outer corpus passes before giving up; 0 never gives up
    pub max_passes:  usize,
    pub images:      bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            seed:        0,
            q_type:      "2-14".to_string(),
            pgn_file:    "data/chess.pgn".to_string(),
            matches:     100,
            total_count: 100,
            path:        "output".to_string(),
            max_passes:  DEFAULT_MAX_PASSES,
            images:      true,
        }
    }
}

impl GenerateConfig {
    pub fn max_games(&self) -> Option<usize> {
        usize::try_from(self.matches).ok().filter(|n| *n > 0)
    }
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase {
    config: GenerateConfig,
}

impl GenerateUseCase {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Generate every selected category; returns one summary per
    /// category in id order.
    pub fn execute(&self) -> Result<Vec<RunSummary>> {
        let cfg = &self.config;

        // ── Step 1: Which categories ─────────────────────────────────────────
        let categories = parse_selection(&cfg.q_type)?;

        // ── Step 2: Load the corpus ──────────────────────────────────────────
        let loader = PgnLoader::new(&cfg.pgn_file, cfg.max_games());
        let corpus = loader.load_all()?;

        // ── Step 3: Record what this run is ──────────────────────────────────
        let root   = PathBuf::from(&cfg.path);
        let report = ReportWriter::new(&root);
        report.save_config(cfg)?;

        // ── Step 4: One sampler run per category ─────────────────────────────
        let sampler       = Sampler::new(cfg.total_count, cfg.max_passes, cfg.seed);
        let mut summaries = Vec::with_capacity(categories.len());

        for category in categories {
            let mut writer = RecordWriter::recreate(&root, category, cfg.images)?;
            let summary    = sampler
                .run(category, &corpus, &mut writer)
                .with_context(|| format!("Generation failed for category {category}"))?;

            report.write_strata(&summary)?;
            tracing::info!("DONE! {} ({} files in '{}')", category, writer.written(), writer.dir().display());
            summaries.push(summary);
        }

        Ok(summaries)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{OPERA_GAME, QGD_LINE};
    use std::fs;

    /// Move text with move numbers, as PGN expects
    fn numbered(line: &str) -> String {
        line.split_whitespace()
            .enumerate()
            .map(|(i, san)| if i % 2 == 0 { format!("{}. {san}", i / 2 + 1) } else { san.to_string() })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn pgn_file(dir: &std::path::Path) -> String {
        let pgn = format!(
            "[Event \"opera\"]\n\n{} 1-0\n\n[Event \"qgd\"]\n\n{} *\n",
            numbered(OPERA_GAME),
            numbered(QGD_LINE)
        );
        let path = dir.join("games.pgn");
        fs::write(&path, pgn).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_generates_partitions_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let cfg = GenerateConfig {
            q_type:      "9-10".into(),
            pgn_file:    pgn_file(dir.path()),
            matches:     -1,
            total_count: 3,
            path:        out.to_string_lossy().into_owned(),
            images:      false,
            ..GenerateConfig::default()
        };

        let summaries = GenerateUseCase::new(cfg).execute().unwrap();
        assert_eq!(summaries.len(), 2);

        for id in ["9", "10"] {
            let part  = out.join(id);
            let texts = fs::read_dir(&part)
                .unwrap()
                .filter(|e| e.as_ref().unwrap().path().extension().map_or(false, |x| x == "txt"))
                .count();
            assert_eq!(texts, 3);
            assert!(part.join("strata.csv").exists());
        }
        assert!(out.join("generate_config.json").exists());
    }

    #[test]
    fn test_bad_selection_fails_before_loading() {
        let cfg = GenerateConfig {
            q_type:   "15".into(),
            pgn_file: "does/not/exist.pgn".into(),
            ..GenerateConfig::default()
        };
        let err = GenerateUseCase::new(cfg).execute().unwrap_err();
        assert!(err.to_string().contains("15"));
    }

    #[test]
    fn test_non_positive_matches_reads_everything() {
        let cfg = GenerateConfig { matches: -1, ..GenerateConfig::default() };
        assert_eq!(cfg.max_games(), None);
        let cfg = GenerateConfig { matches: 0, ..GenerateConfig::default() };
        assert_eq!(cfg.max_games(), None);
        let cfg = GenerateConfig { matches: 5, ..GenerateConfig::default() };
        assert_eq!(cfg.max_games(), Some(5));
    }
}
