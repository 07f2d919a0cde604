// ============================================================
// Layer 6 — Run Reports
// ============================================================
// Two small files make a generated dataset reproducible and
// auditable:
//
//   <out>/generate_config.json  the effective configuration of
//                               the run (seed, categories,
//                               corpus, target, ...)
//   <out>/<id>/strata.csv       one row per stratum of the
//                               category with its final count
//
// Example strata.csv for category 10:
//   stratum,count,quota
//   2,0,50
//   3,0,50
//   ...
//   28,3,50
//
// Reference: Rust Book §12 (I/O and File Handling)
//            serde_json crate documentation

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::generate_use_case::GenerateConfig;
use crate::infra::record_writer::partition_dir;
use crate::sampling::sampler::RunSummary;

const CONFIG_FILE: &str = "generate_config.json";
const STRATA_FILE: &str = "strata.csv";

/// Writes and reads the report files under one output root.
pub struct ReportWriter {
    root: PathBuf,
}

impl ReportWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Save the effective run configuration as pretty JSON.
    pub fn save_config(&self, cfg: &GenerateConfig) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Cannot create output root '{}'", self.root.display()))?;

        let path = self.root.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved generation config to '{}'", path.display());
        Ok(())
    }

    /// Write `strata.csv` into the category's partition.
    pub fn write_strata(&self, summary: &RunSummary) -> Result<PathBuf> {
        let path = partition_dir(&self.root, summary.category).join(STRATA_FILE);

        let mut csv = String::from("stratum,count,quota\n");
        for (key, count) in &summary.strata {
            writeln!(csv, "{key},{count},{}", summary.quota)?;
        }

        fs::write(&path, csv)
            .with_context(|| format!("Cannot write strata report '{}'", path.display()))?;
        Ok(path)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::piece::Polarity;
    use crate::domain::stratum::StratumKey;
    use std::collections::BTreeMap;

    #[test]
    fn test_config_round_trip() {
        let root   = tempfile::tempdir().unwrap();
        let report = ReportWriter::new(root.path());
        let cfg    = GenerateConfig { seed: 7, q_type: "3-5".into(), ..GenerateConfig::default() };

        report.save_config(&cfg).unwrap();
        let json   = fs::read_to_string(root.path().join("generate_config.json")).unwrap();
        let loaded: GenerateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.seed, 7);
        assert_eq!(loaded.q_type, "3-5");
    }

    #[test]
    fn test_strata_csv_lists_every_stratum() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("0")).unwrap();

        let mut strata = BTreeMap::new();
        strata.insert(StratumKey::Answer(Polarity::Yes), 1);
        strata.insert(StratumKey::Answer(Polarity::No), 2);
        let summary = RunSummary {
            category: Category::Checkmate,
            accepted: 3,
            target:   3,
            passes:   4,
            quota:    2,
            strata,
        };

        let path = ReportWriter::new(root.path()).write_strata(&summary).unwrap();
        assert_eq!(path, root.path().join("0").join("strata.csv"));
        let csv = fs::read_to_string(path).unwrap();
        assert_eq!(csv, "stratum,count,quota\nyes,1,2\nno,2,2\n");
    }
}
