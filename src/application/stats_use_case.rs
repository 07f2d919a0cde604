// ============================================================
// Layer 2 — Stats Use Case
// ============================================================
// Audits one generated partition (e.g. output/7):
//   1. Read every q*.txt record in the directory
//   2. Count how often each answer label occurs
//   3. Count records whose move signature was already seen
//
// A healthy partition has a flat-ish histogram and zero
// duplicates.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::sampling::uniqueness::signature;

/// What a partition contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionStats {
    pub records:    usize,
    pub answers:    BTreeMap<String, usize>,
    pub duplicates: usize,
}

pub struct StatsUseCase {
    path: PathBuf,
}

impl StatsUseCase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn execute(&self) -> Result<PartitionStats> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.path)
            .with_context(|| format!("Cannot read partition '{}'", self.path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| is_record_file(p))
            .collect();
        files.sort();

        let mut stats = PartitionStats::default();
        let mut seen  = HashSet::new();

        for file in &files {
            let text = fs::read_to_string(file)
                .with_context(|| format!("Cannot read record '{}'", file.display()))?;
            let (moves, answer) = parse_line(text.trim_end_matches('\n'))
                .with_context(|| format!("Malformed record '{}'", file.display()))?;

            let moves: Vec<String> = moves.split_whitespace().map(String::from).collect();
            if !seen.insert(signature(&moves)) {
                stats.duplicates += 1;
            }
            *stats.answers.entry(answer.to_string()).or_insert(0) += 1;
            stats.records += 1;
        }

        tracing::info!(
            "{} records in '{}', {} distinct answers, {} duplicates",
            stats.records,
            self.path.display(),
            stats.answers.len(),
            stats.duplicates
        );
        Ok(stats)
    }
}

fn is_record_file(path: &Path) -> bool {
    let stem_ok = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map_or(false, |s| s.starts_with('q'));
    stem_ok && path.extension().map_or(false, |ext| ext == "txt")
}

/// Split a record line into its moves and answer fields.
fn parse_line(line: &str) -> Result<(&str, &str)> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 4 {
        bail!("expected 4 tab-separated fields, found {}", fields.len());
    }
    Ok((fields[1], fields[3]))
}
