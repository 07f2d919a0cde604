// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `generate` — samples QA records for a range of categories
//   2. `stats`    — audits one generated category partition
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GenerateArgs, StatsArgs};

/// The main CLI struct, parsed by the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "board-qa",
    version = "0.1.0",
    about = "Generate chess board-state question/answer datasets from PGN games."
)]
pub struct Cli {
    /// The subcommand to run (generate or stats)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => Self::run_generate(args),
            Commands::Stats(args)    => Self::run_stats(args),
        }
    }

    /// Handles the `generate` subcommand.
    fn run_generate(args: GenerateArgs) -> Result<()> {
        use crate::application::generate_use_case::GenerateUseCase;

        tracing::info!("Generating categories {} from: {}", args.q_type, args.pgn_file);

        let use_case  = GenerateUseCase::new(args.into());
        let summaries = use_case.execute()?;

        for s in &summaries {
            println!(
                "category {}: {}/{} records in {} passes (quota {} per stratum)",
                s.category, s.accepted, s.target, s.passes, s.quota
            );
        }
        Ok(())
    }

    /// Handles the `stats` subcommand.
    fn run_stats(args: StatsArgs) -> Result<()> {
        use crate::application::stats_use_case::StatsUseCase;

        let stats = StatsUseCase::new(&args.path).execute()?;

        println!("{} records, {} duplicate signatures", stats.records, stats.duplicates);
        for (answer, count) in &stats.answers {
            println!("{answer:>16}  {count}");
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generate_use_case::GenerateConfig;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["board-qa", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let cfg: GenerateConfig = args.into();
        assert_eq!(cfg.seed, 0);
        assert_eq!(cfg.q_type, "2-14");
        assert_eq!(cfg.matches, 100);
        assert_eq!(cfg.total_count, 100);
        assert_eq!(cfg.path, "output");
        assert!(cfg.images);
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "board-qa", "generate", "--q-type", "7", "--matches", "-1", "--no-images", "--max-passes", "0",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let cfg: GenerateConfig = args.into();
        assert_eq!(cfg.q_type, "7");
        assert_eq!(cfg.max_games(), None);
        assert_eq!(cfg.max_passes, 0);
        assert!(!cfg.images);
    }

    #[test]
    fn test_run_dispatches_stats() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("q6_0.txt"), "is white in check\te4 e5\tfen\tno\n").unwrap();

        let path = dir.path().to_string_lossy().into_owned();
        let cli  = Cli::try_parse_from(["board-qa", "stats", "--path", path.as_str()]).unwrap();
        cli.run().unwrap();
    }

    #[test]
    fn test_stats_requires_path() {
        assert!(Cli::try_parse_from(["board-qa", "stats"]).is_err());
        assert!(Cli::try_parse_from(["board-qa", "stats", "--path", "output/7"]).is_ok());
    }
}
