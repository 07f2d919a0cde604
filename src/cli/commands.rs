// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `generate` and `stats`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for bad values
//   - type conversion (string → u64, usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::generate_use_case::GenerateConfig;
use crate::sampling::sampler::DEFAULT_MAX_PASSES;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate question/answer samples from a PGN corpus
    Generate(GenerateArgs),

    /// Print the answer histogram of a generated partition
    Stats(StatsArgs),
}

/// All arguments for the `generate` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Random seed; each category derives its own from it
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Category id or inclusive range of ids, e.g. 7 or 2-14
    #[arg(long, default_value = "2-14")]
    pub q_type: String,

    /// PGN file with the game corpus
    #[arg(long, default_value = "data/chess.pgn")]
    pub pgn_file: String,

    /// Number of games to read from the PGN file (0 or -1 = all)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub matches: i64,

    /// Samples to generate per category
    #[arg(long, default_value_t = 100)]
    pub total_count: usize,

    /// Output root; one sub-directory per category id
    #[arg(long, default_value = "output")]
    pub path: String,

    /// Give up on a category after this many passes over the
    /// corpus (0 = never give up)
    #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
    pub max_passes: usize,

    /// Write only the .txt records, no board images
    #[arg(long)]
    pub no_images: bool,
}

/// Convert CLI GenerateArgs into the application-layer GenerateConfig.
/// The application layer never sees clap types.
impl From<GenerateArgs> for GenerateConfig {
    fn from(a: GenerateArgs) -> Self {
        GenerateConfig {
            seed:        a.seed,
            q_type:      a.q_type,
            pgn_file:    a.pgn_file,
            matches:     a.matches,
            total_count: a.total_count,
            path:        a.path,
            max_passes:  a.max_passes,
            images:      !a.no_images,
        }
    }
}

/// All arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Partition directory, e.g. output/7
    #[arg(long)]
    pub path: String,
}
