// ============================================================
// Layer 4 — PGN Corpus Loader
// ============================================================
// Reads a file of concatenated PGN game records with the
// pgn-reader crate and turns each game into a Trajectory.
//
// How pgn-reader works:
//   BufferedReader streams the file and calls back into a
//   Visitor for every token of one game:
//
//     begin_game → header* → end_headers → san* → end_game
//
//   begin_variation lets the visitor skip side lines; we always
//   skip them, so a trajectory is the game's main line only.
//
// Robustness:
//   - A [FEN] header replaces the standard start position.
//   - If a SAN token does not resolve to a legal move, the game
//     is cut at that point; the moves before it are kept.
//   - If the FEN header itself is bad, the game is skipped with
//     a warning rather than aborting the whole corpus.
//
// Reference: pgn-reader crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use pgn_reader::{BufferedReader, RawHeader, SanPlus, Skip, Visitor};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Move, Position};
use std::{fs::File, io::Read, path::Path};

use crate::domain::trajectory::Trajectory;
use crate::domain::traits::CorpusSource;

/// Loads up to `max_games` games from a PGN file.
/// Implements the CorpusSource trait from Layer 3.
pub struct PgnLoader {
    /// Path to the .pgn file
    path: String,

    /// Stop after this many games (None = read the whole file)
    max_games: Option<usize>,
}

impl PgnLoader {
    pub fn new(path: impl Into<String>, max_games: Option<usize>) -> Self {
        Self {
            path: path.into(),
            max_games,
        }
    }
}

impl CorpusSource for PgnLoader {
    fn load_all(&self) -> Result<Vec<Trajectory>> {
        let file = File::open(Path::new(&self.path))
            .with_context(|| format!("Cannot open PGN file '{}'", self.path))?;

        let games = read_trajectories(file, self.max_games)
            .with_context(|| format!("Cannot read PGN file '{}'", self.path))?;

        let empty = games.iter().filter(|g| g.is_empty()).count();
        if empty > 0 {
            tracing::warn!("{} games in '{}' have no moves and can never be sampled", empty, self.path);
        }

        tracing::info!("Total {} games have been read from '{}'", games.len(), self.path);
        Ok(games)
    }
}

/// Read trajectories from any PGN byte stream.
pub fn read_trajectories<R: Read>(reader: R, max_games: Option<usize>) -> Result<Vec<Trajectory>> {
    let mut reader  = BufferedReader::new(reader);
    let mut visitor = MainLineVisitor::default();
    let mut games   = Vec::new();
    let mut seen    = 0usize;

    while max_games.map_or(true, |max| seen < max) {
        let Some(outcome) = reader.read_game(&mut visitor)? else {
            break;
        };
        seen += 1;

        match outcome {
            Some(trajectory) => games.push(trajectory),
            None => tracing::warn!("Skipping game {}: unusable FEN header", seen),
        }
    }

    Ok(games)
}

// ─── Visitor ──────────────────────────────────────────────────────────────────
/// Collects the main line of one game at a time.
#[derive(Default)]
struct MainLineVisitor {
    /// Games seen so far, used to name trajectories
    index: usize,

    pos:    Chess,
    root:   Chess,
    moves:  Vec<Move>,

    /// Set once a move fails to resolve; later moves are ignored
    broken: bool,

    /// Set when a FEN header cannot be turned into a position
    bad_setup: bool,
}

impl Visitor for MainLineVisitor {
    type Result = Option<Trajectory>;

    fn begin_game(&mut self) {
        self.pos       = Chess::default();
        self.root      = Chess::default();
        self.moves     = Vec::new();
        self.broken    = false;
        self.bad_setup = false;
    }

    fn header(&mut self, key: &[u8], value: RawHeader<'_>) {
        if !key.eq_ignore_ascii_case(b"FEN") {
            return;
        }

        let setup = Fen::from_ascii(value.as_bytes())
            .ok()
            .and_then(|fen| fen.into_position::<Chess>(CastlingMode::Standard).ok());

        match setup {
            Some(pos) => {
                self.root = pos.clone();
                self.pos  = pos;
            }
            None => self.bad_setup = true,
        }
    }

    fn end_headers(&mut self) -> Skip {
        Skip(self.bad_setup)
    }

    fn san(&mut self, san_plus: SanPlus) {
        if self.broken {
            return;
        }

        match san_plus.san.to_move(&self.pos) {
            Ok(m) => {
                self.pos.play_unchecked(&m);
                self.moves.push(m);
            }
            Err(_) => {
                tracing::debug!(
                    "Game {}: '{}' is not legal after {} plies, truncating",
                    self.index + 1,
                    san_plus,
                    self.moves.len()
                );
                self.broken = true;
            }
        }
    }

    fn begin_variation(&mut self) -> Skip {
        // Main line only
        Skip(true)
    }

    fn end_game(&mut self) -> Self::Result {
        self.index += 1;

        if self.bad_setup {
            return None;
        }

        let root  = std::mem::take(&mut self.root);
        let moves = std::mem::take(&mut self.moves);
        Some(Trajectory::new(format!("game {}", self.index), root, moves))
    }
}
