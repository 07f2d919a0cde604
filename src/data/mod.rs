// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the PGN file on disk and a board state
// the category strategies can question:
//
//   .pgn file
//       │
//       ▼
//   PgnLoader   → parses games, keeps the main line only
//       │
//       ▼
//   Trajectory  → root position + moves (+ SAN), Layer 3
//       │
//       ▼
//   walker      → random fast-forward, then ply-by-ply steps
//
// Reference: pgn-reader crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Reads PGN game records into trajectories
pub mod loader;

/// Walks trajectories to a random ply and beyond
pub mod walker;

#[cfg(test)]
pub mod fixtures;
