// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that talks to a library or the filesystem on
// behalf of the other layers:
//
//   rules.rs          — Chess rules adapter
//                       Wraps a shakmaty position and answers
//                       the board questions the strategies ask
//                       (check, legality, attacks, material).
//
//   renderer.rs       — Board images
//                       Draws a FEN placement as a PNG with the
//                       image crate.
//
//   record_writer.rs  — On-disk RecordSink
//                       One .txt line (and optionally one .png)
//                       per accepted record, in a freshly
//                       recreated partition per category.
//
//   report.rs         — Run reports
//                       generate_config.json for the whole run,
//                       strata.csv per category.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Chess rules adapter over shakmaty
pub mod rules;

/// FEN to PNG rendering
pub mod renderer;

/// Writes accepted records to disk
pub mod record_writer;

/// Config manifest and per-stratum CSV
pub mod report;
