// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (generating a dataset or auditing one).
//
// Rules for this layer:
//   - No chess rules or sampling policy here
//   - No UI or printing here (that's Layer 1)
//   - No direct file writing (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset generation workflow
pub mod generate_use_case;

// The partition audit workflow
pub mod stats_use_case;
