// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The vocabulary of the dataset generator: what a question
// category is, which sides and piece kinds exist, how an
// answer class (a "stratum") is keyed, and what one emitted
// question/answer record looks like.
//
// Rules for this layer:
//   - NO file I/O
//   - NO sampling policy (that's Layer 5)
//   - Only plain Rust structs, enums, and traits
//
// The one exception is `Trajectory`, which stores the moves of
// a game as rules-engine moves so the walker can replay them
// without re-parsing notation.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The 15 question categories and range parsing
pub mod category;

// Sides and piece kinds as they appear in question text
pub mod piece;

// Stratum keys: one answer class of one category
pub mod stratum;

// A recorded game's main line
pub mod trajectory;

// One accepted question/answer sample
pub mod qa_record;

// Core abstractions (traits) that other layers implement
pub mod traits;
