// src/freq/mod.rs
// =============================================================================
// This module turns a list of file URLs into a letter-frequency table.
//
// Features:
// - Downloads each file's raw text, strictly one at a time
// - Keeps only ASCII letters, folded to lowercase
// - Accumulates counts across ALL files into a single table
//
// Why sequential?
// - The table is the only shared state in the program
// - With one writer there is nothing to lock and nothing to race
//
// Rust concepts:
// - HashMap: The frequency table (letter -> count)
// - Result and ?: Download failures here abort the run
// =============================================================================

mod analyze;

// Re-export the public API
pub use analyze::{analyze_files, tally_letters, LetterFrequency};
