// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// letter-lens deliberately has a tiny CLI: everything that describes the
// repository to scan lives in the settings file, so the only argument is
// an optional path to that file.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - PathBuf: An owned filesystem path
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "letter-lens",
    version = "0.1.0",
    about = "Scan a GitHub repository's source files and report letter frequency",
    long_about = "letter-lens walks a repository through its hosted listing API, downloads \
                  every file matching the configured extensions, and prints an aggregate \
                  letter-frequency table sorted by descending count."
)]
pub struct Cli {
    /// Path to the JSON settings file describing the repository to scan
    ///
    /// This is a positional argument; when omitted we look for
    /// `letterlens.json` in the current directory.
    #[arg(default_value = "letterlens.json")]
    pub config: PathBuf,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic (including --help and --version)
//    - Debug: generates code to print the struct for debugging
//
// 2. Why PathBuf instead of String?
//    - PathBuf is the owned type for filesystem paths
//    - It handles platform differences (slashes, encodings) for us
//    - clap knows how to parse an argument straight into one
//
// 3. What does default_value do?
//    - If the user doesn't provide the argument, clap fills it in
//    - That's how "optional positional argument" is spelled in clap
// -----------------------------------------------------------------------------
