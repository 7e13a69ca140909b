// src/config.rs
// =============================================================================
// This module loads the repository settings from a JSON file.
//
// The settings describe WHAT to scan:
// - Which listing API to talk to (ApiBase)
// - Which repository (Owner + Repo)
// - Which files count as source files (TargetExtensions)
// - How to identify ourselves to the server (UserAgent)
//
// Every key is required - there are no defaults. A missing or malformed
// settings file is a fatal startup error, caught before we ever touch
// the network.
//
// Rust concepts:
// - serde Deserialize: Turn JSON into a typed struct automatically
// - anyhow::Context: Attach human-readable context to errors
// - Immutability: The settings are loaded once and never change
// =============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

// The repository settings, loaded once at startup
//
// #[serde(rename_all = "PascalCase")] maps our snake_case field names to
// the PascalCase keys used in the settings file (ApiBase, Owner, ...).
// #[serde(deny_unknown_fields)] makes typos in key names an error instead
// of silently ignoring them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Settings {
    /// Root URL of the listing API (e.g., "https://api.github.com/repos")
    pub api_base: String,

    /// Repository owner (user or organization name)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// File-name suffixes that mark a file as worth analyzing
    /// (e.g., [".js", ".ts"])
    pub target_extensions: Vec<String>,

    /// Client identification string sent as the User-Agent header
    /// on every request (GitHub rejects requests without one)
    pub user_agent: String,
}

// Loads and validates settings from a JSON file
//
// Parameters:
//   path: location of the settings file
//
// Returns: Result<Settings>
//   Success: the parsed, validated settings
//   Error: file missing, JSON malformed, a key missing, or ApiBase not a URL
pub fn load(path: &Path) -> Result<Settings> {
    // Read the whole file into a String
    // .with_context() attaches the file name to any I/O error so the user
    // knows which file we were looking for
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read settings file '{}'", path.display()))?;

    // Parse the JSON into our Settings struct
    // serde rejects missing keys for us because none of the fields
    // are Option or have defaults
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("settings file '{}' is not valid", path.display()))?;

    // ApiBase must at least parse as a URL, otherwise every request
    // we build from it would be garbage
    Url::parse(&settings.api_base)
        .with_context(|| format!("ApiBase '{}' is not a valid URL", settings.api_base))?;

    Ok(settings)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is with_context()?
//    - An anyhow extension method on Result
//    - Wraps the underlying error with an extra message
//    - The closure only runs if there actually is an error (lazy)
//
// 2. Why validate ApiBase here and not later?
//    - Fail fast: a bad URL should stop the program before any
//      network activity, not halfway through a scan
//
// 3. Why Vec<String> for extensions?
//    - The file holds a JSON array of suffix strings
//    - We only ever iterate it, so a Vec is the simplest fit
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Helper: write `contents` to a file inside a temp dir and load it
    fn load_from_str(contents: &str) -> Result<Settings> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterlens.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        load(&path)
    }

    #[test]
    fn test_load_valid_settings() {
        let settings = load_from_str(
            r#"{
                "ApiBase": "https://api.github.com/repos",
                "Owner": "rust-lang",
                "Repo": "rust",
                "TargetExtensions": [".js", ".ts"],
                "UserAgent": "letter-lens"
            }"#,
        )
        .unwrap();

        assert_eq!(settings.api_base, "https://api.github.com/repos");
        assert_eq!(settings.owner, "rust-lang");
        assert_eq!(settings.repo, "rust");
        assert_eq!(settings.target_extensions, vec![".js", ".ts"]);
        assert_eq!(settings.user_agent, "letter-lens");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        // No UserAgent key - must fail, there are no defaults
        let result = load_from_str(
            r#"{
                "ApiBase": "https://api.github.com/repos",
                "Owner": "rust-lang",
                "Repo": "rust",
                "TargetExtensions": [".js"]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = load_from_str("{ this is not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_api_base_is_an_error() {
        let result = load_from_str(
            r#"{
                "ApiBase": "not a url at all",
                "Owner": "rust-lang",
                "Repo": "rust",
                "TargetExtensions": [".js"],
                "UserAgent": "letter-lens"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("does-not-exist.json"));
        assert!(result.is_err());
    }
}
