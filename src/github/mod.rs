// src/github/mod.rs
// =============================================================================
// This module handles listing files in a repository through its hosted
// browsing API (the GitHub Contents API shape).
//
// Currently implements:
// - Recursive, depth-first traversal of the repository tree
// - Filtering entries by configured file-name extensions
// - Collecting the raw download URL of every matching file
//
// Future enhancements (stretch goals):
// - Pagination for directories with more than 1000 entries
// - Authentication for private repos and higher rate limits
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod list;

// Re-export the main function from list.rs
pub use list::list_matching_files;
