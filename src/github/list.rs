// src/github/list.rs
// =============================================================================
// This module walks a repository tree through the listing API and collects
// download URLs for every file matching the configured extensions.
//
// Strategy:
// - GET {ApiBase}/{Owner}/{Repo}/contents/{path} returns one directory's
//   entries as a JSON array
// - Files whose name ends with a target extension contribute their
//   download_url; directories are recursed into depth-first
// - Entries are processed in the order the API returns them, so the
//   resulting URL list is deterministic
//
// Error policy (important!):
// - A failure while listing ONE directory must not abort the whole scan.
//   We log a warning and treat that subtree as empty, then carry on with
//   its siblings. Only the affected branch goes missing from the result.
//
// Rust concepts:
// - serde Deserialize: Typed decoding of the API's JSON
// - BoxFuture: How an async function is allowed to call itself
// - Option<String>: download_url is absent for directories
// =============================================================================

use anyhow::{anyhow, Result};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Settings;

// One entry of a directory listing as the API reports it
//
// The API also sends fields we don't care about (sha, size, html_url, ...);
// serde simply skips anything we haven't declared.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoEntry {
    /// Entry name (e.g., "index.ts")
    pub name: String,

    /// Repository-relative path (e.g., "lib/util.js")
    pub path: String,

    /// Whether this is a file, a directory, or something else
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Direct link to the raw file contents; None for directories and
    /// occasionally absent on files (submodule-ish entries)
    pub download_url: Option<String>,
}

// The listing API's "type" field
//
// #[serde(other)] soaks up any type string we don't recognize
// ("symlink", "submodule", whatever gets added next) so new API values
// never break deserialization - we just ignore those entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory (can contain other entries)
    Dir,
    /// Anything else - silently ignored
    #[serde(other)]
    Other,
}

// Lists every matching file in the repository, starting from the root
//
// Parameters:
//   client: the shared HTTP client (already carries the User-Agent)
//   settings: which repository to walk and which extensions to keep
//
// Returns: Vec<String> of download URLs in depth-first traversal order.
//
// Note this does NOT return a Result: listing failures are recovered
// per-directory (see collect_files), so the worst case is an empty Vec.
pub async fn list_matching_files(client: &Client, settings: &Settings) -> Vec<String> {
    // Empty path = the repository root
    collect_files(client, settings, String::new()).await
}

// Recursively collects matching download URLs under one directory
//
// An async fn can't call itself directly (the compiler can't size the
// future), so we return a BoxFuture and recurse through that.
fn collect_files<'a>(
    client: &'a Client,
    settings: &'a Settings,
    path: String,
) -> BoxFuture<'a, Vec<String>> {
    async move {
        // Fetch this directory's listing; on any failure, warn and treat
        // the subtree as empty so the rest of the scan keeps going
        let entries = match fetch_dir_listing(client, settings, &path).await {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Warning: could not list '{}': {:#}", path, e);
                return Vec::new();
            }
        };

        let mut files = Vec::new();

        // Process entries in API order - no sorting, so traversal order
        // (and therefore the result order) is deterministic
        for entry in entries {
            match entry.kind {
                EntryKind::File => {
                    if has_target_extension(&entry.name, &settings.target_extensions) {
                        // A matching file without a download URL is skipped,
                        // not an error - there's simply nothing to fetch
                        if let Some(url) = entry.download_url {
                            files.push(url);
                        }
                    }
                }
                EntryKind::Dir => {
                    // Depth-first: finish this subtree before moving on
                    // to the next sibling entry
                    let nested = collect_files(client, settings, entry.path).await;
                    files.extend(nested);
                }
                EntryKind::Other => {
                    // Symlinks, submodules, future API inventions: ignored
                }
            }
        }

        files
    }
    .boxed()
}

// Fetches one directory's listing and decodes it
//
// URL shape: {ApiBase}/{Owner}/{Repo}/contents/{path}
// (path is empty for the repository root)
async fn fetch_dir_listing(
    client: &Client,
    settings: &Settings,
    path: &str,
) -> Result<Vec<RepoEntry>> {
    let url = format!(
        "{}/{}/{}/contents/{}",
        settings.api_base.trim_end_matches('/'),
        settings.owner,
        settings.repo,
        path
    );

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("listing {} returned HTTP {}", url, response.status()));
    }

    // .json() both downloads the body and deserializes it
    let entries = response.json::<Vec<RepoEntry>>().await?;
    Ok(entries)
}

// Does this file name end with any of the configured extensions?
fn has_target_extension(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BoxFuture?
//    - Each async fn compiles to a fixed-size state machine
//    - A recursive one would have to contain itself - infinite size!
//    - Boxing the future puts it on the heap, breaking the cycle
//    - .boxed() from futures::FutureExt does the wrapping for us
//
// 2. Why does the path parameter take String instead of &str?
//    - The recursive call hands over entry.path, which the entry owns
//    - Taking it by value moves it into the boxed future, so there are
//      no lifetime knots between parent and child calls
//
// 3. What is #[serde(other)]?
//    - A catch-all enum variant for deserialization
//    - Any unrecognized string lands there instead of causing an error
//
// 4. Why warn-and-continue instead of returning the error?
//    - One flaky or permission-restricted subdirectory shouldn't throw
//      away the results from the rest of the repository
//    - The caller still gets a report, just over fewer files
// -----------------------------------------------------------------------------
