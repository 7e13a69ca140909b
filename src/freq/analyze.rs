// src/freq/analyze.rs
// =============================================================================
// This module downloads file contents and counts letters.
//
// How it works:
// 1. For each URL in the input list (in order), fetch the raw text
// 2. Throw away every character that isn't an ASCII letter
//    (digits, punctuation, whitespace, emoji, accents - all gone)
// 3. Lowercase what survives and bump its count in the shared table
//
// Error policy (deliberately different from listing!):
// - A download failure here is NOT recovered. It propagates up with ?,
//   the remaining files are never fetched, and no report is printed.
//   Listing tolerates a bad directory; analysis does not tolerate a
//   bad file. Both behaviors are part of the program's contract.
//
// Rust concepts:
// - HashMap entry API: insert-or-update in one expression
// - char methods: is_ascii_alphabetic(), to_ascii_lowercase()
// - anyhow::Context: Which URL failed, attached to the error
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::collections::HashMap;

// The frequency table: lowercase ASCII letter -> occurrence count
//
// Invariant: keys are only ever 'a'..='z', and counts only grow
// while the table is being built.
pub type LetterFrequency = HashMap<char, u64>;

// Downloads every referenced file and folds its letters into one table
//
// Parameters:
//   client: the shared HTTP client (same one the listing used)
//   urls: download URLs, processed strictly in this order
//
// Returns: Result<LetterFrequency>
//   Success: combined counts across all files
//   Error: the first download that fails aborts the whole run
pub async fn analyze_files(client: &Client, urls: &[String]) -> Result<LetterFrequency> {
    let mut table = LetterFrequency::new();

    // One file at a time - no buffer_unordered, no join_all.
    // The await point is where the single-threaded run suspends.
    for url in urls {
        let text = fetch_file_text(client, url)
            .await
            .with_context(|| format!("could not download '{}'", url))?;

        tally_letters(&text, &mut table);
    }

    Ok(table)
}

// Adds one text's letters to the table
//
// Only ASCII letters count; everything else is dropped. Case is folded,
// so 'A' and 'a' land in the same bucket.
//
// Separated from the download loop so it can be tested without a server.
pub fn tally_letters(text: &str, table: &mut LetterFrequency) {
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            // entry() gets the existing count or inserts 0 first,
            // so the first occurrence of a letter starts at 0 + 1
            *table.entry(ch.to_ascii_lowercase()).or_insert(0) += 1;
        }
    }
}

// Fetches one file's raw text content
async fn fetch_file_text(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }

    // .text() decodes the body; whatever encoding comes back is
    // assumed to be readable as text
    let text = response.text().await?;
    Ok(text)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the entry API?
//    - table.entry(key) looks up a key and lets you fill in a default
//    - .or_insert(0) inserts 0 if the key is new, then hands back a
//      mutable reference either way
//    - The leading * dereferences that reference so += can modify it
//
// 2. Why u64 counts?
//    - Large repositories hold a LOT of letters
//    - u64 never overflows in practice (18 quintillion letters)
//
// 3. Why is the order of files irrelevant to the result?
//    - Addition commutes: summing per-letter counts in any order
//      gives the same totals
//    - We still fetch in order so behavior is predictable
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_tally_keeps_only_ascii_letters() {
        let mut table = LetterFrequency::new();
        tally_letters("Ab1! a\tB\ncafé 🎉", &mut table);

        // Survivors: A, b, a, B, c, a, f. The 'é' is not ASCII,
        // so "café" contributes only c, a, f.
        assert_eq!(table.get(&'a'), Some(&3));
        assert_eq!(table.get(&'b'), Some(&2));
        assert_eq!(table.get(&'c'), Some(&1));
        assert_eq!(table.get(&'f'), Some(&1));
        // Digits, punctuation, whitespace, non-ASCII: all absent
        assert_eq!(table.len(), 4);
        assert!(table.keys().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_tally_accumulates_across_calls() {
        let mut table = LetterFrequency::new();
        tally_letters("aa", &mut table);
        tally_letters("aB", &mut table);

        assert_eq!(table.get(&'a'), Some(&3));
        assert_eq!(table.get(&'b'), Some(&1));
    }

    #[test]
    fn test_tally_order_independent_totals() {
        let mut forward = LetterFrequency::new();
        tally_letters("Hello, World!", &mut forward);
        tally_letters("abcABC", &mut forward);

        let mut backward = LetterFrequency::new();
        tally_letters("abcABC", &mut backward);
        tally_letters("Hello, World!", &mut backward);

        assert_eq!(forward, backward);
    }

    #[tokio::test]
    async fn test_analyze_empty_input_gives_empty_table() {
        let client = Client::new();
        let table = analyze_files(&client, &[]).await.unwrap();
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_combines_counts_across_files() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raw/one.ts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Hello, World!"))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/raw/two.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string("abcABC"))
            .mount(&server)
            .await;

        let urls = vec![
            format!("{}/raw/one.ts", server.uri()),
            format!("{}/raw/two.js", server.uri()),
        ];

        let client = Client::new();
        let table = analyze_files(&client, &urls).await.unwrap();

        // "helloworld": h e l l o w o r l d
        assert_eq!(table.get(&'l'), Some(&3));
        assert_eq!(table.get(&'o'), Some(&2));
        assert_eq!(table.get(&'h'), Some(&1));
        assert_eq!(table.get(&'d'), Some(&1));
        // "abcabc"
        assert_eq!(table.get(&'a'), Some(&2));
        assert_eq!(table.get(&'b'), Some(&2));
        assert_eq!(table.get(&'c'), Some(&2));
    }

    #[tokio::test]
    async fn test_analyze_download_failure_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raw/gone.js"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let urls = vec![format!("{}/raw/gone.js", server.uri())];
        let client = Client::new();

        // Unlike listing, this failure is NOT swallowed
        let result = analyze_files(&client, &urls).await;
        assert!(result.is_err());
    }
}
