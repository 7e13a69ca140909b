// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the repository settings (fatal if missing or malformed)
// 3. List matching files through the repository's browsing API
// 4. Download each file and count its letters
// 5. Print the frequency table, biggest counts first
//
// Rust concepts used:
// - async/await: Because each network request suspends the run
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Sorting: To order the report by descending count
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - settings file loading
mod freq; // src/freq/ - letter counting logic
mod github; // src/github/ - repository listing logic

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use freq::LetterFrequency;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Configuration problems and download failures both land here:
            // print the error chain and exit nonzero, with no report
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(()) = report printed
//   Err = fatal error (bad settings, or a file download failed)
async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Load settings BEFORE doing anything on the network
    let settings = config::load(&cli.config)?;

    // One HTTP client for the entire run: the listing requests and the
    // file downloads all share it, and it carries the identification
    // header on every request. No timeout is configured - a hung call
    // hangs the run.
    let client = reqwest::Client::builder()
        .user_agent(settings.user_agent.clone())
        .build()
        .context("could not build HTTP client")?;

    println!("🔍 Scanning {}/{}", settings.owner, settings.repo);

    // Walk the repository tree and collect download URLs.
    // A bad subdirectory only shrinks this list, it never aborts us.
    let files = github::list_matching_files(&client, &settings).await;

    println!("📄 Found {} file(s) to analyze", files.len());

    // Download and count. A failure HERE does abort the run (the ?).
    let table = freq::analyze_files(&client, &files).await?;

    print!("{}", render_report(&table));

    Ok(())
}

// Renders the frequency table as a multi-line report
//
// Format:
//   Letter Frequency (Descending):
//   e: 120
//   t: 97
//   ...
//
// Letters with equal counts come out in whatever order the unstable
// sort leaves them - the contract only promises descending counts.
fn render_report(table: &LetterFrequency) -> String {
    // Pull the map into a Vec so it can be sorted
    let mut counts: Vec<(char, u64)> = table.iter().map(|(&c, &n)| (c, n)).collect();

    // b vs a (not a vs b) = descending
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1));

    let mut report = String::from("Letter Frequency (Descending):\n");
    for (letter, count) in counts {
        report.push_str(&format!("{}: {}\n", letter, count));
    }

    report
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why collect the HashMap into a Vec before sorting?
//    - HashMap has no order at all (iteration order is arbitrary)
//    - A Vec of (letter, count) pairs can be sorted however we like
//
// 2. What is sort_unstable_by?
//    - Sorts with a custom comparison function
//    - "Unstable" means equal elements may swap places - fine here,
//      since we make no promise about tie order
//    - It's slightly faster than the stable sort
//
// 3. Why print! instead of println! for the report?
//    - render_report already ends every line (including the last)
//      with '\n', so println! would add a blank line
// -----------------------------------------------------------------------------
