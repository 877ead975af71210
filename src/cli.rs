// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   pdf-link-guardian docs/manual.pdf build/pdfs/ --timeout 10 --json
// =============================================================================

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "pdf-link-guardian",
    version,
    about = "Check all URLs embedded in your PDFs",
    long_about = "pdf-link-guardian extracts every hyperlink annotation from the given PDF files \
                  (or every *.pdf below the given directories) and checks that each URL is reachable. \
                  It exits non-zero when any link is broken, which makes it a drop-in CI check for \
                  generated documentation."
)]
pub struct Cli {
    /// Paths to PDF files or directories that should be checked
    ///
    /// Directories are searched recursively for files ending in .pdf
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output results in JSON format instead of tables
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5, value_name = "SECS")]
    pub timeout: u64,

    /// Maximum number of requests in flight per document
    ///
    /// Defaults to 4x the available CPU cores, capped at 32
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// User-Agent header sent with every request
    ///
    /// Some servers reject bot-like agents, so a browser string is the default
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// What to do when a PDF cannot be parsed
    #[arg(long, value_enum, default_value_t = ParseErrorPolicy::Skip)]
    pub on_parse_error: ParseErrorPolicy,

    /// Show progress logging (same as RUST_LOG=info)
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the batch reacts to a document that fails to parse
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ParseErrorPolicy {
    /// Report the file, keep checking the rest, and fail the run at the end
    #[default]
    Skip,
    /// Stop the whole run at the first unreadable file
    Abort,
}
