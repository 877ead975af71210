// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Turn the given paths into a list of PDF files
// 3. Check every link in every PDF, printing a report per file
// 4. Exit with proper code (0 = success, 1 = broken links, 2 = error)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod batch;    // src/batch.rs - per-file and whole-run orchestration
mod checker;  // src/checker/ - link checking logic
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - resolved runtime settings
mod error;    // src/error.rs - typed errors
mod extract;  // src/extract/ - pulling links out of PDFs
mod report;   // src/report/ - console and JSON output
mod scan;     // src/scan.rs - finding PDF files

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::CheckerConfig;
use log::info;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links (or unreadable PDFs) found
//   Err   = internal error, including an aborted run under --on-parse-error abort
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CheckerConfig::from_cli(&cli);
    info!("Using {:?}", config);

    let pdf_paths = scan::collect_pdf_paths(&cli.paths);
    if pdf_paths.is_empty() {
        if !cli.json {
            println!("⚠️  No PDF files found to check");
        }
        return Ok(0);
    }

    if !cli.json {
        println!("🔍 Checking links in {} PDF file(s)...", pdf_paths.len());
    }

    // One client for the whole run (connection pooling)
    let probe = checker::ReqwestProbe::new(&config)?;

    let json = cli.json;
    let outcome = batch::check_documents(&pdf_paths, &probe, &config, |document| {
        if !json {
            report::print_document_report(document);
        }
    })
    .await?;

    info!(
        "Checked {} document(s), {} broken link(s)",
        outcome.summary.documents().len(),
        outcome.summary.total_errors()
    );

    if json {
        report::print_json_report(&outcome.reports, &outcome.summary)?;
    }

    let verdict: Result<(), report::RunFailure> = outcome.summary.into_result();
    match verdict {
        Ok(()) => {
            if !json {
                println!("\n✅ No broken links found");
            }
            Ok(0)
        }
        Err(failure) => {
            eprintln!("\n\n{}", failure);
            Ok(1)
        }
    }
}

// RUST_LOG wins; otherwise warnings only, or info with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
