// src/batch.rs
// =============================================================================
// Runs the whole pipeline over a list of PDFs.
//
// For each file, one after the other:
// 1. Load the PDF (blocking pool)
// 2. Extract (page, url) records from its annotations
// 3. Validate them concurrently
// 4. Build the DocumentReport, hand it to the caller for printing, and
//    remember its error count in the RunSummary
//
// A PDF that can't be parsed is either recorded and skipped, or stops the
// run, depending on ParseErrorPolicy.
// =============================================================================

use crate::checker::{validate_links, HttpProbe};
use crate::cli::ParseErrorPolicy;
use crate::config::CheckerConfig;
use crate::error::DocumentParseError;
use crate::extract::{extract_links, load_document, page_count};
use crate::report::{DocumentReport, RunSummary};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Everything a finished batch produced
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// One report per readable PDF, in processing order
    pub reports: Vec<DocumentReport>,
    pub summary: RunSummary,
}

/// Extracts and validates every link in one PDF
pub async fn check_document<P: HttpProbe>(
    path: &Path,
    probe: &P,
    config: &CheckerConfig,
) -> Result<DocumentReport, DocumentParseError> {
    let records = {
        let document = load_document(path.to_path_buf()).await?;
        extract_links(&document, 0, page_count(&document))
    };
    info!("{}: checking {} link(s)", path.display(), records.len());

    let results = validate_links(probe, records, config.concurrency).await;
    Ok(DocumentReport::from_results(path, results))
}

/// Checks every PDF in `paths`, calling `on_report` as each one finishes.
///
/// Only returns Err under `ParseErrorPolicy::Abort`.
pub async fn check_documents<P, F>(
    paths: &[PathBuf],
    probe: &P,
    config: &CheckerConfig,
    mut on_report: F,
) -> Result<BatchOutcome, DocumentParseError>
where
    P: HttpProbe,
    F: FnMut(&DocumentReport),
{
    let mut outcome = BatchOutcome::default();

    for path in paths {
        match check_document(path, probe, config).await {
            Ok(report) => {
                info!(
                    "{}: {} link(s), {} broken",
                    path.display(),
                    report.link_count(),
                    report.error_count()
                );
                on_report(&report);
                outcome.summary.record(path, report.error_count());
                outcome.reports.push(report);
            }
            Err(e) if config.parse_error_policy == ParseErrorPolicy::Skip => {
                error!("{}", e);
                eprintln!("⚠️  Skipping {}: {}", path.display(), e.reason);
                outcome.summary.record_unreadable(path, e.reason);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcome)
}
