// src/report/summary.rs
// =============================================================================
// The end-of-run verdict.
//
// RunSummary remembers, for every PDF we looked at, how many broken links it
// had (plus the PDFs we couldn't read at all). The run fails if any of those
// numbers is non-zero; the failure message lists the offending files.
// =============================================================================

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A PDF that could not be parsed, kept so the run can report it at the end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableDocument {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// (path, error count) in processing order, zero counts included
    documents: Vec<(PathBuf, usize)>,
    unreadable: Vec<UnreadableDocument>,
}

impl RunSummary {
    pub fn record(&mut self, path: &Path, error_count: usize) {
        self.documents.push((path.to_path_buf(), error_count));
    }

    pub fn record_unreadable(&mut self, path: &Path, reason: impl Into<String>) {
        self.unreadable.push(UnreadableDocument {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    pub fn documents(&self) -> &[(PathBuf, usize)] {
        &self.documents
    }

    pub fn unreadable(&self) -> &[UnreadableDocument] {
        &self.unreadable
    }

    pub fn total_errors(&self) -> usize {
        self.documents.iter().map(|(_, count)| count).sum()
    }

    pub fn is_success(&self) -> bool {
        self.total_errors() == 0 && self.unreadable.is_empty()
    }

    /// Ok when nothing is broken, otherwise the RunFailure to show the user
    pub fn into_result(self) -> Result<(), RunFailure> {
        if self.is_success() {
            return Ok(());
        }

        Err(RunFailure {
            broken: self
                .documents
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .collect(),
            unreadable: self.unreadable,
        })
    }
}

/// Terminal condition of a run with broken links or unreadable PDFs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_failure(.broken, .unreadable))]
pub struct RunFailure {
    /// Only the documents with at least one broken link
    pub broken: Vec<(PathBuf, usize)>,
    pub unreadable: Vec<UnreadableDocument>,
}

// "Found the following PDFs with unavailable links: a.pdf: 2, b.pdf: 1"
// followed by one "Could not read ..." line per unreadable PDF
fn render_failure(broken: &[(PathBuf, usize)], unreadable: &[UnreadableDocument]) -> String {
    let mut lines = Vec::new();
    if !broken.is_empty() {
        let entries: Vec<String> = broken
            .iter()
            .map(|(path, count)| format!("{}: {}", path.display(), count))
            .collect();
        lines.push(format!(
            "Found the following PDFs with unavailable links: {}",
            entries.join(", ")
        ));
    }
    lines.extend(
        unreadable
            .iter()
            .map(|doc| format!("Could not read {}: {}", doc.path.display(), doc.reason)),
    );
    lines.join("\n")
}
