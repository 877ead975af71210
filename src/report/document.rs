// src/report/document.rs
// =============================================================================
// Per-PDF report: how many links fell into each classification, and the
// failed links in the order they appear in the document.
// =============================================================================

use crate::checker::{Classification, LinkResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub classification_counts: BTreeMap<Classification, usize>,
    /// Failed links in discovery order
    pub errors: Vec<LinkResult>,
}

impl DocumentReport {
    /// Builds the report from results that are already in discovery order
    pub fn from_results(path: &Path, results: Vec<LinkResult>) -> Self {
        let mut classification_counts = BTreeMap::new();
        for result in &results {
            *classification_counts
                .entry(result.classification())
                .or_insert(0) += 1;
        }

        // into_iter + filter keeps the original relative order
        let errors = results.into_iter().filter(LinkResult::is_error).collect();

        Self {
            path: path.to_path_buf(),
            classification_counts,
            errors,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of links that were checked
    pub fn link_count(&self) -> usize {
        self.classification_counts.values().sum()
    }
}

/// Prints the counts line and, if needed, the error table
pub fn print_document_report(report: &DocumentReport) {
    println!(
        "\nAnalyzed {}, found the following types of links/http codes: {}",
        report.path.display(),
        format_counts(&report.classification_counts)
    );

    if !report.errors.is_empty() {
        print_error_table(&report.errors);
    }
}

// {mail: 1, 200: 12, error: 2}
fn format_counts(counts: &BTreeMap<Classification, usize>) -> String {
    let entries: Vec<String> = counts
        .iter()
        .map(|(classification, count)| format!("{}: {}", classification, count))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn print_error_table(errors: &[LinkResult]) {
    for line in render_error_table(errors) {
        println!("{}", line);
    }
}

// Org-mode style table, column widths fitted to the content
fn render_error_table(errors: &[LinkResult]) -> Vec<String> {
    let headers = ["Page Number", "URL", "Details"];
    let rows: Vec<[String; 3]> = errors
        .iter()
        .map(|e| {
            [
                e.page_number.to_string(),
                e.url.clone(),
                e.error_detail().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = format!(
        "|-{}-+-{}-+-{}-|",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "| {:<w0$} | {:<w1$} | {:<w2$} |",
        headers[0],
        headers[1],
        headers[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    ));
    lines.push(separator);
    for row in &rows {
        // page numbers right-aligned like numeric columns usually are
        lines.push(format!(
            "| {:>w0$} | {:<w1$} | {:<w2$} |",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        ));
    }
    lines
}
