// src/report/json.rs
// The --json output: one document for the whole run, printed at the end.

use super::{DocumentReport, RunSummary, UnreadableDocument};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonRunReport<'a> {
    pub documents: &'a [DocumentReport],
    pub unreadable: &'a [UnreadableDocument],
    pub total_errors: usize,
    pub success: bool,
}

impl<'a> JsonRunReport<'a> {
    pub fn new(documents: &'a [DocumentReport], summary: &'a RunSummary) -> Self {
        Self {
            documents,
            unreadable: summary.unreadable(),
            total_errors: summary.total_errors(),
            success: summary.is_success(),
        }
    }
}

pub fn print_json_report(documents: &[DocumentReport], summary: &RunSummary) -> Result<()> {
    let json_output = serde_json::to_string_pretty(&JsonRunReport::new(documents, summary))?;
    println!("{}", json_output);
    Ok(())
}
