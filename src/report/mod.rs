// src/report/mod.rs
// =============================================================================
// Everything we print.
//
// - document: DocumentReport (per-PDF counts + error list) and its table
// - summary: RunSummary (path -> error count) and the final RunFailure
// - json: The --json rendering of a whole run
// =============================================================================

mod document;
mod json;
mod summary;

pub use document::{print_document_report, DocumentReport};
pub use json::print_json_report;
pub use summary::{RunFailure, RunSummary, UnreadableDocument};
