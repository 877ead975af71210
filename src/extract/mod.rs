// src/extract/mod.rs
// =============================================================================
// This module finds the hyperlinks inside a PDF.
//
// Submodules:
// - document: Loads a PDF from disk (off the async runtime)
// - annotations: Walks page -> /Annots -> /A -> /URI and yields LinkRecords
// - fixtures: Test-only helpers that build small PDFs in memory
// =============================================================================

mod annotations;
mod document;

#[cfg(test)]
pub(crate) mod fixtures;

pub use annotations::{extract_links, LinkRecord};
pub use document::{load_document, page_count};
