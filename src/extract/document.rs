// src/extract/document.rs
// =============================================================================
// Opening PDFs.
//
// lopdf does all the parsing. Two wrinkles:
// - Parsing is blocking file I/O + CPU work, so the async entry point runs
//   it on tokio's blocking pool instead of stalling the runtime
// - lopdf can panic on badly broken files; a panic must only cost us that
//   one file, so it is turned into a DocumentParseError
// =============================================================================

use crate::error::DocumentParseError;
use log::debug;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Opens and parses a PDF from disk (blocking).
pub fn open_document(path: &Path) -> Result<Document, DocumentParseError> {
    let document =
        Document::load(path).map_err(|e| DocumentParseError::new(path, e.to_string()))?;
    debug!("Loaded {} ({} pages)", path.display(), page_count(&document));
    Ok(document)
}

/// Opens a PDF on the blocking thread pool.
///
/// A parser panic comes back as a DocumentParseError for this path.
pub async fn load_document(path: PathBuf) -> Result<Document, DocumentParseError> {
    let task_path = path.clone();
    match tokio::task::spawn_blocking(move || open_document(&task_path)).await {
        Ok(result) => result,
        Err(join_error) if join_error.is_panic() => Err(DocumentParseError::new(
            path,
            "PDF parser panicked while reading the file",
        )),
        Err(join_error) => Err(DocumentParseError::new(path, join_error.to_string())),
    }
}

/// Number of pages reachable from the document's page tree
pub fn page_count(document: &Document) -> usize {
    document.get_pages().len()
}
