// src/error.rs
// =============================================================================
// Typed errors for the two places where things can go wrong:
//
// - Opening/parsing a PDF (DocumentParseError) - fatal for that one file
// - Checking a single link (LinkError) - never fatal, it just becomes a
//   LinkOutcome::Failed entry in the report
//
// The end-of-run failure (RunFailure) lives next to RunSummary in
// src/report/summary.rs since it is built from it.
//
// Rust concepts:
// - thiserror: derives std::error::Error + Display from attributes
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A PDF could not be opened or parsed.
///
/// The caller must not treat this as "zero links found".
#[derive(Debug, Clone, Error)]
#[error("could not parse PDF {}: {reason}", .path.display())]
pub struct DocumentParseError {
    pub path: PathBuf,
    pub reason: String,
}

impl DocumentParseError {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Why a single link failed its check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The server answered with a 4xx/5xx status
    #[error("HTTP Error {code}: {reason}")]
    HttpStatus { code: u16, reason: String },

    /// No response before the per-request timeout
    #[error("request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),

    /// DNS lookup or TCP/TLS connect failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Anything we don't have a category for
    #[error("Unknown: {0}")]
    Unknown(String),
}
