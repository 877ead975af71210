// src/checker/validate.rs
// =============================================================================
// Turns LinkRecords into LinkResults.
//
// Per link:
//   mailto:...  -> mail (no request)
//   tel:...     -> tel  (no request)
//   anything else -> ask the HttpProbe; a status code or a LinkError
//
// A failure is a value (LinkOutcome::Failed), never an early return, so one
// bad URL can't take the rest of the batch down with it. Even a panic inside
// the probe is caught and recorded against that one link.
//
// Concurrency: up to `concurrency` checks run at once. Results arrive in
// completion order, so each one is tagged with its input index and the
// batch is put back into discovery order before returning.
//
// Rust concepts:
// - Streams: stream::iter + buffer_unordered = bounded concurrent futures
// - catch_unwind on a future: contain panics to one task
// =============================================================================

use super::HttpProbe;
use crate::error::LinkError;
use crate::extract::LinkRecord;
use futures::stream::{self, StreamExt};
use futures::FutureExt;
use log::debug;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;

/// The label a checked link is counted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Mail,
    Tel,
    Status(u16),
    Error,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Mail => f.write_str("mail"),
            Classification::Tel => f.write_str("tel"),
            Classification::Status(code) => write!(f, "{}", code),
            Classification::Error => f.write_str("error"),
        }
    }
}

// Serialized as its label so it can be a JSON object key
impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What happened when we checked one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Mail,
    Tel,
    /// The server answered with this (non-error) status
    Status(u16),
    Failed(LinkError),
}

impl LinkOutcome {
    pub fn classification(&self) -> Classification {
        match self {
            LinkOutcome::Mail => Classification::Mail,
            LinkOutcome::Tel => Classification::Tel,
            LinkOutcome::Status(code) => Classification::Status(*code),
            LinkOutcome::Failed(_) => Classification::Error,
        }
    }

    /// Human-readable failure description; `Some` exactly when the link failed
    pub fn error_detail(&self) -> Option<String> {
        match self {
            LinkOutcome::Failed(error) => Some(error.to_string()),
            _ => None,
        }
    }
}

/// The outcome of validating one LinkRecord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResult {
    pub page_number: usize,
    pub url: String,
    pub outcome: LinkOutcome,
}

impl LinkResult {
    pub fn classification(&self) -> Classification {
        self.outcome.classification()
    }

    pub fn error_detail(&self) -> Option<String> {
        self.outcome.error_detail()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, LinkOutcome::Failed(_))
    }
}

impl Serialize for LinkResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let detail = self.error_detail();
        let mut state =
            serializer.serialize_struct("LinkResult", if detail.is_some() { 4 } else { 3 })?;
        state.serialize_field("page_number", &self.page_number)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("classification", &self.classification())?;
        if let Some(detail) = detail {
            state.serialize_field("error_detail", &detail)?;
        } else {
            state.skip_field("error_detail")?;
        }
        state.end()
    }
}

/// Checks a single link.
///
/// Never fails: every problem ends up in `LinkOutcome::Failed`.
pub async fn check_link<P: HttpProbe>(probe: &P, record: LinkRecord) -> LinkResult {
    let LinkRecord { page_number, url } = record;

    let outcome = if url.starts_with("mailto:") {
        LinkOutcome::Mail
    } else if url.starts_with("tel:") {
        LinkOutcome::Tel
    } else {
        match AssertUnwindSafe(probe.fetch_status(&url)).catch_unwind().await {
            Ok(Ok(code)) => LinkOutcome::Status(code),
            Ok(Err(error)) => LinkOutcome::Failed(error),
            Err(panic) => LinkOutcome::Failed(LinkError::Unknown(format!(
                "link check panicked: {}",
                panic_message(&*panic)
            ))),
        }
    };

    debug!("[page {}] {} -> {}", page_number, url, outcome.classification());
    LinkResult {
        page_number,
        url,
        outcome,
    }
}

/// Checks every record, at most `concurrency` at a time.
///
/// Returns one result per record, in the same order as `records`, no matter
/// which request finished first.
pub async fn validate_links<P: HttpProbe>(
    probe: &P,
    records: Vec<LinkRecord>,
    concurrency: usize,
) -> Vec<LinkResult> {
    let mut indexed: Vec<(usize, LinkResult)> = stream::iter(records.into_iter().enumerate())
        .map(|(index, record)| async move { (index, check_link(probe, record).await) })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, result)| result).collect()
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why buffer_unordered and not join_all?
//    - join_all starts every future at once; a PDF with 5000 links would
//      open 5000 connections
//    - buffer_unordered(N) keeps at most N running and starts the next one
//      as soon as a slot frees up
//
// 2. Why tag results with an index?
//    - buffer_unordered yields in completion order
//    - Sorting by the index afterwards restores discovery order without any
//      locking while the checks run
//
// 3. What is AssertUnwindSafe?
//    - catch_unwind only accepts values the compiler knows are safe to
//      observe after a panic
//    - We only read the probe, so we assert it and move on
// -----------------------------------------------------------------------------
