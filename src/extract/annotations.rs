// src/extract/annotations.rs
// =============================================================================
// This module pulls URI links out of a parsed PDF.
//
// PDF structure we walk:
//
//   Page dictionary
//     /Annots [ ... ]          (array, possibly an indirect reference)
//       annotation dictionary  (direct or indirect)
//         /A << ... >>         (action dictionary, direct or indirect)
//           /URI (https://...) (the string we want)
//
// Every hop is optional. Annotations without a URI action (internal GoTo
// links, form widgets, comments...) are skipped, not errors.
//
// Rust concepts:
// - Option + `?`: short-circuits as soon as one hop is missing
// - Iterators: enumerate/skip/take to walk a page range
// =============================================================================

use log::{debug, warn};
use lopdf::{Dictionary, Document, Object, ObjectId};
use serde::Serialize;

/// One hyperlink occurrence found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// 1-based page number
    pub page_number: usize,
    /// The URI exactly as stored in the annotation
    pub url: String,
}

impl LinkRecord {
    pub fn new(page_number: usize, url: impl Into<String>) -> Self {
        Self {
            page_number,
            url: url.into(),
        }
    }
}

/// Extracts URI links from pages `start_page_index..end_page_index` (0-based,
/// end exclusive).
///
/// Output is in discovery order: page order, then the order annotations
/// appear in each page's /Annots array. `end_page_index` past the last page is
/// clamped.
pub fn extract_links(
    document: &Document,
    start_page_index: usize,
    end_page_index: usize,
) -> Vec<LinkRecord> {
    let pages = document.get_pages();
    let end = end_page_index.min(pages.len());
    let mut links = Vec::new();

    // get_pages() is a BTreeMap keyed by page number, so values() is in page order
    for (index, &page_id) in pages
        .values()
        .enumerate()
        .skip(start_page_index)
        .take(end.saturating_sub(start_page_index))
    {
        let page_number = index + 1;
        for url in page_uris(document, page_id) {
            debug!("Found link on page {}: {}", page_number, url);
            links.push(LinkRecord::new(page_number, url));
        }
    }

    links
}

// Collects the URIs of one page's annotations, in /Annots order
fn page_uris(document: &Document, page_id: ObjectId) -> Vec<String> {
    let page = match document.get_dictionary(page_id) {
        Ok(dict) => dict,
        Err(e) => {
            warn!("Skipping unreadable page object {:?}: {}", page_id, e);
            return Vec::new();
        }
    };

    let annots = match page
        .get(b"Annots")
        .ok()
        .and_then(|obj| resolve(document, obj))
        .and_then(|obj| obj.as_array().ok())
    {
        Some(annots) => annots,
        None => return Vec::new(),
    };

    annots
        .iter()
        .filter_map(|entry| annotation_uri(document, entry))
        .collect()
}

// annotation -> /A -> /URI, bailing out at the first missing hop
fn annotation_uri(document: &Document, entry: &Object) -> Option<String> {
    let annotation = resolve_dict(document, entry)?;
    let action = resolve_dict(document, annotation.get(b"A").ok()?)?;
    let uri = resolve(document, action.get(b"URI").ok()?)?;

    match uri {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

// Follows an indirect reference (one level is all a well-formed file needs)
fn resolve<'a>(document: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => document.get_object(*id).ok(),
        other => Some(other),
    }
}

fn resolve_dict<'a>(document: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    resolve(document, object)?.as_dict().ok()
}

// PDF text strings: UTF-16BE when they start with a BOM, otherwise treat as
// UTF-8 and fall back to one-byte-per-char (PDFDocEncoding is Latin-1-like)
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE_u8, 0xFF][..]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is an indirect reference?
//    - PDFs store objects once ("12 0 obj") and point at them ("12 0 R")
//    - Object::Reference holds that (number, generation) pair and
//      document.get_object() looks it up
//
// 2. Why return Option from annotation_uri?
//    - `?` on an Option returns None right away, so each missing hop is a
//      one-character check instead of a nested match
// -----------------------------------------------------------------------------
