// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - http: The HttpProbe trait + the reqwest-backed implementation
// - validate: Classifies links (mail/tel/status/error) concurrently and hands
//   results back in discovery order
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod http;
mod validate;

#[cfg(test)]
pub(crate) mod mock;

pub use http::{HttpProbe, ReqwestProbe};
pub use validate::{validate_links, Classification, LinkResult};

// Report tests build LinkResults by hand
#[cfg(test)]
pub(crate) use validate::LinkOutcome;
