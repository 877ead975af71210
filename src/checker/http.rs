// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - HttpProbe: the one thing the validator needs from the network
//   ("give me a status code for this URL, or tell me why you couldn't")
// - ReqwestProbe: the real implementation, a GET with a browser-like
//   User-Agent and a hard per-request timeout
// - Sorts reqwest failures into our LinkError categories
//
// Rust concepts:
// - Traits: so tests can swap in a fake network
// - impl Future in traits: async methods without boxing
// =============================================================================

use crate::config::CheckerConfig;
use crate::error::LinkError;
use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Something that can fetch an HTTP status for a URL.
///
/// Implementations decide what counts as an error: 4xx/5xx responses must
/// come back as `LinkError::HttpStatus`, not as `Ok(code)`.
pub trait HttpProbe {
    fn fetch_status(&self, url: &str) -> impl Future<Output = Result<u16, LinkError>> + Send;
}

/// HttpProbe backed by a shared reqwest client
///
/// Client is cheap to clone (it's an Arc internally) and pools connections,
/// so one probe serves the whole run.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
    timeout: Duration,
}

impl ReqwestProbe {
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }
}

impl HttpProbe for ReqwestProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16, LinkError> {
        // Reject garbage before touching the network
        let parsed = Url::parse(url).map_err(|e| LinkError::Unknown(format!("invalid URL: {}", e)))?;

        match self.client.get(parsed).send().await {
            // We only need the status line, the body is dropped unread
            Ok(response) => status_to_result(response.status()),
            Err(e) => Err(categorize_error(e, self.timeout)),
        }
    }
}

// 4xx and 5xx are failures, everything else (2xx, leftover 3xx) is the answer
fn status_to_result(status: reqwest::StatusCode) -> Result<u16, LinkError> {
    if status.is_client_error() || status.is_server_error() {
        Err(LinkError::HttpStatus {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    } else {
        Ok(status.as_u16())
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure / refused connection
// - Too many redirects, unsupported scheme, body/decode problems...
fn categorize_error(error: reqwest::Error, timeout: Duration) -> LinkError {
    if error.is_timeout() {
        LinkError::Timeout(timeout)
    } else if error.is_connect() {
        LinkError::Connection(error_chain(&error))
    } else if error.is_redirect() {
        LinkError::Unknown("too many redirects".to_string())
    } else if let Some(status) = error.status() {
        match status_to_result(status) {
            Err(e) => e,
            Ok(code) => LinkError::Unknown(format!("unexpected status {}", code)),
        }
    } else {
        LinkError::Unknown(error_chain(&error))
    }
}

// reqwest's top-level Display is terse ("error sending request"), the cause
// (e.g. "dns error: failed to lookup address") is further down the chain.
// Some layers already print their source in their own Display; a cause whose
// text is already in the message is not appended a second time.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
