// src/config.rs
// =============================================================================
// Resolved runtime settings for a run.
//
// The CLI (src/cli.rs) describes what the user typed; CheckerConfig is what
// the rest of the program actually uses. Keeping them apart means the core
// (extract/checker/batch) can be driven without clap, e.g. from tests.
// =============================================================================

use crate::cli::{Cli, ParseErrorPolicy};
use std::time::Duration;

/// Browser-like User-Agent; some servers answer 403 to obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/51.0.2704.103 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Hard ceiling on requests in flight for one document
pub const MAX_IN_FLIGHT: usize = 32;

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Upper bound for a single request, connect + response
    pub timeout: Duration,
    pub user_agent: String,
    /// Requests in flight per document (always >= 1)
    pub concurrency: usize,
    pub parse_error_policy: ParseErrorPolicy,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: default_concurrency(),
            parse_error_policy: ParseErrorPolicy::Skip,
        }
    }
}

impl CheckerConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            timeout: Duration::from_secs(cli.timeout.max(1)),
            user_agent: cli
                .user_agent
                .clone()
                .unwrap_or(defaults.user_agent),
            concurrency: cli
                .concurrency
                .map(|n| n.clamp(1, MAX_IN_FLIGHT))
                .unwrap_or(defaults.concurrency),
            parse_error_policy: cli.on_parse_error,
        }
    }
}

// Link checks are I/O bound, so we allow a few requests per core
fn default_concurrency() -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cores * 4).clamp(1, MAX_IN_FLIGHT)
}
