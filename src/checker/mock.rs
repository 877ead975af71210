// src/checker/mock.rs
// Test-only HttpProbe: canned answers, optional delays, and a call counter.

use super::HttpProbe;
use crate::error::LinkError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub(crate) struct MockProbe {
    responses: HashMap<String, (Result<u16, LinkError>, Duration)>,
    calls: AtomicUsize,
    completed: Mutex<Vec<String>>,
}

impl MockProbe {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `result` (unregistered URLs answer 200)
    pub(crate) fn respond(self, url: &str, result: Result<u16, LinkError>) -> Self {
        self.respond_after(url, result, Duration::ZERO)
    }

    pub(crate) fn respond_after(
        mut self,
        url: &str,
        result: Result<u16, LinkError>,
        delay: Duration,
    ) -> Self {
        self.responses.insert(url.to_string(), (result, delay));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// URLs in the order their responses finished
    pub(crate) fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

impl HttpProbe for MockProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16, LinkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (result, delay) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or((Ok(200), Duration::ZERO));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.completed.lock().unwrap().push(url.to_string());
        result
    }
}

/// Probe that blows up, for checking panic isolation
pub(crate) struct PanickingProbe;

impl HttpProbe for PanickingProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16, LinkError> {
        panic!("probe exploded on {}", url);
    }
}
