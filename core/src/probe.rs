//! # Reachability Probes
//!
//! Every probe makes exactly one attempt against one target and reports
//! `(passed, message, elapsed)`. A probe whose target was never discovered
//! fails straight away with zero elapsed time and performs no I/O.

use std::future::Future;
use std::time::{Duration, Instant};

use reachr_common::error::ProbeError;
use reachr_common::models::check::CheckResult;

mod dns;
mod http;
mod storage;
mod tcp;

pub use dns::{lookup_ipv4, resolve};
pub use http::http_status;
pub use storage::bucket_listing;
pub use tcp::tcp_connect;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub passed: bool,
    pub message: String,
    pub elapsed: Duration,
}

impl ProbeOutcome {
    pub(crate) fn not_discovered(what: &'static str) -> Self {
        Self {
            passed: false,
            message: ProbeError::NotDiscovered(what).to_string(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn into_result(self, name: impl Into<String>) -> CheckResult {
        CheckResult::new(name, self.passed, self.message, self.elapsed)
    }
}

/// Awaits `attempt`, timing it from the first poll.
pub(crate) async fn timed<F>(attempt: F) -> ProbeOutcome
where
    F: Future<Output = Result<String, ProbeError>>,
{
    let start = Instant::now();
    let result = attempt.await;
    let elapsed = start.elapsed();

    match result {
        Ok(message) => ProbeOutcome { passed: true, message, elapsed },
        Err(e) => ProbeOutcome { passed: false, message: e.to_string(), elapsed },
    }
}

/// Treats empty strings like missing targets.
pub(crate) fn present(target: Option<&str>) -> Option<&str> {
    target.map(str::trim).filter(|t| !t.is_empty())
}
