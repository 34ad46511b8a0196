//! Outcome observation.
//!
//! The client reports every [`Outcome`] to an injected [`Observer`] instead
//! of a process-wide logger. [`TracingObserver`] is the default.

use std::sync::{Arc, Mutex};

use tracing::{error, info, warn};

use crate::outcome::Outcome;

/// Receives every completed exchange.
pub trait Observer: Send + Sync + std::fmt::Debug {
    fn on_outcome(&self, outcome: &Outcome);
}

/// Emits one tracing event per outcome.
///
/// Transport failures are logged at error level, non-2xx statuses at warn
/// level, everything else at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_outcome(&self, outcome: &Outcome) {
        let method = outcome.method().as_str();
        let path = outcome.path();
        let status_code = outcome.status_code();
        let response_ms = outcome.response_ms();

        if let Some(err) = outcome.error() {
            error!(method, path, status_code, response_ms, error = %err, "Request failed");
        } else if outcome.is_unexpected_status() {
            warn!(
                method,
                path,
                status_code,
                status = outcome.status_text(),
                response_ms,
                "HTTP {} {}",
                status_code,
                outcome.status_text()
            );
        } else {
            info!(method, path, status_code, response_ms, "Request completed");
        }
    }
}

/// Discards every outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_outcome(&self, _outcome: &Outcome) {}
}

/// Summary kept by [`CapturingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observed {
    pub method: String,
    pub path: String,
    pub status_code: u16,
    pub failed: bool,
}

/// Records a summary of every outcome. Handy in tests.
#[derive(Debug, Default, Clone)]
pub struct CapturingObserver {
    seen: Arc<Mutex<Vec<Observed>>>,
}

impl CapturingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything observed so far, oldest first.
    pub fn observed(&self) -> Vec<Observed> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl Observer for CapturingObserver {
    fn on_outcome(&self, outcome: &Outcome) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(Observed {
                method: outcome.method().as_str().to_string(),
                path: outcome.path().to_string(),
                status_code: outcome.status_code(),
                failed: outcome.error().is_some(),
            });
        }
    }
}
