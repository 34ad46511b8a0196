//! The full record of one HTTP exchange.
//!
//! Every dispatched [`Request`] yields exactly one [`Outcome`]: status,
//! payload, timing and the transport error if there was one. Non-2xx statuses
//! are not errors here; they are recorded and left for the caller to judge.

use std::time::{Duration, Instant};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::error::{Error, RequestContext, Result};
use crate::request::{Method, Request};
use crate::transport::RawResponse;

/// Outcome of a completed (or failed) request.
///
/// Serializes to `{"method", "path", "response": {"status_code", "status"},
/// "response_ms", "started_at"}`; the payload and error are left out.
#[derive(Debug, Serialize)]
pub struct Outcome {
    method: Method,
    path: String,
    response: StatusLine,
    #[serde(skip)]
    payload: Bytes,
    #[serde(rename = "response_ms", serialize_with = "as_millis")]
    duration: Duration,
    started_at: DateTime<Utc>,
    #[serde(skip)]
    error: Option<Error>,
}

/// Status code and reason phrase. Zero and empty when no response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub status_code: u16,
    pub status: String,
}

fn as_millis<S: Serializer>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(millis(duration))
}

fn millis(duration: &Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Timing started at dispatch; turns a transport result into an [`Outcome`].
#[derive(Debug)]
pub struct Dispatch {
    method: Method,
    path: String,
    started: Instant,
    started_at: DateTime<Utc>,
}

impl Dispatch {
    /// Start timing a request. Call immediately before handing it to the transport.
    pub fn start(request: &Request) -> Self {
        Self {
            method: request.method(),
            path: request.path().to_string(),
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Collect the transport result.
    ///
    /// Duration is the wall-clock time since [`Dispatch::start`], truncated to
    /// whole milliseconds. It is populated on every path, including transport
    /// and body-read failures.
    pub fn collect(self, raw: Result<RawResponse>) -> Outcome {
        let duration = Duration::from_millis(millis(&self.started.elapsed()));

        let (response, payload, error) = match raw {
            Ok(RawResponse {
                status,
                status_text,
                body,
            }) => {
                let line = StatusLine {
                    status_code: status,
                    status: status_text,
                };
                match body {
                    Ok(payload) => (line, payload, None),
                    Err(err) => (line, Bytes::new(), Some(err)),
                }
            }
            Err(err) => (
                StatusLine {
                    status_code: 0,
                    status: String::new(),
                },
                Bytes::new(),
                Some(err),
            ),
        };

        Outcome {
            method: self.method,
            path: self.path,
            response,
            payload,
            duration,
            started_at: self.started_at,
            error,
        }
    }
}

impl Outcome {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP status code, or 0 if the exchange failed before a response.
    pub fn status_code(&self) -> u16 {
        self.response.status_code
    }

    /// Reason phrase, e.g. `Created`.
    pub fn status_text(&self) -> &str {
        &self.response.status
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.response
    }

    /// Response body bytes; empty if none was read.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Elapsed time between dispatch and response, millisecond granularity.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Elapsed time in milliseconds, saturating at `u64::MAX`.
    pub fn response_ms(&self) -> u64 {
        millis(&self.duration)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Transport-level error, if any. Never set for a non-2xx status alone.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns true if a response arrived with a 2xx status.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.response.status_code)
    }

    /// Returns true if a response arrived with a status outside 2xx.
    pub fn is_unexpected_status(&self) -> bool {
        self.response.status_code != 0 && !(200..300).contains(&self.response.status_code)
    }

    /// The request identity used in error messages and logs.
    pub fn context(&self) -> RequestContext {
        RequestContext {
            method: self.method,
            path: self.path.clone(),
            status: (self.response.status_code != 0).then_some(self.response.status_code),
            duration: self.duration,
        }
    }

    /// Split off the transport error, annotated with this request's context.
    ///
    /// The outcome is returned untouched when there was no error.
    pub fn into_checked(mut self) -> Result<Self> {
        match self.error.take() {
            Some(err) => Err(err.with_context(self.context())),
            None => Ok(self),
        }
    }

    /// Structured fields for logging.
    pub fn stats(&self) -> serde_json::Value {
        serde_json::json!({
            "method": self.method.as_str(),
            "path": self.path,
            "response_time": self.response_ms(),
            "status": self.response.status,
            "status_code": self.response.status_code,
        })
    }

    /// Serialize the outcome summary as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the outcome summary as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
