//! Data source abstraction for obtaining a status report.
//!
//! A source delivers at most one fetch outcome per run: the dashboard
//! issues a single request on startup and never refreshes. The outcome is
//! either a parsed [`StatusReport`] or a tagged [`FetchError`] so the UI
//! and logs can show what actually went wrong.

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use std::fmt::Debug;

use thiserror::Error;

use crate::data::StatusReport;

/// The result of the single fetch.
pub type FetchOutcome = Result<StatusReport, FetchError>;

/// Failure modes of the fetch pipeline.
///
/// Every way the single request can fail maps to exactly one variant.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Could not reach the endpoint.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not a valid status payload.
    #[error("malformed status payload: {0}")]
    Decode(String),

    /// Any other transport-level failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Reading a saved report from disk failed.
    #[error("read failed: {0}")]
    Read(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

/// Trait for delivering the status report to the dashboard.
///
/// Implementations hand over the outcome of their single fetch via
/// `poll()`, which the TUI loop calls between renders.
///
/// # Example
///
/// ```
/// use hydropi_doctor::{FileSource, StatusSource};
///
/// let mut source = FileSource::new("status.json");
/// if let Some(outcome) = source.poll() {
///     match outcome {
///         Ok(report) => println!("temperature: {}", report.temperature),
///         Err(err) => eprintln!("fetch failed: {}", err),
///     }
/// }
/// ```
pub trait StatusSource: Send + Debug {
    /// Poll for the fetch outcome.
    ///
    /// Non-blocking. Yields `Some` exactly once; every later call
    /// returns `None`.
    fn poll(&mut self) -> Option<FetchOutcome>;

    /// Human-readable description of the source, shown in the status bar.
    fn description(&self) -> &str;
}
