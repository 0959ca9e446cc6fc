//! HTTP data source.
//!
//! Issues the single GET against the node's status endpoint on a
//! background task and hands the outcome to the TUI loop through a
//! channel. If the dashboard is gone before the response lands, the send
//! fails and the late result is discarded.

use std::time::Duration;

use tokio::sync::mpsc;

use super::{FetchError, FetchOutcome, StatusSource};
use crate::data::StatusReport;

/// A data source that fetches the status report over HTTP, once.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use hydropi_doctor::HttpSource;
///
/// # tokio_test::block_on(async {
/// let source = HttpSource::spawn("https://api-norway.hydropi.io/status", Duration::from_secs(10));
/// # });
/// ```
#[derive(Debug)]
pub struct HttpSource {
    receiver: mpsc::Receiver<FetchOutcome>,
    description: String,
    delivered: bool,
}

impl HttpSource {
    /// Spawn the one-shot fetch. Must be called within a tokio runtime.
    pub fn spawn(url: &str, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let request_url = url.to_string();

        tokio::spawn(async move {
            let outcome = fetch(&request_url, timeout).await;
            // The receiver may already be gone; a late result is dropped.
            let _ = tx.send(outcome).await;
        });

        Self {
            receiver: rx,
            description: format!("http: {}", url),
            delivered: false,
        }
    }
}

/// Perform the GET and parse the body.
///
/// The status code is checked before parsing: a non-2xx answer is a
/// failure even when its body happens to be valid JSON.
async fn fetch(url: &str, timeout: Duration) -> FetchOutcome {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Http(e.to_string()))?;

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let report: StatusReport = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(report)
}

impl StatusSource for HttpSource {
    fn poll(&mut self) -> Option<FetchOutcome> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.delivered = true;
                Some(outcome)
            }
            Err(_) => None,
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}
