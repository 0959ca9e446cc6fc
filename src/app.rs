//! Application state and navigation logic.

use crate::data::{Metric, StatusData};
use crate::source::{FetchError, FetchOutcome, StatusSource};
use crate::ui::Theme;

/// Uptime line shown before the fetch settles.
pub const LOADING_TEXT: &str = "Loading...";

/// Uptime line shown after a failed fetch.
pub const FETCH_ERROR_TEXT: &str = "Error fetching uptime";

/// Main application state.
///
/// The dashboard has a single view; the only state transitions are
/// loading → loaded and loading → error, driven by the one fetch outcome.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub show_detail: bool,

    // Data source
    source: Box<dyn StatusSource>,
    /// Derived display state; `None` until the first successful fetch.
    pub data: Option<StatusData>,
    /// Uptime line for the header.
    pub uptime_line: String,
    pub load_error: Option<FetchError>,

    /// Selected row: metric bars first, then service lines.
    pub selected: usize,

    pub theme: Theme,
}

impl App {
    /// Create a new App with the given data source.
    pub fn new(source: Box<dyn StatusSource>) -> Self {
        Self {
            running: true,
            show_help: false,
            show_detail: false,
            source,
            data: None,
            uptime_line: LOADING_TEXT.to_string(),
            load_error: None,
            selected: 0,
            theme: Theme::auto_detect(),
        }
    }

    /// Returns a description of the data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Poll the source and apply the outcome if it has arrived.
    ///
    /// Returns true when state was updated. The source yields at most one
    /// outcome, so this settles the app exactly once per run.
    pub fn poll_source(&mut self) -> bool {
        if let Some(outcome) = self.source.poll() {
            self.apply_outcome(outcome);
            true
        } else {
            false
        }
    }

    /// Apply the fetch outcome.
    ///
    /// Success replaces the whole derived state in one assignment so a
    /// render pass never observes a partially updated metrics list.
    /// Failure leaves prior state untouched apart from the uptime line,
    /// and routes the tagged error to the diagnostic channel.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(report) => {
                let data = StatusData::from_report(&report);
                tracing::debug!(
                    services = data.services.len(),
                    uptime = %data.uptime,
                    "status fetch succeeded"
                );
                self.uptime_line = data.uptime.clone();
                self.data = Some(data);
                self.load_error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "status fetch failed");
                self.uptime_line = FETCH_ERROR_TEXT.to_string();
                self.load_error = Some(err);
            }
        }
    }

    /// Number of selectable rows (metric bars, then service lines).
    pub fn row_count(&self) -> usize {
        self.data
            .as_ref()
            .map_or(0, |d| d.metrics.len() + d.services.len())
    }

    /// The metric the selection is on, if it is on a bar row.
    pub fn selected_metric(&self) -> Option<&Metric> {
        self.data.as_ref()?.metrics.get(self.selected)
    }

    /// Move selection down by one row.
    pub fn select_next(&mut self) {
        let max = self.row_count().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    /// Move selection up by one row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        self.selected = self.row_count().saturating_sub(1);
    }

    /// Open the detail overlay for the selected metric bar.
    ///
    /// Service rows have no detail view; Enter is a no-op there.
    pub fn enter_detail(&mut self) {
        if self.selected_metric().is_some() {
            self.show_detail = true;
        }
    }

    /// Close the detail overlay if open.
    pub fn close_detail(&mut self) {
        self.show_detail = false;
    }

    /// Navigate back: close any overlay.
    pub fn go_back(&mut self) {
        if self.show_detail {
            self.show_detail = false;
        } else if self.show_help {
            self.show_help = false;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
