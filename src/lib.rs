// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # hydropi-doctor
//!
//! A status dashboard TUI and library for monitoring a HydroPi node.
//!
//! This crate fetches one status report from a node's HTTP endpoint,
//! derives three gauges (temperature, CPU usage, memory usage percentage)
//! plus a service health list, and renders them as color-coded horizontal
//! bars in an interactive terminal UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(deriving)│    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | FileSource                     │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, the loading gate, and the atomic
//!   application of the single fetch outcome
//! - **[`source`]**: Data source abstraction ([`StatusSource`] trait) with a
//!   one-shot HTTP implementation and a file-based one for saved payloads
//! - **[`data`]**: Wire types for the agent's JSON payload and the derived
//!   gauge/severity model
//! - **[`ui`]**: Terminal rendering using ratatui - gauge bars, service list,
//!   detail overlay, and theme support
//! - **[`config`]**: Layered settings (defaults, TOML file, environment)
//!
//! The dashboard fetches exactly once per run: there is no polling
//! interval, no retry, and no manual refresh. The only state transitions
//! are loading → loaded and loading → error.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Fetch from the default endpoint
//! hydropi-doctor
//!
//! # Fetch from another node
//! hydropi-doctor --url http://greenhouse.local:5000/status
//!
//! # Inspect a saved payload
//! hydropi-doctor --file status.json
//! ```
//!
//! ### As a library with a file source
//!
//! ```
//! use hydropi_doctor::{App, FileSource};
//!
//! let source = Box::new(FileSource::new("status.json"));
//! let app = App::new(source);
//! ```
//!
//! ### Classifying values directly
//!
//! ```
//! use hydropi_doctor::{classify, Severity};
//!
//! assert_eq!(classify(70.0, 75.0), Severity::Nominal);
//! assert_eq!(classify(60.0, 75.0), Severity::Safe);
//! assert_eq!(classify(80.0, 75.0), Severity::Alert);
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, FETCH_ERROR_TEXT, LOADING_TEXT};
pub use crate::config::Settings;
pub use data::{classify, Metric, Severity, ServiceStatus, StatusData, StatusReport};
pub use source::{FetchError, FetchOutcome, FileSource, HttpSource, StatusSource};
