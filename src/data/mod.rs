//! Data models for the status dashboard.
//!
//! This module holds the wire types received from the status endpoint and
//! the derived display state built from them.
//!
//! ## Submodules
//!
//! - [`report`]: Wire types matching the agent's JSON payload
//! - [`status`]: Derived display types ([`StatusData`], [`Metric`]) and the
//!   threshold classification ([`classify`])
//!
//! ## Data Flow
//!
//! ```text
//! StatusReport (raw JSON)
//!        │
//!        ▼
//! StatusData::from_report()
//!        │
//!        ├──▶ Metric × 3 (fixed order, baked-in thresholds)
//!        ├──▶ uptime text (verbatim)
//!        └──▶ ServiceStatus list (wholesale replacement)
//! ```

pub mod report;
pub mod status;

pub use report::{MemoryInfo, ProcessEntry, ServiceEntry, StatusReport};
pub use status::{classify, format_value, Metric, Severity, ServiceStatus, StatusData};
