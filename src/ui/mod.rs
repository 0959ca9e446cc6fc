//! Terminal rendering using ratatui.
//!
//! - [`common`]: header line, status bar, and help overlay
//! - [`dashboard`]: the gauge bars, service list, and process panel
//! - [`detail`]: modal overlay with the selected gauge's threshold info
//! - [`theme`]: light/dark color themes with terminal auto-detection

pub mod common;
pub mod dashboard;
pub mod detail;
pub mod theme;

pub use theme::Theme;
