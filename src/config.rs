//! Runtime settings.
//!
//! Settings resolve in layers: built-in defaults, then an optional TOML
//! file, then `HYDROPI_*` environment variables. CLI flags are applied on
//! top by the binary.
//!
//! ```toml
//! url = "https://api-norway.hydropi.io/status"
//! timeout_secs = 10
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, File};

/// Default status endpoint for the Norway node.
pub const DEFAULT_STATUS_URL: &str = "https://api-norway.hydropi.io/status";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolved runtime settings.
///
/// Gauge thresholds are deliberately not settings: they are constants of
/// the derivation, not tunables.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Status endpoint URL.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_STATUS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Load settings from an optional config file plus environment overrides.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("url", DEFAULT_STATUS_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix("HYDROPI"))
            .build()?;

        Ok(Self {
            url: config.get_string("url")?,
            timeout: Duration::from_secs(config.get_int("timeout_secs")?.max(1) as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.url, DEFAULT_STATUS_URL);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "url = \"http://localhost:5000/status\"").unwrap();
        writeln!(file, "timeout_secs = 3").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.url, "http://localhost:5000/status");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_timeout_is_clamped_to_one_second() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "timeout_secs = 0").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.timeout, Duration::from_secs(1));
    }
}
