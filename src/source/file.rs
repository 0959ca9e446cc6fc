//! File-based data source.
//!
//! Reads a saved status report from disk, once. Useful for demos and for
//! inspecting a payload captured from a node that is currently offline.

use std::fs;
use std::path::{Path, PathBuf};

use super::{FetchError, FetchOutcome, StatusSource};

/// A data source that reads a status report from a JSON file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    delivered: bool,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            delivered: false,
        }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_report(&self) -> FetchOutcome {
        let content =
            fs::read_to_string(&self.path).map_err(|e| FetchError::Read(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl StatusSource for FileSource {
    fn poll(&mut self) -> Option<FetchOutcome> {
        if self.delivered {
            return None;
        }
        self.delivered = true;
        Some(self.read_report())
    }

    fn description(&self) -> &str {
        &self.description
    }
}
