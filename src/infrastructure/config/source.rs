//! Config file read outcome

use std::fs;
use std::io;
use std::path::Path;

/// Result of trying to read the config file
///
/// A missing file is the normal zero-configuration case and is kept apart from
/// other I/O failures so the two can be reported differently.
#[derive(Debug)]
pub enum ConfigSource {
    /// File was read; holds its raw bytes
    Loaded(Vec<u8>),

    /// No file at the given path
    Missing,

    /// File exists but could not be read
    Unreadable(io::Error),
}

impl ConfigSource {
    /// Read the file at `path`, classifying the outcome
    pub fn read(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => Self::Loaded(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::Missing,
            Err(err) => Self::Unreadable(err),
        }
    }

    /// Short label used in log fields
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "file",
            Self::Missing => "missing",
            Self::Unreadable(_) => "unreadable",
        }
    }
}
