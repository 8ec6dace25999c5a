//! Byte sources — where the raw text comes from.
//!
//! A source is read fully into memory in one call, so the underlying handle is
//! closed before any parsing starts, including when the read fails.

use std::io::Read;
use std::path::{Path, PathBuf};

use pstore_core::LoadError;

/// A readable origin of raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// `-` means standard input, anything else is a file path.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::Path(path.to_path_buf())
        }
    }

    /// Human-readable label used in errors and as the store's origin.
    pub fn name(&self) -> String {
        match self {
            Source::Path(p) => p.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }

    pub fn read(&self) -> Result<Vec<u8>, LoadError> {
        let result = match self {
            Source::Path(p) => std::fs::read(p),
            Source::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
            }
        };
        result.map_err(|source| {
            tracing::warn!(source_name = %self.name(), error = %source, "open failed");
            LoadError::Io {
                source_name: self.name(),
                source,
            }
        })
    }
}
