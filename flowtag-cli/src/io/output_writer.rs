//! Output writer for run artifacts.
//!
//! Writes the text report and, when requested, summary.json. Each file is
//! written atomically; nothing creates missing parent directories.

use std::path::{Path, PathBuf};

use flowtag_core::Summary;
use flowtag_fs::{Filesystem, FsError};
use thiserror::Error;

/// Errors from output writing.
#[derive(Debug, Error)]
pub enum OutputWriterError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Output writer backed by a [`Filesystem`].
pub struct OutputWriter<'a, F: Filesystem> {
    fs: &'a F,
}

impl<'a, F: Filesystem> OutputWriter<'a, F> {
    /// Create a new output writer.
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Write the rendered text report.
    pub fn write_report(&self, path: &Path, report: &str) -> Result<PathBuf, OutputWriterError> {
        self.write(path, report.as_bytes())
    }

    /// Write summary.json.
    pub fn write_summary(&self, path: &Path, summary: &Summary) -> Result<PathBuf, OutputWriterError> {
        self.write(path, summary.to_json().as_bytes())
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<PathBuf, OutputWriterError> {
        self.fs
            .write_atomic(path, data)
            .map_err(|e| OutputWriterError::Write {
                path: path.display().to_string(),
                source: e,
            })?;
        Ok(path.to_path_buf())
    }
}
