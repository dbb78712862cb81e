//! Command orchestration.

pub mod classify;

pub use classify::{execute_classify, ClassifyResult};

use crate::cli::CliError;
use crate::io::{LookupLoadError, OutputWriterError};
use flowtag_core::ReportError;
use flowtag_fs::FsError;
use thiserror::Error;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("lookup table error: {0}")]
    Lookup(#[from] LookupLoadError),

    #[error("failed to read flow log {path}: {source}")]
    FlowLog {
        path: String,
        #[source]
        source: FsError,
    },

    #[error("report error: {0}")]
    Report(#[from] ReportError),

    #[error("output error: {0}")]
    Output(#[from] OutputWriterError),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;
