//! flowtag CLI.
//!
//! Argument parsing, logging, command orchestration and exit codes for the
//! `flowtag` binary. The classification engine lives in `flowtag-core`.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod io;
pub mod logger;

pub use cli::{parse_from, Cli, CliError};
pub use commands::{execute_classify, ClassifyResult, CommandError, CommandResult};
pub use logger::{Logger, MockLogger, NullLogger, StderrLogger, Verbosity};
