//! CLI argument parsing for flowtag.

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("output file {0} would overwrite an input file")]
    OutputOverwritesInput(PathBuf),

    #[error("summary file {0} would overwrite an input or the report")]
    SummaryConflicts(PathBuf),
}

/// Tag flow log records by destination port and protocol.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "flowtag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Flow log file (version 2 records, one per line).
    pub flow_log: PathBuf,

    /// Lookup table CSV with dstport, protocol and tag columns.
    pub lookup: PathBuf,

    /// Output file for the tag and port/protocol report.
    pub output: PathBuf,

    /// Also write a machine-readable JSON summary to this path.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Increase verbosity (-v for details, -vv for debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate the arguments.
    pub fn validate(&self) -> Result<(), CliError> {
        let inputs = [self.flow_log.as_path(), self.lookup.as_path()];

        if inputs.iter().any(|p| same_path(p, &self.output)) {
            return Err(CliError::OutputOverwritesInput(self.output.clone()));
        }
        if let Some(summary) = &self.summary {
            if inputs.iter().any(|p| same_path(p, summary)) || same_path(summary, &self.output) {
                return Err(CliError::SummaryConflicts(summary.clone()));
            }
        }
        Ok(())
    }
}

/// Lexical path comparison; does not touch the filesystem.
fn same_path(a: &Path, b: &Path) -> bool {
    a.components().eq(b.components())
}

/// Parse CLI arguments from an iterator (for testing).
pub fn parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Positional arguments
    // ===========================================

    #[test]
    fn test_three_positionals() {
        let cli = parse_from(["flowtag", "flows.log", "lookup.csv", "out.txt"]).expect("parse");
        assert_eq!(cli.flow_log, PathBuf::from("flows.log"));
        assert_eq!(cli.lookup, PathBuf::from("lookup.csv"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.summary, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_missing_positionals() {
        assert!(parse_from(["flowtag"]).is_err());
        assert!(parse_from(["flowtag", "flows.log"]).is_err());

        let err = parse_from(["flowtag", "flows.log", "lookup.csv"]).unwrap_err();
        assert!(err.to_string().contains("<OUTPUT>"));
    }

    #[test]
    fn test_extra_positional_rejected() {
        let result = parse_from(["flowtag", "a", "b", "c", "d"]);
        assert!(result.is_err());
    }

    // ===========================================
    // Options
    // ===========================================

    #[test]
    fn test_summary_flag() {
        let cli = parse_from([
            "flowtag",
            "flows.log",
            "lookup.csv",
            "out.txt",
            "--summary",
            "summary.json",
        ])
        .expect("parse");
        assert_eq!(cli.summary, Some(PathBuf::from("summary.json")));
    }

    #[test]
    fn test_verbose_count() {
        let cli = parse_from(["flowtag", "-vv", "flows.log", "lookup.csv", "out.txt"]).expect("parse");
        assert_eq!(cli.verbose, 2);

        let cli = parse_from(["flowtag", "flows.log", "lookup.csv", "out.txt", "--verbose"])
            .expect("parse");
        assert_eq!(cli.verbose, 1);
    }

    // ===========================================
    // Validation
    // ===========================================

    #[test]
    fn test_validate_ok() {
        let cli = parse_from(["flowtag", "flows.log", "lookup.csv", "out.txt"]).unwrap();
        assert_eq!(cli.validate(), Ok(()));
    }

    #[test]
    fn test_validate_output_is_flow_log() {
        let cli = parse_from(["flowtag", "flows.log", "lookup.csv", "flows.log"]).unwrap();
        assert_eq!(
            cli.validate(),
            Err(CliError::OutputOverwritesInput(PathBuf::from("flows.log")))
        );
    }

    #[test]
    fn test_validate_output_is_lookup_normalized() {
        let cli = parse_from(["flowtag", "flows.log", "data/lookup.csv", "data//./lookup.csv"]).unwrap();
        assert!(matches!(cli.validate(), Err(CliError::OutputOverwritesInput(_))));
    }

    #[test]
    fn test_validate_summary_conflicts_with_report() {
        let cli = parse_from([
            "flowtag",
            "flows.log",
            "lookup.csv",
            "out.txt",
            "--summary",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(
            cli.validate(),
            Err(CliError::SummaryConflicts(PathBuf::from("out.txt")))
        );
    }

    #[test]
    fn test_error_display() {
        let err = CliError::OutputOverwritesInput(PathBuf::from("flows.log"));
        assert!(err.to_string().contains("flows.log"));
    }
}
