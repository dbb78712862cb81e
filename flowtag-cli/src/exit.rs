//! Exit codes for the flowtag CLI.
//!
//! Code 2 is left to clap, which uses it for usage errors.

use crate::commands::CommandError;

/// Exit code constants.
pub mod codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Arguments parsed but failed validation.
    pub const INVALID_ARGS: u8 = 1;
    /// Lookup table could not be read or parsed.
    pub const LOOKUP_ERROR: u8 = 3;
    /// Flow log could not be read.
    pub const FLOW_LOG_ERROR: u8 = 4;
    /// Report could not be generated.
    pub const REPORT_ERROR: u8 = 5;
    /// Report or summary could not be written.
    pub const OUTPUT_ERROR: u8 = 6;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> u8 {
    match error {
        CommandError::InvalidArgument(_) => codes::INVALID_ARGS,
        CommandError::Lookup(_) => codes::LOOKUP_ERROR,
        CommandError::FlowLog { .. } => codes::FLOW_LOG_ERROR,
        CommandError::Report(_) => codes::REPORT_ERROR,
        CommandError::Output(_) => codes::OUTPUT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliError;
    use crate::io::{LookupLoadError, OutputWriterError};
    use flowtag_core::{ReportError, UnknownProtocol};
    use flowtag_fs::FsError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_invalid_argument() {
        let error = CommandError::InvalidArgument(CliError::OutputOverwritesInput(PathBuf::from("a")));
        assert_eq!(exit_code(&error), codes::INVALID_ARGS);
    }

    #[test]
    fn test_exit_code_lookup() {
        let error = CommandError::Lookup(LookupLoadError::Read {
            path: "lookup.csv".to_string(),
            source: FsError::Path("test".to_string()),
        });
        assert_eq!(exit_code(&error), codes::LOOKUP_ERROR);
    }

    #[test]
    fn test_exit_code_flow_log() {
        let error = CommandError::FlowLog {
            path: "flows.log".to_string(),
            source: FsError::Path("test".to_string()),
        };
        assert_eq!(exit_code(&error), codes::FLOW_LOG_ERROR);
    }

    #[test]
    fn test_exit_code_report() {
        let error = CommandError::Report(ReportError::UnknownProtocol {
            port: 0,
            source: UnknownProtocol(47),
        });
        assert_eq!(exit_code(&error), codes::REPORT_ERROR);
    }

    #[test]
    fn test_exit_code_output() {
        let error = CommandError::Output(OutputWriterError::Write {
            path: "out.txt".to_string(),
            source: FsError::Path("test".to_string()),
        });
        assert_eq!(exit_code(&error), codes::OUTPUT_ERROR);
    }

    #[test]
    fn test_exit_codes_distinct_and_nonzero() {
        let failures = [
            codes::INVALID_ARGS,
            codes::LOOKUP_ERROR,
            codes::FLOW_LOG_ERROR,
            codes::REPORT_ERROR,
            codes::OUTPUT_ERROR,
        ];
        assert_eq!(codes::SUCCESS, 0);
        for (i, a) in failures.iter().enumerate() {
            assert_ne!(*a, 0);
            assert_ne!(*a, 2);
            assert!(failures[i + 1..].iter().all(|b| b != a));
        }
    }
}
