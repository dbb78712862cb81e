//! flowtag CLI binary.
//!
//! Entry point for the `flowtag` command-line tool.

use std::process::ExitCode;

use clap::Parser;
use flowtag_cli::exit::{codes, exit_code};
use flowtag_cli::{execute_classify, Cli, Logger, StderrLogger, Verbosity};
use flowtag_fs::RealFilesystem;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = StderrLogger::new(Verbosity::from_count(cli.verbose));
    let fs = RealFilesystem;

    match execute_classify(&cli, &fs, &logger) {
        Ok(result) => {
            logger.info(&format!(
                "Classified {} flow records into {} tags ({} lines skipped)",
                result.stats.records, result.tag_count, result.stats.skipped
            ));
            println!("Report: {}", result.report_path.display());
            if let Some(path) = &result.summary_path {
                println!("Summary: {}", path.display());
            }
            ExitCode::from(codes::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
