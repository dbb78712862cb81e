//! Classify command orchestration.
//!
//! Load the lookup table, ingest the flow log, render the report (and
//! optional summary) in memory, then write the outputs.

use std::path::PathBuf;

use flowtag_core::{report, split_lines, Classifier, IngestStats, Summary};
use flowtag_fs::Filesystem;

use crate::cli::Cli;
use crate::io::{load_lookup_table, OutputWriter};
use crate::logger::{Logger, Verbosity};

use super::{CommandError, CommandResult};

/// Result of classify command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyResult {
    /// Path to the written report.
    pub report_path: PathBuf,
    /// Path to the written summary, if requested.
    pub summary_path: Option<PathBuf>,
    /// Flow log line counts.
    pub stats: IngestStats,
    /// Distinct keys in the lookup table.
    pub lookup_entries: usize,
    /// Distinct tags seen.
    pub tag_count: usize,
}

/// Execute the classify command.
pub fn execute_classify<F, L>(args: &Cli, fs: &F, logger: &L) -> CommandResult<ClassifyResult>
where
    F: Filesystem,
    L: Logger,
{
    args.validate()?;

    let table = load_lookup_table(fs, &args.lookup, logger)?;
    let lookup_entries = table.len();
    let mut classifier = Classifier::new(table);

    let content = fs.read_file(&args.flow_log).map_err(|e| CommandError::FlowLog {
        path: args.flow_log.display().to_string(),
        source: e,
    })?;

    let location = args.flow_log.display();
    let log_skipped = logger.enabled(Verbosity::Debug).then_some(|line: usize, text: &str| {
        logger.debug(&format!("skipping {}:{}: {:?}", location, line, text));
    });
    let stats = classifier.ingest_lines_with(split_lines(&content), log_skipped);
    logger.verbose(&format!(
        "ingested {} records from {} lines ({} skipped)",
        stats.records, stats.lines, stats.skipped
    ));

    // Render everything before writing so a report error leaves no output behind
    let rendered = report::generate(classifier.aggregates())?;
    let summary = args
        .summary
        .as_ref()
        .map(|path| (path, Summary::new(classifier.aggregates(), stats, lookup_entries)));

    let writer = OutputWriter::new(fs);
    let report_path = writer.write_report(&args.output, &rendered)?;
    logger.verbose(&format!("wrote report to {}", report_path.display()));

    let summary_path = match summary {
        Some((path, summary)) => {
            let written = writer.write_summary(path, &summary)?;
            logger.verbose(&format!("wrote summary to {}", written.display()));
            Some(written)
        }
        None => None,
    };

    Ok(ClassifyResult {
        report_path,
        summary_path,
        stats,
        lookup_entries,
        tag_count: classifier.aggregates().tag_counts().len(),
    })
}
