//! Report generation.
//!
//! The report has two comma-separated sections separated by a blank line:
//! counts per tag, then counts per (port, protocol) pair. It is rendered to a
//! string in full before anything is written, so an unknown protocol number
//! aborts the run without leaving a partial report.

use std::fmt::Write as _;

use thiserror::Error;

use crate::classifier::Aggregates;
use crate::protocol::{textualize, UnknownProtocol};

/// Title of the tag section.
pub const TAG_SECTION_TITLE: &str = "Tag Counts:";

/// Header row of the tag section.
pub const TAG_SECTION_HEADER: &str = "Tag,Count";

/// Title of the port/protocol section.
pub const PORT_PROTOCOL_SECTION_TITLE: &str = "Port/Protocol Combination Counts:";

/// Header row of the port/protocol section.
pub const PORT_PROTOCOL_SECTION_HEADER: &str = "Port,Protocol,Count";

/// Errors from report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("cannot report port {port}: {source}")]
    UnknownProtocol {
        port: i64,
        #[source]
        source: UnknownProtocol,
    },
}

/// Render the report for the given counters.
pub fn generate(aggregates: &Aggregates) -> Result<String, ReportError> {
    let mut report = String::new();

    // Section 1: tag counts
    report.push_str(TAG_SECTION_TITLE);
    report.push('\n');
    report.push_str(TAG_SECTION_HEADER);
    report.push('\n');
    for (tag, count) in aggregates.tag_counts() {
        let _ = writeln!(report, "{},{}", tag, count);
    }

    report.push('\n');

    // Section 2: port/protocol counts
    report.push_str(PORT_PROTOCOL_SECTION_TITLE);
    report.push('\n');
    report.push_str(PORT_PROTOCOL_SECTION_HEADER);
    report.push('\n');
    for (&(port, protocol), count) in aggregates.port_protocol_counts() {
        let name = textualize(protocol)
            .map_err(|source| ReportError::UnknownProtocol { port, source })?;
        let _ = writeln!(report, "{},{},{}", port, name, count);
    }

    Ok(report)
}
