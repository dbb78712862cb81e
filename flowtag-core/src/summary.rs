//! Machine-readable summary output (summary.json).
//!
//! Carries the same counts as the text report plus run statistics. Unlike the
//! text report, an unknown protocol number is not an error here: its
//! `protocol_name` is `null`.

use serde::{Deserialize, Serialize};

use crate::classifier::{Aggregates, IngestStats};
use crate::protocol::ProtocolId;

/// Current summary schema version.
pub const REPORT_VERSION: u32 = 1;

/// Machine-readable summary of one classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Summary format version.
    pub report_version: u32,
    /// Flow log lines read.
    pub lines: u64,
    /// Records counted.
    pub records: u64,
    /// Lines skipped as malformed.
    pub skipped_lines: u64,
    /// Distinct keys in the lookup table.
    pub lookup_entries: usize,
    /// Counts per tag, ascending by tag.
    pub tag_counts: Vec<TagCount>,
    /// Counts per (port, protocol), ascending by port then protocol.
    pub port_protocol_counts: Vec<PortProtocolCount>,
}

/// One row of the tag section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// One row of the port/protocol section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortProtocolCount {
    pub port: i64,
    pub protocol: i64,
    pub protocol_name: Option<ProtocolId>,
    pub count: u64,
}

impl Summary {
    /// Build a summary from run counters.
    pub fn new(aggregates: &Aggregates, stats: IngestStats, lookup_entries: usize) -> Self {
        let tag_counts = aggregates
            .tag_counts()
            .iter()
            .map(|(tag, &count)| TagCount {
                tag: tag.clone(),
                count,
            })
            .collect();

        let port_protocol_counts = aggregates
            .port_protocol_counts()
            .iter()
            .map(|(&(port, protocol), &count)| PortProtocolCount {
                port,
                protocol,
                protocol_name: ProtocolId::from_number(protocol),
                count,
            })
            .collect();

        Self {
            report_version: REPORT_VERSION,
            lines: stats.lines,
            records: stats.records,
            skipped_lines: stats.skipped,
            lookup_entries,
            tag_counts,
            port_protocol_counts,
        }
    }

    /// Serialize to pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> String {
        let mut json = serde_json::to_string_pretty(self).expect("Summary serialization cannot fail");
        json.push('\n');
        json
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
