//! Flow classification and aggregation.

use std::collections::BTreeMap;

use crate::flow::FlowRecord;
use crate::lookup::LookupTable;

/// Tag assigned to flows with no lookup table entry.
pub const UNTAGGED: &str = "Untagged";

/// Counters accumulated over all ingested records.
///
/// Both maps are ordered, so iteration is already in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    tag_counts: BTreeMap<String, u64>,
    port_protocol_counts: BTreeMap<(i64, i64), u64>,
}

impl Aggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record under `tag` and its (port, protocol) pair.
    pub fn record(&mut self, tag: &str, record: FlowRecord) {
        *self
            .port_protocol_counts
            .entry((record.dst_port, record.protocol))
            .or_insert(0) += 1;
        match self.tag_counts.get_mut(tag) {
            Some(count) => *count += 1,
            None => {
                self.tag_counts.insert(tag.to_string(), 1);
            }
        }
    }

    /// Counts per tag, ascending by tag.
    pub fn tag_counts(&self) -> &BTreeMap<String, u64> {
        &self.tag_counts
    }

    /// Counts per (port, protocol number), ascending by port then protocol.
    pub fn port_protocol_counts(&self) -> &BTreeMap<(i64, i64), u64> {
        &self.port_protocol_counts
    }

    /// Count for a single tag (0 if never seen).
    pub fn tag_count(&self, tag: &str) -> u64 {
        self.tag_counts.get(tag).copied().unwrap_or(0)
    }

    /// Count for a single (port, protocol) pair (0 if never seen).
    pub fn port_protocol_count(&self, port: i64, protocol: i64) -> u64 {
        self.port_protocol_counts
            .get(&(port, protocol))
            .copied()
            .unwrap_or(0)
    }

    /// Total records counted.
    pub fn total(&self) -> u64 {
        self.tag_counts.values().sum()
    }

    /// Check if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.tag_counts.is_empty()
    }
}

/// Line counts from one bulk ingest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines read.
    pub lines: u64,
    /// Lines that parsed and were counted.
    pub records: u64,
    /// Lines skipped as malformed.
    pub skipped: u64,
}

impl IngestStats {
    /// Combine stats from two ingests.
    pub fn merge(self, other: IngestStats) -> IngestStats {
        IngestStats {
            lines: self.lines + other.lines,
            records: self.records + other.records,
            skipped: self.skipped + other.skipped,
        }
    }
}

fn lookup_tag(table: &LookupTable, record: FlowRecord) -> &str {
    table
        .get_flow(record.dst_port, record.protocol)
        .unwrap_or(UNTAGGED)
}

/// Owns the lookup table and the counters for one run.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: LookupTable,
    aggregates: Aggregates,
}

impl Classifier {
    /// Create a classifier with empty counters.
    pub fn new(table: LookupTable) -> Self {
        Self {
            table,
            aggregates: Aggregates::new(),
        }
    }

    /// The lookup table in use.
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Current counters.
    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    /// Consume the classifier, keeping only the counters.
    pub fn into_aggregates(self) -> Aggregates {
        self.aggregates
    }

    /// Tag for a record, `Untagged` when the table has no entry.
    pub fn tag_for(&self, record: FlowRecord) -> &str {
        lookup_tag(&self.table, record)
    }

    /// Count an already-parsed record.
    pub fn ingest_record(&mut self, record: FlowRecord) {
        let tag = lookup_tag(&self.table, record);
        self.aggregates.record(tag, record);
    }

    /// Parse and count one line. Returns false if the line was skipped.
    pub fn ingest_line(&mut self, line: &str) -> bool {
        match FlowRecord::parse(line) {
            Some(record) => {
                self.ingest_record(record);
                true
            }
            None => false,
        }
    }

    /// Parse and count a sequence of lines, skipping malformed ones.
    pub fn ingest_lines<'a, I>(&mut self, lines: I) -> IngestStats
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ingest_lines_with::<_, fn(usize, &str)>(lines, None)
    }

    /// Like [`Classifier::ingest_lines`], calling `skip_fn` with the 1-based
    /// line number and content of every skipped line.
    pub fn ingest_lines_with<'a, I, F>(&mut self, lines: I, mut skip_fn: Option<F>) -> IngestStats
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(usize, &str),
    {
        let mut stats = IngestStats::default();

        for (line_num, line) in lines.into_iter().enumerate() {
            stats.lines += 1;
            if self.ingest_line(line) {
                stats.records += 1;
            } else {
                stats.skipped += 1;
                if let Some(ref mut skip) = skip_fn {
                    skip(line_num + 1, line);
                }
            }
        }

        stats
    }
}
