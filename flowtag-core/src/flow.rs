//! Flow log record parsing.
//!
//! Records are whitespace-separated lines in the version 2 flow log layout.
//! Only the destination port and protocol number are extracted.

/// Minimum number of fields in a version 2 flow log record.
pub const MIN_FLOW_FIELDS: usize = 14;

/// Zero-based index of the destination port field.
pub const DST_PORT_FIELD: usize = 6;

/// Zero-based index of the protocol number field.
pub const PROTOCOL_FIELD: usize = 7;

/// The subset of a flow record used for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowRecord {
    pub dst_port: i64,
    pub protocol: i64,
}

impl FlowRecord {
    pub fn new(dst_port: i64, protocol: i64) -> Self {
        Self { dst_port, protocol }
    }

    /// Parse a flow log line.
    ///
    /// Returns `None` for lines with fewer than 14 fields or a non-integer
    /// port/protocol. Values are not range-checked.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FLOW_FIELDS {
            return None;
        }

        let dst_port = fields[DST_PORT_FIELD].parse().ok()?;
        let protocol = fields[PROTOCOL_FIELD].parse().ok()?;

        Some(Self { dst_port, protocol })
    }
}

/// Parse a single flow log line.
pub fn parse_flow_line(line: &str) -> Option<FlowRecord> {
    FlowRecord::parse(line)
}
