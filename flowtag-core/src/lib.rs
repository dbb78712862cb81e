//! flowtag core
//!
//! Classifies flow log records by destination port and protocol against a
//! lookup table and produces:
//! - a text report with counts per tag and per (port, protocol) pair
//! - a machine-readable `summary.json`
//!
//! Pipeline: [`lookup::parse_lookup_table`] -> [`Classifier::ingest_lines`]
//! -> [`report::generate`].

pub mod classifier;
pub mod flow;
pub mod lines;
pub mod lookup;
pub mod protocol;
pub mod report;
pub mod summary;

pub use classifier::{Aggregates, Classifier, IngestStats, UNTAGGED};
pub use flow::{parse_flow_line, FlowRecord};
pub use lines::split_lines;
pub use lookup::{parse_lookup_table, parse_lookup_table_with, LookupError, LookupKey, LookupTable};
pub use protocol::{normalize, textualize, ProtocolId, ProtocolToken, UnknownProtocol};
pub use report::ReportError;
pub use summary::Summary;
