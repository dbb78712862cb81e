//! Lookup table: (destination port, protocol) to tag.
//!
//! Format:
//! - Comma-separated text with a header row
//! - Columns `dstport`, `protocol` and `tag`, in any order; extra columns are ignored
//! - Fields may be double-quoted (`""` escapes a quote)
//! - Blank lines are ignored
//!
//! Later rows overwrite earlier rows with the same key.

use std::collections::HashMap;

use thiserror::Error;

use crate::lines::split_lines;
use crate::protocol::{normalize, ProtocolToken};

/// Destination port column name.
pub const DSTPORT_COLUMN: &str = "dstport";

/// Protocol column name.
pub const PROTOCOL_COLUMN: &str = "protocol";

/// Tag column name.
pub const TAG_COLUMN: &str = "tag";

/// Errors from lookup table parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup table header is missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed lookup row on line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("invalid dstport on line {line}: '{value}'")]
    InvalidPort { line: usize, value: String },
}

/// Key into the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupKey {
    pub port: i64,
    pub protocol: ProtocolToken,
}

impl LookupKey {
    pub fn new(port: i64, protocol: ProtocolToken) -> Self {
        Self { port, protocol }
    }

    /// Key for a flow record, whose protocol is always numeric.
    pub fn for_flow(port: i64, protocol: i64) -> Self {
        Self::new(port, ProtocolToken::Number(protocol))
    }
}

/// Immutable mapping from (port, protocol) to tag once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<LookupKey, String>,
}

impl LookupTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the tag it replaced.
    pub fn insert(&mut self, key: LookupKey, tag: String) -> Option<String> {
        self.entries.insert(key, tag)
    }

    /// Tag for a key, if mapped.
    pub fn get(&self, key: &LookupKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Tag for a flow's numeric (port, protocol), if mapped.
    pub fn get_flow(&self, port: i64, protocol: i64) -> Option<&str> {
        self.get(&LookupKey::for_flow(port, protocol))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over mappings (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (&LookupKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl FromIterator<(LookupKey, String)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (LookupKey, String)>>(iter: I) -> Self {
        let mut table = LookupTable::empty();
        for (key, tag) in iter {
            table.insert(key, tag);
        }
        table
    }
}

/// Column positions resolved from the header row. A repeated name resolves
/// to its last occurrence.
#[derive(Debug, Clone, Copy)]
struct Columns {
    dstport: usize,
    protocol: usize,
    tag: usize,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, LookupError> {
        let find = |name: &'static str| {
            header
                .iter()
                .rposition(|h| h == name)
                .ok_or(LookupError::MissingColumn(name))
        };

        Ok(Self {
            dstport: find(DSTPORT_COLUMN)?,
            protocol: find(PROTOCOL_COLUMN)?,
            tag: find(TAG_COLUMN)?,
        })
    }

    fn required_len(&self) -> usize {
        self.dstport.max(self.protocol).max(self.tag) + 1
    }
}

/// Parse a lookup table.
pub fn parse_lookup_table(content: &str) -> Result<LookupTable, LookupError> {
    parse_lookup_table_with::<fn(usize, &str)>(content, None)
}

/// Parse a lookup table, reporting each overwritten key to `warn_fn`
/// with its 1-based line number.
pub fn parse_lookup_table_with<F>(
    content: &str,
    mut warn_fn: Option<F>,
) -> Result<LookupTable, LookupError>
where
    F: FnMut(usize, &str),
{
    let mut table = LookupTable::empty();
    let mut columns: Option<Columns> = None;

    for (line_num, line) in split_lines(content).enumerate() {
        let line_no = line_num + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(line).map_err(|reason| LookupError::MalformedRow {
            line: line_no,
            reason,
        })?;

        let cols = match columns {
            Some(cols) => cols,
            None => {
                columns = Some(Columns::from_header(&fields)?);
                continue;
            }
        };

        if fields.len() < cols.required_len() {
            return Err(LookupError::MalformedRow {
                line: line_no,
                reason: format!(
                    "expected at least {} fields, found {}",
                    cols.required_len(),
                    fields.len()
                ),
            });
        }

        let raw_port = &fields[cols.dstport];
        let port: i64 = raw_port
            .trim()
            .parse()
            .map_err(|_| LookupError::InvalidPort {
                line: line_no,
                value: raw_port.clone(),
            })?;
        let key = LookupKey::new(port, normalize(&fields[cols.protocol]));
        let tag = fields[cols.tag].trim().to_string();

        if let Some(previous) = table.insert(key.clone(), tag.clone()) {
            if let Some(ref mut warn) = warn_fn {
                warn(
                    line_no,
                    &format!(
                        "duplicate key (port {}, protocol {}): '{}' replaces '{}'",
                        key.port, key.protocol, tag, previous
                    ),
                );
            }
        }
    }

    Ok(table)
}

/// Split one comma-separated line into fields.
fn split_fields(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);

    Ok(fields)
}
