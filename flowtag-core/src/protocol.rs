//! Protocol normalization and textualization.
//!
//! Lookup tables name protocols by keyword ("tcp", "UDP", ...) while flow
//! logs carry IANA protocol numbers. Only the three keywords below are
//! translated; every other token is kept verbatim as an opaque value, so a
//! lookup row with protocol `6` never matches a flow with protocol number 6.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Protocols with a known keyword form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolId {
    Icmp,
    Tcp,
    Udp,
}

impl ProtocolId {
    /// All known protocols, in ascending numeric order.
    pub const ALL: [ProtocolId; 3] = [ProtocolId::Icmp, ProtocolId::Tcp, ProtocolId::Udp];

    /// IANA protocol number.
    pub fn number(self) -> i64 {
        match self {
            ProtocolId::Icmp => 1,
            ProtocolId::Tcp => 6,
            ProtocolId::Udp => 17,
        }
    }

    /// Lowercase keyword used in lookup tables and reports.
    pub fn keyword(self) -> &'static str {
        match self {
            ProtocolId::Icmp => "icmp",
            ProtocolId::Tcp => "tcp",
            ProtocolId::Udp => "udp",
        }
    }

    /// Match a keyword, ignoring case.
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "icmp" => Some(ProtocolId::Icmp),
            "tcp" => Some(ProtocolId::Tcp),
            "udp" => Some(ProtocolId::Udp),
            _ => None,
        }
    }

    /// Match an IANA protocol number.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(ProtocolId::Icmp),
            6 => Some(ProtocolId::Tcp),
            17 => Some(ProtocolId::Udp),
            _ => None,
        }
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A protocol value after normalization.
///
/// Keywords become `Number`; anything else stays `Opaque` with its exact
/// text. The two variants never compare equal, even for `Opaque("6")` and
/// `Number(6)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProtocolToken {
    Number(i64),
    Opaque(String),
}

impl ProtocolToken {
    /// Numeric value, if this token was a recognised keyword or came from a flow record.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ProtocolToken::Number(n) => Some(*n),
            ProtocolToken::Opaque(_) => None,
        }
    }
}

impl From<ProtocolId> for ProtocolToken {
    fn from(id: ProtocolId) -> Self {
        ProtocolToken::Number(id.number())
    }
}

impl fmt::Display for ProtocolToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolToken::Number(n) => write!(f, "{}", n),
            ProtocolToken::Opaque(s) => write!(f, "{:?}", s),
        }
    }
}

/// Normalize a lookup-table protocol token.
pub fn normalize(token: &str) -> ProtocolToken {
    match ProtocolId::from_keyword(token) {
        Some(id) => id.into(),
        None => ProtocolToken::Opaque(token.to_string()),
    }
}

/// Error for a protocol number with no keyword form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown protocol number {0} (expected 1/icmp, 6/tcp or 17/udp)")]
pub struct UnknownProtocol(pub i64);

/// Keyword for a protocol number. Numbers outside {1, 6, 17} are an error.
pub fn textualize(number: i64) -> Result<&'static str, UnknownProtocol> {
    ProtocolId::from_number(number)
        .map(ProtocolId::keyword)
        .ok_or(UnknownProtocol(number))
}
