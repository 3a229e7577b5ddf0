//! Parsing of `/range/{prefix}` response bodies.
//!
//! A body is a sequence of `SUFFIX:COUNT` lines separated by CRLF. The last
//! line may or may not carry a terminator.

use crate::digest::DigestSuffix;

/// One `SUFFIX:COUNT` line of a range response, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateEntry<'a> {
    pub suffix: &'a str,
    pub count: &'a str,
}

impl<'a> CandidateEntry<'a> {
    /// Splits a line at its first `:`. Lines without one are not entries.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (suffix, count) = line.split_once(':')?;
        Some(Self { suffix, count })
    }

    /// Parses the seen-count field.
    pub fn seen_count(&self) -> Result<u64, MalformedCount> {
        let field = self.count.trim();
        // u64::from_str accepts a leading '+', the service never sends one.
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MalformedCount { field: field.to_string() });
        }
        field.parse().map_err(|_| MalformedCount { field: field.to_string() })
    }
}

/// The count field of the matching entry was not a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field {field:?} is not a non-negative integer")]
pub struct MalformedCount {
    pub field: String,
}

/// Iterates the entries of a range body in order.
///
/// Accepts both CRLF and bare LF terminators and skips blank lines.
pub fn candidates(body: &str) -> impl Iterator<Item = CandidateEntry<'_>> {
    body.lines().filter(|line| !line.is_empty()).filter_map(CandidateEntry::parse)
}

/// Looks up the seen-count for `suffix` in a range body.
///
/// Only an entry whose whole suffix field equals `suffix` matches; text that
/// merely contains the suffix somewhere else in the body does not.
///
/// Returns `Ok(None)` when no entry matches.
pub fn seen_count(body: &str, suffix: DigestSuffix<'_>) -> Result<Option<u64>, MalformedCount> {
    let suffix = suffix.as_str();
    match candidates(body).find(|entry| entry.suffix == suffix) {
        Some(entry) => entry.seen_count().map(Some),
        None => Ok(None),
    }
}
