//! Line grammars for synset and hypernym files.
//!
//! ```text
//! id: <digits> synset: <word>[,<word>]*
//! from: <digits> to: <digits>[,<digits>]*
//! ```
//!
//! Both grammars are anchored and case-sensitive. Words contain neither
//! whitespace nor commas.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::wordnet::SynsetId;

lazy_static! {
    static ref SYNSET_LINE: Regex =
        Regex::new(r"^id: (\d+) synset: ([^\s,]+(?:,[^\s,]+)*)$").unwrap();
    static ref HYPERNYM_LINE: Regex = Regex::new(r"^from: (\d+) to: (\d+(?:,\d+)*)$").unwrap();
}

/// Which of the two data files a record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Synset,
    Hypernym,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Synset => write!(f, "synset"),
            RecordKind::Hypernym => write!(f, "hypernym"),
        }
    }
}

/// Parse one synset line into its id and words.
///
/// Returns `None` if the line does not match the grammar, including ids that
/// overflow [`SynsetId`].
pub fn parse_synset_line(line: &str) -> Option<(SynsetId, Vec<String>)> {
    let caps = SYNSET_LINE.captures(line)?;
    let id = caps[1].parse().ok()?;
    let words = caps[2].split(',').map(str::to_string).collect();
    Some((id, words))
}

/// Parse one hypernym line into its source id and destination ids.
pub fn parse_hypernym_line(line: &str) -> Option<(SynsetId, Vec<SynsetId>)> {
    let caps = HYPERNYM_LINE.captures(line)?;
    let from = caps[1].parse().ok()?;
    let to = caps[2]
        .split(',')
        .map(|id| id.parse().ok())
        .collect::<Option<Vec<SynsetId>>>()?;
    Some((from, to))
}

/// Iterate over `(line_number, line)` pairs, numbering from 1.
pub(crate) fn numbered_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.lines().enumerate().map(|(i, line)| (i + 1, line))
}
