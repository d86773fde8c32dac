//! Error types for the WordNet library.
//!
//! All failures are represented by the [`WordNetError`] enum. Absence of data
//! (an unknown id, a word that belongs to no synset) is never an error and is
//! reported through empty results instead.
//!
//! # Examples
//!
//! ```
//! use wordnet::error::{Result, WordNetError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordNetError::config("missing synsets file"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::wordnet::SynsetId;
use crate::wordnet::record::RecordKind;

/// The main error type for WordNet operations.
#[derive(Error, Debug)]
pub enum WordNetError {
    /// I/O errors (reading data or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A load batch was rejected because some lines are malformed or
    /// semantically invalid. Lines are 1-indexed and in file order.
    #[error("Invalid {kind} lines: {}", join_lines(.lines))]
    InvalidLines { kind: RecordKind, lines: Vec<usize> },

    /// Hypernym records reference ids that no synset defines.
    #[error("Undefined synset ids referenced by hypernyms: {}", join_ids(.0))]
    DanglingReferences(Vec<SynsetId>),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordNetError.
pub type Result<T> = std::result::Result<T, WordNetError>;

impl WordNetError {
    /// Create a new batch rejection error.
    pub fn invalid_lines(kind: RecordKind, lines: Vec<usize>) -> Self {
        WordNetError::InvalidLines { kind, lines }
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordNetError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordNetError::Other(msg.into())
    }

    /// The offending line numbers if this error rejected a load batch.
    pub fn rejected_lines(&self) -> Option<&[usize]> {
        match self {
            WordNetError::InvalidLines { lines, .. } => Some(lines),
            _ => None,
        }
    }
}

fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_ids(ids: &[SynsetId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
