//! # WordNet
//!
//! Taxonomy queries over a WordNet-style noun ontology.
//!
//! ## Features
//!
//! - Synset lookup by id and reverse search by word
//! - Hypernym ("is-a") graph with breadth-first distances
//! - Lowest-common-ancestor queries returning every tied ancestor
//! - Atomic, fully reported loading of line-oriented data files

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod wordnet;

pub mod prelude {
    pub use crate::config::WordNetConfig;
    pub use crate::error::{Result, WordNetError};
    pub use crate::graph::DirectedGraph;
    pub use crate::wordnet::{HypernymStore, SharedWordNet, SynsetId, SynsetStore, WordNet};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
