//! WordNet-style noun taxonomy.
//!
//! Two independently loaded datasets make up a taxonomy:
//!
//! - synsets: an id and the list of words that are synonyms of each other
//! - hypernyms: directed "is-a" edges from a specific synset to a more
//!   general one
//!
//! ```text
//! id: 1 synset: dog,domestic_dog      from: 1 to: 2
//! id: 2 synset: canine                from: 2 to: 3
//! id: 3 synset: animal
//! ```
//!
//! # Components
//!
//! - [`record`] - Line grammars for both file formats
//! - [`synsets`] - Id ↔ word repository
//! - [`hypernyms`] - Relationship repository and lowest-common-ancestor engine
//! - [`engine`] - Session object holding both stores with cross-file validation
//! - [`shared`] - Lock-protected handle for concurrent callers
//!
//! # Examples
//!
//! ```
//! use wordnet::wordnet::WordNet;
//!
//! let mut wordnet = WordNet::new();
//! wordnet
//!     .load(
//!         "id: 1 synset: dog\nid: 2 synset: canine\nid: 3 synset: animal\nid: 4 synset: cat\n",
//!         "from: 1 to: 2\nfrom: 2 to: 3\nfrom: 4 to: 2\n",
//!     )
//!     .unwrap();
//!
//! assert_eq!(wordnet.lookup(1), ["dog".to_string()]);
//! assert_eq!(wordnet.lca(1, 4).unwrap().into_iter().collect::<Vec<_>>(), vec![2]);
//! ```

pub mod engine;
pub mod hypernyms;
pub mod record;
pub mod shared;
pub mod synsets;

pub use engine::{LoadSummary, WordNet, WordNetStats};
pub use hypernyms::HypernymStore;
pub use shared::SharedWordNet;
pub use synsets::SynsetStore;

/// Identifier of a synset. Shared by both stores.
pub type SynsetId = u64;
