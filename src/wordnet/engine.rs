//! Session object holding both stores.
//!
//! Synset and hypernym sources are validated together before anything is
//! committed: both batches must parse, and (unless disabled in the config)
//! every id a hypernym record mentions must be a known synset id. A rejected
//! load leaves both stores untouched.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ahash::AHashSet;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::WordNetConfig;
use crate::error::{Result, WordNetError};
use crate::wordnet::SynsetId;
use crate::wordnet::hypernyms::{HypernymBatch, HypernymStore};
use crate::wordnet::synsets::{SynsetBatch, SynsetStore};

/// What a successful load committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Synsets added to the store.
    pub synsets: usize,
    /// Hypernym records (lines) in the committed batch.
    pub hypernym_records: usize,
    /// Hypernym pairs committed.
    pub hypernym_pairs: usize,
}

/// Size of the loaded taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetStats {
    pub synsets: usize,
    pub vertices: usize,
    pub edges: usize,
}

/// Synset and hypernym stores for one session.
#[derive(Debug, Clone, Default)]
pub struct WordNet {
    config: WordNetConfig,
    synsets: SynsetStore,
    hypernyms: HypernymStore,
}

impl WordNet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WordNetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &WordNetConfig {
        &self.config
    }

    pub fn synsets(&self) -> &SynsetStore {
        &self.synsets
    }

    pub fn hypernyms(&self) -> &HypernymStore {
        &self.hypernyms
    }

    /// Validate and commit a synset source and a hypernym source together.
    pub fn load(&mut self, synsets: &str, hypernyms: &str) -> Result<LoadSummary> {
        let (synset_batch, hypernym_batch) = self.prepare(synsets, hypernyms)?;
        Ok(self.commit(synset_batch, hypernym_batch))
    }

    /// Read both files and [`load`](Self::load) them.
    pub fn load_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        synsets_path: P,
        hypernyms_path: Q,
    ) -> Result<LoadSummary> {
        let synsets = std::fs::read_to_string(synsets_path.as_ref())?;
        let hypernyms = std::fs::read_to_string(hypernyms_path.as_ref())?;
        info!(
            "loading synsets from {} and hypernyms from {}",
            synsets_path.as_ref().display(),
            hypernyms_path.as_ref().display()
        );
        self.load(&synsets, &hypernyms)
    }

    /// Load the data files named in the configuration.
    pub fn load_configured(&mut self) -> Result<LoadSummary> {
        let (synsets, hypernyms) = self.config.data_paths()?;
        let (synsets, hypernyms) = (synsets.to_path_buf(), hypernyms.to_path_buf());
        self.load_files(synsets, hypernyms)
    }

    /// Parse both sources and check cross-file references. No mutation.
    fn prepare(
        &self,
        synsets: &str,
        hypernyms: &str,
    ) -> Result<(SynsetBatch, HypernymBatch)> {
        let synset_batch = SynsetStore::parse(synsets).inspect_err(|e| warn!("{e}"))?;
        let hypernym_batch = HypernymStore::parse(hypernyms).inspect_err(|e| warn!("{e}"))?;

        if self.config.verify_references {
            let dangling = self.dangling_references(&synset_batch, &hypernym_batch);
            if !dangling.is_empty() {
                let err = WordNetError::DanglingReferences(dangling);
                warn!("{err}");
                return Err(err);
            }
        }
        Ok((synset_batch, hypernym_batch))
    }

    fn commit(
        &mut self,
        synset_batch: SynsetBatch,
        hypernym_batch: HypernymBatch,
    ) -> LoadSummary {
        let hypernym_records = hypernym_batch.len();
        let synsets = self.synsets.commit(synset_batch);
        let hypernym_pairs = self.hypernyms.commit(hypernym_batch);
        LoadSummary {
            synsets,
            hypernym_records,
            hypernym_pairs,
        }
    }

    /// Hypernym ids defined neither by the synset batch nor by earlier loads.
    fn dangling_references(
        &self,
        synset_batch: &SynsetBatch,
        hypernym_batch: &HypernymBatch,
    ) -> Vec<SynsetId> {
        let defined: AHashSet<SynsetId> = synset_batch.ids().collect();
        let dangling: BTreeSet<SynsetId> = hypernym_batch
            .ids()
            .filter(|id| !defined.contains(id) && !self.synsets.contains(*id))
            .collect();
        dangling.into_iter().collect()
    }

    pub fn lookup(&self, id: SynsetId) -> &[String] {
        self.synsets.lookup(id)
    }

    pub fn find(&self, word: &str) -> BTreeSet<SynsetId> {
        self.synsets.find_synsets(word)
    }

    pub fn find_many<S: AsRef<str>>(&self, words: &[S]) -> BTreeMap<String, BTreeSet<SynsetId>> {
        self.synsets.find_synsets_many(words)
    }

    pub fn lca(&self, id1: SynsetId, id2: SynsetId) -> Option<BTreeSet<SynsetId>> {
        self.hypernyms.lca(id1, id2)
    }

    pub fn stats(&self) -> WordNetStats {
        WordNetStats {
            synsets: self.synsets.len(),
            vertices: self.hypernyms.graph().vertex_count(),
            edges: self.hypernyms.graph().edge_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordnet::record::RecordKind;

    const SYNSETS: &str = "id: 1 synset: dog\nid: 2 synset: canine\nid: 3 synset: animal\nid: 4 synset: cat\n";
    const HYPERNYMS: &str = "from: 1 to: 2\nfrom: 2 to: 3\nfrom: 4 to: 2\n";

    #[test]
    fn test_load_and_query() {
        let mut wordnet = WordNet::new();
        let summary = wordnet.load(SYNSETS, HYPERNYMS).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                synsets: 4,
                hypernym_records: 3,
                hypernym_pairs: 3
            }
        );
        assert_eq!(wordnet.lookup(3), ["animal".to_string()]);
        assert_eq!(wordnet.find("dog"), BTreeSet::from([1]));
        assert_eq!(wordnet.lca(1, 4), Some(BTreeSet::from([2])));
        assert_eq!(
            wordnet.stats(),
            WordNetStats {
                synsets: 4,
                vertices: 4,
                edges: 3
            }
        );
    }

    #[test]
    fn test_dangling_reference_rejects_both() {
        let mut wordnet = WordNet::new();
        let err = wordnet
            .load(SYNSETS, "from: 1 to: 2\nfrom: 9 to: 3,8\n")
            .unwrap_err();
        match err {
            WordNetError::DanglingReferences(ids) => assert_eq!(ids, vec![8, 9]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(wordnet.synsets().len(), 0);
        assert_eq!(wordnet.stats().vertices, 0);
    }

    #[test]
    fn test_invalid_hypernyms_reject_synsets() {
        let mut wordnet = WordNet::new();
        let err = wordnet.load(SYNSETS, "from: 1 to: 1\n").unwrap_err();
        assert!(matches!(
            err,
            WordNetError::InvalidLines {
                kind: RecordKind::Hypernym,
                ..
            }
        ));
        assert!(wordnet.lookup(1).is_empty());
    }

    #[test]
    fn test_synset_errors_reported_first() {
        let mut wordnet = WordNet::new();
        let err = wordnet.load("bogus\n", "also bogus\n").unwrap_err();
        assert!(matches!(
            err,
            WordNetError::InvalidLines {
                kind: RecordKind::Synset,
                ..
            }
        ));
    }

    #[test]
    fn test_references_to_earlier_loads() {
        let mut wordnet = WordNet::new();
        wordnet.load(SYNSETS, HYPERNYMS).unwrap();
        let summary = wordnet
            .load("id: 5 synset: wolf\n", "from: 5 to: 2\n")
            .unwrap();
        assert_eq!(summary.synsets, 1);
        assert_eq!(wordnet.lca(5, 1), Some(BTreeSet::from([2])));
    }

    #[test]
    fn test_unverified_references() {
        let config = WordNetConfig {
            verify_references: false,
            ..WordNetConfig::default()
        };
        let mut wordnet = WordNet::with_config(config);
        wordnet.load("id: 1 synset: dog\n", "from: 1 to: 2\n").unwrap();
        assert_eq!(wordnet.lca(1, 2), Some(BTreeSet::from([2])));
        assert!(wordnet.lookup(2).is_empty());
    }

    #[test]
    fn test_load_configured_without_paths() {
        let mut wordnet = WordNet::new();
        assert!(matches!(
            wordnet.load_configured(),
            Err(WordNetError::Config(_))
        ));
    }
}
