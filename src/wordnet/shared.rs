//! Thread-safe handle to a [`WordNet`] session.
//!
//! Loads take the write lock for the whole validate-and-commit step, queries
//! share the read lock. Results are returned owned so no guard escapes.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::Result;
use crate::wordnet::SynsetId;
use crate::wordnet::engine::{LoadSummary, WordNet, WordNetStats};

#[derive(Debug, Clone, Default)]
pub struct SharedWordNet {
    inner: Arc<RwLock<WordNet>>,
}

impl SharedWordNet {
    pub fn new(wordnet: WordNet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(wordnet)),
        }
    }

    /// Borrow the session for several queries under one read lock.
    pub fn read(&self) -> RwLockReadGuard<'_, WordNet> {
        self.inner.read()
    }

    pub fn load(&self, synsets: &str, hypernyms: &str) -> Result<LoadSummary> {
        self.inner.write().load(synsets, hypernyms)
    }

    pub fn load_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        synsets_path: P,
        hypernyms_path: Q,
    ) -> Result<LoadSummary> {
        // Read outside the lock; only validation and commit need exclusivity.
        let synsets = std::fs::read_to_string(synsets_path)?;
        let hypernyms = std::fs::read_to_string(hypernyms_path)?;
        self.load(&synsets, &hypernyms)
    }

    pub fn lookup(&self, id: SynsetId) -> Vec<String> {
        self.inner.read().lookup(id).to_vec()
    }

    pub fn find(&self, word: &str) -> BTreeSet<SynsetId> {
        self.inner.read().find(word)
    }

    pub fn find_many<S: AsRef<str>>(&self, words: &[S]) -> BTreeMap<String, BTreeSet<SynsetId>> {
        self.inner.read().find_many(words)
    }

    pub fn lca(&self, id1: SynsetId, id2: SynsetId) -> Option<BTreeSet<SynsetId>> {
        self.inner.read().lca(id1, id2)
    }

    pub fn stats(&self) -> WordNetStats {
        self.inner.read().stats()
    }
}
