//! Synset repository mapping ids to their words.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, info, warn};

use crate::error::{Result, WordNetError};
use crate::wordnet::SynsetId;
use crate::wordnet::record::{RecordKind, numbered_lines, parse_synset_line};

/// A fully validated synset file, ready to be committed.
///
/// Entries are kept in file order and ids are unique within the batch.
#[derive(Debug, Clone, Default)]
pub struct SynsetBatch {
    entries: Vec<(SynsetId, Vec<String>)>,
}

impl SynsetBatch {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids defined by this batch, in file order.
    pub fn ids(&self) -> impl Iterator<Item = SynsetId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}

/// Id → words store with reverse word search.
#[derive(Debug, Clone, Default)]
pub struct SynsetStore {
    synsets: AHashMap<SynsetId, Vec<String>>,
}

impl SynsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a synset.
    ///
    /// Returns `false` without mutating the store if `words` is empty or the
    /// id is already present.
    pub fn add(&mut self, id: SynsetId, words: Vec<String>) -> bool {
        if words.is_empty() || self.synsets.contains_key(&id) {
            return false;
        }
        self.synsets.insert(id, words);
        true
    }

    /// Words of a synset in insertion order, empty if the id is unknown.
    pub fn lookup(&self, id: SynsetId) -> &[String] {
        self.synsets.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: SynsetId) -> bool {
        self.synsets.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SynsetId> + '_ {
        self.synsets.keys().copied()
    }

    /// Every synset id whose word list contains `word`.
    pub fn find_synsets(&self, word: &str) -> BTreeSet<SynsetId> {
        self.synsets
            .iter()
            .filter(|(_, words)| words.iter().any(|w| w == word))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Run [`find_synsets`](Self::find_synsets) for each word.
    ///
    /// Duplicate input words collapse into a single key.
    pub fn find_synsets_many<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> BTreeMap<String, BTreeSet<SynsetId>> {
        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                (word.to_string(), self.find_synsets(word))
            })
            .collect()
    }

    /// Validate a synset source without touching the store.
    ///
    /// A line is invalid if it does not match the grammar or repeats an id
    /// seen earlier in the same source. All invalid lines are reported.
    pub fn parse(source: &str) -> Result<SynsetBatch> {
        let mut batch = SynsetBatch::default();
        let mut seen = AHashSet::new();
        let mut invalid = Vec::new();

        for (number, line) in numbered_lines(source) {
            match parse_synset_line(line) {
                Some((id, words)) if seen.insert(id) => batch.entries.push((id, words)),
                _ => invalid.push(number),
            }
        }

        if !invalid.is_empty() {
            debug!("synset batch rejected, invalid lines: {invalid:?}");
            return Err(WordNetError::invalid_lines(RecordKind::Synset, invalid));
        }
        debug!("parsed {} synset records", batch.len());
        Ok(batch)
    }

    /// Commit a validated batch in file order.
    ///
    /// Ids that already exist from an earlier load are skipped. Returns the
    /// number of synsets actually added.
    pub fn commit(&mut self, batch: SynsetBatch) -> usize {
        let mut added = 0;
        for (id, words) in batch.entries {
            if self.add(id, words) {
                added += 1;
            } else {
                warn!("synset {id} already loaded, skipping");
            }
        }
        info!("committed {added} synsets ({} total)", self.len());
        added
    }

    /// Parse and commit a synset source atomically.
    pub fn load(&mut self, source: &str) -> Result<usize> {
        let batch = Self::parse(source)?;
        Ok(self.commit(batch))
    }

    /// Load a synset file from disk.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.load(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn sample() -> SynsetStore {
        let mut store = SynsetStore::new();
        store
            .load("id: 1 synset: dog,domestic_dog\nid: 2 synset: canine\nid: 3 synset: animal,beast\nid: 4 synset: cat,true_cat,dog\n")
            .unwrap();
        store
    }

    #[test]
    fn test_add() {
        let mut store = SynsetStore::new();
        assert!(store.add(0, words(&["entity"])));
        assert!(!store.add(0, words(&["thing"])));
        assert!(!store.add(1, Vec::new()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup(0), words(&["entity"]).as_slice());
        assert!(store.lookup(1).is_empty());
    }

    #[test]
    fn test_lookup_preserves_file_order() {
        let store = sample();
        assert_eq!(store.lookup(4), words(&["cat", "true_cat", "dog"]).as_slice());
        assert!(store.lookup(42).is_empty());
    }

    #[test]
    fn test_find_synsets() {
        let store = sample();
        assert_eq!(store.find_synsets("dog"), BTreeSet::from([1, 4]));
        assert_eq!(store.find_synsets("canine"), BTreeSet::from([2]));
        assert!(store.find_synsets("missing").is_empty());
        // Whole-word match only.
        assert!(store.find_synsets("do").is_empty());
    }

    #[test]
    fn test_find_synsets_many() {
        let store = sample();
        let found = store.find_synsets_many(&["dog", "beast", "dog", "unicorn"]);
        assert_eq!(found.len(), 3);
        assert_eq!(found["dog"], BTreeSet::from([1, 4]));
        assert_eq!(found["beast"], BTreeSet::from([3]));
        assert!(found["unicorn"].is_empty());
    }

    #[test]
    fn test_load_rejects_whole_batch() {
        let mut store = sample();
        let err = store
            .load("id: 10 synset: fish\nid: x synset: bird\nid: 11 synset: eel\nid: 10 synset: carp\n")
            .unwrap_err();
        assert_eq!(err.rejected_lines(), Some(&[2, 4][..]));
        assert!(store.lookup(10).is_empty());
        assert!(store.lookup(11).is_empty());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_load_skips_previously_loaded_ids() {
        let mut store = sample();
        let added = store.load("id: 1 synset: puppy\nid: 5 synset: horse\n").unwrap();
        assert_eq!(added, 1);
        assert_eq!(store.lookup(1), words(&["dog", "domestic_dog"]).as_slice());
        assert_eq!(store.lookup(5), words(&["horse"]).as_slice());
    }

    #[test]
    fn test_load_empty_source() {
        let mut store = SynsetStore::new();
        assert_eq!(store.load("").unwrap(), 0);
        assert!(store.is_empty());
    }
}
