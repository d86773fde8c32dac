//! Hypernym repository and lowest-common-ancestor engine.

use std::collections::BTreeSet;
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, WordNetError};
use crate::graph::DirectedGraph;
use crate::wordnet::SynsetId;
use crate::wordnet::record::{RecordKind, numbered_lines, parse_hypernym_line};

/// A fully validated hypernym file, ready to be committed.
#[derive(Debug, Clone, Default)]
pub struct HypernymBatch {
    records: Vec<(SynsetId, Vec<SynsetId>)>,
}

impl HypernymBatch {
    /// Number of records (lines) in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every id referenced by the batch, as source or destination.
    pub fn ids(&self) -> impl Iterator<Item = SynsetId> + '_ {
        self.records
            .iter()
            .flat_map(|(from, to)| std::iter::once(*from).chain(to.iter().copied()))
    }

    /// All `(source, destination)` pairs in file order.
    pub fn pairs(&self) -> impl Iterator<Item = (SynsetId, SynsetId)> + '_ {
        self.records
            .iter()
            .flat_map(|(from, to)| to.iter().map(move |dest| (*from, *dest)))
    }
}

/// Directed "is-a" relationships between synset ids.
#[derive(Debug, Clone, Default)]
pub struct HypernymStore {
    graph: DirectedGraph<SynsetId>,
}

impl HypernymStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `source` is-a `destination`.
    ///
    /// Missing vertices are created. Returns `false` without mutation for a
    /// self-referential pair.
    pub fn add_hypernym(&mut self, source: SynsetId, destination: SynsetId) -> bool {
        if source == destination {
            return false;
        }
        self.graph.add_vertex(source);
        self.graph.add_vertex(destination);
        self.graph.add_edge(source, destination)
    }

    pub fn graph(&self) -> &DirectedGraph<SynsetId> {
        &self.graph
    }

    pub fn contains(&self, id: SynsetId) -> bool {
        self.graph.has_vertex(id)
    }

    /// Lowest common ancestors of `id1` and `id2`.
    ///
    /// Each synset reachable from both ids (each id reaches itself) is scored
    /// by the sum of its hop counts from the two ids, and all synsets with the
    /// minimum score are returned. Returns `None` if either id is not in the
    /// graph and an empty set if the two share no ancestor.
    pub fn lca(&self, id1: SynsetId, id2: SynsetId) -> Option<BTreeSet<SynsetId>> {
        let from_first = self.graph.bfs(id1)?;
        let from_second = self.graph.bfs(id2)?;

        let scored: Vec<(SynsetId, usize)> = from_first
            .iter()
            .filter_map(|(id, d1)| from_second.get(id).map(|d2| (*id, d1 + d2)))
            .collect();

        let Some(best) = scored.iter().map(|(_, score)| *score).min() else {
            return Some(BTreeSet::new());
        };

        Some(
            scored
                .into_iter()
                .filter(|(_, score)| *score == best)
                .map(|(id, _)| id)
                .collect(),
        )
    }

    /// Validate a hypernym source without touching the store.
    ///
    /// A line is invalid if it does not match the grammar or lists its own
    /// source among the destinations.
    pub fn parse(source: &str) -> Result<HypernymBatch> {
        let mut batch = HypernymBatch::default();
        let mut invalid = Vec::new();

        for (number, line) in numbered_lines(source) {
            match parse_hypernym_line(line) {
                Some((from, to)) if !to.contains(&from) => batch.records.push((from, to)),
                _ => invalid.push(number),
            }
        }

        if !invalid.is_empty() {
            debug!("hypernym batch rejected, invalid lines: {invalid:?}");
            return Err(WordNetError::invalid_lines(RecordKind::Hypernym, invalid));
        }
        debug!("parsed {} hypernym records", batch.len());
        Ok(batch)
    }

    /// Commit every pair of a validated batch. Returns the number of pairs.
    pub fn commit(&mut self, batch: HypernymBatch) -> usize {
        let mut committed = 0;
        for (from, to) in batch.pairs() {
            if self.add_hypernym(from, to) {
                committed += 1;
            }
        }
        info!(
            "committed {committed} hypernym pairs ({} vertices, {} edges)",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        committed
    }

    /// Parse and commit a hypernym source atomically.
    pub fn load(&mut self, source: &str) -> Result<usize> {
        let batch = Self::parse(source)?;
        Ok(self.commit(batch))
    }

    /// Load a hypernym file from disk.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.load(&content)
    }
}
