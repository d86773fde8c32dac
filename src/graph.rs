//! Minimal directed graph used to hold hypernym relationships.
//!
//! The graph knows nothing about synsets: vertices are plain ids, so it can be
//! reused for any "specific → general" relation.

use std::collections::VecDeque;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

/// Directed graph with outgoing adjacency sets.
///
/// Every vertex has an adjacency entry (possibly empty), so the key set of
/// `adjacency` is the vertex set and every edge endpoint is a vertex.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    adjacency: AHashMap<V, AHashSet<V>>,
    edge_count: usize,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: AHashMap::new(),
            edge_count: 0,
        }
    }
}

impl<V: Copy + Eq + Hash> DirectedGraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_vertex(&self, vertex: V) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Register a vertex. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    pub fn has_edge(&self, from: V, to: V) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|targets| targets.contains(&to))
    }

    /// Add the edge `from → to`.
    ///
    /// Both endpoints must already be vertices; returns `false` without
    /// mutating the graph otherwise. Re-adding an existing edge is a no-op
    /// that still returns `true`.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        if !self.has_vertex(to) {
            return false;
        }
        match self.adjacency.get_mut(&from) {
            Some(targets) => {
                if targets.insert(to) {
                    self.edge_count += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Direct successors of `vertex`, empty for unknown vertices.
    pub fn neighbors(&self, vertex: V) -> impl Iterator<Item = V> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adjacency.keys().copied()
    }

    /// Breadth-first distances from `start` following outgoing edges.
    ///
    /// Returns `None` if `start` is not a vertex. Otherwise every reachable
    /// vertex maps to its minimum hop count, with `start` at 0. Each vertex is
    /// enqueued at most once, so cycles terminate.
    pub fn bfs(&self, start: V) -> Option<AHashMap<V, usize>> {
        if !self.has_vertex(start) {
            return None;
        }

        let mut distances = AHashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(start, 0);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            let next = distances[&vertex] + 1;
            for neighbor in self.neighbors(vertex) {
                if !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, next);
                    queue.push_back(neighbor);
                }
            }
        }

        Some(distances)
    }
}
