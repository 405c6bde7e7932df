//! Unweighted adjacency storage.
//!
//! Each vertex maps to the set of its out-neighbors. This store backs the
//! rating- and genre-based movie graphs, where the relation itself is the
//! signal and every edge counts as distance 1.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::collections::{HashMap, HashSet};

/// A directed, unweighted graph backed by a hash map of neighbor sets.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Out-neighbors per registered vertex.
    adjacency: HashMap<VertexId, HashSet<VertexId>>,
    /// Count of edge insertions, including re-insertions.
    insertions: usize,
}

impl AdjacencyGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.insertions
    }

    fn add_vertex(&mut self, v: VertexId) {
        // Must not clear adjacency when v is already registered.
        self.adjacency.entry(v).or_default();
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if !self.adjacency.contains_key(&u) {
            return Err(GraphError::UnknownVertex { vertex: u });
        }
        if !self.adjacency.contains_key(&v) {
            return Err(GraphError::UnknownVertex { vertex: v });
        }
        // Counts insertion calls, not distinct edges: a duplicate insert
        // still bumps the counter.
        self.insertions += 1;
        self.adjacency.entry(u).or_default().insert(v);
        Ok(())
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbors(&self, v: VertexId) -> Result<Vec<VertexId>> {
        self.adjacency
            .get(&v)
            .map(|set| set.iter().copied().collect())
            .ok_or(GraphError::UnknownVertex { vertex: v })
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    fn edge_exists(&self, u: VertexId, v: VertexId) -> Result<bool> {
        let neighbors = self
            .adjacency
            .get(&u)
            .ok_or(GraphError::UnknownVertex { vertex: u })?;
        if !self.adjacency.contains_key(&v) {
            return Err(GraphError::UnknownVertex { vertex: v });
        }
        Ok(neighbors.contains(&v))
    }

    fn degree(&self, v: VertexId) -> Result<usize> {
        self.adjacency
            .get(&v)
            .map(HashSet::len)
            .ok_or(GraphError::UnknownVertex { vertex: v })
    }

    /// Every edge in an unweighted graph weighs 1.
    fn edge_weight(&self, _u: VertexId, _v: VertexId) -> f64 {
        1.0
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.insertions = 0;
    }
}
