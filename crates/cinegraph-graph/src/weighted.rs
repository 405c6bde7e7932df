//! Weighted adjacency storage.
//!
//! Each vertex maps to a table of out-neighbor weights. The dissimilarity
//! movie graph lives here: edge weight encodes how far apart two movies
//! are, so shortest paths become most-similar chains.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::collections::HashMap;

/// A directed graph with one `f64` weight per edge, backed by nested hash
/// maps.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Out-neighbor weights per registered vertex.
    adjacency: HashMap<VertexId, HashMap<VertexId, f64>>,
    /// Count of edge insertions, including re-insertions.
    insertions: usize,
}

impl WeightedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directed edge from `u` to `v` carrying `weight`.
    ///
    /// Re-adding an edge overwrites the stored weight. Like every other
    /// insert, each call increments the edge counter.
    ///
    /// # Errors
    /// `GraphError::UnknownVertex` when either endpoint is unregistered.
    pub fn add_edge_with_weight(&mut self, u: VertexId, v: VertexId, weight: f64) -> Result<()> {
        if !self.adjacency.contains_key(&u) {
            return Err(GraphError::UnknownVertex { vertex: u });
        }
        if !self.adjacency.contains_key(&v) {
            return Err(GraphError::UnknownVertex { vertex: v });
        }
        self.insertions += 1;
        self.adjacency.entry(u).or_default().insert(v, weight);
        Ok(())
    }
}

impl Graph for WeightedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.insertions
    }

    fn add_vertex(&mut self, v: VertexId) {
        self.adjacency.entry(v).or_default();
    }

    /// Adds the edge with the default weight 1.0.
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.add_edge_with_weight(u, v, 1.0)
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbors(&self, v: VertexId) -> Result<Vec<VertexId>> {
        self.adjacency
            .get(&v)
            .map(|weights| weights.keys().copied().collect())
            .ok_or(GraphError::UnknownVertex { vertex: v })
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    fn edge_exists(&self, u: VertexId, v: VertexId) -> Result<bool> {
        let weights = self
            .adjacency
            .get(&u)
            .ok_or(GraphError::UnknownVertex { vertex: u })?;
        if !self.adjacency.contains_key(&v) {
            return Err(GraphError::UnknownVertex { vertex: v });
        }
        Ok(weights.contains_key(&v))
    }

    fn degree(&self, v: VertexId) -> Result<usize> {
        self.adjacency
            .get(&v)
            .map(HashMap::len)
            .ok_or(GraphError::UnknownVertex { vertex: v })
    }

    /// Returns the stored weight, assuming the edge exists.
    fn edge_weight(&self, u: VertexId, v: VertexId) -> f64 {
        debug_assert!(
            self.adjacency.get(&u).is_some_and(|m| m.contains_key(&v)),
            "edge weight queried for missing edge ({u}, {v})"
        );
        self.adjacency[&u][&v]
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.insertions = 0;
    }
}
