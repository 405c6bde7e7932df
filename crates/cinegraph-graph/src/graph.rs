//! The shared graph contract.
//!
//! Both adjacency stores implement this trait, so the shortest-path and
//! statistics code is written once against the abstraction rather than a
//! concrete representation. The trait is object safe: callers that pick a
//! store at runtime hold a `Box<dyn Graph>`.

use crate::error::Result;

/// Unique identifier for a vertex in the graph.
///
/// Vertices are dense non-negative integers `0..n-1`, registered by the
/// caller before any edge is added.
pub type VertexId = usize;

/// Operations common to `AdjacencyGraph` and `WeightedGraph`.
///
/// Edges are directed: adding `(u, v)` affects only `u`'s adjacency. An
/// undirected relation is two insertions, one per direction. Self-loops
/// are not rejected.
pub trait Graph {
    /// Number of registered vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edge insertions performed.
    ///
    /// Re-inserting an existing edge still increments this counter, so the
    /// value counts insertion operations, not distinct edges.
    fn edge_count(&self) -> usize;

    /// Registers a vertex. Re-registering is a no-op and never clears
    /// existing adjacency.
    fn add_vertex(&mut self, v: VertexId);

    /// Adds a directed edge from `u` to `v`.
    ///
    /// The weighted store records weight 1.0; use its
    /// `add_edge_with_weight` for anything else.
    ///
    /// # Errors
    /// `GraphError::UnknownVertex` when either endpoint is unregistered.
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()>;

    /// All registered vertices, in no particular order.
    fn vertices(&self) -> Vec<VertexId>;

    /// Out-neighbors of `v`, in no particular order.
    ///
    /// # Errors
    /// `GraphError::UnknownVertex` when `v` is unregistered.
    fn neighbors(&self, v: VertexId) -> Result<Vec<VertexId>>;

    /// True when `v` has been registered.
    fn contains_vertex(&self, v: VertexId) -> bool;

    /// True when the directed edge `(u, v)` exists.
    ///
    /// # Errors
    /// `GraphError::UnknownVertex` when either endpoint is unregistered.
    fn edge_exists(&self, u: VertexId, v: VertexId) -> Result<bool>;

    /// Out-degree of `v`.
    ///
    /// # Errors
    /// `GraphError::UnknownVertex` when `v` is unregistered.
    fn degree(&self, v: VertexId) -> Result<usize>;

    /// Weight of the edge `(u, v)`.
    ///
    /// The unweighted store answers 1.0 unconditionally. The weighted
    /// store assumes the edge exists and does not re-check.
    fn edge_weight(&self, u: VertexId, v: VertexId) -> f64;

    /// Resets to the empty graph: no vertices, no edges, counter at zero.
    fn clear(&mut self);
}
