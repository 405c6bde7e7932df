//! Cinegraph Graph - Movie graph storage and shortest paths
//!
//! This crate holds the graph side of Cinegraph: adjacency stores for
//! unweighted and weighted graphs, the builder that derives them from a
//! movie dataset, and the path algorithms run over them.
//!
//! # Architecture
//!
//! Both stores implement the object-safe [`Graph`] trait, so callers can
//! pick an adjacency rule at runtime and work through `Box<dyn Graph>`:
//! - [`AdjacencyGraph`] keeps unweighted neighbor sets
//! - [`WeightedGraph`] keeps per-edge `f64` weights
//! - [`dijkstra`] uses an indexed min-heap with decrease-key
//! - [`floyd_warshall`] fills the all-pairs distance matrix
//!
//! # Example
//!
//! ```
//! use cinegraph_graph::{dijkstra, AdjacencyGraph, Graph};
//!
//! let mut graph = AdjacencyGraph::new();
//! for v in 0..3 {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//!
//! let tree = dijkstra(&graph, 0)?;
//! assert_eq!(tree.path_to(2)?, vec![0, 1, 2]);
//! # Ok::<(), cinegraph_graph::GraphError>(())
//! ```

mod adjacency;
mod builder;
mod dijkstra;
mod error;
mod floyd_warshall;
mod graph;
mod heap;
mod stats;
mod weighted;

pub use adjacency::AdjacencyGraph;
pub use builder::{AdjacencyRule, MovieGraphBuilder, DEFAULT_MIN_SHARED_REVIEWERS};
pub use dijkstra::{dijkstra, ShortestPathTree};
pub use error::{GraphError, Result};
pub use floyd_warshall::{floyd_warshall, DistanceMatrix};
pub use graph::{Graph, VertexId};
pub use heap::IndexedMinHeap;
pub use stats::{
    average_path_length, longest_shortest_path, max_degree, rank_by_similarity, summarize,
    Diameter, GraphSummary,
};
pub use weighted::WeightedGraph;
