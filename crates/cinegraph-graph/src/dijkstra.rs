//! Single-source shortest paths.
//!
//! Dijkstra's algorithm over the shared graph contract, backed by the
//! indexed min-heap: every vertex is seeded up front, and each improving
//! relaxation feeds back through decrease-key instead of re-inserting
//! stale entries.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use crate::heap::IndexedMinHeap;

/// The result of one Dijkstra run: distances and predecessors from a
/// single source, indexed by vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    /// The source vertex this tree was grown from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source to `v`; `f64::INFINITY` when `v`
    /// is unreachable or out of range.
    pub fn distance(&self, v: VertexId) -> f64 {
        self.distances.get(v).copied().unwrap_or(f64::INFINITY)
    }

    /// True when a path from the source to `v` exists.
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_finite()
    }

    /// The vertex preceding `v` on its shortest path. The source and
    /// unreachable vertices have none.
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(v).copied().flatten()
    }

    /// All distances, indexed by vertex.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// All predecessors, indexed by vertex.
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Reconstructs the shortest path from the source to `target`,
    /// inclusive of both endpoints, by walking the predecessor chain.
    ///
    /// # Errors
    /// `GraphError::UnknownVertex` when `target` was not part of the graph
    /// this tree was computed on; `GraphError::NoPath` when `target` is
    /// unreachable. An unreachable target never yields a partial path.
    pub fn path_to(&self, target: VertexId) -> Result<Vec<VertexId>> {
        if target >= self.distances.len() {
            return Err(GraphError::UnknownVertex { vertex: target });
        }
        if !self.is_reachable(target) {
            return Err(GraphError::NoPath {
                from: self.source,
                to: target,
            });
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Ok(path)
    }
}

/// Runs Dijkstra's algorithm from `source`.
///
/// Every vertex is seeded into the heap, the source at distance 0 and the
/// rest at infinity; each pop settles one vertex, and each improving edge
/// relaxation updates the heap through `change_priority`. Relaxation uses
/// the graph's own `edge_weight`, so the same code produces hop counts on
/// the unweighted store and true weighted distances on the weighted one.
///
/// Vertex ids are assumed dense (`0..vertex_count`), per the graph
/// contract.
///
/// # Errors
/// `GraphError::UnknownVertex` when `source` is not registered.
pub fn dijkstra<G: Graph + ?Sized>(graph: &G, source: VertexId) -> Result<ShortestPathTree> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::UnknownVertex { vertex: source });
    }

    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    distances[source] = 0.0;

    let mut heap = IndexedMinHeap::with_capacity(n);
    for v in graph.vertices() {
        heap.push(distances[v], v);
    }

    while !heap.is_empty() {
        let u = heap.pop();
        for v in graph.neighbors(u)? {
            let candidate = distances[u] + graph.edge_weight(u, v);
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                heap.change_priority(v, candidate);
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyGraph;
    use crate::weighted::WeightedGraph;

    /// 0 -> 1 -> 2 -> 3, edges in that direction only.
    fn directed_path(n: usize) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for v in 0..n {
            graph.add_vertex(v);
        }
        for v in 1..n {
            graph.add_edge(v - 1, v).unwrap();
        }
        graph
    }

    /// i-1 <-> i for i = 1..n-1.
    fn bidirectional_path(n: usize) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for v in 0..n {
            graph.add_vertex(v);
        }
        for v in 1..n {
            graph.add_edge(v - 1, v).unwrap();
            graph.add_edge(v, v - 1).unwrap();
        }
        graph
    }

    #[test]
    fn test_directed_path_predecessors() {
        let graph = directed_path(4);
        let tree = dijkstra(&graph, 0).unwrap();

        assert_eq!(tree.predecessors(), &[None, Some(0), Some(1), Some(2)]);
        assert_eq!(tree.distances(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_bidirectional_path_distances_from_middle() {
        let graph = bidirectional_path(10);
        let tree = dijkstra(&graph, 5).unwrap();

        let expected = [5.0, 4.0, 3.0, 2.0, 1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(tree.distances(), &expected);
    }

    #[test]
    fn test_relaxation_uses_real_edge_weights() {
        // Direct hop 0->1 costs 10; the detour through 2 costs 3 + 4 = 7.
        let mut graph = WeightedGraph::new();
        for v in 0..3 {
            graph.add_vertex(v);
        }
        graph.add_edge_with_weight(0, 1, 10.0).unwrap();
        graph.add_edge_with_weight(0, 2, 3.0).unwrap();
        graph.add_edge_with_weight(2, 1, 4.0).unwrap();

        let tree = dijkstra(&graph, 0).unwrap();

        assert_eq!(tree.distance(1), 7.0);
        assert_eq!(tree.predecessor(1), Some(2));
        assert_eq!(tree.path_to(1).unwrap(), vec![0, 2, 1]);
    }

    #[test]
    fn test_unreachable_vertex_stays_infinite() {
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(0, 1).unwrap();

        let tree = dijkstra(&graph, 0).unwrap();

        assert!(!tree.is_reachable(2));
        assert_eq!(tree.distance(2), f64::INFINITY);
        assert_eq!(tree.predecessor(2), None);
    }

    #[test]
    fn test_path_to_unreachable_target_fails() {
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);

        let tree = dijkstra(&graph, 0).unwrap();

        assert_eq!(
            tree.path_to(1),
            Err(GraphError::NoPath { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_path_to_source_is_the_source_alone() {
        let graph = directed_path(3);
        let tree = dijkstra(&graph, 0).unwrap();

        assert_eq!(tree.path_to(0).unwrap(), vec![0]);
    }

    #[test]
    fn test_path_follows_predecessors_back_to_source() {
        let graph = directed_path(4);
        let tree = dijkstra(&graph, 0).unwrap();

        assert_eq!(tree.path_to(3).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let graph = directed_path(2);

        assert_eq!(
            dijkstra(&graph, 9).unwrap_err(),
            GraphError::UnknownVertex { vertex: 9 }
        );
    }

    #[test]
    fn test_path_to_out_of_range_target_is_rejected() {
        let graph = directed_path(2);
        let tree = dijkstra(&graph, 0).unwrap();

        assert_eq!(
            tree.path_to(9),
            Err(GraphError::UnknownVertex { vertex: 9 })
        );
    }

    #[test]
    fn test_no_reverse_paths_on_directed_graph() {
        let graph = directed_path(4);
        let tree = dijkstra(&graph, 3).unwrap();

        assert!(!tree.is_reachable(0));
        assert!(tree.path_to(0).is_err());
    }
}
