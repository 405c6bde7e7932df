//! Derived graph statistics.
//!
//! Degree extremes, the diameter, mean path length, and the similarity
//! ranking used to answer "which movies sit closest to this one". All of
//! the path-based metrics run on the all-pairs matrix.

use crate::error::{GraphError, Result};
use crate::floyd_warshall::{floyd_warshall, DistanceMatrix};
use crate::graph::{Graph, VertexId};
use serde::Serialize;

/// The longest finite shortest path in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diameter {
    /// Length of that path; 0.0 when the graph has no finite entry at all.
    pub length: f64,
    /// First `(start, end)` pair achieving the length in row-major scan
    /// order; `None` only for the empty graph.
    pub endpoints: Option<(VertexId, VertexId)>,
}

/// One-shot summary of a graph, serializable for machine consumption.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
    /// Edge insertions over ordered vertex pairs, E / (V·(V−1)).
    pub density: f64,
    pub max_degree: usize,
    pub diameter: Diameter,
    pub mean_path_length: f64,
}

/// Maximum out-degree over all vertices; 0 for the empty graph.
pub fn max_degree<G: Graph + ?Sized>(graph: &G) -> Result<usize> {
    let mut max = 0;
    for v in graph.vertices() {
        max = max.max(graph.degree(v)?);
    }
    Ok(max)
}

/// The graph diameter: runs Floyd-Warshall, then scans for the maximum
/// finite entry, keeping the first pair that achieves it.
///
/// The scan covers the whole matrix, so a graph with no positive finite
/// distance reports length 0.0 with a diagonal pair.
pub fn longest_shortest_path<G: Graph + ?Sized>(graph: &G) -> Result<Diameter> {
    Ok(diameter_of(&floyd_warshall(graph)?))
}

/// Mean over all finite off-diagonal distances.
///
/// Self-distances are excluded, so a complete unit-weight graph averages
/// exactly 1. A graph with no finite off-diagonal pair yields 0.0.
pub fn average_path_length<G: Graph + ?Sized>(graph: &G) -> Result<f64> {
    Ok(floyd_warshall(graph)?.mean_path_length())
}

/// Ranks every vertex by its distance from `v`, closest first, paired
/// with that distance.
///
/// Ties keep index order, so `v` sits at distance 0 alongside any vertex
/// a zero-weight path reaches. Unreachable vertices trail the ranking at
/// infinity. Built for the weighted dissimilarity graph, where a low
/// weight means high similarity, but works on either store.
///
/// # Errors
/// `GraphError::UnknownVertex` when `v` is not registered.
pub fn rank_by_similarity<G: Graph + ?Sized>(
    graph: &G,
    v: VertexId,
) -> Result<Vec<(VertexId, f64)>> {
    if !graph.contains_vertex(v) {
        return Err(GraphError::UnknownVertex { vertex: v });
    }
    let matrix = floyd_warshall(graph)?;
    let mut ranking: Vec<(VertexId, f64)> = matrix.row(v).iter().copied().enumerate().collect();
    ranking.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(ranking)
}

/// Computes the full summary from a single Floyd-Warshall run.
pub fn summarize<G: Graph + ?Sized>(graph: &G) -> Result<GraphSummary> {
    let matrix = floyd_warshall(graph)?;
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    let ordered_pairs = vertices * vertices.saturating_sub(1);
    let density = if ordered_pairs == 0 {
        0.0
    } else {
        edges as f64 / ordered_pairs as f64
    };

    Ok(GraphSummary {
        vertices,
        edges,
        density,
        max_degree: max_degree(graph)?,
        diameter: diameter_of(&matrix),
        mean_path_length: matrix.mean_path_length(),
    })
}

fn diameter_of(matrix: &DistanceMatrix) -> Diameter {
    match matrix.diameter() {
        Some((length, start, end)) => Diameter {
            length,
            endpoints: Some((start, end)),
        },
        None => Diameter {
            length: 0.0,
            endpoints: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyGraph;
    use crate::weighted::WeightedGraph;

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

    /// Every ordered pair connected, unit weights, no self-loops.
    fn complete_graph(n: usize) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for v in 0..n {
            graph.add_vertex(v);
        }
        for u in 0..n {
            for v in 0..n {
                if u != v {
                    graph.add_edge(u, v).unwrap();
                }
            }
        }
        graph
    }

    #[test]
    fn test_max_degree_finds_the_busiest_vertex() {
        // Vertex 2 fans out to 3 neighbors; everyone else has at most 2.
        let mut graph = AdjacencyGraph::new();
        for v in 0..5 {
            graph.add_vertex(v);
        }
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(2, 4).unwrap();

        assert_eq!(max_degree(&graph).unwrap(), 3);
    }

    #[test]
    fn test_max_degree_of_empty_graph_is_zero() {
        let graph = AdjacencyGraph::new();
        assert_eq!(max_degree(&graph).unwrap(), 0);
    }

    #[test]
    fn test_diameter_of_directed_path() {
        let graph = directed_path(4);
        let diameter = longest_shortest_path(&graph).unwrap();

        assert_eq!(diameter.length, 3.0);
        assert_eq!(diameter.endpoints, Some((0, 3)));
    }

    #[test]
    fn test_diameter_of_edgeless_graph_is_a_diagonal_zero() {
        // Only the self-distances are finite, so the scan lands on the
        // first diagonal entry.
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);

        let diameter = longest_shortest_path(&graph).unwrap();

        assert_eq!(diameter.length, 0.0);
        assert_eq!(diameter.endpoints, Some((0, 0)));
    }

    #[test]
    fn test_diameter_of_empty_graph_has_no_endpoints() {
        let graph = AdjacencyGraph::new();
        let diameter = longest_shortest_path(&graph).unwrap();

        assert_eq!(diameter.length, 0.0);
        assert_eq!(diameter.endpoints, None);
    }

    #[test]
    fn test_average_path_length_of_complete_graph_is_one() {
        let graph = complete_graph(4);
        assert_eq!(average_path_length(&graph).unwrap(), 1.0);
    }

    #[test]
    fn test_average_path_length_excludes_self_distances() {
        // 0 <-> 1: both off-diagonal distances are 1, so the mean must be
        // exactly 1 rather than diluted by the diagonal zeros.
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();

        assert_eq!(average_path_length(&graph).unwrap(), 1.0);
    }

    #[test]
    fn test_average_path_length_of_edgeless_graph_is_zero() {
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);

        assert_eq!(average_path_length(&graph).unwrap(), 0.0);
    }

    #[test]
    fn test_rank_by_similarity_sorts_by_distance() {
        let mut graph = WeightedGraph::new();
        for v in 0..4 {
            graph.add_vertex(v);
        }
        graph.add_edge_with_weight(0, 1, 5.0).unwrap();
        graph.add_edge_with_weight(0, 2, 2.0).unwrap();
        // Vertex 3 stays unreachable and must trail the ranking.

        let ranking = rank_by_similarity(&graph, 0).unwrap();

        assert_eq!(ranking[0], (0, 0.0));
        assert_eq!(ranking[1], (2, 2.0));
        assert_eq!(ranking[2], (1, 5.0));
        assert_eq!(ranking[3].0, 3);
        assert!(ranking[3].1.is_infinite());
    }

    #[test]
    fn test_rank_by_similarity_rejects_unknown_vertex() {
        let graph = AdjacencyGraph::new();

        assert_eq!(
            rank_by_similarity(&graph, 3).unwrap_err(),
            GraphError::UnknownVertex { vertex: 3 }
        );
    }

    #[test]
    fn test_summarize_works_through_a_trait_object() {
        let graph: Box<dyn Graph> = Box::new(complete_graph(3));
        let summary = summarize(graph.as_ref()).unwrap();

        assert_eq!(summary.vertices, 3);
        assert_eq!(summary.edges, 6);
        assert_eq!(summary.density, 1.0);
        assert_eq!(summary.max_degree, 2);
        assert_eq!(summary.diameter.length, 1.0);
        assert_eq!(summary.mean_path_length, 1.0);
    }

    #[test]
    fn test_summary_density_counts_insertions() {
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();

        let summary = summarize(&graph).unwrap();

        // Two insertions over two ordered pairs.
        assert_eq!(summary.density, 1.0);
    }
}
