//! All-pairs shortest paths.
//!
//! Floyd-Warshall over the shared graph contract. Distances are `f64`, so
//! unreachable pairs sit at `f64::INFINITY` and relaxation needs no
//! overflow guard: infinity plus anything is still infinity.

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Dense all-pairs distance matrix produced by `floyd_warshall`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    distances: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Number of vertices the matrix covers.
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance from `u` to `v`; `f64::INFINITY` when `v` is
    /// unreachable or either vertex is out of range.
    pub fn distance(&self, u: VertexId, v: VertexId) -> f64 {
        self.distances
            .get(u)
            .and_then(|row| row.get(v))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// True when a path from `u` to `v` exists.
    pub fn is_reachable(&self, u: VertexId, v: VertexId) -> bool {
        self.distance(u, v).is_finite()
    }

    /// One row of the matrix: distances from `u` to every vertex.
    pub fn row(&self, u: VertexId) -> &[f64] {
        &self.distances[u]
    }

    /// The maximum finite entry together with the first `(start, end)`
    /// pair achieving it in row-major scan order; `None` only for the
    /// empty matrix.
    pub fn diameter(&self) -> Option<(f64, VertexId, VertexId)> {
        let mut best: Option<(f64, VertexId, VertexId)> = None;
        for (i, row) in self.distances.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                if d.is_finite() && best.map_or(true, |(length, _, _)| d > length) {
                    best = Some((d, i, j));
                }
            }
        }
        best
    }

    /// Mean over the finite off-diagonal entries; 0.0 when no such entry
    /// exists. Self-distances never dilute the mean.
    pub fn mean_path_length(&self) -> f64 {
        let mut total = 0.0;
        let mut finite_pairs = 0usize;
        for (i, row) in self.distances.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                if i != j && d.is_finite() {
                    total += d;
                    finite_pairs += 1;
                }
            }
        }
        if finite_pairs == 0 {
            0.0
        } else {
            total / finite_pairs as f64
        }
    }
}

/// Runs Floyd-Warshall on `graph`, producing the full all-pairs matrix.
///
/// Initialization: zero on the diagonal, `edge_weight(i, j)` where an edge
/// exists, infinity elsewhere. Every vertex then serves as an intermediate
/// exactly once, the first included. O(V³) time, O(V²) space; the result
/// does not depend on vertex visitation order.
///
/// Vertex ids are assumed dense (`0..vertex_count`), per the graph
/// contract.
pub fn floyd_warshall<G: Graph + ?Sized>(graph: &G) -> Result<DistanceMatrix> {
    let n = graph.vertex_count();
    let mut distances = vec![vec![f64::INFINITY; n]; n];

    for i in 0..n {
        for j in graph.neighbors(i)? {
            distances[i][j] = graph.edge_weight(i, j);
        }
        // The diagonal stays zero even in the presence of self-loops.
        distances[i][i] = 0.0;
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through_k = distances[i][k] + distances[k][j];
                if through_k < distances[i][j] {
                    distances[i][j] = through_k;
                }
            }
        }
    }

    Ok(DistanceMatrix { distances })
}
