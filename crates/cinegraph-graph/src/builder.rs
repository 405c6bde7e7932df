//! Movie graph construction.
//!
//! Turns a loaded `DataSet` into a graph, one vertex per movie: vertex
//! `v` is the movie with dense id `v + 1`. Construction is two-pass:
//! every vertex is registered first, then one adjacency rule decides the
//! edges.

use crate::adjacency::AdjacencyGraph;
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::weighted::WeightedGraph;
use cinegraph_core::DataSet;
use std::fmt;
use tracing::debug;

/// Default number of reviewers two movies must share before the
/// rating-based rules connect them.
pub const DEFAULT_MIN_SHARED_REVIEWERS: usize = 12;

/// The rule deciding which movie pairs become edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyRule {
    /// Undirected edge when enough reviewers scored both movies
    /// identically.
    SharedRating,
    /// Undirected edge when enough reviewers rated both movies at all.
    CoRated,
    /// Undirected edge when the movies share at least one genre.
    SharedGenre,
    /// Complete weighted graph; weight grows with genre and rating
    /// disagreement, so a low weight means similar movies.
    Dissimilarity,
}

impl fmt::Display for AdjacencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdjacencyRule::SharedRating => "shared-rating",
            AdjacencyRule::CoRated => "co-rated",
            AdjacencyRule::SharedGenre => "shared-genre",
            AdjacencyRule::Dissimilarity => "dissimilarity",
        };
        write!(f, "{name}")
    }
}

/// Builds movie graphs from a dataset under a chosen rule.
pub struct MovieGraphBuilder<'a> {
    dataset: &'a DataSet,
    min_shared: usize,
}

impl<'a> MovieGraphBuilder<'a> {
    /// Creates a builder with the default shared-reviewer threshold.
    pub fn new(dataset: &'a DataSet) -> Self {
        Self {
            dataset,
            min_shared: DEFAULT_MIN_SHARED_REVIEWERS,
        }
    }

    /// Overrides the shared-reviewer threshold used by the rating rules.
    pub fn min_shared_reviewers(mut self, min_shared: usize) -> Self {
        self.min_shared = min_shared;
        self
    }

    /// Builds the graph for `rule`, boxed so the rule can be picked at
    /// runtime.
    pub fn build(&self, rule: AdjacencyRule) -> Result<Box<dyn Graph>> {
        Ok(match rule {
            AdjacencyRule::SharedRating => Box::new(self.shared_rating_graph()?),
            AdjacencyRule::CoRated => Box::new(self.co_rated_graph()?),
            AdjacencyRule::SharedGenre => Box::new(self.shared_genre_graph()?),
            AdjacencyRule::Dissimilarity => Box::new(self.dissimilarity_graph()?),
        })
    }

    /// Connects movie pairs scored identically by at least `min_shared`
    /// reviewers, in both directions.
    pub fn shared_rating_graph(&self) -> Result<AdjacencyGraph> {
        self.undirected_pair_graph(AdjacencyRule::SharedRating, |i, j| {
            self.shared_reviewers(i, j, |a, b| a == b) >= self.min_shared
        })
    }

    /// Connects movie pairs rated by at least `min_shared` of the same
    /// reviewers, in both directions.
    pub fn co_rated_graph(&self) -> Result<AdjacencyGraph> {
        self.undirected_pair_graph(AdjacencyRule::CoRated, |i, j| {
            self.shared_reviewers(i, j, |_, _| true) >= self.min_shared
        })
    }

    /// Connects movie pairs sharing at least one genre, in both
    /// directions.
    pub fn shared_genre_graph(&self) -> Result<AdjacencyGraph> {
        let movies = self.dataset.movies();
        self.undirected_pair_graph(AdjacencyRule::SharedGenre, |i, j| {
            movies[i].genres.iter().any(|genre| movies[j].has_genre(genre))
        })
    }

    /// Connects every ordered pair of distinct movies with a
    /// dissimilarity weight. Identical rating and genre profiles weigh 0;
    /// the weight grows with every genre of `i` missing from `j` and with
    /// the reviewers' rating disagreement.
    pub fn dissimilarity_graph(&self) -> Result<WeightedGraph> {
        let mut graph = WeightedGraph::new();
        self.register_vertices(&mut graph);

        let n = self.dataset.movie_count();
        let reviewer_count = self.dataset.reviewer_count();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let weight = self.dissimilarity_weight(i, j, reviewer_count);
                graph.add_edge_with_weight(i, j, weight)?;
            }
        }

        debug!(
            rule = %AdjacencyRule::Dissimilarity,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "movie graph built"
        );
        Ok(graph)
    }

    /// Shared skeleton of the three unweighted rules: scan unordered
    /// pairs once and insert both directions when `connect` fires.
    fn undirected_pair_graph<F>(&self, rule: AdjacencyRule, connect: F) -> Result<AdjacencyGraph>
    where
        F: Fn(VertexId, VertexId) -> bool,
    {
        let mut graph = AdjacencyGraph::new();
        self.register_vertices(&mut graph);

        let n = self.dataset.movie_count();
        for i in 0..n {
            for j in (i + 1)..n {
                if connect(i, j) {
                    graph.add_edge(i, j)?;
                    graph.add_edge(j, i)?;
                }
            }
        }

        debug!(
            rule = %rule,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "movie graph built"
        );
        Ok(graph)
    }

    fn register_vertices<G: Graph>(&self, graph: &mut G) {
        for v in 0..self.dataset.movie_count() {
            graph.add_vertex(v);
        }
    }

    /// Counts reviewers who rated both movies and whose pair of scores
    /// satisfies `matches`.
    fn shared_reviewers<F>(&self, i: VertexId, j: VertexId, matches: F) -> usize
    where
        F: Fn(f64, f64) -> bool,
    {
        let movie_i = i as u32 + 1;
        let movie_j = j as u32 + 1;
        self.dataset
            .reviewers()
            .values()
            .filter(|reviewer| {
                match (reviewer.rating(movie_i), reviewer.rating(movie_j)) {
                    (Some(a), Some(b)) => matches(a, b),
                    _ => false,
                }
            })
            .count()
    }

    fn dissimilarity_weight(&self, i: VertexId, j: VertexId, reviewer_count: usize) -> f64 {
        let movies = self.dataset.movies();
        let movie_i = &movies[i];
        let movie_j = &movies[j];

        let total_genres = movie_i.genres.len();
        let genre_diffs = movie_i
            .genres
            .iter()
            .filter(|genre| !movie_j.has_genre(genre.as_str()))
            .count();
        let genre_share = if total_genres == 0 {
            0.0
        } else {
            genre_diffs as f64 / total_genres as f64
        };

        let id_i = i as u32 + 1;
        let id_j = j as u32 + 1;
        let mut rating_diffs = 0.0;
        for reviewer in self.dataset.reviewers().values() {
            if let (Some(a), Some(b)) = (reviewer.rating(id_i), reviewer.rating(id_j)) {
                rating_diffs += (a - b).abs() / 4.0;
            }
        }
        // Every reviewer counts in the denominator, rated the pair or not.
        let rating_share = if reviewer_count == 0 {
            0.0
        } else {
            rating_diffs / reviewer_count as f64
        };

        (100.0 * genre_share + 100.0 * rating_share).powi(2)
    }
}
