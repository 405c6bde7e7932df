//! Movie records.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One catalogued movie.
///
/// `id` is the dense 1-based identifier assigned at load time in file
/// order, not the sparse id from the raw dataset. Vertex `v` of a movie
/// graph maps to the movie with id `v + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    /// Release year parsed out of the raw title, when one was present.
    pub year: Option<i32>,
    pub genres: HashSet<String>,
    /// Ratings this movie received, keyed by reviewer id.
    pub ratings: HashMap<u32, f64>,
}

impl Movie {
    /// Creates a movie with no genres or ratings yet.
    pub fn new(id: u32, title: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            genres: HashSet::new(),
            ratings: HashMap::new(),
        }
    }

    /// Records one reviewer's rating. A second rating from the same
    /// reviewer overwrites the first.
    pub fn add_rating(&mut self, reviewer: u32, rating: f64) {
        self.ratings.insert(reviewer, rating);
    }

    /// The rating `reviewer` gave this movie, if any.
    pub fn rating(&self, reviewer: u32) -> Option<f64> {
        self.ratings.get(&reviewer).copied()
    }

    /// True when `reviewer` rated this movie.
    pub fn rated_by(&self, reviewer: u32) -> bool {
        self.ratings.contains_key(&reviewer)
    }

    /// Number of ratings received.
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    /// True when this movie lists `genre`.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.id, self.title)?;
        if let Some(year) = self.year {
            write!(f, " [{year}]")?;
        }
        Ok(())
    }
}
