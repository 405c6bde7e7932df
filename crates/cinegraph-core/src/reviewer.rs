//! Reviewer records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One reviewer and every rating they submitted.
///
/// Ids come straight from the raw dataset and are not renumbered, so
/// callers must not assume they are dense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: u32,
    /// Ratings keyed by the dense movie id.
    pub ratings: HashMap<u32, f64>,
}

impl Reviewer {
    /// Creates a reviewer with no ratings yet.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ratings: HashMap::new(),
        }
    }

    /// Records a rating. Re-rating a movie overwrites the previous score.
    pub fn add_rating(&mut self, movie: u32, rating: f64) {
        self.ratings.insert(movie, rating);
    }

    /// The rating this reviewer gave `movie`, if any.
    pub fn rating(&self, movie: u32) -> Option<f64> {
        self.ratings.get(&movie).copied()
    }

    /// True when this reviewer rated `movie`.
    pub fn rated(&self, movie: u32) -> bool {
        self.ratings.contains_key(&movie)
    }

    /// Number of movies rated.
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }
}
