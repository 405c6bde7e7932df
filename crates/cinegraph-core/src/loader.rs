//! Dataset loading.
//!
//! Reads the two MovieLens CSV files (movies, then ratings) into a
//! `DataSet`. Movies are renumbered to dense 1-based ids in file order so
//! the graph layer can map vertex `v` to movie `v + 1` without holes, and
//! ratings referencing movies outside the loaded catalogue are dropped.

use crate::error::Result;
use crate::movie::Movie;
use crate::reviewer::Reviewer;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// The loaded dataset: every movie plus every reviewer.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    movies: Vec<Movie>,
    reviewers: HashMap<u32, Reviewer>,
}

impl DataSet {
    /// Assembles a dataset directly from records, useful for synthetic
    /// data. The movies must already carry dense 1-based ids in order.
    pub fn from_parts(movies: Vec<Movie>, reviewers: Vec<Reviewer>) -> Self {
        Self {
            movies,
            reviewers: reviewers.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// All movies in dense-id order: `movies()[v]` carries id `v + 1`.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Looks up a movie by its dense 1-based id.
    pub fn movie(&self, id: u32) -> Option<&Movie> {
        if id == 0 {
            return None;
        }
        self.movies.get((id - 1) as usize)
    }

    /// All reviewers, keyed by their raw dataset id.
    pub fn reviewers(&self) -> &HashMap<u32, Reviewer> {
        &self.reviewers
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn reviewer_count(&self) -> usize {
        self.reviewers.len()
    }
}

/// Loads a dataset from the movies and ratings CSV files.
///
/// Rows with malformed numeric fields are logged and skipped rather than
/// failing the whole load. Only I/O and CSV-level failures are fatal.
pub fn load_dataset<P, Q>(movies_path: P, ratings_path: Q) -> Result<DataSet>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut dataset = DataSet::default();
    let renumbered = load_movies(movies_path.as_ref(), &mut dataset)?;
    load_ratings(ratings_path.as_ref(), &renumbered, &mut dataset)?;
    info!(
        movies = dataset.movie_count(),
        reviewers = dataset.reviewer_count(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Reads the movie catalogue (`movieId,title,genres`), renumbering to
/// dense ids in file order.
///
/// Returns the raw-id to dense-id map used to filter ratings. The release
/// year is the first four-digit run found in the raw title, and any
/// parenthesized fragment is stripped from the stored title.
fn load_movies(path: &Path, dataset: &mut DataSet) -> Result<HashMap<u32, u32>> {
    let year_pattern = Regex::new(r"\d{4}").expect("year pattern is valid");
    let paren_pattern = Regex::new(r"\([^)]*\)").expect("parenthetical pattern is valid");

    let mut reader = csv::Reader::from_path(path)?;
    let mut renumbered = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let row = record.position().map_or(0, |p| p.line());
        let (Some(raw_id), Some(raw_title), Some(raw_genres)) =
            (record.get(0), record.get(1), record.get(2))
        else {
            warn!(row, "movie row with missing fields, skipping");
            continue;
        };
        let raw_id: u32 = match raw_id.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                warn!(row, raw_id, "movie row with unparseable id, skipping");
                continue;
            }
        };

        let year = year_pattern
            .find(raw_title)
            .and_then(|m| m.as_str().parse().ok());
        let title = paren_pattern.replace_all(raw_title, "").trim().to_string();

        let dense_id = dataset.movies.len() as u32 + 1;
        let mut movie = Movie::new(dense_id, title, year);
        movie.genres = raw_genres
            .split('|')
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .collect();

        renumbered.insert(raw_id, dense_id);
        dataset.movies.push(movie);
    }

    Ok(renumbered)
}

/// Reads the ratings file (`userId,movieId,rating,timestamp`),
/// distributing each surviving row to both the movie's and the reviewer's
/// rating table. Rows referencing movies missing from the catalogue are
/// dropped.
fn load_ratings(
    path: &Path,
    renumbered: &HashMap<u32, u32>,
    dataset: &mut DataSet,
) -> Result<()> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = record?;
        let row = record.position().map_or(0, |p| p.line());
        let (Some(user), Some(movie), Some(rating)) =
            (record.get(0), record.get(1), record.get(2))
        else {
            warn!(row, "rating row with missing fields, skipping");
            continue;
        };
        let (user, movie, rating) = match (
            user.trim().parse::<u32>(),
            movie.trim().parse::<u32>(),
            rating.trim().parse::<f64>(),
        ) {
            (Ok(user), Ok(movie), Ok(rating)) => (user, movie, rating),
            _ => {
                warn!(row, "rating row with unparseable fields, skipping");
                continue;
            }
        };

        let Some(&dense_id) = renumbered.get(&movie) else {
            dropped += 1;
            continue;
        };

        dataset.movies[(dense_id - 1) as usize].add_rating(user, rating);
        dataset
            .reviewers
            .entry(user)
            .or_insert_with(|| Reviewer::new(user))
            .add_rating(dense_id, rating);
    }

    if dropped > 0 {
        debug!(dropped, "ratings referencing unknown movies were dropped");
    }
    Ok(())
}
