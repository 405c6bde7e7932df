//! Cinegraph Core - MovieLens data model and loading
//!
//! This crate owns the domain records (movies, reviewers) and the CSV
//! loading that turns a raw MovieLens dump into a `DataSet` the graph
//! layer can build on. Movies get dense 1-based ids at load time so the
//! graph layer can address them as contiguous vertices.
//!
//! # Example
//!
//! ```no_run
//! use cinegraph_core::load_dataset;
//!
//! let dataset = load_dataset("movies.csv", "ratings.csv").unwrap();
//! println!("{} movies, {} reviewers", dataset.movie_count(), dataset.reviewer_count());
//! ```

mod error;
mod loader;
mod movie;
mod reviewer;

pub use error::{LoadError, Result};
pub use loader::{load_dataset, DataSet};
pub use movie::Movie;
pub use reviewer::Reviewer;
