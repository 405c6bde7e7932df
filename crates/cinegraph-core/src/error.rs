use thiserror::Error;

/// Errors raised while loading the dataset files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LoadError>;
