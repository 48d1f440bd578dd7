use thiserror::Error;

/// Error for MovieId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for catalog lookup keys (titles, genre and director names)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid lookup: {0}")]
    InvalidName(#[from] NameError),

    #[error("Movie not found with title: {0}")]
    NotFoundByTitle(String),

    #[error("Genre not found: {0}")]
    GenreNotFound(String),

    #[error("Director not found: {0}")]
    DirectorNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
