use std::fmt;

use uuid::Uuid;

use crate::domain::movie::errors::MovieIdError;
use crate::domain::movie::errors::NameError;

/// Catalog entry.
///
/// Movies are read-only to the API; rows are created out-of-band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub director: Director,
    pub image_url: String,
    pub featured: bool,
}

/// Genre embedded in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: String,
    pub description: String,
}

/// Director embedded in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    pub name: String,
    pub bio: String,
    pub birth_year: i32,
}

/// Movie unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a movie ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, MovieIdError> {
        Uuid::parse_str(s)
            .map(MovieId)
            .map_err(|e| MovieIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn non_empty(raw: String, what: &'static str) -> Result<String, NameError> {
    if raw.trim().is_empty() {
        Err(NameError::Empty(what))
    } else {
        Ok(raw)
    }
}

/// Exact title used to look a movie up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTitle(String);

impl MovieTitle {
    pub fn new(title: String) -> Result<Self, NameError> {
        non_empty(title, "Title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Exact genre name used to look a genre up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreName(String);

impl GenreName {
    pub fn new(name: String) -> Result<Self, NameError> {
        non_empty(name, "Genre name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Exact director name used to look a director up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorName(String);

impl DirectorName {
    pub fn new(name: String) -> Result<Self, NameError> {
        non_empty(name, "Director name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
