use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::DirectorName;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::GenreName;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieTitle;

/// Port for catalog read operations.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// List every movie in the catalog.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// Retrieve a movie by exact title.
    ///
    /// # Errors
    /// * `NotFoundByTitle` - No movie has this title
    /// * `DatabaseError` - Database operation failed
    async fn get_movie_by_title(&self, title: &MovieTitle) -> Result<Movie, MovieError>;

    /// Retrieve a genre by name from any movie that carries it.
    ///
    /// # Errors
    /// * `GenreNotFound` - No movie has this genre
    /// * `DatabaseError` - Database operation failed
    async fn get_genre(&self, name: &GenreName) -> Result<Genre, MovieError>;

    /// Retrieve a director by name from any movie that carries them.
    ///
    /// # Errors
    /// * `DirectorNotFound` - No movie has this director
    /// * `DatabaseError` - Database operation failed
    async fn get_director(&self, name: &DirectorName) -> Result<Director, MovieError>;
}

/// Read-only persistence for the movie catalog.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    /// First movie with exactly this title, if any.
    async fn find_by_title(&self, title: &MovieTitle) -> Result<Option<Movie>, MovieError>;

    /// Genre embedded in the first movie whose genre has this name.
    async fn find_genre_by_name(&self, name: &GenreName) -> Result<Option<Genre>, MovieError>;

    /// Director embedded in the first movie whose director has this name.
    async fn find_director_by_name(
        &self,
        name: &DirectorName,
    ) -> Result<Option<Director>, MovieError>;
}
