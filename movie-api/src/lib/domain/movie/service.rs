use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::DirectorName;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::GenreName;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieTitle;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::movie::ports::MovieServicePort;

/// Domain service for the read-only movie catalog.
pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    repository: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<MR> MovieServicePort for MovieService<MR>
where
    MR: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.repository.list_all().await
    }

    async fn get_movie_by_title(&self, title: &MovieTitle) -> Result<Movie, MovieError> {
        self.repository
            .find_by_title(title)
            .await?
            .ok_or_else(|| MovieError::NotFoundByTitle(title.as_str().to_string()))
    }

    async fn get_genre(&self, name: &GenreName) -> Result<Genre, MovieError> {
        self.repository
            .find_genre_by_name(name)
            .await?
            .ok_or_else(|| MovieError::GenreNotFound(name.as_str().to_string()))
    }

    async fn get_director(&self, name: &DirectorName) -> Result<Director, MovieError> {
        self.repository
            .find_director_by_name(name)
            .await?
            .ok_or_else(|| MovieError::DirectorNotFound(name.as_str().to_string()))
    }
}
