use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::get_director::DirectorResponseData;
use super::get_genre::GenreResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieTitle;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;
use crate::movie::errors::MovieError;

pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<ApiSuccess<MovieResponseData>, ApiError> {
    let title = MovieTitle::new(title).map_err(MovieError::from)?;

    state
        .movie_service
        .get_movie_by_title(&title)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::OK, movie.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieResponseData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: GenreResponseData,
    pub director: DirectorResponseData,
    pub image_url: String,
    pub featured: bool,
}

impl From<&Movie> for MovieResponseData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            description: movie.description.clone(),
            genre: (&movie.genre).into(),
            director: (&movie.director).into(),
            image_url: movie.image_url.clone(),
            featured: movie.featured,
        }
    }
}
