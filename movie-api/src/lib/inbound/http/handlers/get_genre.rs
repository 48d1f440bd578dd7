use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::GenreName;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;
use crate::movie::errors::MovieError;

pub async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<GenreResponseData>, ApiError> {
    let name = GenreName::new(name).map_err(MovieError::from)?;

    state
        .movie_service
        .get_genre(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::new(StatusCode::OK, genre.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreResponseData {
    pub name: String,
    pub description: String,
}

impl From<&Genre> for GenreResponseData {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
            description: genre.description.clone(),
        }
    }
}
