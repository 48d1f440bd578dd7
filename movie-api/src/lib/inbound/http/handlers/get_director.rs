use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::DirectorName;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;
use crate::movie::errors::MovieError;

pub async fn get_director(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<DirectorResponseData>, ApiError> {
    let name = DirectorName::new(name).map_err(MovieError::from)?;

    state
        .movie_service
        .get_director(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref director| ApiSuccess::new(StatusCode::OK, director.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorResponseData {
    pub name: String,
    pub bio: String,
    pub birth_year: i32,
}

impl From<&Director> for DirectorResponseData {
    fn from(director: &Director) -> Self {
        Self {
            name: director.name.clone(),
            bio: director.bio.clone(),
            birth_year: director.birth_year,
        }
    }
}
