use axum::extract::State;
use axum::http::StatusCode;

use super::get_movie::MovieResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<MovieResponseData>>, ApiError> {
    state
        .movie_service
        .list_movies()
        .await
        .map_err(ApiError::from)
        .map(|movies| ApiSuccess::new(StatusCode::OK, movies.iter().map(Into::into).collect()))
}
