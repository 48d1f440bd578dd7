use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::get_user::UserResponseData;
use super::parse_path_username;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::MovieId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn remove_favorite_movie(
    State(state): State<AppState>,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let username = parse_path_username(username)?;
    let movie_id = MovieId::from_string(&movie_id).map_err(UserError::from)?;

    state
        .user_service
        .remove_favorite_movie(&username, &movie_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
