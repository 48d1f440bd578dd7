use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_user::UserRequestBody;
use super::get_user::UserResponseData;
use super::parse_path_username;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(username): Path<String>,
    Json(body): Json<UserRequestBody>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let username = parse_path_username(username)?;
    let command = body.try_into_update_command()?;

    tracing::debug!(
        caller_id = %caller.user_id,
        caller = %caller.username,
        target_user = %username,
        "updating user"
    );

    state
        .user_service
        .update_user(&username, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
