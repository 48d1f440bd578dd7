use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Extension;

use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Answers in plain text rather than the JSON envelope.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(username): Path<String>,
) -> Response {
    // A name that fails validation cannot belong to a stored user.
    let Ok(parsed) = Username::new(username.clone()) else {
        return not_found(&username);
    };

    match state.user_service.delete_user(&parsed).await {
        Ok(()) => {
            tracing::debug!(
                caller_id = %caller.user_id,
                caller = %caller.username,
                target_user = %parsed,
                "user removed"
            );
            (StatusCode::OK, format!("{} was deleted.", parsed)).into_response()
        }
        Err(UserError::NotFoundByUsername(_)) => not_found(&username),
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn not_found(username: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("{} was not found.", username)).into_response()
}
