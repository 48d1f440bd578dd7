use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::get_user::UserResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Why a login attempt was refused. Logged, never shown to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    MalformedBody,
    InvalidUsername,
    UnknownUser,
    PasswordMismatch,
}

impl LoginFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            LoginFailure::MalformedBody => "malformed_body",
            LoginFailure::InvalidUsername => "invalid_username",
            LoginFailure::UnknownUser => "unknown_user",
            LoginFailure::PasswordMismatch => "password_mismatch",
        }
    }
}

impl From<LoginFailure> for ApiError {
    fn from(failure: LoginFailure) -> Self {
        tracing::warn!(reason = failure.reason(), "login rejected");
        ApiError::BadRequest(INVALID_CREDENTIALS.to_string())
    }
}

pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<AuthenticateRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "unreadable login body");
        LoginFailure::MalformedBody
    })?;
    let AuthenticateRequestBody { username, password } = body;

    let username = Username::new(username).map_err(|_| LoginFailure::InvalidUsername)?;

    let user = match state.user_service.get_user_by_username(&username).await {
        Ok(user) => user,
        Err(UserError::NotFoundByUsername(_)) => {
            let authenticator = Arc::clone(&state.authenticator);
            off_runtime(move || authenticator.reject_unknown_account(&password)).await?;
            return Err(LoginFailure::UnknownUser.into());
        }
        Err(e) => return Err(e.into()),
    };

    let authenticator = Arc::clone(&state.authenticator);
    let stored_hash = user.password_hash.clone();
    let user_id = user.id;
    let display_name = user.username.as_str().to_string();

    let result = off_runtime(move || {
        authenticator.authenticate(&password, &stored_hash, user_id, &display_name)
    })
    .await?
    .map_err(|e| match e {
        auth::AuthenticationError::InvalidCredentials => {
            ApiError::from(LoginFailure::PasswordMismatch)
        }
        auth::AuthenticationError::PasswordError(err) => {
            ApiError::InternalServerError(format!("Password verification failed: {}", err))
        }
        auth::AuthenticationError::JwtError(err) => {
            ApiError::InternalServerError(format!("Token generation failed: {}", err))
        }
    })?;

    tracing::info!(user_id = %user.id, "login succeeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            user: (&user).into(),
            token: result.access_token,
        },
    ))
}

/// Run Argon2 work on the blocking pool.
async fn off_runtime<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Credential check aborted: {}", e)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub user: UserResponseData,
    pub token: String,
}
