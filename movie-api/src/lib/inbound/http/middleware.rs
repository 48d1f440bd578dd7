use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const UNAUTHORIZED: &str = "Unauthorized";

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Cause of a rejected bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    MissingHeader,
    UnreadableHeader,
    WrongScheme,
    Token(auth::JwtError),
    InvalidSubject,
}

impl AuthRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            AuthRejection::MissingHeader => "missing_header",
            AuthRejection::UnreadableHeader => "unreadable_header",
            AuthRejection::WrongScheme => "wrong_scheme",
            AuthRejection::Token(err) => err.reason(),
            AuthRejection::InvalidSubject => "invalid_subject",
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        tracing::warn!(reason = self.reason(), "request rejected by auth gate");
        ApiError::Unauthorized(UNAUTHORIZED.to_string()).into_response()
    }
}

/// Middleware that validates bearer tokens and adds the caller to request extensions.
///
/// Stateless: the user record is not looked up.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let token = extract_token_from_header(&req)?;

    let claims = state
        .authenticator
        .validate_token(token)
        .map_err(AuthRejection::Token)?;

    let user_id =
        UserId::from_string(&claims.sub).map_err(|_| AuthRejection::InvalidSubject)?;

    tracing::debug!(user_id = %user_id, "request authenticated");

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, AuthRejection> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(AuthRejection::MissingHeader)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthRejection::UnreadableHeader)?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthRejection::WrongScheme)
}
