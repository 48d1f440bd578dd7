use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::get_user::UserResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Birthday;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::BirthdayError;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserRequestBody>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .user_service
        .create_user(body.try_into_create_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registering or replacing a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRequestBody {
    username: String,
    password: String,
    email: String,
    birthday: String,
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseUserRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid birthday: {0}")]
    Birthday(#[from] BirthdayError),
}

impl UserRequestBody {
    fn try_into_create_command(self) -> Result<CreateUserCommand, ParseUserRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        let birthday = Birthday::parse(&self.birthday)?;
        let password = Password::new(self.password)?;
        Ok(CreateUserCommand::new(username, email, birthday, password))
    }

    pub(super) fn try_into_update_command(
        self,
    ) -> Result<UpdateUserCommand, ParseUserRequestError> {
        Ok(UpdateUserCommand {
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            birthday: Birthday::parse(&self.birthday)?,
            password: Password::new(self.password)?,
        })
    }
}

impl From<ParseUserRequestError> for ApiError {
    fn from(err: ParseUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
