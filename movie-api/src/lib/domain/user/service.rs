use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Hasher configured with the deployment's work factor
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Hash on the blocking pool; Argon2 would otherwise stall a runtime worker.
    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let hasher = self.password_hasher.clone();

        let hash = tokio::task::spawn_blocking(move || hasher.hash(password.expose()))
            .await
            .map_err(|e| auth::PasswordError::HashingFailed(e.to_string()))??;

        Ok(hash)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            birthday: command.birthday,
            password_hash,
            favorite_movies: Vec::new(),
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, username = %created_user.username, "user registered");

        Ok(created_user)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let password_hash = self.hash_password(command.password).await?;
        let profile = UserProfile {
            username: command.username,
            email: command.email,
            birthday: command.birthday,
            password_hash,
        };

        self.repository
            .update_profile(username, profile)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn delete_user(&self, username: &Username) -> Result<(), UserError> {
        if self.repository.delete_by_username(username).await? {
            tracing::info!(username = %username, "user deleted");
            Ok(())
        } else {
            Err(UserError::NotFoundByUsername(username.to_string()))
        }
    }

    async fn add_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError> {
        self.repository
            .add_favorite_movie(username, movie_id)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn remove_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError> {
        self.repository
            .remove_favorite_movie(username, movie_id)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }
}
