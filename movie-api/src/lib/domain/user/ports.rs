use async_trait::async_trait;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, hashing the password before it is stored.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, birthday, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve all registered users.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Replace the profile of the user currently called `username`.
    ///
    /// # Arguments
    /// * `username` - Current username
    /// * `command` - New username, email, birthday, and plaintext password
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Deregister a user.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, username: &Username) -> Result<(), UserError>;

    /// Add a movie to the user's favorites. Adding a movie twice is a no-op.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn add_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError>;

    /// Remove a movie from the user's favorites. Removing an absent movie is a no-op.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn remove_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
///
/// Every method is a single-document operation.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all users from storage.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Overwrite the profile fields of the user called `username`.
    ///
    /// # Returns
    /// Updated user, or `None` when no user has this username
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        username: &Username,
        profile: UserProfile,
    ) -> Result<Option<User>, UserError>;

    /// Remove user from storage.
    ///
    /// # Returns
    /// `true` if a user was deleted
    async fn delete_by_username(&self, username: &Username) -> Result<bool, UserError>;

    /// Append `movie_id` to favorites unless already present.
    ///
    /// # Returns
    /// Updated user, or `None` when no user has this username
    async fn add_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError>;

    /// Remove every occurrence of `movie_id` from favorites.
    ///
    /// # Returns
    /// Updated user, or `None` when no user has this username
    async fn remove_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError>;
}
