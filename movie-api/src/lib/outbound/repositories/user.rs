use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::Birthday;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_COLUMNS: &str = "id, username, email, birthday, password_hash, favorite_movies, created_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    birthday: NaiveDate,
    password_hash: String,
    favorite_movies: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    /// Stored rows go through the same validation as request input.
    /// A row that no longer validates is reported as a storage fault.
    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let corrupt = |e: &dyn std::fmt::Display| {
            UserError::DatabaseError(format!("corrupt user row {}: {}", row.id, e))
        };

        Ok(User {
            id: UserId(row.id),
            username: Username::new(row.username).map_err(|e| corrupt(&e))?,
            email: EmailAddress::new(row.email).map_err(|e| corrupt(&e))?,
            birthday: Birthday::from(row.birthday),
            password_hash: row.password_hash,
            favorite_movies: row.favorite_movies.into_iter().map(MovieId).collect(),
            created_at: row.created_at,
        })
    }
}

fn map_write_error(e: sqlx::Error, username: &Username) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("users_username_key") {
            return UserError::UsernameAlreadyExists(username.as_str().to_string());
        }
    }
    UserError::DatabaseError(e.to_string())
}

fn map_read_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (id, username, email, birthday, password_hash, favorite_movies, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.birthday.date())
        .bind(&user.password_hash)
        .bind(user.favorite_movies.iter().map(|m| m.0).collect::<Vec<_>>())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user.username))?;

        row.try_into()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update_profile(
        &self,
        username: &Username,
        profile: UserProfile,
    ) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET username = $2, email = $3, birthday = $4, password_hash = $5
            WHERE username = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username.as_str())
        .bind(profile.username.as_str())
        .bind(profile.email.as_str())
        .bind(profile.birthday.date())
        .bind(&profile.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &profile.username))?;

        row.map(User::try_from).transpose()
    }

    async fn delete_by_username(&self, username: &Username) -> Result<bool, UserError> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET favorite_movies = CASE
                WHEN $2 = ANY(favorite_movies) THEN favorite_movies
                ELSE array_append(favorite_movies, $2)
            END
            WHERE username = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username.as_str())
        .bind(movie_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(User::try_from).transpose()
    }

    async fn remove_favorite_movie(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET favorite_movies = array_remove(favorite_movies, $2)
            WHERE username = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username.as_str())
        .bind(movie_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(User::try_from).transpose()
    }
}
