use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::DirectorName;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::GenreName;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieTitle;
use crate::domain::movie::ports::MovieRepository;

const MOVIE_COLUMNS: &str = "id, title, description, genre_name, genre_description, \
     director_name, director_bio, director_birth_year, image_url, featured";

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Genre and director are stored flattened on the movie row.
#[derive(Debug, sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    description: String,
    genre_name: String,
    genre_description: String,
    director_name: String,
    director_bio: String,
    director_birth_year: i32,
    image_url: String,
    featured: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: MovieId(row.id),
            title: row.title,
            description: row.description,
            genre: Genre {
                name: row.genre_name,
                description: row.genre_description,
            },
            director: Director {
                name: row.director_name,
                bio: row.director_bio,
                birth_year: row.director_birth_year,
            },
            image_url: row.image_url,
            featured: row.featured,
        }
    }
}

fn map_db_error(e: sqlx::Error) -> MovieError {
    MovieError::DatabaseError(e.to_string())
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows: Vec<MovieRow> =
            sqlx::query_as(&format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY title"))
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_title(&self, title: &MovieTitle) -> Result<Option<Movie>, MovieError> {
        let row: Option<MovieRow> = sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE title = $1 ORDER BY id LIMIT 1"
        ))
        .bind(title.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Movie::from))
    }

    async fn find_genre_by_name(&self, name: &GenreName) -> Result<Option<Genre>, MovieError> {
        let row: Option<(String, String)> = sqlx::query_as(
            "SELECT genre_name, genre_description FROM movies WHERE genre_name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(|(name, description)| Genre { name, description }))
    }

    async fn find_director_by_name(
        &self,
        name: &DirectorName,
    ) -> Result<Option<Director>, MovieError> {
        let row: Option<(String, String, i32)> = sqlx::query_as(
            r#"
            SELECT director_name, director_bio, director_birth_year
            FROM movies
            WHERE director_name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(|(name, bio, birth_year)| Director {
            name,
            bio,
            birth_year,
        }))
    }
}
