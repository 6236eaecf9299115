use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    pub synopsis: String,
    pub genre: String,
    pub runtime_minutes: i64,
    pub age_rating: String,
    pub director: String,
    pub release_year: i64,
}

// Movie without identity, used for inserts
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub synopsis: String,
    pub genre: String,
    pub runtime_minutes: i64,
    pub age_rating: String,
    pub director: String,
    pub release_year: i64,
}

impl Movie {
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Movie>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY movie_id")
            .fetch_all(executor)
            .await
    }

    pub async fn find<'e, E>(movie_id: i64, executor: E) -> Result<Option<Movie>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE movie_id = ?")
            .bind(movie_id)
            .fetch_optional(executor)
            .await
    }

    pub async fn insert<'e, E>(movie: &NewMovie, executor: E) -> Result<Movie, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, synopsis, genre, runtime_minutes, age_rating, director, release_year)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&movie.title)
        .bind(&movie.synopsis)
        .bind(&movie.genre)
        .bind(movie.runtime_minutes)
        .bind(&movie.age_rating)
        .bind(&movie.director)
        .bind(movie.release_year)
        .fetch_one(executor)
        .await
    }
}
