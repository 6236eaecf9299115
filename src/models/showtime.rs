use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};

pub const MOVIE_NOT_FOUND_TITLE: &str = "movie not found";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Showtime {
    pub showtime_id: i64,
    pub movie_id: i64,
    pub room: String,
    pub starts_at: String,
    pub ends_at: String,
    pub screening_date: String,
    pub ticket_price: i64,
    pub seats_available: i64,
    pub seats_total: i64,
}

#[derive(Debug, Clone)]
pub struct NewShowtime {
    pub movie_id: i64,
    pub room: String,
    pub starts_at: String,
    pub ends_at: String,
    pub screening_date: String,
    pub ticket_price: i64,
    pub seats_available: i64,
    pub seats_total: i64,
}

/// Read-side projection: a showtime with its movie's title joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowtimeView {
    pub showtime_id: i64,
    pub movie_id: i64,
    pub movie_title: String,
    pub room: String,
    pub starts_at: String,
    pub ends_at: String,
    pub screening_date: String,
    pub ticket_price: i64,
    pub seats_available: i64,
    pub seats_total: i64,
}

impl ShowtimeView {
    pub fn new(showtime: Showtime, movie_title: Option<String>) -> Self {
        ShowtimeView {
            showtime_id: showtime.showtime_id,
            movie_id: showtime.movie_id,
            movie_title: movie_title.unwrap_or_else(|| MOVIE_NOT_FOUND_TITLE.to_string()),
            room: showtime.room,
            starts_at: showtime.starts_at,
            ends_at: showtime.ends_at,
            screening_date: showtime.screening_date,
            ticket_price: showtime.ticket_price,
            seats_available: showtime.seats_available,
            seats_total: showtime.seats_total,
        }
    }
}

#[derive(FromRow)]
struct ShowtimeRow {
    #[sqlx(flatten)]
    showtime: Showtime,
    movie_title: Option<String>,
}

impl From<ShowtimeRow> for ShowtimeView {
    fn from(row: ShowtimeRow) -> Self {
        ShowtimeView::new(row.showtime, row.movie_title)
    }
}

const VIEW_SELECT: &str = "SELECT s.*, m.title AS movie_title
     FROM showtimes s
     LEFT JOIN movies m ON m.movie_id = s.movie_id";

impl Showtime {
    pub async fn find<'e, E>(showtime_id: i64, executor: E) -> Result<Option<Showtime>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Showtime>("SELECT * FROM showtimes WHERE showtime_id = ?")
            .bind(showtime_id)
            .fetch_optional(executor)
            .await
    }

    pub async fn list_views<'e, E>(executor: E) -> Result<Vec<ShowtimeView>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, ShowtimeRow>(&format!("{VIEW_SELECT} ORDER BY s.showtime_id"))
            .fetch_all(executor)
            .await?;
        Ok(rows.into_iter().map(ShowtimeView::from).collect())
    }

    pub async fn list_views_for_movie<'e, E>(
        movie_id: i64,
        executor: E,
    ) -> Result<Vec<ShowtimeView>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, ShowtimeRow>(&format!(
            "{VIEW_SELECT} WHERE s.movie_id = ? ORDER BY s.showtime_id"
        ))
        .bind(movie_id)
        .fetch_all(executor)
        .await?;
        Ok(rows.into_iter().map(ShowtimeView::from).collect())
    }

    /// Takes one seat. Returns false when none is left.
    pub async fn take_seat<'e, E>(showtime_id: i64, executor: E) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE showtimes SET seats_available = seats_available - 1
             WHERE showtime_id = ? AND seats_available > 0",
        )
        .bind(showtime_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Gives one seat back. Returns false if the showtime is gone or already full.
    pub async fn release_seat<'e, E>(showtime_id: i64, executor: E) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE showtimes SET seats_available = seats_available + 1
             WHERE showtime_id = ? AND seats_available < seats_total",
        )
        .bind(showtime_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert<'e, E>(showtime: &NewShowtime, executor: E) -> Result<Showtime, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Showtime>(
            "INSERT INTO showtimes
                (movie_id, room, starts_at, ends_at, screening_date, ticket_price, seats_available, seats_total)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(showtime.movie_id)
        .bind(&showtime.room)
        .bind(&showtime.starts_at)
        .bind(&showtime.ends_at)
        .bind(&showtime.screening_date)
        .bind(showtime.ticket_price)
        .bind(showtime.seats_available)
        .bind(showtime.seats_total)
        .fetch_one(executor)
        .await
    }
}
