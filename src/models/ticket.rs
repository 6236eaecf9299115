use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};
use std::fmt;

pub const PURCHASE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const SEAT_ROWS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];
pub const SEATS_PER_ROW: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Confirmed,
    Cancelled,
}

/// Row letter plus two-digit number, e.g. `C07`.
///
/// Labels are not checked against a seat map or against other tickets for the
/// same showtime, so two tickets can carry the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatLabel {
    row: char,
    number: u8,
}

impl SeatLabel {
    pub fn new(row: char, number: u8) -> Option<Self> {
        if SEAT_ROWS.contains(&row) && (1..=SEATS_PER_ROW).contains(&number) {
            Some(SeatLabel { row, number })
        } else {
            None
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SeatLabel {
            row: SEAT_ROWS[rng.gen_range(0..SEAT_ROWS.len())],
            number: rng.gen_range(1..=SEATS_PER_ROW),
        }
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.row, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: i64,
    pub customer_id: i64,
    pub showtime_id: i64,
    pub status: TicketStatus,
    pub purchased_at: String,
    pub seat: String,
}

impl Ticket {
    pub fn is_cancelled(&self) -> bool {
        self.status == TicketStatus::Cancelled
    }

    pub async fn find<'e, E>(ticket_id: i64, executor: E) -> Result<Option<Ticket>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE ticket_id = ?")
            .bind(ticket_id)
            .fetch_optional(executor)
            .await
    }

    pub async fn list_for_customer<'e, E>(customer_id: i64, executor: E) -> Result<Vec<Ticket>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE customer_id = ? ORDER BY ticket_id")
            .bind(customer_id)
            .fetch_all(executor)
            .await
    }

    pub async fn insert<'e, E>(
        customer_id: i64,
        showtime_id: i64,
        status: TicketStatus,
        purchased_at: NaiveDateTime,
        seat: SeatLabel,
        executor: E,
    ) -> Result<Ticket, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (customer_id, showtime_id, status, purchased_at, seat)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(customer_id)
        .bind(showtime_id)
        .bind(status)
        .bind(purchased_at.format(PURCHASE_TIME_FORMAT).to_string())
        .bind(seat.to_string())
        .fetch_one(executor)
        .await
    }

    /// Flips a confirmed ticket to cancelled. `None` if it was not confirmed.
    pub async fn mark_cancelled<'e, E>(ticket_id: i64, executor: E) -> Result<Option<Ticket>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET status = 'cancelled'
             WHERE ticket_id = ? AND status = 'confirmed'
             RETURNING *",
        )
        .bind(ticket_id)
        .fetch_optional(executor)
        .await
    }

    pub async fn delete_all<'e, E>(executor: E) -> Result<u64, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tickets").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
