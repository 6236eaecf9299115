#![allow(dead_code)]

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cinema_booking::{
    config::Config,
    database::Database,
    models::{Customer, Movie, NewCustomer, NewMovie, NewShowtime, Showtime},
    AppState,
};

static EMAIL_SEQ: AtomicU64 = AtomicU64::new(1);

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .expect("default config")
}

pub async fn test_db() -> Database {
    Database::in_memory().await.expect("in-memory database")
}

pub async fn test_state() -> Arc<AppState> {
    AppState::new(test_db().await, test_config())
}

pub fn new_movie(title: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        synopsis: format!("{title}, a film."),
        genre: "Drama".to_string(),
        runtime_minutes: 120,
        age_rating: "12".to_string(),
        director: "Someone".to_string(),
        release_year: 2019,
    }
}

pub async fn add_movie(db: &Database, title: &str) -> Movie {
    Movie::insert(&new_movie(title), &db.pool).await.expect("insert movie")
}

pub async fn add_showtime(db: &Database, movie_id: i64, seats_available: i64, seats_total: i64) -> Showtime {
    let showtime = NewShowtime {
        movie_id,
        room: "Room 1".to_string(),
        starts_at: "19:00".to_string(),
        ends_at: "21:30".to_string(),
        screening_date: "2025-09-21".to_string(),
        ticket_price: 1800,
        seats_available,
        seats_total,
    };
    Showtime::insert(&showtime, &db.pool).await.expect("insert showtime")
}

pub fn fake_customer() -> NewCustomer {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    NewCustomer {
        name,
        email: format!("{}.{email}", EMAIL_SEQ.fetch_add(1, Ordering::Relaxed)),
        phone: None,
    }
}

pub async fn add_customer(db: &Database) -> Customer {
    Customer::insert(&fake_customer(), &db.pool).await.expect("insert customer")
}

pub async fn seats_available(db: &Database, showtime_id: i64) -> i64 {
    Showtime::find(showtime_id, &db.pool)
        .await
        .expect("query showtime")
        .expect("showtime exists")
        .seats_available
}

pub async fn ticket_count(db: &Database) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets")
        .fetch_one(&db.pool)
        .await
        .expect("count tickets")
}
