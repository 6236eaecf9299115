mod common;

use cinema_booking::{
    error::AppError,
    models::showtime::MOVIE_NOT_FOUND_TITLE,
    services::QueryService,
};
use common::*;

#[tokio::test]
async fn movies_are_listed_in_insertion_order() {
    let db = test_db().await;
    let first = add_movie(&db, "City of God").await;
    let second = add_movie(&db, "Central Station").await;

    let movies = QueryService::new(db).movies().await.unwrap();
    assert_eq!(movies, vec![first, second]);
}

#[tokio::test]
async fn showtimes_carry_their_movie_title() {
    let db = test_db().await;
    let joker = add_movie(&db, "Joker").await;
    let panther = add_movie(&db, "Black Panther").await;
    add_showtime(&db, joker.movie_id, 10, 200).await;
    add_showtime(&db, panther.movie_id, 20, 150).await;

    let views = QueryService::new(db).showtimes().await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].movie_title, "Joker");
    assert_eq!(views[0].seats_available, 10);
    assert_eq!(views[1].movie_title, "Black Panther");
    assert_eq!(views[1].seats_total, 150);
}

#[tokio::test]
async fn dangling_movie_reference_uses_sentinel_title() {
    let db = test_db().await;
    let movie = add_movie(&db, "Joker").await;
    add_showtime(&db, movie.movie_id, 10, 10).await;

    // The in-memory pool has a single connection, so the pragma sticks
    sqlx::query("PRAGMA foreign_keys = OFF").execute(&db.pool).await.unwrap();
    sqlx::query("DELETE FROM movies").execute(&db.pool).await.unwrap();

    let views = QueryService::new(db).showtimes().await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].movie_title, MOVIE_NOT_FOUND_TITLE);
}

#[tokio::test]
async fn showtimes_for_movie_filters_by_movie() {
    let db = test_db().await;
    let a = add_movie(&db, "Mad Max: Fury Road").await;
    let b = add_movie(&db, "The Shape of Water").await;
    add_showtime(&db, a.movie_id, 1, 1).await;
    add_showtime(&db, a.movie_id, 2, 2).await;
    add_showtime(&db, b.movie_id, 3, 3).await;

    let queries = QueryService::new(db);
    let views = queries.showtimes_for_movie(a.movie_id).await.unwrap();
    assert_eq!(views.len(), 2);
    assert!(views.iter().all(|v| v.movie_id == a.movie_id && v.movie_title == "Mad Max: Fury Road"));
}

#[tokio::test]
async fn unknown_movie_is_not_found_rather_than_empty() {
    let db = test_db().await;
    let queries = QueryService::new(db.clone());

    let err = queries.showtimes_for_movie(404).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("movie")));

    // A known movie without screenings is just empty
    let movie = add_movie(&db, "Central Station").await;
    assert!(queries.showtimes_for_movie(movie.movie_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn tickets_for_unknown_customer_is_empty() {
    let db = test_db().await;
    assert!(QueryService::new(db).tickets_for_customer(77).await.unwrap().is_empty());
}
