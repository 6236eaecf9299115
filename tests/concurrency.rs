//! Overlapping write transactions against a file-backed database.

mod common;

use cinema_booking::{
    database::Database,
    error::AppError,
    services::{BookingService, CustomerRegistry, PurchaseRequest},
};
use common::*;

async fn file_db(dir: &tempfile::TempDir) -> Database {
    let url = format!("sqlite://{}", dir.path().join("cinema.db").display());
    let db = Database::new(&url, 8).await.expect("file database");
    db.run_migrations().await.expect("migrations");
    db
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_purchases_on_different_showtimes_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let db = file_db(&dir).await;
    let movie = add_movie(&db, "Interstellar").await;
    let customer = add_customer(&db).await;
    let service = BookingService::new(db.clone(), test_config().booking);

    let mut showtime_ids = Vec::new();
    for _ in 0..16 {
        showtime_ids.push(add_showtime(&db, movie.movie_id, 10, 10).await.showtime_id);
    }

    let handles: Vec<_> = showtime_ids
        .iter()
        .map(|&showtime_id| {
            let service = service.clone();
            let req = PurchaseRequest {
                customer_id: customer.customer_id,
                customer_name: customer.name.clone(),
                showtime_id,
            };
            tokio::spawn(async move { service.purchase(&req).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(result.is_ok(), "purchase failed: {:?}", result.err());
    }
    for showtime_id in showtime_ids {
        assert_eq!(seats_available(&db, showtime_id).await, 9);
    }
    assert_eq!(ticket_count(&db).await, 16);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn contended_showtime_never_oversells() {
    let dir = tempfile::tempdir().unwrap();
    let db = file_db(&dir).await;
    let movie = add_movie(&db, "Parasite").await;
    let showtime = add_showtime(&db, movie.movie_id, 10, 10).await;
    let customer = add_customer(&db).await;
    let service = BookingService::new(db.clone(), test_config().booking);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            let req = PurchaseRequest {
                customer_id: customer.customer_id,
                customer_name: customer.name.clone(),
                showtime_id: showtime.showtime_id,
            };
            tokio::spawn(async move { service.purchase(&req).await })
        })
        .collect();

    let mut sold = 0;
    let mut sold_out = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => sold += 1,
            Err(AppError::SoldOut) => sold_out += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(sold, 10);
    assert_eq!(sold_out, 6);
    assert_eq!(seats_available(&db, showtime.showtime_id).await, 0);
    assert_eq!(ticket_count(&db).await, 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_with_distinct_emails_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let db = file_db(&dir).await;
    let registry = CustomerRegistry::new(db.clone());

    let handles: Vec<_> = (0..12)
        .map(|_| {
            let registry = registry.clone();
            let customer = fake_customer();
            tokio::spawn(async move { registry.register(customer).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(result.is_ok(), "registration failed: {:?}", result.err());
    }
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 12);
}
