pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use services::{BookingService, CustomerRegistry, QueryService};

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
    pub booking: BookingService,
    pub queries: QueryService,
    pub customers: CustomerRegistry,
}

impl AppState {
    pub fn new(db: database::Database, config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            booking: BookingService::new(db.clone(), config.booking.clone()),
            queries: QueryService::new(db.clone()),
            customers: CustomerRegistry::new(db.clone()),
            db,
            config,
        })
    }
}

/// Full HTTP application: service routes plus root and health checks.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Cinema Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
