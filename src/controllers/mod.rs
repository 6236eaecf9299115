pub mod customers;
pub mod movies;
pub mod showtimes;
pub mod tickets;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(movies::routes())
        .merge(showtimes::routes())
        .merge(tickets::routes())
        .merge(customers::routes())
}
