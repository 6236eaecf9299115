use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::{error::AppResult, models::ShowtimeView, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/showtimes", get(list_showtimes))
        .route("/showtimes/{movie_id}", get(list_showtimes_for_movie))
}

// GET /showtimes
async fn list_showtimes(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<ShowtimeView>>> {
    Ok(Json(state.queries.showtimes().await?))
}

// GET /showtimes/{movie_id}, 404 when the movie itself is unknown
async fn list_showtimes_for_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<Vec<ShowtimeView>>> {
    Ok(Json(state.queries.showtimes_for_movie(movie_id).await?))
}
