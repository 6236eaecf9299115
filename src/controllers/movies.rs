use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{error::AppResult, models::Movie, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/movies", get(list_movies))
}

// GET /movies
async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.queries.movies().await?))
}
