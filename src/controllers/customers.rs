use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Customer, NewCustomer},
    services::ResetSummary,
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register_customer", post(register_customer))
        .route("/find_customer", get(find_customer))
        .route("/reset_customers", delete(reset_customers))
}

// POST /register_customer
async fn register_customer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewCustomer>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.customers.register(req).await?))
}

#[derive(Debug, Deserialize)]
struct FindCustomerQuery {
    name: String,
    email: String,
}

// GET /find_customer?name=&email=
async fn find_customer(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FindCustomerQuery>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.queries.find_customer(&params.name, &params.email).await?))
}

#[derive(Debug, Serialize)]
struct ResetResponse {
    message: &'static str,
    #[serde(flatten)]
    details: ResetSummary,
}

// DELETE /reset_customers, rolled back entirely on failure
async fn reset_customers(State(state): State<Arc<AppState>>) -> AppResult<Json<ResetResponse>> {
    let details = state.customers.reset().await?;
    Ok(Json(ResetResponse {
        message: "All customers and their tickets were deleted.",
        details,
    }))
}
