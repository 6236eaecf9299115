use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::{error::AppResult, models::Ticket, services::PurchaseRequest, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/purchase_ticket", post(purchase_ticket))
        .route("/tickets/{customer_id}", get(list_customer_tickets))
        .route("/cancel_ticket/{ticket_id}", post(cancel_ticket))
}

// POST /purchase_ticket
async fn purchase_ticket(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PurchaseRequest>,
) -> AppResult<Json<Ticket>> {
    Ok(Json(state.booking.purchase(&req).await?))
}

// GET /tickets/{customer_id}
async fn list_customer_tickets(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> AppResult<Json<Vec<Ticket>>> {
    Ok(Json(state.queries.tickets_for_customer(customer_id).await?))
}

// POST /cancel_ticket/{ticket_id}
async fn cancel_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<i64>,
) -> AppResult<Json<Ticket>> {
    Ok(Json(state.booking.cancel(ticket_id).await?))
}
