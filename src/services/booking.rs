//! Seat-inventory bookkeeping for ticket purchase and cancellation.
//!
//! Each operation runs in a single SQLite transaction, so the showtime's
//! `seats_available` counter and the ticket row change together or not at
//! all. Dropping the transaction on an early return rolls it back.

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    config::BookingConfig,
    database::Database,
    error::{AppError, AppResult},
    models::{Customer, SeatLabel, Showtime, Ticket, TicketStatus},
};

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequest {
    pub customer_id: i64,
    pub customer_name: String,
    pub showtime_id: i64,
}

#[derive(Clone)]
pub struct BookingService {
    db: Database,
    rules: BookingConfig,
}

impl BookingService {
    pub fn new(db: Database, rules: BookingConfig) -> Self {
        Self { db, rules }
    }

    pub async fn purchase(&self, req: &PurchaseRequest) -> AppResult<Ticket> {
        let seat = SeatLabel::random(&mut rand::thread_rng());
        self.purchase_at(req, seat, Local::now().naive_local()).await
    }

    /// Same as [`purchase`](Self::purchase) with the seat drawn from `rng`.
    pub async fn purchase_with<R: Rng + ?Sized>(&self, req: &PurchaseRequest, rng: &mut R) -> AppResult<Ticket> {
        let seat = SeatLabel::random(rng);
        self.purchase_at(req, seat, Local::now().naive_local()).await
    }

    async fn purchase_at(
        &self,
        req: &PurchaseRequest,
        seat: SeatLabel,
        purchased_at: NaiveDateTime,
    ) -> AppResult<Ticket> {
        if req.customer_id <= 0 || self.rules.is_placeholder_name(&req.customer_name) {
            debug!(customer_id = req.customer_id, "rejected placeholder customer reference");
            return Err(AppError::InvalidCustomerReference);
        }

        let mut tx = self.db.begin_write().await?;

        let showtime = Showtime::find(req.showtime_id, &mut *tx)
            .await?
            .ok_or(AppError::NotFound("showtime"))?;

        if showtime.seats_available < 1 {
            debug!(showtime_id = showtime.showtime_id, "showtime sold out");
            return Err(AppError::SoldOut);
        }

        Customer::find_by_id_and_name(req.customer_id, &req.customer_name, &mut *tx)
            .await?
            .ok_or(AppError::UnregisteredCustomer)?;

        // The guarded decrement also catches a seat taken after the read above.
        if !Showtime::take_seat(showtime.showtime_id, &mut *tx).await? {
            return Err(AppError::SoldOut);
        }

        let ticket = Ticket::insert(
            req.customer_id,
            showtime.showtime_id,
            TicketStatus::Confirmed,
            purchased_at,
            seat,
            &mut *tx,
        )
        .await?;

        tx.commit().await?;

        info!(
            ticket_id = ticket.ticket_id,
            showtime_id = ticket.showtime_id,
            seat = %ticket.seat,
            "ticket purchased"
        );
        Ok(ticket)
    }

    pub async fn cancel(&self, ticket_id: i64) -> AppResult<Ticket> {
        let mut tx = self.db.begin_write().await?;

        let ticket = Ticket::find(ticket_id, &mut *tx)
            .await?
            .ok_or(AppError::NotFound("ticket"))?;

        if ticket.is_cancelled() {
            return Err(AppError::AlreadyCancelled);
        }

        if !Showtime::release_seat(ticket.showtime_id, &mut *tx).await? {
            debug!(
                showtime_id = ticket.showtime_id,
                "showtime missing or already full, seat count left as is"
            );
        }

        let cancelled = Ticket::mark_cancelled(ticket_id, &mut *tx)
            .await?
            .ok_or(AppError::AlreadyCancelled)?;

        tx.commit().await?;

        info!(ticket_id, showtime_id = cancelled.showtime_id, "ticket cancelled");
        Ok(cancelled)
    }
}
