use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{Customer, NewCustomer, Ticket},
};

#[derive(Clone)]
pub struct CustomerRegistry {
    db: Database,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetSummary {
    pub tickets_deleted: u64,
    pub customers_deleted: u64,
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

impl CustomerRegistry {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn register(&self, customer: NewCustomer) -> AppResult<Customer> {
        customer.validate()?;

        let mut tx = self.db.begin_write().await?;

        if Customer::find_by_email(&customer.email, &mut *tx).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let created = Customer::insert(&customer, &mut *tx).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEmail
            } else {
                AppError::Database(e)
            }
        })?;

        tx.commit().await?;

        info!(customer_id = created.customer_id, "customer registered");
        Ok(created)
    }

    /// Deletes every ticket and then every customer. Movies and showtimes stay.
    pub async fn reset(&self) -> AppResult<ResetSummary> {
        warn!("RESET: deleting all customers and their tickets");

        let mut tx = self.db.begin_write().await?;

        // Tickets reference customers, so they go first
        let tickets_deleted = Ticket::delete_all(&mut *tx).await?;
        let customers_deleted = Customer::delete_all(&mut *tx).await?;

        tx.commit().await?;

        warn!(tickets_deleted, customers_deleted, "RESET: completed");
        Ok(ResetSummary {
            tickets_deleted,
            customers_deleted,
        })
    }
}
