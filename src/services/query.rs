use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{Customer, Movie, Showtime, ShowtimeView, Ticket},
};

/// Read paths over the catalog, customers and ticket history.
#[derive(Clone)]
pub struct QueryService {
    db: Database,
}

impl QueryService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn movies(&self) -> AppResult<Vec<Movie>> {
        Ok(Movie::list(&self.db.pool).await?)
    }

    pub async fn showtimes(&self) -> AppResult<Vec<ShowtimeView>> {
        Ok(Showtime::list_views(&self.db.pool).await?)
    }

    pub async fn showtimes_for_movie(&self, movie_id: i64) -> AppResult<Vec<ShowtimeView>> {
        let mut tx = self.db.pool.begin().await?;

        Movie::find(movie_id, &mut *tx)
            .await?
            .ok_or(AppError::NotFound("movie"))?;
        let showtimes = Showtime::list_views_for_movie(movie_id, &mut *tx).await?;

        tx.commit().await?;
        Ok(showtimes)
    }

    // Empty list for unknown customers
    pub async fn tickets_for_customer(&self, customer_id: i64) -> AppResult<Vec<Ticket>> {
        Ok(Ticket::list_for_customer(customer_id, &self.db.pool).await?)
    }

    pub async fn find_customer(&self, name: &str, email: &str) -> AppResult<Customer> {
        Customer::find_by_name_and_email(name, email, &self.db.pool)
            .await?
            .ok_or(AppError::NotFound("customer"))
    }
}
