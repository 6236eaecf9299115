use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

// Registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
}

impl Customer {
    pub async fn find_by_email<'e, E>(email: &str, executor: E) -> Result<Option<Customer>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = ?")
            .bind(email)
            .fetch_optional(executor)
            .await
    }

    /// Exact match on both identity and name.
    pub async fn find_by_id_and_name<'e, E>(
        customer_id: i64,
        name: &str,
        executor: E,
    ) -> Result<Option<Customer>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE customer_id = ? AND name = ?")
            .bind(customer_id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    pub async fn find_by_name_and_email<'e, E>(
        name: &str,
        email: &str,
        executor: E,
    ) -> Result<Option<Customer>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE name = ? AND email = ? LIMIT 1")
            .bind(name)
            .bind(email)
            .fetch_optional(executor)
            .await
    }

    pub async fn insert<'e, E>(customer: &NewCustomer, executor: E) -> Result<Customer, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, email, phone) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(executor)
        .await
    }

    pub async fn delete_all<'e, E>(executor: E) -> Result<u64, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM customers").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
