//! Repository for the `customers` table.

use sqlx::PgPool;
use vidrental_core::types::DbId;

use crate::models::customer::Customer;

pub struct CustomerRepo;

impl CustomerRepo {
    /// Find a customer by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>("SELECT id, name FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
