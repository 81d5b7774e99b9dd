use sqlx::FromRow;
use vidrental_core::types::DbId;

/// A row from the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
}
