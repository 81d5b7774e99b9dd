//! Rental entity model.

use sqlx::FromRow;
use vidrental_core::types::DbId;

/// A row from the `rentals` table. Rentals are created by the rental
/// resource; this crate only reads them and deletes them with their video.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Rental {
    pub id: DbId,
    pub video_id: DbId,
    pub customer_id: DbId,
}
