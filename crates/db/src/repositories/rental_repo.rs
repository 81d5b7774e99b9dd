//! Repository for the `rentals` table.

use sqlx::PgPool;
use vidrental_core::types::DbId;

use crate::models::rental::Rental;

const COLUMNS: &str = "id, video_id, customer_id";

/// Read access to rentals. Rentals are removed through
/// [`VideoRepo::delete_with_rentals`](crate::repositories::VideoRepo::delete_with_rentals).
pub struct RentalRepo;

impl RentalRepo {
    /// List the rentals of one video in id order.
    pub async fn list_by_video(pool: &PgPool, video_id: DbId) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE video_id = $1 ORDER BY id");
        sqlx::query_as::<_, Rental>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }

    /// Find a rental by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
