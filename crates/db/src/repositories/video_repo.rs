//! Repository for the `videos` table.

use sqlx::PgPool;
use vidrental_core::types::DbId;
use vidrental_core::video::NewVideo;

use crate::models::video::Video;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_date, total_inventory";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (title, release_date, total_inventory)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.total_inventory)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY id");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column of a video.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = $2,
                release_date = $3,
                total_inventory = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.total_inventory)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video together with every rental that references it.
    ///
    /// Runs in one transaction: the video row is locked, its rentals are
    /// deleted, then the video itself. Returns the number of rentals removed,
    /// or `None` if the video does not exist (nothing is deleted).
    pub async fn delete_with_rentals(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM videos WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let rentals = sqlx::query("DELETE FROM rentals WHERE video_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            video_id = id,
            rentals_deleted = rentals.rows_affected(),
            "Deleted video with its rentals"
        );
        Ok(Some(rentals.rows_affected()))
    }
}
