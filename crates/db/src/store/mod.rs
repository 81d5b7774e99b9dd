//! Store abstraction consumed by the HTTP handlers.
//!
//! Handlers receive an `Arc<dyn VideoStore>` through application state, so
//! the Postgres-backed [`postgres::PgStore`] can be swapped for the
//! [`memory::MemoryStore`] in tests.

use async_trait::async_trait;
use thiserror::Error;
use vidrental_core::types::DbId;
use vidrental_core::video::NewVideo;

use crate::models::customer::Customer;
use crate::models::rental::Rental;
use crate::models::video::Video;

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Unexpected store error: {0}")]
    Unexpected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait VideoStore: Send + Sync {
    /// All videos in the store's natural (id) order.
    async fn list_videos(&self) -> StoreResult<Vec<Video>>;
    async fn find_video(&self, id: DbId) -> StoreResult<Option<Video>>;
    /// Persist a new video; the store assigns the id.
    async fn create_video(&self, input: &NewVideo) -> StoreResult<Video>;
    /// Overwrite title, release date and inventory. `None` if absent.
    async fn update_video(&self, id: DbId, input: &NewVideo) -> StoreResult<Option<Video>>;
    /// Delete the video's rentals, then the video, as one atomic unit.
    ///
    /// Returns the number of rentals removed, or `None` when the video does
    /// not exist.
    async fn delete_video_cascade(&self, id: DbId) -> StoreResult<Option<u64>>;

    /// Rentals referencing `video_id`, in id order.
    async fn list_rentals_for_video(&self, video_id: DbId) -> StoreResult<Vec<Rental>>;
    async fn find_customer(&self, id: DbId) -> StoreResult<Option<Customer>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}
