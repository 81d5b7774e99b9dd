//! Postgres-backed store delegating to the sqlx repositories.

use async_trait::async_trait;
use vidrental_core::types::DbId;
use vidrental_core::video::NewVideo;

use super::{StoreResult, VideoStore};
use crate::models::customer::Customer;
use crate::models::rental::Rental;
use crate::models::video::Video;
use crate::repositories::{CustomerRepo, RentalRepo, VideoRepo};
use crate::DbPool;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgStore {
    async fn list_videos(&self) -> StoreResult<Vec<Video>> {
        Ok(VideoRepo::list(&self.pool).await?)
    }

    async fn find_video(&self, id: DbId) -> StoreResult<Option<Video>> {
        Ok(VideoRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_video(&self, input: &NewVideo) -> StoreResult<Video> {
        Ok(VideoRepo::create(&self.pool, input).await?)
    }

    async fn update_video(&self, id: DbId, input: &NewVideo) -> StoreResult<Option<Video>> {
        Ok(VideoRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_video_cascade(&self, id: DbId) -> StoreResult<Option<u64>> {
        Ok(VideoRepo::delete_with_rentals(&self.pool, id).await?)
    }

    async fn list_rentals_for_video(&self, video_id: DbId) -> StoreResult<Vec<Rental>> {
        Ok(RentalRepo::list_by_video(&self.pool, video_id).await?)
    }

    async fn find_customer(&self, id: DbId) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_id(&self.pool, id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
