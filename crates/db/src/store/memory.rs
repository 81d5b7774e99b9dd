//! In-memory implementation of [`VideoStore`].
//!
//! All tables live in one `BTreeMap` each behind a single
//! `tokio::sync::RwLock`, so iteration order is id order (matching the
//! Postgres store) and the cascade delete runs under one write lock.
//! Ids are assigned sequentially from 1 per table. Nothing is durable.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use vidrental_core::types::DbId;
use vidrental_core::video::NewVideo;

use super::{StoreError, StoreResult, VideoStore};
use crate::models::customer::Customer;
use crate::models::rental::Rental;
use crate::models::video::Video;

#[derive(Default)]
struct Tables {
    videos: BTreeMap<DbId, Video>,
    rentals: BTreeMap<DbId, Rental>,
    customers: BTreeMap<DbId, Customer>,
    last_video_id: DbId,
    last_rental_id: DbId,
    last_customer_id: DbId,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customer and return it with its assigned id.
    pub async fn insert_customer(&self, name: &str) -> Customer {
        let mut tables = self.tables.write().await;
        tables.last_customer_id += 1;
        let customer = Customer {
            id: tables.last_customer_id,
            name: name.to_string(),
        };
        tables.customers.insert(customer.id, customer.clone());
        customer
    }

    /// Add a rental linking an existing video to a customer.
    ///
    /// Fails if the video does not exist. The customer is not checked, which
    /// lets tests model a rental whose customer has since disappeared.
    pub async fn insert_rental(&self, video_id: DbId, customer_id: DbId) -> StoreResult<Rental> {
        let mut tables = self.tables.write().await;
        if !tables.videos.contains_key(&video_id) {
            return Err(StoreError::Unexpected(format!(
                "rental references missing video {video_id}"
            )));
        }
        tables.last_rental_id += 1;
        let rental = Rental {
            id: tables.last_rental_id,
            video_id,
            customer_id,
        };
        tables.rentals.insert(rental.id, rental.clone());
        Ok(rental)
    }

    /// Remove a customer without touching its rentals, leaving them dangling.
    pub async fn remove_customer(&self, id: DbId) -> Option<Customer> {
        self.tables.write().await.customers.remove(&id)
    }

    pub async fn find_rental(&self, id: DbId) -> Option<Rental> {
        self.tables.read().await.rentals.get(&id).cloned()
    }

    pub async fn rental_count(&self) -> usize {
        self.tables.read().await.rentals.len()
    }
}

#[async_trait]
impl VideoStore for MemoryStore {
    async fn list_videos(&self) -> StoreResult<Vec<Video>> {
        Ok(self.tables.read().await.videos.values().cloned().collect())
    }

    async fn find_video(&self, id: DbId) -> StoreResult<Option<Video>> {
        Ok(self.tables.read().await.videos.get(&id).cloned())
    }

    async fn create_video(&self, input: &NewVideo) -> StoreResult<Video> {
        let mut tables = self.tables.write().await;
        tables.last_video_id += 1;
        let video = Video {
            id: tables.last_video_id,
            title: input.title.clone(),
            release_date: input.release_date,
            total_inventory: input.total_inventory,
        };
        tables.videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn update_video(&self, id: DbId, input: &NewVideo) -> StoreResult<Option<Video>> {
        let mut tables = self.tables.write().await;
        let Some(video) = tables.videos.get_mut(&id) else {
            return Ok(None);
        };
        video.title = input.title.clone();
        video.release_date = input.release_date;
        video.total_inventory = input.total_inventory;
        Ok(Some(video.clone()))
    }

    async fn delete_video_cascade(&self, id: DbId) -> StoreResult<Option<u64>> {
        let mut tables = self.tables.write().await;
        if !tables.videos.contains_key(&id) {
            return Ok(None);
        }
        let before = tables.rentals.len();
        tables.rentals.retain(|_, rental| rental.video_id != id);
        let removed = (before - tables.rentals.len()) as u64;
        tables.videos.remove(&id);
        Ok(Some(removed))
    }

    async fn list_rentals_for_video(&self, video_id: DbId) -> StoreResult<Vec<Rental>> {
        Ok(self
            .tables
            .read()
            .await
            .rentals
            .values()
            .filter(|rental| rental.video_id == video_id)
            .cloned()
            .collect())
    }

    async fn find_customer(&self, id: DbId) -> StoreResult<Option<Customer>> {
        Ok(self.tables.read().await.customers.get(&id).cloned())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
