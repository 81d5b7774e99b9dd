use std::sync::Arc;

use vidrental_db::store::VideoStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence for videos, rentals and customers. Postgres in
    /// production, in-memory in tests.
    pub store: Arc<dyn VideoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }
}
