//! Video entity model.

use serde::Serialize;
use sqlx::FromRow;
use vidrental_core::types::{DbId, ReleaseDate};

/// A row from the `videos` table.
///
/// Serializes as `{id, title, release_date, total_inventory}` with the date
/// rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub release_date: ReleaseDate,
    pub total_inventory: i32,
}
