//! Video request payloads and their validation.
//!
//! Create and update share one wire shape ([`VideoPayload`]) but report
//! missing keys differently: create names the first missing key, update
//! returns one combined message. Key presence is always decided before any
//! value is looked at. Both produce a [`NewVideo`] on success.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{DbId, ReleaseDate};

/// Entity name used in not-found and invalid-id messages.
pub const VIDEO_ENTITY: &str = "Video";

/// Keys every video payload must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "release_date", "total_inventory"];

/// Request body for `POST /videos` and `PUT /videos/{id}`.
///
/// Kept as the raw JSON object so that presence of a key is independent of
/// its value: `{"title": null}` and `{"title": 5}` both have a title.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct VideoPayload(Map<String, Value>);

/// A fully-populated video payload, ready to be written to the store.
///
/// `total_inventory` is deliberately not range-checked; a negative count is
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub release_date: ReleaseDate,
    pub total_inventory: i32,
}

impl VideoPayload {
    /// First required key absent from the body, in check order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .find(|field| !self.0.contains_key(*field))
    }

    /// Validate a create payload, checking keys in the order
    /// `title`, `release_date`, `total_inventory` and failing on the first
    /// one that is absent.
    pub fn validate_for_create(self) -> Result<NewVideo, CoreError> {
        if let Some(field) = self.first_missing_field() {
            return Err(CoreError::MissingField(field));
        }
        self.into_new_video()
    }

    /// Validate an update payload. Any absent key yields the single
    /// combined [`CoreError::MissingFields`].
    pub fn validate_for_update(self) -> Result<NewVideo, CoreError> {
        if self.first_missing_field().is_some() {
            return Err(CoreError::MissingFields);
        }
        self.into_new_video()
    }

    /// Convert values whose keys are known to be present.
    fn into_new_video(mut self) -> Result<NewVideo, CoreError> {
        Ok(NewVideo {
            title: title_value(self.0.remove("title"))?,
            release_date: release_date_value(self.0.remove("release_date"))?,
            total_inventory: inventory_value(self.0.remove("total_inventory"))?,
        })
    }
}

/// Any scalar is accepted as a title; numbers and booleans keep their JSON text.
fn title_value(value: Option<Value>) -> Result<String, CoreError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        _ => Err(CoreError::InvalidValue {
            field: "title",
            expected: "text",
        }),
    }
}

fn release_date_value(value: Option<Value>) -> Result<ReleaseDate, CoreError> {
    value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse::<ReleaseDate>().ok())
        .ok_or(CoreError::InvalidValue {
            field: "release_date",
            expected: "a YYYY-MM-DD date",
        })
}

/// Integers, and strings holding one, are accepted. No range check beyond `i32`.
fn inventory_value(value: Option<Value>) -> Result<i32, CoreError> {
    let parsed = match &value {
        Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed.ok_or(CoreError::InvalidValue {
        field: "total_inventory",
        expected: "an integer",
    })
}

/// Parse a `/videos/{id}` path segment.
///
/// Surrounding whitespace and a leading sign are accepted, anything else
/// that is not a base-10 integer is [`CoreError::InvalidId`].
pub fn parse_video_id(raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::InvalidId(VIDEO_ENTITY))
}
